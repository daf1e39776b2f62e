//! Unified analysis result type.
//!
//! An [`AnalysisResult`] is assembled once per request by the orchestrator
//! and never mutated afterward. Failed analyses still produce the full
//! shape: every section is present with its empty default, plus an error
//! marker and zeroed duration.

use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::content::ContentStats;
use crate::links::LinkStats;
use crate::technical::TechnicalStats;

/// Page-weight indicators: embedded resource count and raw body size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PerformanceStats {
    /// Number of script, link, and img elements.
    pub total_resources: usize,
    /// Byte length of the fetched body.
    pub total_size: usize,
}

/// When the analysis ran and how long it took.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisMetadata {
    /// RFC 3339 timestamp of request acceptance.
    pub analyzed_at: String,
    /// Wall-clock seconds from acceptance to assembly; 0 for failures.
    pub duration_seconds: f64,
}

/// The complete result of analyzing one page.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub url: String,
    pub keywords: Vec<String>,
    pub content: ContentStats,
    pub technical: TechnicalStats,
    pub links: LinkStats,
    pub performance: PerformanceStats,
    pub metadata: AnalysisMetadata,
    /// Human-readable failure reason; `None` on success.
    pub error: Option<String>,
}

impl AnalysisResult {
    /// Builds an error-marked result with default sections and zero duration.
    pub fn failed(url: &str, error: String, analyzed_at: String) -> Self {
        Self {
            url: url.to_string(),
            keywords: Vec::new(),
            content: ContentStats::default(),
            technical: TechnicalStats::default(),
            links: LinkStats::default(),
            performance: PerformanceStats::default(),
            metadata: AnalysisMetadata { analyzed_at, duration_seconds: 0.0 },
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Gets the result as structured JSON.
    pub fn to_json(&self) -> crate::Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| crate::RanklensError::HtmlParseError(e.to_string()))
    }
}

/// Current UTC time as an RFC 3339 string.
pub(crate) fn now_rfc3339() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_result_shape() {
        let result = AnalysisResult::failed("https://x.com", "boom".to_string(), now_rfc3339());

        assert!(!result.is_ok());
        assert!(result.keywords.is_empty());
        assert_eq!(result.content, ContentStats::default());
        assert_eq!(result.technical, TechnicalStats::default());
        assert_eq!(result.links, LinkStats::default());
        assert_eq!(result.metadata.duration_seconds, 0.0);
    }

    #[test]
    fn test_serializes_all_sections() {
        let result = AnalysisResult::failed("https://x.com", "boom".to_string(), now_rfc3339());
        let json = serde_json::to_value(&result).unwrap();

        for key in ["url", "keywords", "content", "technical", "links", "performance", "metadata", "error"] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
    }

    #[test]
    fn test_now_rfc3339_format() {
        let stamp = now_rfc3339();
        assert!(stamp.contains('T'));
        assert!(stamp.ends_with('Z') || stamp.contains('+'));
    }
}
