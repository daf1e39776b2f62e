//! Analysis orchestration.
//!
//! [`SeoAnalyzer`] drives one page analysis end to end: fetch, minimum-
//! content check, parse, the four extraction paths, and assembly. The
//! public entry points never return an error; every failure mode resolves
//! to an [`AnalysisResult`] carrying an error marker, so the boundary
//! layers only ever deal in one shape.
//!
//! The extraction paths (keywords, content, technical, links) are
//! independent: a fault in one degrades that section to its default and
//! the rest proceed. All keyword-frequency state is scoped to a single
//! call, so concurrent analyses cannot interfere with each other.

use std::time::Instant;

use tracing::warn;
use url::Url;

use crate::RanklensError;
use crate::content::{ContentStats, analyze_content};
use crate::fetch::{FetchConfig, fetch_url};
use crate::keywords::{DEFAULT_KEYWORD_LIMIT, top_keywords};
use crate::links::{LinkStats, classify_links};
use crate::normalize::normalize_text;
use crate::parse::Document;
use crate::result::{AnalysisMetadata, AnalysisResult, PerformanceStats, now_rfc3339};
use crate::technical::{TechnicalStats, analyze_technical};

/// Configuration for the analysis pipeline.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Fetch settings (timeout, user agent).
    pub fetch: FetchConfig,
    /// Maximum number of keywords reported (default: 10).
    pub keyword_limit: usize,
    /// Bodies shorter than this are rejected as insufficient (default: 100).
    pub min_content_length: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            keyword_limit: DEFAULT_KEYWORD_LIMIT,
            min_content_length: 100,
        }
    }
}

impl AnalyzerConfig {
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::new()
    }
}

/// Builder for [`AnalyzerConfig`].
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    pub fn new() -> Self {
        Self { config: AnalyzerConfig::default() }
    }

    /// Sets the fetch timeout in seconds.
    pub fn timeout(mut self, value: u64) -> Self {
        self.config.fetch.timeout = value;
        self
    }

    /// Sets the User-Agent sent with the fetch.
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.user_agent = value.into();
        self
    }

    /// Sets the maximum number of keywords reported.
    pub fn keyword_limit(mut self, value: usize) -> Self {
        self.config.keyword_limit = value;
        self
    }

    /// Sets the minimum body length accepted for analysis.
    pub fn min_content_length(mut self, value: usize) -> Self {
        self.config.min_content_length = value;
        self
    }

    pub fn build(self) -> AnalyzerConfig {
        self.config
    }
}

impl Default for AnalyzerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-page SEO analyzer.
///
/// # Example
///
/// ```rust
/// use ranklens_core::SeoAnalyzer;
///
/// let analyzer = SeoAnalyzer::new();
/// let html = std::iter::repeat("<p>The quick brown fox jumps over the lazy dog. </p>")
///     .take(5)
///     .collect::<String>();
/// let result = analyzer.analyze_html("https://example.com", &html);
/// assert!(result.is_ok());
/// ```
pub struct SeoAnalyzer {
    config: AnalyzerConfig,
}

impl SeoAnalyzer {
    /// Creates an analyzer with default settings.
    pub fn new() -> Self {
        Self { config: AnalyzerConfig::default() }
    }

    /// Creates an analyzer with a custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Fetches and analyzes one page.
    ///
    /// Transport failures, timeouts, and non-success HTTP statuses all
    /// resolve to an error-marked result; no partial analysis is carried.
    pub async fn analyze(&self, url: &str) -> AnalysisResult {
        let started = Instant::now();
        let analyzed_at = now_rfc3339();

        match fetch_url(url, &self.config.fetch).await {
            Ok(body) => self.analyze_body(url, &body, started, analyzed_at),
            Err(e) => {
                warn!(url, error = %e, "fetch failed");
                AnalysisResult::failed(url, e.to_string(), analyzed_at)
            }
        }
    }

    /// Analyzes HTML that has already been obtained.
    ///
    /// Used for local files, stdin input, and tests. The minimum-content
    /// check still applies.
    pub fn analyze_html(&self, url: &str, html: &str) -> AnalysisResult {
        self.analyze_body(url, html, Instant::now(), now_rfc3339())
    }

    fn analyze_body(&self, url: &str, body: &str, started: Instant, analyzed_at: String) -> AnalysisResult {
        // Character count, not bytes; multibyte pages must not inflate it.
        let content_length = body.chars().count();
        if content_length < self.config.min_content_length {
            let err = RanklensError::InsufficientContent { length: content_length };
            return AnalysisResult::failed(url, err.to_string(), analyzed_at);
        }

        let doc = match Document::parse(body) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(url, error = %e, "parse failed");
                return AnalysisResult::failed(url, e.to_string(), analyzed_at);
            }
        };

        // Independent extraction paths; one failing degrades only itself.
        let keywords = top_keywords(&normalize_text(&doc.visible_text()), self.config.keyword_limit);

        let content = analyze_content(&doc).unwrap_or_else(|e| {
            warn!(url, error = %e, "content analysis degraded");
            ContentStats::default()
        });

        let technical = analyze_technical(url, &doc).unwrap_or_else(|e| {
            warn!(url, error = %e, "technical analysis degraded");
            TechnicalStats::default()
        });

        let links = match Url::parse(url) {
            Ok(base) => classify_links(&base, &doc).unwrap_or_else(|e| {
                warn!(url, error = %e, "link analysis degraded");
                LinkStats::default()
            }),
            Err(_) => LinkStats::default(),
        };

        let performance = analyze_performance(&doc, body.len());

        AnalysisResult {
            url: url.to_string(),
            keywords,
            content,
            technical,
            links,
            performance,
            metadata: AnalysisMetadata {
                analyzed_at,
                duration_seconds: started.elapsed().as_secs_f64(),
            },
            error: None,
        }
    }
}

impl Default for SeoAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn analyze_performance(doc: &Document, body_len: usize) -> PerformanceStats {
    let total_resources = ["script", "link", "img"]
        .iter()
        .map(|tag| doc.count(tag).unwrap_or(0))
        .sum();

    PerformanceStats { total_resources, total_size: body_len }
}

/// Convenience function: fetch and analyze one URL with default settings.
pub async fn analyze(url: &str) -> AnalysisResult {
    SeoAnalyzer::new().analyze(url).await
}
