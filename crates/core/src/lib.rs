pub mod analyzer;
pub mod content;
pub mod error;
pub mod fetch;
pub mod keywords;
pub mod links;
pub mod normalize;
pub mod parse;
pub mod readability;
pub mod report;
pub mod result;
pub mod technical;

pub use analyzer::{AnalyzerConfig, AnalyzerConfigBuilder, SeoAnalyzer, analyze};
pub use content::{ContentStats, ContentTagCounts, HeadingDistribution, analyze_content};
pub use error::{RanklensError, Result};
pub use fetch::{FetchConfig, fetch_url};
pub use keywords::{DEFAULT_KEYWORD_LIMIT, top_keywords};
pub use links::{LinkStats, classify_links};
pub use normalize::normalize_text;
pub use parse::{Document, Element};
pub use readability::{ContentRating, ReadingEase, flesch_reading_ease, interpret};
pub use report::{append_report, format_report};
pub use result::{AnalysisMetadata, AnalysisResult, PerformanceStats};
pub use technical::{TechnicalStats, analyze_technical, check_ssl};
