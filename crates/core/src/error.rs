//! Error types for ranklens operations.
//!
//! This module defines the main error type [`RanklensError`] which represents
//! all possible failures during fetching, parsing, and analysis.
//!
//! Analysis itself never surfaces these to callers of
//! [`SeoAnalyzer::analyze`](crate::analyzer::SeoAnalyzer::analyze); the
//! orchestrator converts them into an error-marked
//! [`AnalysisResult`](crate::result::AnalysisResult). The variants exist so
//! that fetch failures, thin pages, and parser faults stay distinguishable.

use thiserror::Error;

/// Main error type for SEO analysis operations.
#[derive(Error, Debug)]
pub enum RanklensError {
    /// HTTP request errors from reqwest.
    ///
    /// Wraps network errors, DNS failures, connection issues,
    /// and other transport-level problems.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP status {status}")]
    HttpStatus { status: u16 },

    /// Request timeout.
    ///
    /// Returned when the fetch exceeds the configured timeout duration.
    /// There is no retry; a timed-out fetch terminates the analysis.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Malformed request URLs are tolerated at the API boundary and
    /// resolve to this fetch-stage failure, not a validation error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The fetched body is too short to be meaningfully analyzed.
    ///
    /// Distinct from fetch errors: the page loaded, but carries fewer
    /// characters than the configured minimum.
    #[error("Insufficient content")]
    InsufficientContent { length: usize },

    /// HTML parsing errors.
    ///
    /// Returned when HTML cannot be parsed or a CSS selector is invalid.
    /// Kept separate from fetch errors so a degraded extraction step can
    /// be told apart from a page that never arrived.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// Report file I/O errors.
    #[error("Failed to write report: {0}")]
    WriteError(#[from] std::io::Error),
}

/// Result type alias for RanklensError.
pub type Result<T> = std::result::Result<T, RanklensError>;
