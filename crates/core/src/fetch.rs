//! Page fetching over HTTP.
//!
//! The fetch step is the only suspension point of an analysis: one GET
//! with a browser-like User-Agent and a fixed timeout, no retries.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{RanklensError, Result};

/// HTTP client configuration for fetching web pages.
///
/// Controls timeout and user agent settings for the single outbound request.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
        }
    }
}

/// Fetches HTML content from a URL.
///
/// Performs an HTTP GET and returns the response body as text. Redirects
/// are followed; a non-success status is an error, since a 404 page is not
/// worth analyzing as if it were the requested document.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| RanklensError::InvalidUrl(e.to_string()))?;

    if parsed_url.scheme().is_empty() {
        return Err(RanklensError::InvalidUrl(
            "URL must include a scheme (http:// or https://)".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(RanklensError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                RanklensError::Timeout { timeout: config.timeout }
            } else {
                RanklensError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(RanklensError::HttpStatus { status: status.as_u16() });
    }

    let content = response.text().await?;

    Ok(content)
}
