//! Technical SEO markers: title, meta description, canonical link,
//! viewport, HTTPS, and structured-data presence.
//!
//! Missing elements and attributes are reported as `None`, never as empty
//! strings, since "absent" and "empty" score differently.

use serde::Serialize;
use url::Url;

use crate::parse::Document;
use crate::Result;

/// Technical SEO signals for one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TechnicalStats {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub canonical: Option<String>,
    pub mobile_friendly: bool,
    pub ssl: bool,
    pub structured_data: bool,
}

/// Extracts technical signals from the original URL and parsed document.
pub fn analyze_technical(url: &str, doc: &Document) -> Result<TechnicalStats> {
    Ok(TechnicalStats {
        title: doc.title(),
        meta_description: meta_content(doc, "description")?,
        canonical: canonical_href(doc)?,
        mobile_friendly: !doc.select(r#"meta[name="viewport"]"#)?.is_empty(),
        ssl: check_ssl(url),
        structured_data: !doc.select(r#"script[type="application/ld+json"]"#)?.is_empty(),
    })
}

/// True iff the URL scheme is exactly `https`.
pub fn check_ssl(url: &str) -> bool {
    Url::parse(url).map(|u| u.scheme() == "https").unwrap_or(false)
}

fn meta_content(doc: &Document, name: &str) -> Result<Option<String>> {
    let elements = doc.select(&format!(r#"meta[name="{}"]"#, name))?;
    Ok(elements
        .first()
        .and_then(|el| el.attr("content"))
        .map(|s| s.to_string()))
}

fn canonical_href(doc: &Document) -> Result<Option<String>> {
    let elements = doc.select(r#"link[rel="canonical"]"#)?;
    Ok(elements
        .first()
        .and_then(|el| el.attr("href"))
        .map(|s| s.to_string()))
}
