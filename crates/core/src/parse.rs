//! HTML parsing and DOM queries.
//!
//! This module provides the [`Document`] and [`Element`] types that wrap
//! the `scraper` parser behind the small query surface the analyzers need:
//! CSS selection, attribute access, and full-text extraction.
//!
//! # Example
//!
//! ```rust
//! use ranklens_core::parse::Document;
//!
//! let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
//! let doc = Document::parse(html).unwrap();
//! assert_eq!(doc.title(), Some("Test".to_string()));
//! ```

use scraper::{Html, Selector};

use crate::{RanklensError, Result};

/// Represents a parsed HTML document.
///
/// A Document is built once per analysis, owned by the orchestrator for its
/// duration, and dropped afterward.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html })
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`RanklensError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = Selector::parse(selector)
            .map_err(|e| RanklensError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Counts elements matching a CSS selector.
    pub fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.select(selector)?.len())
    }

    /// Gets the title of the document.
    ///
    /// Returns the trimmed content of the `<title>` element if present,
    /// `None` when the element is missing. An empty title element yields
    /// an empty string, which callers must not conflate with absence.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
    }

    /// Gets the visible text of the document.
    ///
    /// Concatenates every text node with single-space separators, trimming
    /// each node, and skipping nodes that are pure whitespace.
    pub fn visible_text(&self) -> String {
        self.html
            .root_element()
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A wrapper around scraper's ElementRef.
///
/// Element represents a single node in the document tree and exposes its
/// text content and attributes.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element.
    ///
    /// Returns the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute.
    ///
    /// Returns `None` if the attribute is not present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }

    /// Gets the lowercase tag name of this element.
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }
}
