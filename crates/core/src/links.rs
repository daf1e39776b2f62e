//! Internal/external link classification.
//!
//! Hrefs are resolved against the page URL per standard relative-reference
//! rules and partitioned by exact host equality. Repeated hrefs are kept as
//! they appear on the page; counts are over occurrences, not distinct URLs.

use serde::Serialize;
use url::Url;

use crate::parse::Document;
use crate::Result;

/// Raw internal and external hrefs of one page, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkStats {
    pub internal: Vec<String>,
    pub external: Vec<String>,
}

impl LinkStats {
    pub fn internal_count(&self) -> usize {
        self.internal.len()
    }

    pub fn external_count(&self) -> usize {
        self.external.len()
    }

    pub fn total_count(&self) -> usize {
        self.internal.len() + self.external.len()
    }
}

/// Partitions the document's anchors into internal and external links.
///
/// Anchors without an href are excluded entirely. Each href is resolved
/// against `base`; a resolved host equal to the base host (exact string
/// match, no subdomain fuzzing) is internal, anything else (including
/// hostless schemes like `mailto:`) is external. Hrefs that fail to
/// resolve are silently skipped and count toward neither list.
pub fn classify_links(base: &Url, doc: &Document) -> Result<LinkStats> {
    let mut stats = LinkStats::default();
    let base_host = base.host_str();

    for anchor in doc.select("a[href]")? {
        let Some(href) = anchor.attr("href") else {
            continue;
        };

        let Ok(resolved) = base.join(href) else {
            continue;
        };

        if resolved.host_str() == base_host {
            stats.internal.push(href.to_string());
        } else {
            stats.external.push(href.to_string());
        }
    }

    Ok(stats)
}
