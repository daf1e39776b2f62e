//! Plain-text report formatting and appending.
//!
//! One analysis becomes one banner-delimited section appended to a report
//! file, so a file accumulates a history of runs. Report failures are for
//! the caller to log; they never feed back into analysis results.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::readability::{ContentRating, interpret};
use crate::result::AnalysisResult;
use crate::Result;

const BANNER: &str = "==================================================";

/// Formats one analysis as a human-readable report section.
pub fn format_report(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", BANNER));
    out.push_str(&format!("SEO Analysis Report for {}\n", result.url));
    out.push_str(&format!("Generated on: {}\n", result.metadata.analyzed_at));
    out.push_str(&format!("{}\n\n", BANNER));

    if let Some(error) = &result.error {
        out.push_str(&format!("Error: {}\n\n{}\n", error, BANNER));
        return out;
    }

    out.push_str("Keywords\n--------\n");
    out.push_str(&result.keywords.join(", "));
    out.push_str("\n\n");

    out.push_str("Content Statistics\n------------------\n");
    match result.content.readability {
        Some(score) => {
            out.push_str(&format!("Readability Score: {:.2}\n", score));
            out.push_str(&format!("Rating: {}\n", ContentRating::from_score(score).label()));
        }
        None => {
            out.push_str("Readability Score: 0\n");
            out.push_str(&format!("Rating: {}\n", interpret(None)));
        }
    }
    out.push_str(&format!("Word Count: {}\n", result.content.word_count));
    let h = &result.content.headings;
    out.push_str(&format!(
        "Headings: h1={} h2={} h3={} h4={} h5={} h6={}\n",
        h.h1, h.h2, h.h3, h.h4, h.h5, h.h6
    ));
    let t = &result.content.tags;
    out.push_str(&format!(
        "Content Tags: strong={} em={} blockquote={} images={}\n",
        t.strong, t.em, t.blockquote, t.images
    ));

    out.push_str("\nTechnical Analysis\n-------------------\n");
    out.push_str(&format!("Title: {}\n", optional(&result.technical.title)));
    out.push_str(&format!("Meta Description: {}\n", optional(&result.technical.meta_description)));
    out.push_str(&format!("Canonical: {}\n", optional(&result.technical.canonical)));
    out.push_str(&format!("Mobile Friendly: {}\n", result.technical.mobile_friendly));
    out.push_str(&format!("SSL: {}\n", result.technical.ssl));
    out.push_str(&format!("Structured Data: {}\n", result.technical.structured_data));

    out.push_str("\nLink Analysis\n-------------\n");
    out.push_str(&format!("Internal Links: {}\n", result.links.internal_count()));
    out.push_str(&format!("External Links: {}\n", result.links.external_count()));
    out.push_str(&format!("Total Links: {}\n", result.links.total_count()));

    out.push_str("\nPerformance\n-----------\n");
    out.push_str(&format!("Total Resources: {}\n", result.performance.total_resources));
    out.push_str(&format!("Total Size: {} bytes\n", result.performance.total_size));

    out.push_str("\nMetadata\n--------\n");
    out.push_str(&format!("Analysis Duration: {:.3} seconds\n", result.metadata.duration_seconds));
    out.push_str(&format!("Analyzed At: {}\n", result.metadata.analyzed_at));

    out.push_str(&format!("\n{}\n", BANNER));
    out
}

fn optional(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("(none)")
}

/// Appends a formatted report to a file, creating parent directories as
/// needed.
pub fn append_report(path: &Path, result: &AnalysisResult) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(format_report(result).as_bytes())?;

    Ok(())
}
