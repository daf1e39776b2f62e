//! Content-quality metrics from a parsed document.

use serde::Serialize;

use crate::parse::Document;
use crate::readability::flesch_reading_ease;
use crate::Result;

/// Count of elements for each heading level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadingDistribution {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    pub h4: usize,
    pub h5: usize,
    pub h6: usize,
}

/// Counts of inline content markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentTagCounts {
    pub strong: usize,
    pub em: usize,
    pub blockquote: usize,
    pub images: usize,
}

/// Content-quality metrics for one page.
///
/// `readability` is `None` when the score could not be calculated (a page
/// with no words); interpretation of the number is left to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContentStats {
    pub readability: Option<f64>,
    pub word_count: usize,
    pub headings: HeadingDistribution,
    pub tags: ContentTagCounts,
}

/// Computes readability, word count, heading distribution, and inline-tag
/// counts for a parsed document.
pub fn analyze_content(doc: &Document) -> Result<ContentStats> {
    let text = doc.visible_text();

    Ok(ContentStats {
        readability: flesch_reading_ease(&text),
        word_count: text.split_whitespace().count(),
        headings: HeadingDistribution {
            h1: doc.count("h1")?,
            h2: doc.count("h2")?,
            h3: doc.count("h3")?,
            h4: doc.count("h4")?,
            h5: doc.count("h5")?,
            h6: doc.count("h6")?,
        },
        tags: ContentTagCounts {
            strong: doc.count("strong")?,
            em: doc.count("em")?,
            blockquote: doc.count("blockquote")?,
            images: doc.count("img")?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_distribution() {
        let html = r#"
            <html><body>
                <h1>First</h1>
                <h1>Second</h1>
                <h3>Sub</h3>
                <p>Body text for the page.</p>
            </body></html>
        "#;
        let doc = Document::parse(html).unwrap();
        let stats = analyze_content(&doc).unwrap();

        assert_eq!(
            stats.headings,
            HeadingDistribution { h1: 2, h2: 0, h3: 1, h4: 0, h5: 0, h6: 0 }
        );
    }

    #[test]
    fn test_tag_counts() {
        let html = r#"
            <html><body>
                <p><strong>bold</strong> and <em>italic</em> and <em>more</em></p>
                <blockquote>quoted</blockquote>
                <img src="a.png"><img src="b.png">
            </body></html>
        "#;
        let doc = Document::parse(html).unwrap();
        let stats = analyze_content(&doc).unwrap();

        assert_eq!(stats.tags, ContentTagCounts { strong: 1, em: 2, blockquote: 1, images: 2 });
    }

    #[test]
    fn test_word_count() {
        let html = "<html><body><p>one two three</p><p>four five</p></body></html>";
        let doc = Document::parse(html).unwrap();
        let stats = analyze_content(&doc).unwrap();

        assert_eq!(stats.word_count, 5);
    }

    #[test]
    fn test_readability_none_for_empty_page() {
        let doc = Document::parse("<html><body></body></html>").unwrap();
        let stats = analyze_content(&doc).unwrap();

        assert_eq!(stats.readability, None);
        assert_eq!(stats.word_count, 0);
    }

    #[test]
    fn test_readability_present_for_prose() {
        let html = "<html><body><p>The cat sat on the mat. It was warm and calm.</p></body></html>";
        let doc = Document::parse(html).unwrap();
        let stats = analyze_content(&doc).unwrap();

        assert!(stats.readability.is_some());
    }
}
