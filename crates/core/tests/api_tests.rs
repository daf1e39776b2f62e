//! Library API integration tests
use ranklens_core::*;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn analyze_fixture(url: &str) -> AnalysisResult {
    let html = std::fs::read_to_string(get_fixture_path("blog.html")).unwrap();
    SeoAnalyzer::new().analyze_html(url, &html)
}

#[test]
fn test_full_analysis_of_fixture() {
    let result = analyze_fixture("https://bakerlog.example.com/sourdough-schedule");

    assert!(result.is_ok());
    assert!(!result.keywords.is_empty());
    assert!(result.keywords.len() <= 10);
    // "sourdough" and "baking" dominate the fixture
    assert!(result.keywords.contains(&"sourdough".to_string()));
    assert!(result.keywords.contains(&"bake".to_string()));
}

#[test]
fn test_fixture_content_section() {
    let result = analyze_fixture("https://bakerlog.example.com/sourdough-schedule");

    assert!(result.content.word_count > 100);
    assert!(result.content.readability.is_some());
    assert_eq!(result.content.headings.h1, 1);
    assert_eq!(result.content.headings.h2, 2);
    assert_eq!(result.content.headings.h3, 1);
    assert_eq!(result.content.tags.strong, 1);
    assert_eq!(result.content.tags.em, 1);
    assert_eq!(result.content.tags.blockquote, 1);
    assert_eq!(result.content.tags.images, 1);
}

#[test]
fn test_fixture_technical_section() {
    let result = analyze_fixture("https://bakerlog.example.com/sourdough-schedule");

    assert_eq!(result.technical.title, Some("Sourdough Baking for Busy People".to_string()));
    assert!(result.technical.meta_description.is_some());
    assert_eq!(
        result.technical.canonical,
        Some("https://bakerlog.example.com/sourdough-schedule".to_string())
    );
    assert!(result.technical.mobile_friendly);
    assert!(result.technical.ssl);
    assert!(result.technical.structured_data);
}

#[test]
fn test_fixture_link_section() {
    let result = analyze_fixture("https://bakerlog.example.com/sourdough-schedule");

    assert_eq!(result.links.internal_count(), 3);
    assert_eq!(result.links.external_count(), 2);
    assert_eq!(result.links.total_count(), 5);
    assert!(result.links.external.contains(&"mailto:hello@bakerlog.example.com".to_string()));
}

#[test]
fn test_fixture_over_http_has_no_ssl() {
    let result = analyze_fixture("http://bakerlog.example.com/sourdough-schedule");
    assert!(!result.technical.ssl);
}

#[test]
fn test_result_serializes_to_json() {
    let result = analyze_fixture("https://bakerlog.example.com/sourdough-schedule");
    let json = serde_json::to_value(&result).unwrap();

    assert!(json.get("keywords").is_some());
    assert!(json.get("content").is_some());
    assert!(json.get("technical").is_some());
    assert!(json.get("links").is_some());
    assert!(json["error"].is_null());
}

#[test]
fn test_report_round_trip() {
    let result = analyze_fixture("https://bakerlog.example.com/sourdough-schedule");
    let report = format_report(&result);

    assert!(report.contains("Sourdough Baking for Busy People"));
    assert!(report.contains("Internal Links: 3"));
    assert!(report.contains("External Links: 2"));
}

#[test]
fn test_interpretation_of_fixture_score() {
    let result = analyze_fixture("https://bakerlog.example.com/sourdough-schedule");
    let score = result.content.readability.unwrap();

    // Both scales must interpret the same number without panicking.
    let _ = ReadingEase::from_score(score).label();
    let _ = ContentRating::from_score(score).label();
    assert_ne!(interpret(Some(score)), "Unable to calculate");
}
