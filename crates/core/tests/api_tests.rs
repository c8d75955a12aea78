//! Library API integration tests
use newslens_core::*;
use rstest::rstest;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path(name)).unwrap()
}

#[test]
fn test_analyze_api() {
    let html = read_fixture("politics.html");
    let (document, result) =
        analyze_with_url(&html, "https://dailyledger.example.com/politics/reform")
            .expect("should analyze");

    assert_eq!(document.title, "Senate Passes Landmark Election Reform After Heated Debate");
    assert_eq!(document.sentence_count, 9);
    assert_eq!(document.external_link_count, 3);
    assert!(document.word_count > 90);

    assert_eq!(result.topic, "Politics");
    assert_eq!(result.sentiment.tone, Tone::Positive);
    assert_eq!(result.bias.score, 10);
    assert_eq!(result.bias.assessment, "Moderate potential for bias");
    assert_eq!(result.credibility.assessment, "Moderate credibility");
}

#[test]
fn test_analyze_preserves_source_url() {
    let html = read_fixture("politics.html");
    let url = "https://dailyledger.example.com/politics/reform";
    let (document, _) = analyze_with_url(&html, url).expect("should analyze");

    assert_eq!(document.url.as_ref().map(|u| u.as_str()), Some(url));
}

#[test]
fn test_bias_words_reported_in_lexicon_order() {
    let html = read_fixture("politics.html");
    let (_, result) = analyze(&html).expect("should analyze");

    assert_eq!(
        result.bias.words_found,
        vec![
            "disaster",
            "effective",
            "fair",
            "immediately",
            "landmark",
            "shocking",
            "threat",
            "tremendous",
            "unprecedented",
            "victory"
        ]
    );
}

#[test]
fn test_main_container_fixture() {
    let html = read_fixture("tech.html");
    let (document, result) = analyze(&html).expect("should analyze");

    assert_eq!(document.title, "Chipmaker Unveils New Processor Line");
    assert_eq!(document.sentence_count, 5);
    assert_eq!(document.external_link_count, 0);
    assert!(!document.body.contains("Reviews"), "nav text must not leak into the body");

    assert_eq!(result.topic, "Technology");
    // Single scored word at polarity 0.1 sits exactly on the neutral boundary.
    assert_eq!(result.sentiment.tone, Tone::Neutral);
    assert_eq!(result.bias.score, 0);
    assert_eq!(result.bias.assessment, "Appears to be objective");
    assert_eq!(result.credibility.assessment, "Moderate credibility");
}

#[test]
fn test_page_without_container() {
    let html = read_fixture("no_container.html");
    let (document, result) =
        analyze_with_url(&html, "https://sports.example.com/recap").expect("should analyze");

    assert_eq!(document.sentence_count, 4);
    assert_eq!(document.external_link_count, 1);
    assert_eq!(result.topic, "Sports");

    // No scored words at all: neutral scores, full objectivity base,
    // short-article penalty, one link bonus.
    assert_eq!(result.sentiment.polarity, 0.0);
    assert_eq!(result.sentiment.subjectivity, 0.0);
    assert_eq!(result.credibility.score, 78.0);
    assert_eq!(result.credibility.assessment, "Appears credible");
}

#[test]
fn test_empty_content_fixture() {
    let html = read_fixture("empty_content.html");
    let result = analyze(&html);

    assert!(matches!(result, Err(NewslensError::NoParagraphs)));
}

#[test]
fn test_text_report_end_to_end() {
    let html = read_fixture("politics.html");
    let (document, result) =
        analyze_with_url(&html, "https://dailyledger.example.com/politics/reform")
            .expect("should analyze");

    let report = render_report(&document, &result);

    assert!(report.contains("Article Title: Senate Passes Landmark Election Reform After Heated Debate\n"));
    assert!(report.contains("Source URL: https://dailyledger.example.com/politics/reform\n"));
    assert!(report.contains("[*] Primary Topic: Politics\n"));
    assert!(report.contains("      - Overall Tone: Positive\n"));
    assert!(report.contains("      - Loaded Word Count: 10\n"));
    assert!(report.contains("      - Sample Words Found: disaster, effective, fair, immediately, landmark...\n"));
    assert!(report.contains("      - Credibility Score: 41.00/100\n"));
    assert!(report.contains("      - External Links Found: 3 (Used in scoring)\n"));
}

#[test]
fn test_json_report_end_to_end() {
    let html = read_fixture("politics.html");
    let (document, result) =
        analyze_with_url(&html, "https://dailyledger.example.com/politics/reform")
            .expect("should analyze");

    let json = render_json(&document, &result).expect("should serialize");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["article"]["url"], "https://dailyledger.example.com/politics/reform");
    assert_eq!(value["article"]["external_link_count"], 3);
    assert_eq!(value["analysis"]["topic"], "Politics");
    assert_eq!(value["analysis"]["bias"]["score"], 10);
    assert_eq!(value["analysis"]["sentiment"]["tone"], "Positive");
}

#[test]
fn test_analyzer_reuse_across_articles() {
    let analyzer = MediaAnalyzer::new();

    let (_, politics) = analyzer.analyze_html(&read_fixture("politics.html")).unwrap();
    let (_, tech) = analyzer.analyze_html(&read_fixture("tech.html")).unwrap();

    assert_eq!(politics.topic, "Politics");
    assert_eq!(tech.topic, "Technology");
}

#[test]
fn test_analyzer_config_builder() {
    let config = AnalyzerConfig::builder().timeout(5).user_agent("test-agent/1.0").build();
    let analyzer = MediaAnalyzer::with_config(config);

    assert_eq!(analyzer.config().fetch.timeout, 5);
    let (_, result) = analyzer.analyze_html(&read_fixture("tech.html")).unwrap();
    assert_eq!(result.topic, "Technology");
}

#[test]
fn test_document_api() {
    let html = read_fixture("politics.html");
    let doc = Document::parse(&html);

    assert_eq!(
        doc.title().as_deref().map(str::trim),
        Some("Senate Passes Landmark Election Reform After Heated Debate")
    );
    assert_eq!(doc.select("article").unwrap().len(), 1);
    assert!(doc.select("article p").unwrap().len() >= 5);
}

#[rstest]
#[case("politics.html", "Politics")]
#[case("tech.html", "Technology")]
#[case("no_container.html", "Sports")]
fn test_fixture_topics(#[case] fixture: &str, #[case] expected_topic: &str) {
    let html = read_fixture(fixture);
    let (_, result) = analyze(&html).expect("should analyze");

    assert_eq!(result.topic, expected_topic);
}

#[rstest]
#[case(0.5, "Positive")]
#[case(0.1, "Neutral")]
#[case(-0.1, "Neutral")]
#[case(-0.5, "Negative")]
fn test_tone_labels(#[case] polarity: f64, #[case] expected: &str) {
    assert_eq!(Tone::from_polarity(polarity).label(), expected);
}
