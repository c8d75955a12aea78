//! Plain-text analysis report.
//!
//! The layout is fixed-width and stable: rule lines, bracketed section
//! markers, and two-decimal scores. Scripts that scrape the output can rely
//! on the line prefixes.

use crate::analysis::AnalysisResult;
use crate::article::ArticleDocument;

const WIDTH: usize = 60;
const HEADING_INDENT: usize = 20;
/// How many matched bias words the report shows before eliding.
const SAMPLE_WORDS: usize = 5;

/// Renders the full analysis report as console-ready text.
///
/// The string starts and ends with a blank line so the report stands apart
/// from surrounding shell output; print it with `print!`, not `println!`.
pub fn render_report(document: &ArticleDocument, result: &AnalysisResult) -> String {
    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);
    let mut out = String::new();

    out.push_str(&format!("\n{heavy}\n"));
    out.push_str(&format!("{}MEDIA ANALYSIS REPORT\n", " ".repeat(HEADING_INDENT)));
    out.push_str(&format!("{heavy}\n"));
    out.push_str(&format!("Article Title: {}\n", document.title));
    out.push_str(&format!("Source URL: {}\n", source_label(document)));
    out.push_str(&format!("{light}\n"));

    out.push_str(&format!("[*] Primary Topic: {}\n", result.topic));
    out.push_str(&format!("{light}\n"));

    out.push_str("[*] Sentiment Analysis:\n");
    out.push_str(&format!("      - Overall Tone: {}\n", result.sentiment.tone));
    out.push_str(&format!(
        "      - Polarity Score: {:.2} (Negative to Positive, -1 to 1)\n",
        result.sentiment.polarity
    ));
    out.push_str(&format!(
        "      - Subjectivity Score: {:.2} (Objective to Subjective, 0 to 1)\n",
        result.sentiment.subjectivity
    ));
    out.push_str(&format!("{light}\n"));

    out.push_str("[*] Bias Detection:\n");
    out.push_str(&format!("      - Assessment: {}\n", result.bias.assessment));
    out.push_str(&format!("      - Loaded Word Count: {}\n", result.bias.score));
    if !result.bias.words_found.is_empty() {
        let sample = result.bias.words_found.iter().take(SAMPLE_WORDS).cloned().collect::<Vec<_>>();
        let ellipsis = if result.bias.words_found.len() > SAMPLE_WORDS { "..." } else { "" };
        out.push_str(&format!("      - Sample Words Found: {}{}\n", sample.join(", "), ellipsis));
    }
    out.push_str(&format!("{light}\n"));

    out.push_str("[*] Source Credibility Analysis:\n");
    out.push_str(&format!("      - Assessment: {}\n", result.credibility.assessment));
    out.push_str(&format!("      - Credibility Score: {:.2}/100\n", result.credibility.score));
    out.push_str(&format!(
        "      - External Links Found: {} (Used in scoring)\n",
        document.external_link_count
    ));
    out.push_str(&format!("{heavy}\n"));

    out.push_str("Disclaimer: This is an automated analysis and should be used as a\n");
    out.push_str("guide, not a definitive judgment. Always read critically.\n");
    out.push_str(&format!("{heavy}\n\n"));

    out
}

fn source_label(document: &ArticleDocument) -> &str {
    document.url.as_ref().map(url::Url::as_str).unwrap_or("N/A")
}
