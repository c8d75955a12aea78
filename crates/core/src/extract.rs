//! Article content extraction.
//!
//! Pulls the title, paragraph text, and outbound-link count out of a parsed
//! page. Extraction prefers semantic containers (`<article>`, then `<main>`)
//! so navigation and footer boilerplate stay out of the body; only when
//! neither is present does it fall back to every paragraph on the page.

use std::collections::HashSet;

use url::Url;

use crate::article::ArticleDocument;
use crate::parse::{Document, Element};
use crate::preprocess::PreprocessConfig;
use crate::{NewslensError, Result};

/// Title placeholder for pages without a usable `<title>` element.
pub const NO_TITLE: &str = "No title found";

/// Configuration for article extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractConfig {
    /// HTML cleanup applied before the page is parsed.
    pub preprocess: PreprocessConfig,
}

/// Extracts an [`ArticleDocument`] from raw HTML.
///
/// `base_url` is the page's own address: it anchors relative hrefs and
/// decides which links count as external. Pass `None` for HTML read from a
/// file or stdin; absolute links are then counted without a host to compare
/// against.
///
/// # Errors
///
/// Returns [`NewslensError::NoParagraphs`] when the chosen container has no
/// paragraph text, since every downstream analyzer needs a non-empty body.
///
/// # Example
///
/// ```rust
/// use newslens_core::extract::{extract_article, ExtractConfig};
///
/// let html = r#"
///     <html><head><title>Vote Held</title></head>
///     <body><article><p>The senate passed the bill.</p></article></body></html>
/// "#;
/// let doc = extract_article(html, None, &ExtractConfig::default()).unwrap();
/// assert_eq!(doc.title, "Vote Held");
/// assert_eq!(doc.sentence_count, 1);
/// ```
pub fn extract_article(
    html: &str,
    base_url: Option<&Url>,
    config: &ExtractConfig,
) -> Result<ArticleDocument> {
    let document = Document::parse_with_preprocessing(html, &config.preprocess);

    let title = extract_title(&document);
    let paragraphs = find_paragraphs(&document)?;

    let body: Vec<String> = paragraphs
        .iter()
        .map(|p| p.text().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();

    if body.is_empty() {
        return Err(NewslensError::NoParagraphs);
    }

    let external_link_count = count_external_links(&paragraphs, base_url)?;

    Ok(ArticleDocument::new(base_url.cloned(), title, body.join("\n"), external_link_count))
}

/// Page title, trimmed, or [`NO_TITLE`] when absent or blank.
fn extract_title(document: &Document) -> String {
    match document.title() {
        Some(title) if !title.trim().is_empty() => title.trim().to_string(),
        _ => NO_TITLE.to_string(),
    }
}

/// Paragraphs from the first `<article>`, else the first `<main>`, else the
/// whole page.
///
/// Container choice is by presence, not by content: an `<article>` with no
/// paragraphs wins over a `<main>` full of them, and extraction then fails
/// with [`NewslensError::NoParagraphs`] rather than silently reading
/// boilerplate from elsewhere on the page.
fn find_paragraphs(document: &Document) -> Result<Vec<Element<'_>>> {
    for container in ["article", "main"] {
        if let Some(first) = document.select(container)?.into_iter().next() {
            return first.select("p");
        }
    }

    document.select("p")
}

/// Counts distinct anchors inside the paragraphs that resolve to a host
/// other than the base URL's.
///
/// Duplicate hrefs count once (by resolved absolute URL), and only http and
/// https targets qualify, so `mailto:` and fragment links never inflate the
/// credibility score.
fn count_external_links(paragraphs: &[Element<'_>], base_url: Option<&Url>) -> Result<usize> {
    let base_host = base_url.and_then(Url::host_str);
    let mut seen: HashSet<Url> = HashSet::new();

    for paragraph in paragraphs {
        for anchor in paragraph.select("a[href]")? {
            let Some(href) = anchor.attr("href") else { continue };

            let resolved = match base_url {
                Some(base) => base.join(href),
                None => Url::parse(href),
            };

            let Ok(resolved) = resolved else { continue };

            if !matches!(resolved.scheme(), "http" | "https") {
                continue;
            }
            if resolved.host_str().is_none() {
                continue;
            }
            if let Some(base_host) = base_host {
                if resolved.host_str() == Some(base_host) {
                    continue;
                }
            }

            seen.insert(resolved);
        }
    }

    Ok(seen.len())
}
