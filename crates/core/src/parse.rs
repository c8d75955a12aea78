//! Thin DOM layer over `scraper`.
//!
//! [`Document`] owns the parsed tree; [`Element`] borrows from it. Selector
//! queries return plain vectors tied to the document's lifetime, which keeps
//! iterator and lifetime plumbing out of the extraction code.

use scraper::{ElementRef, Html, Selector};

use crate::preprocess::{PreprocessConfig, preprocess_html};
use crate::{NewslensError, Result};

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| NewslensError::HtmlParse(format!("invalid selector '{}': {}", selector, e)))
}

/// A parsed HTML document.
///
/// # Example
///
/// ```rust
/// use newslens_core::parse::Document;
///
/// let doc = Document::parse("<title>Hi</title><p>One</p><p>Two</p>");
/// assert_eq!(doc.title(), Some("Hi".to_string()));
/// assert_eq!(doc.select("p").unwrap().len(), 2);
/// ```
pub struct Document {
    tree: Html,
}

impl Document {
    /// Parses HTML as-is. The parser is error-recovering, so any input is
    /// accepted; broken markup just yields a sparse tree.
    pub fn parse(html: &str) -> Self {
        Self { tree: Html::parse_document(html) }
    }

    /// Runs the [`preprocess_html`] cleanup pass, then parses.
    pub fn parse_with_preprocessing(html: &str, config: &PreprocessConfig) -> Self {
        Self::parse(&preprocess_html(html, config))
    }

    /// All elements matching a CSS selector, in document order.
    ///
    /// # Errors
    ///
    /// [`NewslensError::HtmlParse`] when the selector itself is invalid.
    pub fn select(&self, selector: &str) -> Result<Vec<Element<'_>>> {
        let compiled = compile(selector)?;
        Ok(self.tree.select(&compiled).map(Element::wrap).collect())
    }

    /// Text of the `<title>` element, if the document declares one.
    pub fn title(&self) -> Option<String> {
        let compiled = compile("title").ok()?;
        self.tree.select(&compiled).next().map(|el| el.text().collect())
    }
}

/// One element borrowed from a [`Document`].
#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    node: ElementRef<'a>,
}

impl<'a> Element<'a> {
    fn wrap(node: ElementRef<'a>) -> Self {
        Self { node }
    }

    /// Concatenated text of every text node under this element.
    pub fn text(&self) -> String {
        self.node.text().collect()
    }

    /// Attribute value, if present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node.value().attr(name)
    }

    /// Matching descendants, in document order.
    ///
    /// The returned elements borrow the document, not this element, so they
    /// stay usable after the binding that produced them goes away.
    pub fn select(&self, selector: &str) -> Result<Vec<Element<'a>>> {
        let compiled = compile(selector)?;
        Ok(self.node.select(&compiled).map(Element::wrap).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <!DOCTYPE html>
        <html>
        <head><title>Council Vote</title></head>
        <body>
            <main>
                <p>The council met on Tuesday.</p>
                <p>It voted to <a href="https://records.example.gov/minutes">publish minutes</a>.</p>
            </main>
        </body>
        </html>
    "#;

    #[test]
    fn test_title() {
        let doc = Document::parse(PAGE);
        assert_eq!(doc.title(), Some("Council Vote".to_string()));
    }

    #[test]
    fn test_missing_title() {
        let doc = Document::parse("<p>No head here.</p>");
        assert_eq!(doc.title(), None);
    }

    #[test]
    fn test_select_in_document_order() {
        let doc = Document::parse(PAGE);
        let paragraphs = doc.select("main p").unwrap();

        assert_eq!(paragraphs.len(), 2);
        assert!(paragraphs[0].text().starts_with("The council"));
    }

    #[test]
    fn test_element_select_outlives_container_binding() {
        let doc = Document::parse(PAGE);
        let links = {
            let containers = doc.select("main").unwrap();
            containers[0].select("a").unwrap()
        };

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].attr("href"), Some("https://records.example.gov/minutes"));
    }

    #[test]
    fn test_invalid_selector_is_reported() {
        let doc = Document::parse(PAGE);
        assert!(matches!(doc.select("[[nope"), Err(NewslensError::HtmlParse(_))));
    }

    #[test]
    fn test_preprocessing_strips_scripts_before_parse() {
        let html = "<html><body><script>var x = 1;</script><p>Visible</p></body></html>";
        let doc = Document::parse_with_preprocessing(html, &PreprocessConfig::default());

        assert!(doc.select("script").unwrap().is_empty());
        assert_eq!(doc.select("p").unwrap()[0].text(), "Visible");
    }
}
