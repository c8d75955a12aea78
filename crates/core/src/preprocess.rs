//! Streaming HTML cleanup that runs before parsing.
//!
//! Paragraph text is collected from element text nodes, so anything that
//! would leak code or CSS into the body (scripts, styles, comment blocks)
//! has to go first. The rewrite is a single `lol_html` pass.

use lol_html::{HtmlRewriter, Settings};

/// Switches for the pre-parse cleanup pass.
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    /// Drop `<script>` elements and their contents.
    pub remove_scripts: bool,
    /// Drop `<style>` elements and their contents.
    pub remove_styles: bool,
    /// Drop `<noscript>` fallbacks.
    pub remove_noscript: bool,
    /// Drop inert `<template>` subtrees.
    pub remove_templates: bool,
    /// Drop HTML comments, including multi-line ones.
    pub remove_comments: bool,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            remove_scripts: true,
            remove_styles: true,
            remove_noscript: true,
            remove_templates: true,
            remove_comments: true,
        }
    }
}

/// Cleans raw HTML according to `config`.
///
/// If the rewriter rejects the input (malformed beyond recovery), the raw
/// HTML is returned unchanged and the parser gets to make its own attempt.
pub fn preprocess_html(html: &str, config: &PreprocessConfig) -> String {
    let mut stripped_tags = Vec::new();
    if config.remove_scripts {
        stripped_tags.push("script");
    }
    if config.remove_styles {
        stripped_tags.push("style");
    }
    if config.remove_noscript {
        stripped_tags.push("noscript");
    }
    if config.remove_templates {
        stripped_tags.push("template");
    }

    let element_content_handlers = stripped_tags
        .into_iter()
        .map(|tag| {
            lol_html::element!(tag, |el| {
                el.remove();
                Ok(())
            })
        })
        .collect();

    let document_content_handlers = if config.remove_comments {
        vec![lol_html::doc_comments!(|comment| {
            comment.remove();
            Ok(())
        })]
    } else {
        Vec::new()
    };

    let mut output = String::new();
    let mut rewriter = HtmlRewriter::new(
        Settings {
            element_content_handlers,
            document_content_handlers,
            ..Settings::default()
        },
        |chunk: &[u8]| output.push_str(&String::from_utf8_lossy(chunk)),
    );

    if rewriter.write(html.as_bytes()).is_err() || rewriter.end().is_err() {
        return html.to_string();
    }

    output
}
