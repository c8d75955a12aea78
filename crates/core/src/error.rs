//! Error types for newslens operations.
//!
//! This module defines the main error type [`NewslensError`] which represents
//! all possible errors that can occur during fetching, content extraction,
//! and analysis.
//!
//! # Example
//!
//! ```rust
//! use newslens_core::{NewslensError, Result};
//!
//! fn require_body(body: &str) -> Result<()> {
//!     if body.is_empty() {
//!         return Err(NewslensError::EmptyBody);
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for article fetching and analysis operations.
///
/// Fetch-layer failures (`Http`, `HttpStatus`, `Timeout`) are recoverable
/// through a [`RetryPolicy`](crate::fetch::RetryPolicy); everything else
/// terminates the pipeline.
///
/// # Example
///
/// ```rust
/// use newslens_core::{NewslensError, fetch::validate_url};
///
/// match validate_url("ftp://example.com/article") {
///     Ok(url) => println!("ok: {}", url),
///     Err(NewslensError::InvalidUrl(msg)) => println!("rejected: {}", msg),
///     Err(e) => println!("error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum NewslensError {
    /// Invalid URL provided.
    ///
    /// Returned when input is not an absolute http/https URL with a host.
    /// The pipeline aborts before any network access.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP request errors from reqwest.
    ///
    /// Wraps network errors, DNS failures, connection issues, and other
    /// transport-level problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status.
    ///
    /// Returned when the server answered but not with a 2xx status.
    #[error("Server returned HTTP status {status}")]
    HttpStatus { status: u16 },

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The retry policy declined (or ran out of) further fetch attempts.
    ///
    /// This terminates the pipeline before any analysis runs.
    #[error("Fetch abandoned after {attempts} attempt(s): {source}")]
    FetchAborted {
        attempts: usize,
        #[source]
        source: Box<NewslensError>,
    },

    /// HTML parsing errors.
    ///
    /// Returned when HTML cannot be parsed, often due to an invalid CSS
    /// selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParse(String),

    /// Extraction found no paragraph text in the document.
    ///
    /// Surfaced as an error rather than analyzed as placeholder text, so
    /// sentiment and credibility scores never describe a sentinel string.
    #[error("No paragraph text could be extracted from the document")]
    NoParagraphs,

    /// Analysis was invoked on a document with an empty body.
    ///
    /// This is a precondition violation, not a degraded mode.
    #[error("Cannot analyze a document with an empty body")]
    EmptyBody,

    /// File not found.
    ///
    /// Returned when attempting to read a local HTML file that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O errors for local input and report output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization errors.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for NewslensError.
///
/// This is a convenience alias for `std::result::Result<T, NewslensError>`.
pub type Result<T> = std::result::Result<T, NewslensError>;
