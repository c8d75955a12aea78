//! Article fetching from URLs, files, and stdin.
//!
//! This module provides URL validation, a bounded HTTP GET for retrieving
//! article HTML, and the [`RetryPolicy`] abstraction that decides whether a
//! failed fetch should be attempted again. The interactive "try again?"
//! prompt lives at the CLI boundary as one policy implementation; the
//! extraction logic itself never touches a terminal.

use std::fs;
use std::path::PathBuf;

#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
use url::Url;

use crate::{NewslensError, Result};

/// HTTP client configuration for fetching articles.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 10,
            user_agent: "Mozilla/5.0 (compatible; Newslens/0.3; +https://github.com/stormlightlabs/newslens)"
                .to_string(),
        }
    }
}

/// Validates that input is a well-formed absolute http/https URL.
///
/// Rejects other schemes and URLs without a host. This runs before any
/// network access.
///
/// # Example
///
/// ```rust
/// use newslens_core::fetch::validate_url;
///
/// assert!(validate_url("https://example.com/story").is_ok());
/// assert!(validate_url("ftp://example.com").is_err());
/// assert!(validate_url("not a url").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<Url> {
    let url = Url::parse(input.trim()).map_err(|e| NewslensError::InvalidUrl(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(NewslensError::InvalidUrl(format!(
                "unsupported scheme '{}': expected http or https",
                other
            )));
        }
    }

    if url.host_str().is_none() {
        return Err(NewslensError::InvalidUrl("URL has no host".to_string()));
    }

    Ok(url)
}

/// Decides whether a failed fetch attempt should be retried.
///
/// `attempt` is the number of attempts made so far (starting at 1). The
/// policy is consulted only for transport-level failures; invalid URLs are
/// never retried.
///
/// Implementations range from [`NoRetry`] to an interactive prompt at the
/// CLI boundary. Any `FnMut(usize, &NewslensError) -> bool` closure can be
/// used through [`RetryFn`].
pub trait RetryPolicy {
    /// Returns true if the fetch should be attempted again.
    fn should_retry(&mut self, attempt: usize, error: &NewslensError) -> bool;
}

/// Policy that never retries.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRetry;

impl RetryPolicy for NoRetry {
    fn should_retry(&mut self, _attempt: usize, _error: &NewslensError) -> bool {
        false
    }
}

/// Policy that allows a fixed total number of attempts.
#[derive(Debug, Clone, Copy)]
pub struct LimitedRetry {
    /// Total attempts allowed, including the first.
    pub max_attempts: usize,
}

impl RetryPolicy for LimitedRetry {
    fn should_retry(&mut self, attempt: usize, _error: &NewslensError) -> bool {
        attempt < self.max_attempts
    }
}

/// Adapter turning a closure into a [`RetryPolicy`].
///
/// # Example
///
/// ```rust
/// use newslens_core::fetch::{RetryFn, RetryPolicy};
/// use newslens_core::NewslensError;
///
/// let mut policy = RetryFn(|attempt: usize, _err: &NewslensError| attempt < 2);
/// let err = NewslensError::HttpStatus { status: 503 };
/// assert!(policy.should_retry(1, &err));
/// assert!(!policy.should_retry(2, &err));
/// ```
pub struct RetryFn<F>(pub F);

impl<F> RetryPolicy for RetryFn<F>
where
    F: FnMut(usize, &NewslensError) -> bool,
{
    fn should_retry(&mut self, attempt: usize, error: &NewslensError) -> bool {
        (self.0)(attempt, error)
    }
}

/// Forwarding impl so callers can select a policy at runtime via
/// `Box<dyn RetryPolicy>`.
impl<P: RetryPolicy + ?Sized> RetryPolicy for Box<P> {
    fn should_retry(&mut self, attempt: usize, error: &NewslensError) -> bool {
        (**self).should_retry(attempt, error)
    }
}

/// Fetches HTML content from a URL.
///
/// Performs a single HTTP GET and returns the response body as text. The
/// request carries a browser-like User-Agent, follows redirects, and is
/// bounded by the configured timeout. A non-2xx response is a fetch failure
/// ([`NewslensError::HttpStatus`]), not a successful fetch of an error page.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = validate_url(url)?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(NewslensError::Http)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                NewslensError::Timeout { timeout: config.timeout }
            } else {
                NewslensError::Http(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(NewslensError::HttpStatus { status: status.as_u16() });
    }

    let content = response.text().await?;

    Ok(content)
}

/// Fetches a URL, consulting `policy` after each transport failure.
///
/// Returns the body on the first successful attempt. When the policy
/// declines a further attempt the last error is wrapped in
/// [`NewslensError::FetchAborted`], which callers treat as a clean pipeline
/// abort. Non-recoverable errors (invalid URL) propagate immediately.
#[cfg(feature = "fetch")]
pub async fn fetch_with_retry<P>(url: &str, config: &FetchConfig, policy: &mut P) -> Result<String>
where
    P: RetryPolicy,
{
    let mut attempts = 0usize;

    loop {
        attempts += 1;
        match fetch_url(url, config).await {
            Ok(body) => return Ok(body),
            Err(err) if is_retryable(&err) => {
                if policy.should_retry(attempts, &err) {
                    continue;
                }
                return Err(NewslensError::FetchAborted { attempts, source: Box::new(err) });
            }
            Err(err) => return Err(err),
        }
    }
}

/// Transport-level failures may be retried; anything else is final.
fn is_retryable(err: &NewslensError) -> bool {
    #[cfg(feature = "fetch")]
    if matches!(err, NewslensError::Http(_)) {
        return true;
    }
    matches!(err, NewslensError::HttpStatus { .. } | NewslensError::Timeout { .. })
}

/// Reads HTML content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(NewslensError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(NewslensError::from)
    }
}

/// Reads HTML content from standard input.
///
/// This function reads all available input from stdin until EOF.
/// Useful for piping content from other commands.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(NewslensError::from)?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 10);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_validate_url_accepts_http_and_https() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com/path?q=1").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_other_schemes() {
        assert!(matches!(
            validate_url("ftp://example.com"),
            Err(NewslensError::InvalidUrl(_))
        ));
        assert!(matches!(
            validate_url("file:///etc/passwd"),
            Err(NewslensError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_validate_url_rejects_missing_host() {
        assert!(matches!(validate_url("not-a-url"), Err(NewslensError::InvalidUrl(_))));
        assert!(matches!(validate_url("example.com"), Err(NewslensError::InvalidUrl(_))));
    }

    #[test]
    fn test_validate_url_trims_whitespace() {
        assert!(validate_url("  https://example.com  ").is_ok());
    }

    #[test]
    fn test_no_retry_policy() {
        let mut policy = NoRetry;
        let err = NewslensError::Timeout { timeout: 10 };
        assert!(!policy.should_retry(1, &err));
    }

    #[test]
    fn test_limited_retry_policy() {
        let mut policy = LimitedRetry { max_attempts: 3 };
        let err = NewslensError::HttpStatus { status: 500 };
        assert!(policy.should_retry(1, &err));
        assert!(policy.should_retry(2, &err));
        assert!(!policy.should_retry(3, &err));
    }

    #[test]
    fn test_retry_fn_sees_error() {
        let mut saw_status = false;
        {
            let mut policy = RetryFn(|_attempt: usize, err: &NewslensError| {
                saw_status = matches!(err, NewslensError::HttpStatus { status: 429 });
                false
            });
            policy.should_retry(1, &NewslensError::HttpStatus { status: 429 });
        }
        assert!(saw_status);
    }

    #[test]
    fn test_boxed_policy_forwards() {
        let mut policy: Box<dyn RetryPolicy> = Box::new(LimitedRetry { max_attempts: 2 });
        let err = NewslensError::Timeout { timeout: 10 };
        assert!(policy.should_retry(1, &err));
        assert!(!policy.should_retry(2, &err));
    }

    #[test]
    fn test_is_retryable() {
        assert!(is_retryable(&NewslensError::Timeout { timeout: 10 }));
        assert!(is_retryable(&NewslensError::HttpStatus { status: 502 }));
        assert!(!is_retryable(&NewslensError::InvalidUrl("nope".to_string())));
        assert!(!is_retryable(&NewslensError::NoParagraphs));
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_fetch_url_invalid() {
        let config = FetchConfig::default();
        let result = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(fetch_url("not-a-url", &config))
        })
        .join()
        .unwrap();

        assert!(matches!(result, Err(NewslensError::InvalidUrl(_))));
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_fetch_with_retry_aborts_without_network() {
        // Unroutable per RFC 5737; the policy declines after the first failure.
        let config = FetchConfig { timeout: 1, ..Default::default() };
        let result = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(fetch_with_retry("http://192.0.2.1/article", &config, &mut NoRetry))
        })
        .join()
        .unwrap();

        assert!(matches!(result, Err(NewslensError::FetchAborted { attempts: 1, .. })));
    }

    #[test]
    fn test_fetch_file_not_found() {
        let result = fetch_file("/nonexistent/path/file.html");
        assert!(matches!(result, Err(NewslensError::FileNotFound(_))));
    }

    #[test]
    fn test_fetch_file_reads_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "<html><body><p>hi</p></body></html>").unwrap();

        let content = fetch_file(path.to_str().unwrap()).unwrap();
        assert!(content.contains("<p>hi</p>"));
    }
}
