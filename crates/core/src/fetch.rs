//! Content fetching from URLs, files, and stdin.
//!
//! This module provides functions for retrieving page content from
//! various sources: HTTP/HTTPS URLs, local files, and standard input.

use std::fs;
use std::path::PathBuf;

#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
use url::Url;

use crate::{RecorteError, Result};

/// HTTP client configuration for fetching link content.
///
/// This struct controls timeout and the fixed header pair sent with every
/// outbound request.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent string sent with every request.
    pub user_agent: String,
    /// Accept header sent with every request.
    pub accept: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 15,
            user_agent: "Mozilla/5.0 (compatible; Bot/1.0)".to_string(),
            accept: "text/html,text/plain,*/*".to_string(),
        }
    }
}

/// A fetched response body together with its declared content type.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Full response body, read as text before any further processing.
    pub body: String,
    /// Value of the `Content-Type` response header, if present.
    pub content_type: Option<String>,
}

impl FetchedPage {
    /// Whether the response declared itself as HTML.
    ///
    /// Non-HTML payloads bypass tag stripping and are used as-is.
    pub fn is_html(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.to_ascii_lowercase().contains("text/html"))
            .unwrap_or(false)
    }
}

/// Builds a reqwest client honoring the configured timeout.
///
/// The client is meant to be built once and reused across a whole batch.
#[cfg(feature = "fetch")]
pub fn build_client(config: &FetchConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(RecorteError::HttpError)
}

/// Fetches the content of a single URL.
///
/// This function performs an HTTP GET request with the fixed `User-Agent`
/// and `Accept` headers and returns the response body as text. A non-2xx
/// status is an error whose display text is `HTTP <status>`; a timeout maps
/// to [`RecorteError::Timeout`]. There are no retries.
#[cfg(feature = "fetch")]
pub async fn fetch_url(client: &Client, url: &str, config: &FetchConfig) -> Result<FetchedPage> {
    let parsed_url = Url::parse(url).map_err(|e| RecorteError::InvalidUrl(e.to_string()))?;

    if parsed_url.scheme().is_empty() {
        return Err(RecorteError::InvalidUrl(
            "URL must include a scheme (http:// or https://)".to_string(),
        ));
    }

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header("Accept", &config.accept)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                RecorteError::Timeout { timeout: config.timeout }
            } else {
                RecorteError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(RecorteError::HttpStatus { status: status.as_u16() });
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = response.text().await.map_err(|e| {
        if e.is_timeout() {
            RecorteError::Timeout { timeout: config.timeout }
        } else {
            RecorteError::HttpError(e)
        }
    })?;

    Ok(FetchedPage { body, content_type })
}

/// Reads HTML content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(RecorteError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(RecorteError::from)
    }
}

/// Reads HTML content from standard input.
///
/// This function reads all available input from stdin until EOF.
/// Useful for piping content from other commands.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(RecorteError::from)?;

    Ok(buffer)
}
