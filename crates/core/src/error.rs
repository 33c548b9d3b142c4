//! Error types for Recorte operations.
//!
//! This module defines the main error type [`RecorteError`] which represents
//! all possible errors that can occur while fetching link content and
//! reading local input.
//!
//! # Example
//!
//! ```rust
//! use recorte_core::{RecorteError, Result};
//!
//! fn check_scheme(url: &str) -> Result<()> {
//!     if !url.starts_with("http") {
//!         return Err(RecorteError::InvalidUrl(url.to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for link content operations.
///
/// This enum represents all possible errors that can occur during HTTP
/// fetching and file I/O. The text transforms (extraction, optimization)
/// are pure and never fail, so they have no variants here.
#[derive(Error, Debug)]
pub enum RecorteError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Non-success HTTP status.
    ///
    /// Returned when the remote server answers with anything outside the
    /// 2xx range. The display text is exactly `HTTP <status>`, which is
    /// what ends up in the per-URL result record.
    #[error("HTTP {status}")]
    HttpStatus { status: u16 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or is malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// File not found.
    ///
    /// Returned when attempting to read a file that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Input read errors.
    ///
    /// Wraps standard I/O errors for file and stdin reads.
    #[error("Failed to read input: {0}")]
    ReadError(#[from] std::io::Error),
}

/// Result type alias for RecorteError.
///
/// This is a convenience alias for `std::result::Result<T, RecorteError>`.
pub type Result<T> = std::result::Result<T, RecorteError>;
