//! JSON-serializable request/response types.

use recorte_core::LinkContent;
use serde::{Deserialize, Serialize};

/// Successful batch response envelope.
///
/// Top-level `success` reflects whether the request itself was well-formed,
/// independent of individual per-URL outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksResponse {
    /// Always `true` for this envelope.
    pub success: bool,
    /// One record per input URL, in input order.
    pub links: Vec<LinkContent>,
}

/// Top-level failure envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false` for this envelope.
    pub success: bool,
    /// Human-readable failure reason.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { success: false, error: error.into() }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}
