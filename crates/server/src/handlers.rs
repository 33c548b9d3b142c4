//! HTTP request handlers.
//!
//! Handlers that map HTTP requests to batch link processing.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use recorte_core::LinkProcessor;
use serde_json::Value;
use tracing::{debug, warn};

use crate::types::{ErrorResponse, HealthResponse, LinksResponse};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<LinkProcessor>,
}

/// Batch link extraction endpoint.
///
/// Expects `{ "links": [...] }`. A body where `links` is missing or not an
/// array is a 400 with the fixed error text; per-URL failures never fail the
/// request and are reported inline in their records instead.
pub async fn process_links(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(body) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            warn!("rejected request body: {}", rejection.body_text());
            return bad_request(rejection.body_text());
        }
    };

    let Some(entries) = body.get("links").and_then(Value::as_array) else {
        return bad_request("Links deve ser um array".to_string());
    };

    // Non-string entries are rendered to their JSON text and fail downstream
    // as invalid URLs, still yielding one record per entry.
    let urls: Vec<String> = entries
        .iter()
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();

    debug!("processing {} link(s)", urls.len());
    let links = state.processor.process_links(&urls).await;

    (StatusCode::OK, Json(LinksResponse { success: true, links })).into_response()
}

/// Health check endpoint.
pub async fn health() -> Response {
    (
        StatusCode::OK,
        Json(HealthResponse { healthy: true, version: env!("CARGO_PKG_VERSION").to_string() }),
    )
        .into_response()
}

fn bad_request(error: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(error))).into_response()
}
