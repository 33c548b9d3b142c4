//! Batch link processing.
//!
//! This module ties the fetcher, the extractor, and the optimizer together:
//! given a sequence of URLs it produces one [`LinkContent`] record per URL,
//! in input order, never letting one URL's failure abort the batch.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::cache::LookupCache;
use crate::extract::extract_text;
use crate::fetch::{FetchConfig, build_client, fetch_url};
use crate::optimize::{OptimizeConfig, optimize_content_with_config};

/// The per-URL result record.
///
/// On success `content` holds the extracted (and possibly trimmed) text and
/// `error` is absent; on failure `content` is empty and `error` holds a
/// human-readable reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkContent {
    /// The URL this record was produced for.
    pub url: String,
    /// Extracted text; empty on failure (or when the source was empty).
    pub content: String,
    /// Whether this URL was fetched and processed successfully.
    pub success: bool,
    /// Failure reason, absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LinkContent {
    /// Builds a success record.
    pub fn ok(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self { url: url.into(), content: content.into(), success: true, error: None }
    }

    /// Builds a failure record with an empty content field.
    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self { url: url.into(), content: String::new(), success: false, error: Some(error.into()) }
    }
}

/// Configuration for a [`LinkProcessor`].
#[derive(Debug, Clone, Default)]
pub struct ProcessorConfig {
    /// Outbound HTTP settings.
    pub fetch: FetchConfig,
    /// Trimming thresholds.
    pub optimize: OptimizeConfig,
}

/// Processes batches of URLs into [`LinkContent`] records.
///
/// The reqwest client is built once and reused for every URL. URLs within a
/// batch are processed strictly sequentially: one fetch completes, is
/// extracted and trimmed, and recorded before the next fetch begins.
pub struct LinkProcessor {
    client: reqwest::Client,
    config: ProcessorConfig,
}

impl LinkProcessor {
    /// Creates a processor with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ProcessorConfig::default())
    }

    /// Creates a processor with custom configuration.
    pub fn with_config(config: ProcessorConfig) -> Result<Self> {
        let client = build_client(&config.fetch)?;
        Ok(Self { client, config })
    }

    /// Processes a single URL into a record.
    ///
    /// Any error along the way is captured in the record; this never panics
    /// and never propagates.
    pub async fn process_link(&self, url: &str) -> LinkContent {
        match self.fetch_and_trim(url).await {
            Ok(content) => LinkContent::ok(url, content),
            Err(e) => LinkContent::failed(url, e.to_string()),
        }
    }

    /// Processes a whole batch sequentially, preserving input order.
    ///
    /// The output always has exactly one record per input URL. Duplicate
    /// URLs are served from a request-scoped cache, so each distinct URL is
    /// fetched at most once per batch (a failed attempt is final for the
    /// batch as well; there are no retries).
    pub async fn process_links(&self, urls: &[String]) -> Vec<LinkContent> {
        let mut cache: LookupCache<String, LinkContent> = LookupCache::new();
        let mut results = Vec::with_capacity(urls.len());

        for url in urls {
            if let Some(hit) = cache.get(url) {
                results.push(hit.clone());
                continue;
            }
            let record = self.process_link(url).await;
            cache.insert(url.clone(), record.clone());
            results.push(record);
        }

        results
    }

    async fn fetch_and_trim(&self, url: &str) -> Result<String> {
        let page = fetch_url(&self.client, url, &self.config.fetch).await?;
        let text = if page.is_html() { extract_text(&page.body) } else { page.body };
        Ok(optimize_content_with_config(&text, &self.config.optimize))
    }
}
