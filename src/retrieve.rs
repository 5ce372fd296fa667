// src/retrieve.rs
//! Retrieval of one summarized page: build query → fetch → transform.

use crate::api::{RecordSource, RecordsHttpClient};
use crate::config::RetrieveConfig;
use crate::error::AppError;
use crate::model::PageSummary;
use crate::query::{build_query, PageRequest};
use crate::transform::transform_page;
use std::sync::Arc;

/// Retrieves summarized pages from a record source.
///
/// Holds no per-call state, so one retriever can serve concurrent calls.
#[derive(Clone)]
pub struct RecordRetriever {
    source: Arc<dyn RecordSource>,
}

impl RecordRetriever {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self { source }
    }

    /// Creates a retriever backed by the HTTP endpoint named in `config`.
    pub fn from_config(config: &RetrieveConfig) -> Result<Self, AppError> {
        let client = RecordsHttpClient::from_config(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Retrieves and summarizes the requested page.
    ///
    /// Fetch failures come back unchanged inside `AppError::Fetch`; nothing
    /// is retried. A body that cannot be summarized is logged and returned
    /// as `AppError::Transform`.
    pub async fn retrieve(&self, request: Option<&PageRequest>) -> Result<PageSummary, AppError> {
        let query = build_query(request);
        log::debug!(
            "Retrieving page {} (offset {}, colors {:?})",
            query.page,
            query.offset,
            query.color_filter
        );

        let body = self.source.fetch_page(&query).await?;

        let summary = transform_page(body, query.page).map_err(|e| {
            log::error!("Could not summarize page {}: {}", query.page, e);
            AppError::Transform(e)
        })?;

        log::info!(
            "Page {}: {} records, {} open, {} closed primary (previous {:?}, next {:?})",
            query.page,
            summary.ids.len(),
            summary.open.len(),
            summary.closed_primary_count,
            summary.previous_page,
            summary.next_page,
        );

        Ok(summary)
    }
}

/// Retrieves one summarized page from the endpoint named in `config`.
pub async fn retrieve(
    config: &RetrieveConfig,
    request: Option<&PageRequest>,
) -> Result<PageSummary, AppError> {
    RecordRetriever::from_config(config)?.retrieve(request).await
}
