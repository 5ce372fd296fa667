// src/api/mod.rs
//! Records endpoint interaction: the ability to fetch one page of records.
//!
//! Separates I/O (the client), URL construction and status handling, so the
//! paging logic only ever sees the `RecordSource` trait.

pub mod client;
pub mod parser;
pub mod query_string;

use crate::error::FetchError;
use crate::query::QueryParams;
use serde_json::Value;

/// The ability to fetch a raw page of records.
///
/// Resolves with the parsed JSON body of a successful response. A
/// non-success status is a `FetchError::Rejected` carrying the body.
/// Business logic depends on this trait, never on HTTP details.
#[async_trait::async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_page(&self, query: &QueryParams) -> Result<Value, FetchError>;
}

pub use client::RecordsHttpClient;
pub use query_string::build_url;
