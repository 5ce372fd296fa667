// src/lib.rs
//! managed-records library: retrieves a page of records from a listing
//! endpoint and summarizes it for a client.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Retrieval** — `retrieve`, `RecordRetriever`
//! - **Paging** — `PageRequest`, `QueryParams`, `build_query`
//! - **Summarizing** — `transform_page`, `summarize_records`, `PageSummary`
//! - **Domain types** — `Record`, `Disposition`, `RecordId`, `Color`, `Endpoint`
//! - **Transport** — `RecordSource`, `RecordsHttpClient`, `build_url`
//! - **Error handling** — `AppError`, `FetchError`, `TransformError`, `ValidationError`

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod query;
pub mod retrieve;
pub mod transform;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, FetchError, NetworkFailureKind, TransformError};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, RetrieveConfig};

// --- Domain Model ---
pub use crate::model::{Disposition, PageSummary, Record};
pub use crate::types::{Color, Endpoint, RecordId};

// --- Paging & Summarizing ---
pub use crate::query::{build_query, PageRequest, QueryParams};
pub use crate::transform::{summarize_records, transform_page};

// --- Transport ---
pub use crate::api::{build_url, RecordSource, RecordsHttpClient};

// --- Retrieval ---
pub use crate::retrieve::{retrieve, RecordRetriever};
