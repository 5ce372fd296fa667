// src/model/mod.rs
//! Domain model: the records served by the endpoint and the summary built from a page of them.

mod record;
mod summary;

pub use record::{Disposition, Record};
pub use summary::PageSummary;
