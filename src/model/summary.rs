use super::Record;
use crate::types::RecordId;
use serde::Serialize;

/// Client-ready summary of one page of records.
///
/// Built fresh per call and handed straight back to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    /// Ids of every displayed record, in server order.
    pub ids: Vec<RecordId>,
    /// Full records whose disposition is open, in server order.
    pub open: Vec<Record>,
    /// Closed records with a primary color.
    pub closed_primary_count: usize,
    pub previous_page: Option<u32>,
    pub next_page: Option<u32>,
}

impl PageSummary {
    /// Whether this page has no records at all.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
