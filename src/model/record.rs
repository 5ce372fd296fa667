//! A single record as served by the listing endpoint.

use crate::types::{Color, RecordId};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Lifecycle flag of a record.
///
/// The endpoint uses `"open"` and `"closed"`; anything else is kept verbatim
/// so it survives a round trip, but matches neither.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Disposition {
    Open,
    Closed,
    Other(String),
}

impl From<String> for Disposition {
    fn from(value: String) -> Self {
        match value.as_str() {
            "open" => Disposition::Open,
            "closed" => Disposition::Closed,
            _ => Disposition::Other(value),
        }
    }
}

impl From<&str> for Disposition {
    fn from(value: &str) -> Self {
        Disposition::from(value.to_string())
    }
}

impl From<Disposition> for String {
    fn from(value: Disposition) -> Self {
        value.as_str().to_string()
    }
}

impl Disposition {
    pub fn as_str(&self) -> &str {
        match self {
            Disposition::Open => "open",
            Disposition::Closed => "closed",
            Disposition::Other(other) => other,
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A record from the listing endpoint.
///
/// Every field is optional. A missing `id` decodes as `null`; a record
/// missing `color` or `disposition` (or carrying a non-string value) still
/// decodes and is simply non-primary and non-matching. Fields this type does not model are kept in `extra` and
/// written back out on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default)]
    pub id: RecordId,

    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_disposition",
        skip_serializing_if = "Option::is_none"
    )]
    pub disposition: Option<Disposition>,

    /// Derived from `color`; whatever the server sends here is discarded.
    #[serde(default, deserialize_with = "discard_server_flag")]
    pub is_primary: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    /// Creates a record with no extra fields. `is_primary` is derived immediately.
    pub fn new(
        id: impl Into<RecordId>,
        color: impl Into<String>,
        disposition: impl Into<Disposition>,
    ) -> Self {
        let mut record = Self {
            id: id.into(),
            color: Some(color.into()),
            disposition: Some(disposition.into()),
            is_primary: false,
            extra: Map::new(),
        };
        record.classify();
        record
    }

    /// Recomputes `is_primary` from the record's color.
    pub fn classify(&mut self) {
        self.is_primary = self.color.as_deref().is_some_and(Color::is_primary_name);
    }

    pub fn is_open(&self) -> bool {
        matches!(self.disposition, Some(Disposition::Open))
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.disposition, Some(Disposition::Closed))
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_disposition<'de, D>(deserializer: D) -> Result<Option<Disposition>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.map(Disposition::from))
}

fn discard_server_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer)?;
    Ok(false)
}
