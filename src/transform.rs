// src/transform.rs
//! Summarizes one fetched page of records.
//!
//! Cursors are decided on the untrimmed page: only the presence of the
//! lookahead sentinel says a next page exists. The sentinel is then dropped
//! and one pass over the remaining records builds the aggregates.

use crate::constants::{FIRST_PAGE, PAGE_DISPLAY_SIZE};
use crate::error::TransformError;
use crate::model::{PageSummary, Record};
use serde_json::Value;

/// Previous/next page cursors for a fetched page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PageCursors {
    previous: Option<u32>,
    next: Option<u32>,
}

impl PageCursors {
    /// Decides cursors from the number of records fetched, before trimming.
    fn for_fetched(fetched: usize, page: u32) -> Self {
        if fetched == 0 && page == FIRST_PAGE {
            return Self {
                previous: None,
                next: None,
            };
        }

        let previous = page.checked_sub(1).filter(|p| *p >= FIRST_PAGE);
        // No next cursor past the last representable page.
        let next = if has_lookahead(fetched) {
            page.checked_add(1)
        } else {
            None
        };
        Self { previous, next }
    }
}

/// Whether the page came back with the lookahead sentinel.
fn has_lookahead(fetched: usize) -> bool {
    fetched > PAGE_DISPLAY_SIZE as usize
}

/// Summarizes a raw page body as returned by the endpoint.
///
/// # Errors
///
/// `NotASequence` if `data` is not a JSON array. `MalformedRecord` if an
/// element is not an object. Missing or odd `id`, `color` and `disposition`
/// values are not errors: ids pass through as sent, `null` when absent.
pub fn transform_page(data: Value, page: u32) -> Result<PageSummary, TransformError> {
    let items = match data {
        Value::Array(items) => items,
        other => {
            return Err(TransformError::NotASequence {
                found: json_type_name(&other),
            })
        }
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| decode_record(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(summarize_records(records, page))
}

/// Summarizes records that are already decoded.
pub fn summarize_records(mut records: Vec<Record>, page: u32) -> PageSummary {
    let cursors = PageCursors::for_fetched(records.len(), page);
    if has_lookahead(records.len()) {
        records.pop();
    }

    let mut summary = PageSummary {
        ids: Vec::with_capacity(records.len()),
        open: Vec::new(),
        closed_primary_count: 0,
        previous_page: cursors.previous,
        next_page: cursors.next,
    };

    for mut record in records {
        record.classify();
        summary.ids.push(record.id.clone());

        if record.is_closed() && record.is_primary {
            summary.closed_primary_count += 1;
        }
        if record.is_open() {
            summary.open.push(record);
        }
    }

    summary
}

fn decode_record(index: usize, item: Value) -> Result<Record, TransformError> {
    if !item.is_object() {
        return Err(TransformError::MalformedRecord {
            index,
            reason: format!("expected an object, got {}", json_type_name(&item)),
        });
    }

    serde_json::from_value(item).map_err(|e| TransformError::MalformedRecord {
        index,
        reason: e.to_string(),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecordId;
    use serde_json::json;

    fn open_records(count: i64) -> Value {
        Value::Array(
            (1..=count)
                .map(|id| json!({ "id": id, "color": "green", "disposition": "open" }))
                .collect(),
        )
    }

    #[test]
    fn test_cursor_rules() {
        let none = PageCursors {
            previous: None,
            next: None,
        };
        assert_eq!(PageCursors::for_fetched(0, 1), none);
        assert_eq!(PageCursors::for_fetched(10, 1), none);
        assert_eq!(
            PageCursors::for_fetched(11, 1),
            PageCursors {
                previous: None,
                next: Some(2)
            }
        );
        assert_eq!(
            PageCursors::for_fetched(0, 4),
            PageCursors {
                previous: Some(3),
                next: None
            }
        );
        assert_eq!(
            PageCursors::for_fetched(11, 4),
            PageCursors {
                previous: Some(3),
                next: Some(5)
            }
        );
    }

    #[test]
    fn test_last_representable_page_has_no_next() {
        let cursors = PageCursors::for_fetched(11, u32::MAX);
        assert_eq!(cursors.previous, Some(u32::MAX - 1));
        assert_eq!(cursors.next, None);

        let summary = transform_page(open_records(11), u32::MAX).unwrap();
        assert_eq!(summary.next_page, None);
        assert_eq!(summary.ids.len(), 10);
    }

    #[test]
    fn test_full_page_drops_sentinel() {
        let summary = transform_page(open_records(11), 2).unwrap();
        assert_eq!(summary.ids.len(), 10);
        assert_eq!(summary.open.len(), 10);
        assert_eq!(summary.ids.last(), Some(&RecordId::from(10)));
        assert_eq!(summary.previous_page, Some(1));
        assert_eq!(summary.next_page, Some(3));
    }

    #[test]
    fn test_short_page_is_not_trimmed() {
        let summary = transform_page(open_records(10), 1).unwrap();
        assert_eq!(summary.ids.len(), 10);
        assert_eq!(summary.next_page, None);
    }

    #[test]
    fn test_closed_primary_count() {
        let data = json!([
            { "id": 1, "color": "red", "disposition": "closed" },
            { "id": 2, "color": "blue", "disposition": "closed" },
            { "id": 3, "color": "yellow", "disposition": "open" },
            { "id": 4, "color": "green", "disposition": "closed" },
            { "id": 5, "color": "brown", "disposition": "closed" },
            { "id": 6, "color": "yellow", "disposition": "closed" },
        ]);
        let summary = transform_page(data, 1).unwrap();
        assert_eq!(summary.closed_primary_count, 3);
        assert_eq!(summary.open.len(), 1);
        assert!(summary.open[0].is_primary);
    }

    #[test]
    fn test_records_missing_fields_do_not_abort() {
        let data = json!([
            { "id": 1 },
            { "id": 2, "color": "red" },
            { "id": 3, "disposition": "closed" },
            { "id": 4, "color": "red", "disposition": "pending" },
        ]);
        let summary = transform_page(data, 1).unwrap();
        assert_eq!(summary.ids.len(), 4);
        assert!(summary.open.is_empty());
        assert_eq!(summary.closed_primary_count, 0);
    }

    #[test]
    fn test_non_array_body() {
        assert_eq!(
            transform_page(json!({ "error": "nope" }), 1),
            Err(TransformError::NotASequence { found: "object" })
        );
        assert_eq!(
            transform_page(Value::Null, 1),
            Err(TransformError::NotASequence { found: "null" })
        );
    }

    #[test]
    fn test_non_object_record() {
        let err = transform_page(json!([{ "id": 1 }, 42]), 1).unwrap_err();
        assert_eq!(
            err,
            TransformError::MalformedRecord {
                index: 1,
                reason: "expected an object, got number".to_string(),
            }
        );
    }

    #[test]
    fn test_any_id_passes_through() {
        let data = json!([
            { "color": "red", "disposition": "closed" },
            { "id": 1.5, "color": "blue", "disposition": "open" },
            { "id": 18446744073709551615u64, "color": "red", "disposition": "closed" },
            { "id": true, "disposition": "open" },
            { "id": "r-9", "color": "green", "disposition": "closed" },
        ]);
        let summary = transform_page(data, 1).unwrap();

        let ids: Vec<&Value> = summary.ids.iter().map(RecordId::as_value).collect();
        assert_eq!(
            ids,
            vec![
                &Value::Null,
                &json!(1.5),
                &json!(18446744073709551615u64),
                &json!(true),
                &json!("r-9"),
            ]
        );
        assert_eq!(summary.closed_primary_count, 2);
        assert_eq!(summary.open.len(), 2);
    }
}
