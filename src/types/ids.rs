use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque record identifier as issued by the server.
///
/// The id is never interpreted: whatever JSON value the server sent (integer,
/// string, float, oversized number, even `null`) is carried through and
/// serialized back unchanged. A record without an id holds `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Value);

impl RecordId {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Whether the server sent no usable id.
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }
}

impl From<Value> for RecordId {
    fn from(value: Value) -> Self {
        RecordId(value)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId(Value::from(value))
    }
}

impl From<i32> for RecordId {
    fn from(value: i32) -> Self {
        RecordId(Value::from(value))
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId(Value::from(value))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => write!(f, "{}", s),
            other => write!(f, "{}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_and_text_ids() {
        let numeric: RecordId = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(numeric, RecordId::from(42));

        let text: RecordId = serde_json::from_value(json!("rec-7")).unwrap();
        assert_eq!(text, RecordId::from("rec-7"));
        assert_eq!(text.to_string(), "rec-7");
    }

    #[test]
    fn test_unusual_ids_pass_through() {
        for raw in [json!(1.5), json!(18446744073709551615u64), json!(true), json!(null)] {
            let id: RecordId = serde_json::from_value(raw.clone()).unwrap();
            assert_eq!(id.as_value(), &raw);
            assert_eq!(serde_json::to_value(&id).unwrap(), raw);
        }
    }

    #[test]
    fn test_default_is_null() {
        assert!(RecordId::default().is_null());
        assert_eq!(RecordId::default().to_string(), "null");
    }
}
