//! Response envelope extraction
//!
//! Backends wrap row arrays at slightly different paths (`data.info`,
//! `data.details`, ...). The path is configuration, not code: an
//! [`Envelope`] resolves dot-separated paths against the raw JSON
//! response.

use crate::{GridError, Result, Row};
use serde_json::Value;

/// A raw JSON response envelope from the transport
#[derive(Debug, Clone)]
pub struct Envelope(Value);

impl Envelope {
    /// Wrap a raw response
    pub fn new(response: Value) -> Self {
        Self(response)
    }

    /// Resolve a dot-separated path (`"data.info"`) inside the envelope
    pub fn value_at(&self, path: &str) -> Option<&Value> {
        let mut cursor = &self.0;
        for segment in path.split('.') {
            cursor = cursor.as_object()?.get(segment)?;
        }
        Some(cursor)
    }

    /// Extract the row array at the given data path.
    ///
    /// A missing path yields an empty list (some endpoints omit the array
    /// entirely for empty results); a present non-array value is a
    /// malformed envelope. Non-object elements inside the array are
    /// dropped with a warning rather than failing the whole page.
    pub fn rows_at(&self, data_path: &str) -> Result<Vec<Row>> {
        let Some(value) = self.value_at(data_path) else {
            return Ok(Vec::new());
        };

        let items = value.as_array().ok_or_else(|| {
            GridError::Envelope(format!("value at '{data_path}' is not an array"))
        })?;

        let mut rows = Vec::with_capacity(items.len());
        for item in items {
            match Row::from_value(item.clone()) {
                Some(row) => rows.push(row),
                None => {
                    tracing::warn!(data_path, "dropping non-object row in envelope");
                }
            }
        }
        Ok(rows)
    }

    /// Extract the total count at the given path, if present
    pub fn count_at(&self, count_path: &str) -> Option<u64> {
        self.value_at(count_path).and_then(Value::as_u64)
    }

    /// The raw response value
    pub fn raw(&self) -> &Value {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_rows_at_nested_path() {
        let envelope = Envelope::new(json!({
            "result": true,
            "data": {"info": [{"id": 1}, {"id": 2}], "count": 57},
        }));

        let rows = envelope.rows_at("data.info").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get_i64("id"), Some(1));
    }

    #[test]
    fn test_rows_at_alternate_path() {
        let envelope = Envelope::new(json!({
            "data": {"details": [{"id": "vpc-1"}]},
        }));

        let rows = envelope.rows_at("data.details").unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_missing_path_is_empty_not_error() {
        let envelope = Envelope::new(json!({"data": {}}));
        assert_eq!(envelope.rows_at("data.info").unwrap(), Vec::new());
    }

    #[test]
    fn test_non_array_at_path_is_malformed() {
        let envelope = Envelope::new(json!({"data": {"info": "oops"}}));
        let err = envelope.rows_at("data.info").unwrap_err();
        assert!(matches!(err, GridError::Envelope(_)));
    }

    #[test]
    fn test_non_object_rows_are_dropped() {
        let envelope = Envelope::new(json!({"data": {"info": [{"id": 1}, 7, null]}}));
        let rows = envelope.rows_at("data.info").unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_count_at() {
        let envelope = Envelope::new(json!({"data": {"count": 57}}));
        assert_eq!(envelope.count_at("data.count"), Some(57));
        assert_eq!(envelope.count_at("data.total"), None);
    }
}
