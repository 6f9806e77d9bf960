//! Rows and position-independent row addressing

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Unique key addressing a row independent of its page position.
///
/// Backends return the key as either a JSON string or a JSON number
/// (`id`, `cloud_id`, ...); both normalize to the same identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowIdentity(String);

impl RowIdentity {
    /// Create an identity from a raw key string
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Derive an identity from a JSON value.
    ///
    /// Returns `None` for nulls and structured values - those cannot
    /// address a row.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
            Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }

    /// The identity as a string key
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RowIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RowIdentity {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// A row from a remote list response.
///
/// Rows are JSON objects; cell rendering is the view layer's concern,
/// this core only needs field access and identity derivation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row(Map<String, Value>);

impl Row {
    /// Create a new row from a field map
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Convert a JSON value into a row, if it is an object
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Get a field value by name
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Get a field as a string
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Get a field as i64
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.0.get(field).and_then(Value::as_i64)
    }

    /// Get a field as bool
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.0.get(field).and_then(Value::as_bool)
    }

    /// Derive the row's identity from the given key field
    pub fn identity(&self, identity_field: &str) -> Option<RowIdentity> {
        self.0.get(identity_field).and_then(RowIdentity::from_value)
    }

    /// The underlying field map
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}
