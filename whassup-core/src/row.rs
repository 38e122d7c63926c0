//! Row-source contract: one row, looked up by column name.
//!
//! [`RowSource`] separates "column missing" (`None`) from "column present but NULL"
//! (`Some(Value::Null)`). [`MapRow`] is an in-memory implementation for tests and
//! programmatic input; `whassup-storage` implements the trait over rusqlite rows.

use std::collections::HashMap;

/// A loosely typed column value, following SQLite storage classes.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

/// A single row addressed by column name.
pub trait RowSource {
    /// Returns the value stored under `column`, or `None` when the row has no such column.
    /// Implementations must match names case-insensitively.
    fn value(&self, column: &str) -> Option<Value>;
}

/// Row backed by a map of lowercased column names.
#[derive(Debug, Clone, Default)]
pub struct MapRow {
    columns: HashMap<String, Value>,
}

impl MapRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chaining variant of [`MapRow::insert`].
    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: &str, value: impl Into<Value>) {
        self.columns.insert(column.to_lowercase(), value.into());
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl RowSource for MapRow {
    fn value(&self, column: &str) -> Option<Value> {
        self.columns.get(&column.to_lowercase()).cloned()
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
