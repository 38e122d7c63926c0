//! [`RowSource`] over a rusqlite row.

use rusqlite::types::ValueRef;
use tracing::debug;
use whassup_core::{RowSource, Value};

/// Borrows a rusqlite row for the duration of one decode.
pub struct SqliteRow<'a, 'stmt> {
    row: &'a rusqlite::Row<'stmt>,
}

impl<'a, 'stmt> SqliteRow<'a, 'stmt> {
    pub fn new(row: &'a rusqlite::Row<'stmt>) -> Self {
        Self { row }
    }
}

impl RowSource for SqliteRow<'_, '_> {
    fn value(&self, column: &str) -> Option<Value> {
        // Statement::column_index matches names case-insensitively.
        let idx = self.row.as_ref().column_index(column).ok()?;
        let value = match self.row.get_ref(idx) {
            Ok(value) => value,
            Err(e) => {
                debug!(column, error = %e, "unreadable column");
                return None;
            }
        };
        Some(match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(v) => Value::Integer(v),
            ValueRef::Real(v) => Value::Real(v),
            ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
            ValueRef::Blob(bytes) => Value::Blob(bytes.to_vec()),
        })
    }
}
