//! Column table for the `messages` table and per-type accessors.
//!
//! Every accessor is total: a missing column or a NULL yields zero for numbers and `None`
//! for strings/blobs. Values stored under a different SQLite type are coerced the way
//! SQLite itself would read them.

use tracing::debug;

use crate::row::{RowSource, Value};

/// Recognized columns of the `messages` table.
///
/// ```sql
/// CREATE TABLE messages (_id INTEGER PRIMARY KEY AUTOINCREMENT,
///      key_remote_jid TEXT NOT NULL, key_from_me INTEGER, key_id TEXT NOT NULL,
///      status INTEGER, needs_push INTEGER, data TEXT, timestamp INTEGER,
///      media_url TEXT, media_mime_type TEXT, media_wa_type TEXT, media_size INTEGER,
///      media_name TEXT, media_hash TEXT, latitude REAL, longitude REAL,
///      thumb_image TEXT, remote_resource TEXT, received_timestamp INTEGER,
///      send_timestamp INTEGER, receipt_server_timestamp INTEGER,
///      receipt_device_timestamp INTEGER, raw_data BLOB, recipient_count INTEGER,
///      media_duration INTEGER, origin INTEGER);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    KeyRemoteJid,
    KeyFromMe,
    KeyId,
    Status,
    NeedsPush,
    Data,
    Timestamp,
    MediaUrl,
    MediaMimeType,
    MediaWaType,
    MediaSize,
    MediaName,
    MediaHash,
    MediaDuration,
    Latitude,
    Longitude,
    RemoteResource,
    ReceivedTimestamp,
    SendTimestamp,
    ReceiptServerTimestamp,
    ReceiptDeviceTimestamp,
    RawData,
    RecipientCount,
    Origin,
}

impl Column {
    /// Lowercase snake_case column name as stored in the database.
    pub fn name(self) -> &'static str {
        match self {
            Column::Id => "_id",
            Column::KeyRemoteJid => "key_remote_jid",
            Column::KeyFromMe => "key_from_me",
            Column::KeyId => "key_id",
            Column::Status => "status",
            Column::NeedsPush => "needs_push",
            Column::Data => "data",
            Column::Timestamp => "timestamp",
            Column::MediaUrl => "media_url",
            Column::MediaMimeType => "media_mime_type",
            Column::MediaWaType => "media_wa_type",
            Column::MediaSize => "media_size",
            Column::MediaName => "media_name",
            Column::MediaHash => "media_hash",
            Column::MediaDuration => "media_duration",
            Column::Latitude => "latitude",
            Column::Longitude => "longitude",
            Column::RemoteResource => "remote_resource",
            Column::ReceivedTimestamp => "received_timestamp",
            Column::SendTimestamp => "send_timestamp",
            Column::ReceiptServerTimestamp => "receipt_server_timestamp",
            Column::ReceiptDeviceTimestamp => "receipt_device_timestamp",
            Column::RawData => "raw_data",
            Column::RecipientCount => "recipient_count",
            Column::Origin => "origin",
        }
    }

    /// Values outside the `i32` range read as 0.
    pub fn int<R: RowSource + ?Sized>(self, row: &R) -> i32 {
        let value = self.long(row);
        i32::try_from(value).unwrap_or_else(|_| {
            debug!(column = self.name(), value, "integer column out of i32 range");
            0
        })
    }

    pub fn long<R: RowSource + ?Sized>(self, row: &R) -> i64 {
        self.opt_long(row).unwrap_or(0)
    }

    /// Like [`Column::long`] but keeps "missing or NULL" apart from zero.
    pub fn opt_long<R: RowSource + ?Sized>(self, row: &R) -> Option<i64> {
        match row.value(self.name())? {
            Value::Null => None,
            Value::Integer(v) => Some(v),
            Value::Real(v) => Some(v as i64),
            Value::Text(s) => Some(s.trim().parse().unwrap_or_else(|_| {
                debug!(column = self.name(), value = %s, "non-numeric text in integer column");
                0
            })),
            Value::Blob(_) => {
                debug!(column = self.name(), "blob in integer column");
                Some(0)
            }
        }
    }

    pub fn string<R: RowSource + ?Sized>(self, row: &R) -> Option<String> {
        match row.value(self.name())? {
            Value::Null => None,
            Value::Text(s) => Some(s),
            Value::Integer(v) => Some(v.to_string()),
            Value::Real(v) => Some(v.to_string()),
            Value::Blob(b) => String::from_utf8(b).ok(),
        }
    }

    pub fn double<R: RowSource + ?Sized>(self, row: &R) -> f64 {
        match row.value(self.name()) {
            Some(Value::Real(v)) => v,
            Some(Value::Integer(v)) => v as f64,
            Some(Value::Text(s)) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    pub fn blob<R: RowSource + ?Sized>(self, row: &R) -> Option<Vec<u8>> {
        match row.value(self.name())? {
            Value::Blob(b) => Some(b),
            Value::Text(s) => Some(s.into_bytes()),
            _ => None,
        }
    }
}
