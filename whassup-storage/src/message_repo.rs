//! Message repository: read-only queries over a WhatsApp `msgstore.db`.
//!
//! Rows are decoded through [`SqliteRow`] into [`MessageRecord`]s. The database is never
//! written; opening a path uses `SQLITE_OPEN_READ_ONLY`.

use std::path::Path;

use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Params};
use tracing::info;
use whassup_core::{sort_chronologically, MessageRecord};

use crate::error::{Result, StorageError};
use crate::models::ChatSummary;
use crate::sqlite_row::SqliteRow;

const MESSAGES_TABLE: &str = "messages";

pub struct MessageRepository {
    conn: Connection,
}

impl MessageRepository {
    /// Opens the database at `path` read-only and checks that it has a `messages` table.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening message store read-only: {}", path.display());

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Self::from_connection(conn)
    }

    /// Wraps an already open connection, e.g. an in-memory fixture.
    pub fn from_connection(conn: Connection) -> Result<Self> {
        let exists: Option<String> = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [MESSAGES_TABLE],
                |row| row.get(0),
            )
            .optional()?;
        if exists.is_none() {
            return Err(StorageError::MissingTable(MESSAGES_TABLE.to_string()));
        }
        Ok(Self { conn })
    }

    fn query_records<P: Params>(&self, sql: &str, params: P) -> Result<Vec<MessageRecord>> {
        let mut stmt = self.conn.prepare(sql)?;
        let records = stmt
            .query_map(params, |row| Ok(MessageRecord::from_row(&SqliteRow::new(row))))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Chats with at least one message, most recently active first.
    /// Rows without a `<party>@<domain>` key (such as the `-1` bookkeeping row) are skipped.
    pub fn chats(&self) -> Result<Vec<ChatSummary>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT key_remote_jid, COUNT(*), MAX(timestamp)
            FROM messages
            WHERE key_remote_jid LIKE '%@%'
            GROUP BY key_remote_jid
            ORDER BY MAX(timestamp) DESC
            "#,
        )?;
        let chats = stmt
            .query_map([], |row| {
                Ok(ChatSummary {
                    chat_key: row.get(0)?,
                    message_count: row.get(1)?,
                    last_timestamp_millis: row.get::<_, Option<i64>>(2)?.unwrap_or(0),
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        info!("Found {} chats", chats.len());
        Ok(chats)
    }

    /// Latest `limit` messages of one chat (all when `None`), oldest first; ties keep `_id` order.
    pub fn messages_for_chat(&self, chat_key: &str, limit: Option<u32>) -> Result<Vec<MessageRecord>> {
        let mut records = self.query_records(
            "SELECT * FROM messages WHERE key_remote_jid = ?1 ORDER BY timestamp DESC, _id DESC LIMIT ?2",
            params![chat_key, limit.map_or(-1, i64::from)],
        )?;
        records.reverse();
        sort_chronologically(&mut records);

        info!(
            "Retrieved {} messages for chat {}",
            records.len(),
            chat_key
        );
        Ok(records)
    }

    /// Latest `limit` messages across all chats, oldest first; ties keep `_id` order.
    pub fn recent_messages(&self, limit: u32) -> Result<Vec<MessageRecord>> {
        let mut records = self.query_records(
            "SELECT * FROM messages WHERE key_remote_jid LIKE '%@%' ORDER BY timestamp DESC, _id DESC LIMIT ?1",
            [i64::from(limit)],
        )?;
        records.reverse();
        sort_chronologically(&mut records);

        info!("Retrieved {} recent messages", records.len());
        Ok(records)
    }

    pub fn message_by_id(&self, id: i64) -> Result<Option<MessageRecord>> {
        let record = self
            .conn
            .query_row("SELECT * FROM messages WHERE _id = ?1", [id], |row| {
                Ok(MessageRecord::from_row(&SqliteRow::new(row)))
            })
            .optional()?;
        Ok(record)
    }
}
