//! Per-chat aggregate returned by MessageRepository::chats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use whassup_core::{DIRECT_DOMAIN, GROUP_DOMAIN};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSummary {
    pub chat_key: String,
    pub message_count: i64,
    /// Epoch milliseconds of the newest message.
    pub last_timestamp_millis: i64,
}

impl ChatSummary {
    pub fn is_group(&self) -> bool {
        self.chat_key.ends_with(GROUP_DOMAIN)
    }

    pub fn is_direct(&self) -> bool {
        self.chat_key.ends_with(DIRECT_DOMAIN)
    }

    pub fn last_activity(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.last_timestamp_millis)
    }
}
