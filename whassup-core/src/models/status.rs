//! Interpretation of the `status` column and of `media_size` on group events.

use serde::{Deserialize, Serialize};

/// Value of the `status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageStatus {
    /// Received, or still pending delivery to the server.
    Received,
    /// Sent without confirmed reception. Group messages stay here.
    SentUnconfirmed,
    /// Sent and confirmed (direct chats only).
    SentConfirmed,
    /// Group creation, join, leave, rename, icon change; see [`GroupEvent`].
    GroupEvent,
    Other(i32),
}

impl From<i32> for MessageStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => MessageStatus::Received,
            4 => MessageStatus::SentUnconfirmed,
            5 => MessageStatus::SentConfirmed,
            6 => MessageStatus::GroupEvent,
            other => MessageStatus::Other(other),
        }
    }
}

/// Kind of group event, read from `media_size` when the status is [`MessageStatus::GroupEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupEvent {
    Text,
    /// Also written on group creation; `data` holds the new name.
    NameChange,
    Joined,
    Left,
    IconChange,
    Removed,
    Unknown(i64),
}

impl From<i64> for GroupEvent {
    fn from(code: i64) -> Self {
        match code {
            0 => GroupEvent::Text,
            1 => GroupEvent::NameChange,
            4 => GroupEvent::Joined,
            5 => GroupEvent::Left,
            6 => GroupEvent::IconChange,
            7 => GroupEvent::Removed,
            other => GroupEvent::Unknown(other),
        }
    }
}
