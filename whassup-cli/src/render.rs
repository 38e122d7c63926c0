//! Plain-text rendering of decoded records for the terminal.

use chrono::Local;
use whassup_core::{FileProbe, GroupEvent, Identity, MessageRecord};
use whassup_storage::ChatSummary;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn sender_label(record: &MessageRecord) -> String {
    match record.sender() {
        Some(Identity::Own) => "me".to_string(),
        Some(Identity::Party(number)) => number,
        None => "?".to_string(),
    }
}

/// Message body as shown: event description for group events, text otherwise.
pub fn body(record: &MessageRecord, raw: bool) -> String {
    let text = if raw {
        record.text().map(str::to_string)
    } else {
        record.filtered_text().map(|t| t.into_owned())
    }
    .unwrap_or_default();

    match record.group_event() {
        Some(GroupEvent::NameChange) => format!("* changed the subject to \"{}\"", text),
        Some(GroupEvent::Joined) => "* joined".to_string(),
        Some(GroupEvent::Left) => "* left".to_string(),
        Some(GroupEvent::IconChange) => "* changed the group icon".to_string(),
        Some(GroupEvent::Removed) => "* was removed".to_string(),
        Some(GroupEvent::Unknown(code)) => format!("* group event {}", code),
        Some(GroupEvent::Text) | None => text,
    }
}

/// One history line: local time, sender, body, and markers for media and location.
pub fn message_line<P: FileProbe + ?Sized>(record: &MessageRecord, probe: &P, raw: bool) -> String {
    let mut line = format!(
        "{}  {:<15}  {}",
        record.timestamp().with_timezone(&Local).format(TIME_FORMAT),
        sender_label(record),
        body(record, raw)
    );
    if record.has_media_attached(probe) {
        let kind = record.media().mime_type().unwrap_or("file");
        line.push_str(&format!(" [{}]", kind));
    } else if !record.media().is_empty() && record.media().file().is_some() {
        line.push_str(" [media missing]");
    }
    if let Some((lat, lon)) = record.location() {
        line.push_str(&format!(" [location {:.5},{:.5}]", lat, lon));
    }
    line
}

pub fn chat_line(chat: &ChatSummary) -> String {
    let kind = if chat.is_group() {
        "group"
    } else if chat.is_direct() {
        "direct"
    } else {
        "other"
    };
    let last = chat
        .last_activity()
        .map(|t| t.with_timezone(&Local).format(TIME_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:<40} {:<7} {:>7}  {}",
        chat.chat_key, kind, chat.message_count, last
    )
}
