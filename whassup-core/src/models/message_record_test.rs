//! Unit tests for MessageRecord.
//!
//! Covers chat classification, number/sender derivation, recipients, text and timestamps.

use std::collections::BTreeSet;

use crate::identity::{Identity, IdentityPolicy};
use crate::models::{GroupEvent, MessageRecord, MessageStatus};
use crate::row::MapRow;
use crate::WhassupError;

const DIRECT: &str = "4915773981234@s.whatsapp.net";
const GROUP: &str = "4915773981234-1369779058@g.us";

#[test]
fn test_parse_timestamp() {
    let m = MessageRecord::builder()
        .timestamp_millis(1358086780000)
        .build();

    assert_eq!(m.timestamp().to_rfc3339(), "2013-01-13T14:19:40+00:00");
}

#[test]
fn test_timestamp_is_monotonic() {
    let stamps = [i64::MIN, -1, 0, 1, 1358086780000, 1358086780001, i64::MAX];
    let times: Vec<_> = stamps
        .iter()
        .map(|t| MessageRecord::builder().timestamp_millis(*t).build().timestamp())
        .collect();
    for pair in times.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn test_parse_number() {
    let m = MessageRecord::builder().chat_key(DIRECT).build();

    assert!(m.is_direct_message());
    assert!(!m.is_group_message());
    assert_eq!(m.chat_id(), Some("4915773981234"));
    assert_eq!(m.number().as_deref(), Some("4915773981234"));
}

#[test]
fn test_group_has_no_number() {
    let m = MessageRecord::builder().chat_key(GROUP).build();

    assert!(m.is_group_message());
    assert!(!m.is_direct_message());
    assert_eq!(m.chat_id(), Some("4915773981234-1369779058"));
    assert_eq!(m.number(), None);
    assert_eq!(m.owner_id().as_deref(), Some("4915773981234"));
}

#[test]
fn test_parse_number_with_invalid_key() {
    let m = MessageRecord::default();
    assert_eq!(m.number(), None);

    let m = MessageRecord::builder().chat_key("foobaz").build();
    assert_eq!(m.chat_id(), None);
    assert_eq!(m.number(), None);
    assert!(!m.is_direct_message());
    assert!(!m.is_group_message());
}

#[test]
fn test_empty_record() {
    let m = MessageRecord::default();

    assert_eq!(m.chat_id(), None);
    assert_eq!(m.number(), None);
    assert_eq!(m.sender(), None);
    assert_eq!(m.sender_number(), None);
    assert_eq!(m.recipients(), None);
    assert!(!m.has_text());
    assert!(m.is_received());
    assert!(m.media().is_empty());
    assert_eq!(m.filtered_text(), None);
}

#[test]
fn test_empty_strings_are_treated_as_absent() {
    let m = MessageRecord::builder()
        .chat_key("")
        .sender_resource("")
        .build();
    assert_eq!(m.chat_key(), None);
    assert_eq!(m.sender_resource(), None);
}

#[test]
fn test_sender_of_received_direct_message() {
    let m = MessageRecord::builder().chat_key(DIRECT).build();

    assert_eq!(m.sender(), Some(Identity::Party("4915773981234".to_string())));
    assert_eq!(m.sender_number().as_deref(), Some("4915773981234"));
}

#[test]
fn test_sender_of_received_direct_message_with_non_numeric_key() {
    let m = MessageRecord::builder()
        .chat_key("status@s.whatsapp.net")
        .build();
    assert_eq!(m.sender(), None);
}

#[test]
fn test_sender_of_received_group_message() {
    let m = MessageRecord::builder()
        .chat_key(GROUP)
        .sender_resource("4917012345678@s.whatsapp.net")
        .build();

    assert_eq!(m.sender_number().as_deref(), Some("4917012345678"));
}

#[test]
fn test_sender_of_group_message_without_resource() {
    let m = MessageRecord::builder().chat_key(GROUP).build();
    assert_eq!(m.sender(), None);
}

#[test]
fn test_sender_falls_back_to_chat_key_for_legacy_resource() {
    let m = MessageRecord::builder()
        .chat_key(GROUP)
        .sender_resource("BB-2.4.8693-443")
        .build();

    assert_eq!(m.sender_number().as_deref(), Some("4915773981234-1369779058"));
}

#[test]
fn test_sender_of_outbound_message_is_own() {
    let m = MessageRecord::builder().chat_key(DIRECT).from_self(true).build();

    assert_eq!(m.sender(), Some(Identity::Own));
    assert_eq!(m.sender_number(), None);
    assert!(!m.is_received());
}

#[test]
fn test_recipients_of_received_direct_message() {
    let m = MessageRecord::builder().chat_key(DIRECT).build();
    assert_eq!(m.recipients(), Some(BTreeSet::from([Identity::Own])));
}

#[test]
fn test_recipients_of_sent_direct_message() {
    let m = MessageRecord::builder().chat_key(DIRECT).from_self(true).build();
    assert_eq!(
        m.recipients(),
        Some(BTreeSet::from([Identity::Party("4915773981234".to_string())]))
    );
}

#[test]
fn test_recipients_of_received_group_message() {
    let m = MessageRecord::builder()
        .chat_key(GROUP)
        .sender_resource("4917012345678@s.whatsapp.net")
        .build();
    assert_eq!(
        m.recipients(),
        Some(BTreeSet::from([
            Identity::Own,
            Identity::Party("4915773981234".to_string()),
        ]))
    );
}

#[test]
fn test_receivers_numbers_is_unsupported() {
    let m = MessageRecord::builder().chat_key(GROUP).build();
    assert!(matches!(
        m.receivers_numbers(),
        Err(WhassupError::Unsupported(_))
    ));
}

#[test]
fn test_filtered_text() {
    let m = MessageRecord::builder().text("Hi \u{E415}\u{1F600}").build();

    assert!(m.has_text());
    assert_eq!(m.filtered_text().as_deref(), Some("Hi \u{1F600}"));
    assert_eq!(m.text(), Some("Hi \u{E415}\u{1F600}"));
}

#[test]
fn test_has_text_is_false_for_empty_text() {
    let m = MessageRecord::builder().text("").build();
    assert!(!m.has_text());
}

#[test]
fn test_group_event_classification() {
    let joined = MessageRecord::builder()
        .chat_key(GROUP)
        .from_self(true)
        .status(6)
        .media_size_or_event_code(4)
        .build();

    assert_eq!(joined.message_status(), MessageStatus::GroupEvent);
    assert_eq!(joined.group_event(), Some(GroupEvent::Joined));
    assert_eq!(joined.media_size(), None);

    let photo = MessageRecord::builder()
        .chat_key(DIRECT)
        .status(5)
        .media_size_or_event_code(48213)
        .build();

    assert_eq!(photo.group_event(), None);
    assert_eq!(photo.media_size(), Some(48213));
}

#[test]
fn test_location() {
    let m = MessageRecord::builder().location(52.52, 13.405).build();
    assert_eq!(m.location(), Some((52.52, 13.405)));
    assert_eq!(MessageRecord::default().location(), None);
}

#[test]
fn test_display() {
    let m = MessageRecord::builder()
        .chat_key(DIRECT)
        .text("hello")
        .timestamp_millis(1358086780000)
        .build();

    assert_eq!(
        m.to_string(),
        "Message{number='4915773981234', text='hello', timestamp=2013-01-13T14:19:40+00:00, \
         media=Media{url='', mime_type='', size=0, name=''}}"
    );
}

#[test]
fn test_non_numeric_direct_chat_has_no_number() {
    let m = MessageRecord::builder()
        .chat_key("status@s.whatsapp.net")
        .build();

    assert!(m.is_direct_message());
    assert_eq!(m.number(), None);
    assert_eq!(m.sender(), None);
    assert_eq!(
        m.number_with(IdentityPolicy::Legacy).as_deref(),
        Some("status")
    );
}

#[test]
fn test_from_self_reads_full_width_flag() {
    let m = MessageRecord::from_row(
        &MapRow::new()
            .with("key_remote_jid", DIRECT)
            .with("key_from_me", 1i64 << 32),
    );

    assert!(!m.is_received());
    assert_eq!(m.sender(), Some(Identity::Own));
}

#[test]
fn test_deserialized_record_is_normalized_like_built() {
    let built = MessageRecord::builder()
        .chat_key(GROUP)
        .sender_resource("")
        .build();
    let mut json = serde_json::to_value(&built).expect("serialize");
    json["sender_resource"] = serde_json::Value::from("");

    let restored: MessageRecord = serde_json::from_value(json).expect("deserialize");

    assert_eq!(restored.sender_resource(), None);
    assert_eq!(restored.sender(), None);
    assert_eq!(restored, built);
}
