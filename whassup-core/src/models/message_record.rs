//! Decoded row of the WhatsApp `messages` table.
//!
//! A record is built once, from a [`RowSource`] or a [`MessageRecordBuilder`], and never
//! changes afterwards. Everything beyond the stored columns (direction, chat kind, sender,
//! recipients) is derived on access.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{datetime_from_millis, GroupEvent, Media, MessageStatus, Receipt};
use crate::columns::Column;
use crate::error::{Result, WhassupError};
use crate::identity::{Identity, IdentityPolicy, DIRECT_DOMAIN, GROUP_DOMAIN};
use crate::probe::FileProbe;
use crate::row::RowSource;
use crate::text::filter_private_use;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredRecord")]
pub struct MessageRecord {
    id: i64,
    /// `key_remote_jid`: `<party>@s.whatsapp.net` or `<creator>-<group id>@g.us`.
    chat_key: Option<String>,
    /// `key_from_me`; always set on group events.
    from_self: bool,
    /// `key_id`, opaque.
    internal_key: Option<String>,
    status: i32,
    /// `media_size`: a byte count, or the [`GroupEvent`] code when status is 6.
    media_size_or_event_code: i64,
    needs_push: i32,
    text: Option<String>,
    timestamp_millis: i64,
    latitude: f64,
    longitude: f64,
    /// `remote_resource`: author of inbound group messages.
    sender_resource: Option<String>,
    recipient_count: i32,
    origin: i32,
    media: Media,
    receipt: Receipt,
}

impl MessageRecord {
    pub fn builder() -> MessageRecordBuilder {
        MessageRecordBuilder::default()
    }

    /// Decodes one row. Missing columns fall back to zero or `None`; this never fails.
    pub fn from_row<R: RowSource + ?Sized>(row: &R) -> Self {
        MessageRecordBuilder {
            record: MessageRecord {
                id: Column::Id.long(row),
                chat_key: Column::KeyRemoteJid.string(row),
                from_self: Column::KeyFromMe.long(row) != 0,
                internal_key: Column::KeyId.string(row),
                status: Column::Status.int(row),
                media_size_or_event_code: Column::MediaSize.long(row),
                needs_push: Column::NeedsPush.int(row),
                text: Column::Data.string(row),
                timestamp_millis: Column::Timestamp.long(row),
                latitude: Column::Latitude.double(row),
                longitude: Column::Longitude.double(row),
                sender_resource: Column::RemoteResource.string(row),
                recipient_count: Column::RecipientCount.int(row),
                origin: Column::Origin.int(row),
                media: Media::from_row(row),
                receipt: Receipt::from_row(row),
            },
        }
        .build()
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn chat_key(&self) -> Option<&str> {
        self.chat_key.as_deref()
    }

    pub fn is_from_self(&self) -> bool {
        self.from_self
    }

    pub fn internal_key(&self) -> Option<&str> {
        self.internal_key.as_deref()
    }

    pub fn status(&self) -> i32 {
        self.status
    }

    pub fn media_size_or_event_code(&self) -> i64 {
        self.media_size_or_event_code
    }

    pub fn needs_push(&self) -> i32 {
        self.needs_push
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp_millis
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn sender_resource(&self) -> Option<&str> {
        self.sender_resource.as_deref()
    }

    pub fn recipient_count(&self) -> i32 {
        self.recipient_count
    }

    pub fn origin(&self) -> i32 {
        self.origin
    }

    pub fn media(&self) -> &Media {
        &self.media
    }

    pub fn receipt(&self) -> &Receipt {
        &self.receipt
    }

    pub fn is_received(&self) -> bool {
        !self.from_self
    }

    pub fn is_direct_message(&self) -> bool {
        self.chat_key
            .as_deref()
            .is_some_and(|key| key.ends_with(DIRECT_DOMAIN))
    }

    pub fn is_group_message(&self) -> bool {
        self.chat_key
            .as_deref()
            .is_some_and(|key| key.ends_with(GROUP_DOMAIN))
    }

    /// Party or group segment of the chat key; `None` when the key is absent or has no `@`.
    pub fn chat_id(&self) -> Option<&str> {
        self.chat_key
            .as_deref()
            .and_then(|key| key.split_once('@'))
            .map(|(id, _)| id)
    }

    /// Counterparty number of a direct chat; `None` for groups and malformed keys.
    pub fn number(&self) -> Option<String> {
        IdentityPolicy::Current.number(self)
    }

    pub fn number_with(&self, policy: IdentityPolicy) -> Option<String> {
        policy.number(self)
    }

    /// Direct chat counterparty, or the group creator's number.
    pub fn owner_id(&self) -> Option<String> {
        IdentityPolicy::Current.owner_id(self)
    }

    /// Author of the message: [`Identity::Own`] for outbound messages, the remote party
    /// otherwise, `None` when the row does not say.
    pub fn sender(&self) -> Option<Identity> {
        IdentityPolicy::Current.sender(self)
    }

    pub fn sender_with(&self, policy: IdentityPolicy) -> Option<Identity> {
        policy.sender(self)
    }

    /// Sender's number; `None` for outbound messages and undeterminable senders.
    pub fn sender_number(&self) -> Option<String> {
        match self.sender()? {
            Identity::Party(number) => Some(number),
            Identity::Own => None,
        }
    }

    /// Best-effort recipients; see [`IdentityPolicy::recipients`].
    pub fn recipients(&self) -> Option<BTreeSet<Identity>> {
        IdentityPolicy::Current.recipients(self)
    }

    /// Full recipient list. Group membership lives outside the messages table, so this
    /// is not available.
    pub fn receivers_numbers(&self) -> Result<Vec<String>> {
        Err(WhassupError::Unsupported(
            "group membership is not stored in the messages table".to_string(),
        ))
    }

    /// Text without Private Use Area glyphs.
    pub fn filtered_text(&self) -> Option<Cow<'_, str>> {
        self.text.as_deref().map(filter_private_use)
    }

    pub fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn has_media_attached<P: FileProbe + ?Sized>(&self, probe: &P) -> bool {
        self.media
            .file()
            .is_some_and(|path| probe.is_readable_file(&path))
    }

    /// Message time; the column holds epoch milliseconds.
    pub fn timestamp(&self) -> DateTime<Utc> {
        datetime_from_millis(self.timestamp_millis)
    }

    pub fn message_status(&self) -> MessageStatus {
        MessageStatus::from(self.status)
    }

    pub fn is_group_event(&self) -> bool {
        self.message_status() == MessageStatus::GroupEvent
    }

    pub fn group_event(&self) -> Option<GroupEvent> {
        self.is_group_event()
            .then(|| GroupEvent::from(self.media_size_or_event_code))
    }

    /// Media byte count; `None` on group events where the column holds an event code.
    pub fn media_size(&self) -> Option<i64> {
        (!self.is_group_event()).then_some(self.media_size_or_event_code)
    }

    /// Shared location as (latitude, longitude).
    pub fn location(&self) -> Option<(f64, f64)> {
        (self.latitude != 0.0 || self.longitude != 0.0).then_some((self.latitude, self.longitude))
    }
}

impl fmt::Display for MessageRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Message{{number='{}', text='{}', timestamp={}, media={}}}",
            self.number().unwrap_or_default(),
            self.text.as_deref().unwrap_or(""),
            self.timestamp().to_rfc3339(),
            self.media
        )
    }
}

/// Serialized form of a [`MessageRecord`]. Deserialized records are finished by
/// [`MessageRecordBuilder::build`] like decoded ones.
#[derive(Deserialize)]
struct StoredRecord {
    id: i64,
    chat_key: Option<String>,
    from_self: bool,
    internal_key: Option<String>,
    status: i32,
    media_size_or_event_code: i64,
    needs_push: i32,
    text: Option<String>,
    timestamp_millis: i64,
    latitude: f64,
    longitude: f64,
    sender_resource: Option<String>,
    recipient_count: i32,
    origin: i32,
    media: Media,
    receipt: Receipt,
}

impl From<StoredRecord> for MessageRecord {
    fn from(stored: StoredRecord) -> Self {
        MessageRecordBuilder {
            record: MessageRecord {
                id: stored.id,
                chat_key: stored.chat_key,
                from_self: stored.from_self,
                internal_key: stored.internal_key,
                status: stored.status,
                media_size_or_event_code: stored.media_size_or_event_code,
                needs_push: stored.needs_push,
                text: stored.text,
                timestamp_millis: stored.timestamp_millis,
                latitude: stored.latitude,
                longitude: stored.longitude,
                sender_resource: stored.sender_resource,
                recipient_count: stored.recipient_count,
                origin: stored.origin,
                media: stored.media,
                receipt: stored.receipt,
            },
        }
        .build()
    }
}

/// Builds a [`MessageRecord`] field by field.
#[derive(Debug, Clone, Default)]
pub struct MessageRecordBuilder {
    record: MessageRecord,
}

impl MessageRecordBuilder {
    pub fn id(mut self, id: i64) -> Self {
        self.record.id = id;
        self
    }

    pub fn chat_key(mut self, chat_key: impl Into<String>) -> Self {
        self.record.chat_key = Some(chat_key.into());
        self
    }

    pub fn from_self(mut self, from_self: bool) -> Self {
        self.record.from_self = from_self;
        self
    }

    pub fn internal_key(mut self, internal_key: impl Into<String>) -> Self {
        self.record.internal_key = Some(internal_key.into());
        self
    }

    pub fn status(mut self, status: i32) -> Self {
        self.record.status = status;
        self
    }

    pub fn media_size_or_event_code(mut self, value: i64) -> Self {
        self.record.media_size_or_event_code = value;
        self
    }

    pub fn needs_push(mut self, needs_push: i32) -> Self {
        self.record.needs_push = needs_push;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.record.text = Some(text.into());
        self
    }

    pub fn timestamp_millis(mut self, timestamp_millis: i64) -> Self {
        self.record.timestamp_millis = timestamp_millis;
        self
    }

    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.record.latitude = latitude;
        self.record.longitude = longitude;
        self
    }

    pub fn sender_resource(mut self, sender_resource: impl Into<String>) -> Self {
        self.record.sender_resource = Some(sender_resource.into());
        self
    }

    pub fn recipient_count(mut self, recipient_count: i32) -> Self {
        self.record.recipient_count = recipient_count;
        self
    }

    pub fn origin(mut self, origin: i32) -> Self {
        self.record.origin = origin;
        self
    }

    pub fn media(mut self, media: Media) -> Self {
        self.record.media = media;
        self
    }

    pub fn receipt(mut self, receipt: Receipt) -> Self {
        self.record.receipt = receipt;
        self
    }

    /// Finishes the record. Empty chat keys and sender resources become absent.
    pub fn build(self) -> MessageRecord {
        let mut record = self.record;
        record.chat_key = record.chat_key.filter(|k| !k.is_empty());
        record.sender_resource = record.sender_resource.filter(|r| !r.is_empty());
        record
    }
}
