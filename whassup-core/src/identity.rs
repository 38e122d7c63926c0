//! Identity derivation for message records.
//!
//! Chat keys (`key_remote_jid`) look like
//! - `49157712345@s.whatsapp.net` for a direct chat (`<counterparty>@s.whatsapp.net`)
//! - `49157712345-1369779058@g.us` for a group (`<creator>-<group id>@g.us`)
//!
//! `remote_resource` names the author of inbound group messages (`<number>@s.whatsapp.net`).
//! Rows written before March 9th 2011 may carry a client platform id there instead
//! (`iPhone-2.6.2-443`, `BB-2.4.8693-443`).
//!
//! Two rule sets exist in the history of this data. [`IdentityPolicy::Current`] is the
//! default; [`IdentityPolicy::Legacy`] reproduces the older derivation for callers that
//! stored its results.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::MessageRecord;

pub const GROUP_DOMAIN: &str = "g.us";
pub const DIRECT_DOMAIN: &str = "s.whatsapp.net";

/// A message participant: the local account or a remote party id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Identity {
    /// The account that owns the database.
    Own,
    /// A remote party id, usually a phone number.
    Party(String),
}

impl Identity {
    /// The party id, `None` for [`Identity::Own`].
    pub fn number(&self) -> Option<&str> {
        match self {
            Identity::Own => None,
            Identity::Party(id) => Some(id),
        }
    }

    pub fn is_own(&self) -> bool {
        matches!(self, Identity::Own)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Own => f.write_str("me"),
            Identity::Party(id) => f.write_str(id),
        }
    }
}

/// Rule set used to derive numbers and senders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentityPolicy {
    /// `number` only for direct chats with a numeric id; outbound messages are always sent
    /// by [`Identity::Own`].
    #[default]
    Current,
    /// `number` is the chat id for any chat; a non-empty sender resource is honoured
    /// on outbound rows too.
    Legacy,
}

impl IdentityPolicy {
    /// Numeric party id of a direct chat. Legacy returns the chat id of any chat as stored.
    pub fn number(self, record: &MessageRecord) -> Option<String> {
        let chat_id = record.chat_id()?;
        match self {
            IdentityPolicy::Current if !record.is_direct_message() || !is_digits_only(chat_id) => {
                None
            }
            _ => Some(chat_id.to_string()),
        }
    }

    /// Chat owner: the counterparty of a direct chat, the creator of a group.
    pub fn owner_id(self, record: &MessageRecord) -> Option<String> {
        let chat_id = record.chat_id()?;
        if record.is_group_message() {
            Some(chat_id.split('-').next().unwrap_or(chat_id).to_string())
        } else {
            Some(chat_id.to_string())
        }
    }

    /// Who wrote the message. `None` means it cannot be determined from this row.
    pub fn sender(self, record: &MessageRecord) -> Option<Identity> {
        let chat_id = record.chat_id()?;
        match self {
            IdentityPolicy::Current => {
                if !record.is_received() {
                    return Some(Identity::Own);
                }
                if record.is_group_message() {
                    let resource = record.sender_resource()?;
                    Some(party_from_resource(resource, chat_id))
                } else if is_digits_only(chat_id) {
                    Some(Identity::Party(chat_id.to_string()))
                } else {
                    None
                }
            }
            IdentityPolicy::Legacy => match record.sender_resource() {
                Some(resource) => Some(party_from_resource(resource, chat_id)),
                None if record.is_received() => Some(Identity::Party(chat_id.to_string())),
                None => Some(Identity::Own),
            },
        }
    }

    /// Owner plus [`Identity::Own`], minus the sender. Other group members are not
    /// recorded in the messages table, so groups yield a partial set.
    pub fn recipients(self, record: &MessageRecord) -> Option<BTreeSet<Identity>> {
        let owner = self.owner_id(record)?;
        let mut recipients = BTreeSet::from([Identity::Party(owner), Identity::Own]);
        if let Some(sender) = self.sender(record) {
            recipients.remove(&sender);
        }
        Some(recipients)
    }
}

fn party_from_resource(resource: &str, chat_id: &str) -> Identity {
    let candidate = local_part(resource);
    if is_digits_only(candidate) {
        Identity::Party(candidate.to_string())
    } else {
        debug!(resource, chat_id, "legacy sender resource, using chat key");
        Identity::Party(chat_id.to_string())
    }
}

/// Segment before the first `@`, or the whole string when there is none.
pub fn local_part(jid: &str) -> &str {
    jid.split_once('@').map_or(jid, |(local, _)| local)
}

pub fn is_digits_only(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
