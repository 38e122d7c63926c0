//! # whassup-core
//!
//! Decodes rows of a WhatsApp `msgstore.db` `messages` table into [`MessageRecord`]s and
//! derives what the schema only implies: direction, direct vs group chat, sender and
//! owner identity, group events, media presence.
//!
//! ## Modules
//!
//! - [`row`] – [`RowSource`] contract and the in-memory [`MapRow`]
//! - [`columns`] – column names and typed accessors
//! - [`models`] – [`MessageRecord`], [`Media`], [`Receipt`], status codes
//! - [`identity`] – chat key parsing and [`IdentityPolicy`]
//! - [`text`] – Private Use Area filtering
//! - [`ordering`] – chronological comparator
//! - [`probe`] – [`FileProbe`] for media existence
//! - [`logger`] – tracing initialization

pub mod columns;
pub mod error;
pub mod identity;
pub mod logger;
pub mod models;
pub mod ordering;
pub mod probe;
pub mod row;
pub mod text;

pub use columns::Column;
pub use error::{Result, WhassupError};
pub use identity::{Identity, IdentityPolicy, DIRECT_DOMAIN, GROUP_DOMAIN};
pub use logger::init_tracing;
pub use models::{GroupEvent, Media, MessageRecord, MessageRecordBuilder, MessageStatus, Receipt};
pub use ordering::{compare_by_timestamp, sort_chronologically, sort_with_missing};
pub use probe::{FileProbe, FsProbe};
pub use row::{MapRow, RowSource, Value};
pub use text::filter_private_use;
