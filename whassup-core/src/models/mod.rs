//! Decoded message models: [`MessageRecord`] and its owned [`Media`] and [`Receipt`].

mod media;
mod message_record;
mod receipt;
mod status;

#[cfg(test)]
mod message_record_test;

use chrono::{DateTime, Utc};

pub use media::Media;
pub use message_record::{MessageRecord, MessageRecordBuilder};
pub use receipt::Receipt;
pub use status::{GroupEvent, MessageStatus};

/// Epoch milliseconds to UTC, saturating at chrono's range so ordering is preserved.
pub(crate) fn datetime_from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or(if millis < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}
