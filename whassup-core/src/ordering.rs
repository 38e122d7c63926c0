//! Chronological ordering of message records.

use std::cmp::Ordering;

use crate::models::MessageRecord;

/// Orders by timestamp ascending. A missing record sorts after any present one;
/// two missing records are equal.
pub fn compare_by_timestamp(lhs: Option<&MessageRecord>, rhs: Option<&MessageRecord>) -> Ordering {
    match (lhs, rhs) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(l), Some(r)) => l.timestamp_millis().cmp(&r.timestamp_millis()),
    }
}

/// Stable sort into chat order.
pub fn sort_chronologically(records: &mut [MessageRecord]) {
    records.sort_by(|a, b| compare_by_timestamp(Some(a), Some(b)));
}

/// Stable sort into chat order with missing entries last.
pub fn sort_with_missing(records: &mut [Option<MessageRecord>]) {
    records.sort_by(|a, b| compare_by_timestamp(a.as_ref(), b.as_ref()));
}
