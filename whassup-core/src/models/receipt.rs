//! Delivery receipt timestamps. No ordering between them is enforced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::datetime_from_millis;
use crate::columns::Column;
use crate::row::RowSource;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    received_timestamp: Option<i64>,
    send_timestamp: Option<i64>,
    server_timestamp: Option<i64>,
    device_timestamp: Option<i64>,
}

impl Receipt {
    pub fn new(
        received_timestamp: Option<i64>,
        send_timestamp: Option<i64>,
        server_timestamp: Option<i64>,
        device_timestamp: Option<i64>,
    ) -> Self {
        Self {
            received_timestamp,
            send_timestamp,
            server_timestamp,
            device_timestamp,
        }
    }

    pub fn from_row<R: RowSource + ?Sized>(row: &R) -> Self {
        Self {
            received_timestamp: Column::ReceivedTimestamp.opt_long(row),
            send_timestamp: Column::SendTimestamp.opt_long(row),
            server_timestamp: Column::ReceiptServerTimestamp.opt_long(row),
            device_timestamp: Column::ReceiptDeviceTimestamp.opt_long(row),
        }
    }

    pub fn received_timestamp(&self) -> Option<i64> {
        self.received_timestamp
    }

    pub fn send_timestamp(&self) -> Option<i64> {
        self.send_timestamp
    }

    pub fn server_timestamp(&self) -> Option<i64> {
        self.server_timestamp
    }

    pub fn device_timestamp(&self) -> Option<i64> {
        self.device_timestamp
    }

    // WhatsApp writes -1 or 0 until the event happens.
    pub fn received_at(&self) -> Option<DateTime<Utc>> {
        to_datetime(self.received_timestamp)
    }

    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        to_datetime(self.send_timestamp)
    }

    pub fn server_ack_at(&self) -> Option<DateTime<Utc>> {
        to_datetime(self.server_timestamp)
    }

    pub fn device_ack_at(&self) -> Option<DateTime<Utc>> {
        to_datetime(self.device_timestamp)
    }
}

fn to_datetime(millis: Option<i64>) -> Option<DateTime<Utc>> {
    millis.filter(|m| *m > 0).map(datetime_from_millis)
}
