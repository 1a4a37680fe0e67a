use chrono::{DateTime, Utc};

use crate::renewal::RenewalId;

pub type ReminderLogId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Email,
    Sms,
    InApp,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Email => "email",
            Channel::Sms => "sms",
            Channel::InApp => "in-app",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dispatch attempt on one channel. Append-only; never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderLog {
    pub id: ReminderLogId,
    pub renewal_id: RenewalId,
    pub channel: Channel,
    pub sent_at: DateTime<Utc>,
    pub delivered: bool,
    pub notes: String,
}
