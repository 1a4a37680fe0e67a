use async_trait::async_trait;
use renewly_models::chrono::{DateTime, Utc};
use renewly_models::renewal::RenewalId;
use renewly_models::reminder_log::{Channel, ReminderLog};

pub struct NewReminderLog {
    pub renewal_id: RenewalId,
    pub channel: Channel,
    /// Assigned by the sink when absent.
    pub sent_at: Option<DateTime<Utc>>,
    pub delivered: bool,
    pub notes: String,
}

#[async_trait]
pub trait ReminderLogStorage: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn append(&self, log: NewReminderLog) -> Result<ReminderLog, Self::Error>;
    async fn list_for_renewal(&self, renewal_id: RenewalId)
    -> Result<Vec<ReminderLog>, Self::Error>;
}
