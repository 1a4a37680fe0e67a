use async_trait::async_trait;
use renewly_models::chrono::Utc;
use renewly_models::renewal::RenewalId;
use renewly_models::reminder_log::{ReminderLog, ReminderLogId};
use tokio::sync::RwLock;

use super::MemoryStorageError;
use crate::reminder_log::{NewReminderLog, ReminderLogStorage};

struct ReminderLogStore {
    next_id: ReminderLogId,
    logs: Vec<ReminderLog>,
}

pub struct InMemoryReminderLogStorage {
    store: RwLock<ReminderLogStore>,
}

impl InMemoryReminderLogStorage {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(ReminderLogStore {
                next_id: 1,
                logs: Vec::new(),
            }),
        }
    }
}

impl Default for InMemoryReminderLogStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReminderLogStorage for InMemoryReminderLogStorage {
    type Error = MemoryStorageError;

    async fn append(&self, log: NewReminderLog) -> Result<ReminderLog, Self::Error> {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id += 1;

        let entry = ReminderLog {
            id,
            renewal_id: log.renewal_id,
            channel: log.channel,
            sent_at: log.sent_at.unwrap_or_else(Utc::now),
            delivered: log.delivered,
            notes: log.notes,
        };
        store.logs.push(entry.clone());
        Ok(entry)
    }

    async fn list_for_renewal(
        &self,
        renewal_id: RenewalId,
    ) -> Result<Vec<ReminderLog>, Self::Error> {
        let store = self.store.read().await;
        Ok(store
            .logs
            .iter()
            .filter(|log| log.renewal_id == renewal_id)
            .cloned()
            .collect())
    }
}
