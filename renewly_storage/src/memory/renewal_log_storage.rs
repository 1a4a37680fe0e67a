use async_trait::async_trait;
use renewly_models::chrono::Utc;
use renewly_models::renewal::RenewalId;
use renewly_models::renewal_log::{RenewalLog, RenewalLogId};
use tokio::sync::RwLock;

use super::MemoryStorageError;
use crate::renewal_log::{NewRenewalLog, RenewalLogStorage};

struct RenewalLogStore {
    next_id: RenewalLogId,
    logs: Vec<RenewalLog>,
}

pub struct InMemoryRenewalLogStorage {
    store: RwLock<RenewalLogStore>,
}

impl InMemoryRenewalLogStorage {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(RenewalLogStore {
                next_id: 1,
                logs: Vec::new(),
            }),
        }
    }
}

impl Default for InMemoryRenewalLogStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RenewalLogStorage for InMemoryRenewalLogStorage {
    type Error = MemoryStorageError;

    async fn append(&self, log: NewRenewalLog) -> Result<RenewalLog, Self::Error> {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id += 1;

        let entry = RenewalLog {
            id,
            renewal_id: log.renewal_id,
            action: log.action,
            date: Utc::now(),
            created_by: log.created_by,
            notes: log.notes,
        };
        store.logs.push(entry.clone());
        Ok(entry)
    }

    async fn list_for_renewal(&self, renewal_id: RenewalId) -> Result<Vec<RenewalLog>, Self::Error> {
        let store = self.store.read().await;
        Ok(store
            .logs
            .iter()
            .filter(|log| log.renewal_id == renewal_id)
            .cloned()
            .collect())
    }
}
