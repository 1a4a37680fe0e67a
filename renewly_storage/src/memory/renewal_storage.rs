use std::collections::BTreeMap;

use async_trait::async_trait;
use renewly_models::chrono::NaiveDate;
use renewly_models::renewal::{Renewal, RenewalId, RenewalStatus};
use tokio::sync::RwLock;

use super::MemoryStorageError;
use crate::renewal::{NewRenewal, RenewalStorage};

struct RenewalStore {
    next_id: RenewalId,
    renewals: BTreeMap<RenewalId, Renewal>,
}

pub struct InMemoryRenewalStorage {
    store: RwLock<RenewalStore>,
}

impl InMemoryRenewalStorage {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(RenewalStore {
                next_id: 1,
                renewals: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryRenewalStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RenewalStorage for InMemoryRenewalStorage {
    type Error = MemoryStorageError;

    async fn get(&self, id: RenewalId) -> Result<Option<Renewal>, Self::Error> {
        let store = self.store.read().await;
        Ok(store.renewals.get(&id).cloned())
    }

    async fn list_candidates(
        &self,
        exclude: &[RenewalStatus],
        expiring_after: NaiveDate,
    ) -> Result<Vec<Renewal>, Self::Error> {
        let store = self.store.read().await;
        Ok(store
            .renewals
            .values()
            .filter(|r| !exclude.contains(&r.status) && r.end_date > expiring_after)
            .cloned()
            .collect())
    }

    async fn insert(&self, renewal: NewRenewal) -> Result<Renewal, Self::Error> {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id += 1;

        let renewal = Renewal {
            id,
            user_id: renewal.user_id,
            item_name: renewal.item_name,
            category: renewal.category,
            vendor: renewal.vendor,
            start_date: renewal.start_date,
            end_date: renewal.end_date,
            reminder_days_before: renewal.reminder_days_before,
            status: RenewalStatus::Active,
            notes: renewal.notes,
            cost: renewal.cost,
        };
        store.renewals.insert(id, renewal.clone());
        Ok(renewal)
    }

    async fn update(&self, renewal: Renewal) -> Result<Renewal, Self::Error> {
        let mut store = self.store.write().await;
        if !store.renewals.contains_key(&renewal.id) {
            return Err(MemoryStorageError::MissingRenewal(renewal.id));
        }
        store.renewals.insert(renewal.id, renewal.clone());
        Ok(renewal)
    }

    async fn delete(&self, id: RenewalId) -> Result<(), Self::Error> {
        let mut store = self.store.write().await;
        store
            .renewals
            .remove(&id)
            .map(|_| ())
            .ok_or(MemoryStorageError::MissingRenewal(id))
    }
}

#[cfg(test)]
mod tests {
    use renewly_models::chrono::NaiveDate;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_renewal(end_date: NaiveDate) -> NewRenewal {
        NewRenewal {
            user_id: 1,
            item_name: "Widget Plan".to_owned(),
            category: "software".to_owned(),
            vendor: None,
            start_date: date(2025, 1, 1),
            end_date,
            reminder_days_before: None,
            notes: None,
            cost: None,
        }
    }

    #[tokio::test]
    async fn candidates_exclude_status_and_expired() {
        let storage = InMemoryRenewalStorage::new();
        let today = date(2025, 6, 8);

        let upcoming = storage.insert(new_renewal(date(2025, 6, 15))).await.unwrap();
        let expired = storage.insert(new_renewal(date(2025, 6, 1))).await.unwrap();
        let mut cancelled = storage.insert(new_renewal(date(2025, 7, 1))).await.unwrap();
        cancelled.status = RenewalStatus::Cancelled;
        storage.update(cancelled).await.unwrap();

        let candidates = storage
            .list_candidates(&[RenewalStatus::Cancelled], today)
            .await
            .unwrap();

        let ids: Vec<_> = candidates.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![upcoming.id]);
        assert!(!ids.contains(&expired.id));
    }

    #[tokio::test]
    async fn update_of_missing_renewal_fails() {
        let storage = InMemoryRenewalStorage::new();
        let mut renewal = storage.insert(new_renewal(date(2025, 6, 15))).await.unwrap();
        renewal.id = 42;

        let err = storage.update(renewal).await.unwrap_err();
        assert!(matches!(err, MemoryStorageError::MissingRenewal(42)));
    }
}
