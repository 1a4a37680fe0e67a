use async_trait::async_trait;
use renewly_models::chrono::NaiveDate;
use renewly_models::renewal::{Renewal, RenewalId, RenewalStatus};
use renewly_models::user::UserId;

pub struct NewRenewal {
    pub user_id: UserId,
    pub item_name: String,
    pub category: String,
    pub vendor: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reminder_days_before: Option<u32>,
    pub notes: Option<String>,
    pub cost: Option<f64>,
}

#[async_trait]
pub trait RenewalStorage: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn get(&self, id: RenewalId) -> Result<Option<Renewal>, Self::Error>;

    /// Renewals eligible for reminder evaluation: status not in `exclude`
    /// and `end_date` strictly after `expiring_after`.
    async fn list_candidates(
        &self,
        exclude: &[RenewalStatus],
        expiring_after: NaiveDate,
    ) -> Result<Vec<Renewal>, Self::Error>;

    async fn insert(&self, renewal: NewRenewal) -> Result<Renewal, Self::Error>;
    async fn update(&self, renewal: Renewal) -> Result<Renewal, Self::Error>;
    async fn delete(&self, id: RenewalId) -> Result<(), Self::Error>;
}
