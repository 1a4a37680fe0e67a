use async_trait::async_trait;
use renewly_models::actor::Actor;
use renewly_models::renewal::RenewalId;
use renewly_models::renewal_log::{RenewalAction, RenewalLog};

pub struct NewRenewalLog {
    pub renewal_id: RenewalId,
    pub action: RenewalAction,
    pub created_by: Actor,
    pub notes: Option<String>,
}

#[async_trait]
pub trait RenewalLogStorage: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn append(&self, log: NewRenewalLog) -> Result<RenewalLog, Self::Error>;
    async fn list_for_renewal(&self, renewal_id: RenewalId)
    -> Result<Vec<RenewalLog>, Self::Error>;
}
