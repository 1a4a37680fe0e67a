use std::sync::Arc;

use renewly_models::actor::Actor;
use renewly_models::chrono::NaiveDate;
use renewly_models::renewal::{Renewal, RenewalId, RenewalStatus};
use renewly_models::renewal_log::RenewalAction;
use thiserror::Error;

use crate::renewal::{NewRenewal, RenewalStorage};
use crate::renewal_log::{NewRenewalLog, RenewalLogStorage};

#[derive(Debug, Error)]
pub enum RenewalServiceError {
    #[error("end date must be after start date")]
    EndDateNotAfterStart,
    #[error("reminder offset must be at least one day")]
    InvalidReminderOffset,
    #[error("cost must not be negative")]
    NegativeCost,
    #[error("renewal {0} does not exist")]
    MissingRenewal(RenewalId),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Mutation layer over the renewal storage. Every successful write appends a
/// lifecycle entry to the audit sink, attributed to the supplied actor.
pub struct RenewalService<R, A> {
    renewals: Arc<R>,
    audit: Arc<A>,
}

impl<R, A> RenewalService<R, A>
where
    R: RenewalStorage,
    A: RenewalLogStorage,
{
    pub fn new(renewals: Arc<R>, audit: Arc<A>) -> Self {
        Self { renewals, audit }
    }

    pub async fn create(
        &self,
        new_renewal: NewRenewal,
        actor: Actor,
    ) -> Result<Renewal, RenewalServiceError> {
        validate(
            new_renewal.start_date,
            new_renewal.end_date,
            new_renewal.reminder_days_before,
            new_renewal.cost,
        )?;

        let renewal = self
            .renewals
            .insert(new_renewal)
            .await
            .map_err(anyhow::Error::new)?;
        self.log(
            renewal.id,
            RenewalAction::Created,
            actor,
            Some("Renewal created"),
        )
        .await?;
        Ok(renewal)
    }

    pub async fn update(
        &self,
        renewal: Renewal,
        actor: Actor,
    ) -> Result<Renewal, RenewalServiceError> {
        validate(
            renewal.start_date,
            renewal.end_date,
            renewal.reminder_days_before,
            renewal.cost,
        )?;

        let renewal = self
            .renewals
            .update(renewal)
            .await
            .map_err(anyhow::Error::new)?;
        self.log(
            renewal.id,
            RenewalAction::Updated,
            actor,
            Some("Renewal updated"),
        )
        .await?;
        Ok(renewal)
    }

    pub async fn update_status(
        &self,
        id: RenewalId,
        status: RenewalStatus,
        actor: Actor,
    ) -> Result<Renewal, RenewalServiceError> {
        let mut renewal = self
            .renewals
            .get(id)
            .await
            .map_err(anyhow::Error::new)?
            .ok_or(RenewalServiceError::MissingRenewal(id))?;

        renewal.status = status;
        let renewal = self
            .renewals
            .update(renewal)
            .await
            .map_err(anyhow::Error::new)?;
        self.log(id, RenewalAction::StatusUpdated(status), actor, None)
            .await?;
        Ok(renewal)
    }

    pub async fn delete(&self, id: RenewalId, actor: Actor) -> Result<(), RenewalServiceError> {
        if self
            .renewals
            .get(id)
            .await
            .map_err(anyhow::Error::new)?
            .is_none()
        {
            return Err(RenewalServiceError::MissingRenewal(id));
        }

        self.renewals.delete(id).await.map_err(anyhow::Error::new)?;
        self.log(id, RenewalAction::Deleted, actor, Some("Renewal deleted"))
            .await?;
        Ok(())
    }

    async fn log(
        &self,
        renewal_id: RenewalId,
        action: RenewalAction,
        actor: Actor,
        notes: Option<&str>,
    ) -> Result<(), RenewalServiceError> {
        self.audit
            .append(NewRenewalLog {
                renewal_id,
                action,
                created_by: actor,
                notes: notes.map(str::to_owned),
            })
            .await
            .map_err(anyhow::Error::new)?;
        Ok(())
    }
}

fn validate(
    start_date: NaiveDate,
    end_date: NaiveDate,
    reminder_days_before: Option<u32>,
    cost: Option<f64>,
) -> Result<(), RenewalServiceError> {
    if end_date <= start_date {
        return Err(RenewalServiceError::EndDateNotAfterStart);
    }
    if reminder_days_before == Some(0) {
        return Err(RenewalServiceError::InvalidReminderOffset);
    }
    if cost.is_some_and(|cost| cost < 0.0) {
        return Err(RenewalServiceError::NegativeCost);
    }
    Ok(())
}
