use std::sync::Arc;

use renewly_models::chrono::NaiveDate;
use renewly_models::renewal::{RenewalId, RenewalStatus};
use renewly_models::reminder_log::ReminderLog;
use renewly_notify::{DispatchError, NotificationDispatcher};
use renewly_storage::reminder_log::ReminderLogStorage;
use renewly_storage::renewal::RenewalStorage;
use renewly_storage::user::UserStorage;
use thiserror::Error;

use crate::evaluator;

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("failed to list candidate renewals")]
    ListCandidates(#[source] anyhow::Error),
    #[error("failed to load renewal {0}")]
    LoadRenewal(RenewalId, #[source] anyhow::Error),
    #[error("renewal {0} does not exist")]
    MissingRenewal(RenewalId),
    #[error("failed to dispatch reminders for renewal {0}")]
    Dispatch(RenewalId, #[source] DispatchError),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Renewals for which a dispatch ran to completion.
    pub renewals_due: usize,
    /// Reminder logs successfully appended, including those committed before
    /// a mid-dispatch failure.
    pub logs_created: usize,
    pub failed_renewals: usize,
}

/// One run per scheduling tick. Daily is the natural cadence; the evaluator
/// is calendar-day granular. Overlapping ticks must be prevented by the
/// external trigger.
pub struct ReminderScheduler<R, U, L> {
    renewals: Arc<R>,
    dispatcher: Arc<NotificationDispatcher<U, L>>,
}

impl<R, U, L> ReminderScheduler<R, U, L>
where
    R: RenewalStorage,
    U: UserStorage,
    L: ReminderLogStorage,
{
    pub fn new(renewals: Arc<R>, dispatcher: Arc<NotificationDispatcher<U, L>>) -> Self {
        Self {
            renewals,
            dispatcher,
        }
    }

    /// Scans all candidate renewals and dispatches reminders for the due
    /// ones. One renewal failing does not abort the rest of the tick.
    pub async fn run_tick(&self, today: NaiveDate) -> Result<TickSummary, SchedulerError> {
        let candidates = self
            .renewals
            .list_candidates(&[RenewalStatus::Cancelled], today)
            .await
            .map_err(|e| SchedulerError::ListCandidates(anyhow::Error::new(e)))?;

        let mut summary = TickSummary::default();
        for renewal in candidates {
            let Some(offset) = evaluator::is_due(&renewal, today) else {
                continue;
            };

            match self.dispatcher.dispatch(&renewal, offset).await {
                Ok(logs) => {
                    log::info!(
                        "Created {} reminder logs for renewal {} ({} days before expiry)",
                        logs.len(),
                        renewal.id,
                        offset
                    );
                    summary.renewals_due += 1;
                    summary.logs_created += logs.len();
                }
                Err(err) => {
                    if let DispatchError::LogAppend { committed, .. } = &err {
                        summary.logs_created += committed.len();
                    }
                    summary.failed_renewals += 1;
                    log::warn!("Failed to dispatch reminders for renewal {}: {err}", renewal.id);
                }
            }
        }

        Ok(summary)
    }

    /// On-demand trigger for manual verification: dispatches as if `today`
    /// were `simulated_offset` days before the renewal's expiry.
    pub async fn send_test_reminder(
        &self,
        renewal_id: RenewalId,
        simulated_offset: u32,
    ) -> Result<Vec<ReminderLog>, SchedulerError> {
        let renewal = self
            .renewals
            .get(renewal_id)
            .await
            .map_err(|e| SchedulerError::LoadRenewal(renewal_id, anyhow::Error::new(e)))?
            .ok_or(SchedulerError::MissingRenewal(renewal_id))?;

        self.dispatcher
            .dispatch(&renewal, simulated_offset)
            .await
            .map_err(|e| SchedulerError::Dispatch(renewal_id, e))
    }
}

#[cfg(test)]
mod tests;
