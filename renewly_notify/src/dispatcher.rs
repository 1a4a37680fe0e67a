use std::sync::Arc;
use std::time::Duration;

use renewly_models::renewal::{Renewal, RenewalId};
use renewly_models::reminder_log::{Channel, ReminderLog};
use renewly_models::user::UserId;
use renewly_storage::reminder_log::{NewReminderLog, ReminderLogStorage};
use renewly_storage::user::UserStorage;
use thiserror::Error;

use crate::delivery::{ChannelSender, DeliveryOutcome, Recipient};

pub const SEND_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("owner {user_id} of renewal {renewal_id} could not be resolved")]
    UnresolvableUser {
        renewal_id: RenewalId,
        user_id: UserId,
    },
    #[error("failed to look up preferences for user {user_id}")]
    PreferenceLookup {
        user_id: UserId,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to append {channel} reminder log for renewal {renewal_id}")]
    LogAppend {
        renewal_id: RenewalId,
        channel: Channel,
        /// Logs written before the failing append. Already committed; the
        /// failure does not roll them back.
        committed: Vec<ReminderLog>,
        #[source]
        source: anyhow::Error,
    },
}

pub struct ChannelSenders {
    pub email: Arc<dyn ChannelSender>,
    pub sms: Arc<dyn ChannelSender>,
    pub in_app: Arc<dyn ChannelSender>,
}

impl ChannelSenders {
    pub fn log_only() -> Self {
        Self {
            email: Arc::new(crate::delivery::LogOnlyEmailSender),
            sms: Arc::new(crate::delivery::LogOnlySmsSender),
            in_app: Arc::new(crate::delivery::LogOnlyInAppSender),
        }
    }
}

pub struct NotificationDispatcher<U, L> {
    users: Arc<U>,
    logs: Arc<L>,
    senders: ChannelSenders,
    send_timeout: Duration,
}

impl<U, L> NotificationDispatcher<U, L>
where
    U: UserStorage,
    L: ReminderLogStorage,
{
    pub fn new(users: Arc<U>, logs: Arc<L>, senders: ChannelSenders) -> Self {
        Self {
            users,
            logs,
            senders,
            send_timeout: SEND_TIMEOUT,
        }
    }

    pub fn with_send_timeout(mut self, send_timeout: Duration) -> Self {
        self.send_timeout = send_timeout;
        self
    }

    /// Fans one due renewal out to the owner's enabled channels, in fixed
    /// order email, sms, in-app, appending one log entry per attempt. SMS
    /// without a phone number on file is skipped silently. Returns the logs
    /// created; repeated calls create fresh entries, nothing is deduplicated.
    pub async fn dispatch(
        &self,
        renewal: &Renewal,
        offset_days: u32,
    ) -> Result<Vec<ReminderLog>, DispatchError> {
        let prefs = self
            .users
            .get_preferences(renewal.user_id)
            .await
            .map_err(|source| DispatchError::PreferenceLookup {
                user_id: renewal.user_id,
                source: anyhow::Error::new(source),
            })?
            .ok_or(DispatchError::UnresolvableUser {
                renewal_id: renewal.id,
                user_id: renewal.user_id,
            })?;

        let message = reminder_message(renewal, offset_days);

        let mut attempts: Vec<(Channel, Recipient, String)> = Vec::new();
        if prefs.email_enabled {
            attempts.push((
                Channel::Email,
                Recipient::Email(prefs.email.clone()),
                format!("Email reminder: {message} Recipient: {}", prefs.email),
            ));
        }
        if prefs.sms_enabled {
            match &prefs.phone_number {
                Some(phone) => attempts.push((
                    Channel::Sms,
                    Recipient::Phone(phone.clone()),
                    format!("SMS reminder: {message} Recipient: {phone}"),
                )),
                None => log::debug!(
                    "Skipping sms for renewal {}: user {} has no phone number on file",
                    renewal.id,
                    renewal.user_id
                ),
            }
        }
        if prefs.in_app_enabled {
            attempts.push((
                Channel::InApp,
                Recipient::User(renewal.user_id),
                format!("In-app notification: {message}"),
            ));
        }

        let mut created = Vec::with_capacity(attempts.len());
        for (channel, recipient, notes) in attempts {
            let outcome = self.attempt(channel, &recipient, &message).await;
            let append = self
                .logs
                .append(NewReminderLog {
                    renewal_id: renewal.id,
                    channel,
                    sent_at: None,
                    delivered: outcome.is_delivered(),
                    notes,
                })
                .await;
            match append {
                Ok(entry) => created.push(entry),
                Err(source) => {
                    return Err(DispatchError::LogAppend {
                        renewal_id: renewal.id,
                        channel,
                        committed: created,
                        source: anyhow::Error::new(source),
                    });
                }
            }
        }

        Ok(created)
    }

    async fn attempt(
        &self,
        channel: Channel,
        recipient: &Recipient,
        message: &str,
    ) -> DeliveryOutcome {
        let sender = self.sender_for(channel);
        match tokio::time::timeout(self.send_timeout, sender.send(recipient, message)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                log::error!(
                    "{channel} send to {recipient} timed out after {:?}",
                    self.send_timeout
                );
                DeliveryOutcome::Failed
            }
        }
    }

    fn sender_for(&self, channel: Channel) -> &dyn ChannelSender {
        match channel {
            Channel::Email => self.senders.email.as_ref(),
            Channel::Sms => self.senders.sms.as_ref(),
            Channel::InApp => self.senders.in_app.as_ref(),
        }
    }
}

/// Human-readable reminder text. Phrasing and the `YYYY-MM-DD` date format
/// surface in persisted log notes and are part of the external contract.
pub fn reminder_message(renewal: &Renewal, offset_days: u32) -> String {
    format!(
        "Your {} service will expire in {} days (on {}).",
        renewal.item_name,
        offset_days,
        renewal.end_date.format("%Y-%m-%d")
    )
}
