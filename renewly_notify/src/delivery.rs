use async_trait::async_trait;
use renewly_models::user::UserId;

/// Channel-specific recipient identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    Email(String),
    Phone(String),
    User(UserId),
}

impl std::fmt::Display for Recipient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recipient::Email(email) => f.write_str(email),
            Recipient::Phone(phone) => f.write_str(phone),
            Recipient::User(id) => write!(f, "user {id}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    Failed,
}

impl DeliveryOutcome {
    pub fn is_delivered(self) -> bool {
        matches!(self, DeliveryOutcome::Delivered)
    }
}

/// A sender must never fail the dispatch: any internal fault is recorded on
/// the diagnostic stream and reported as `Failed`.
#[async_trait]
pub trait ChannelSender: Send + Sync + 'static {
    async fn send(&self, recipient: &Recipient, message: &str) -> DeliveryOutcome;
}

/// Stub transports: record intent on the diagnostic stream and report
/// success. Real SMTP/SMS/push transports implement the same contract.
pub struct LogOnlyEmailSender;

#[async_trait]
impl ChannelSender for LogOnlyEmailSender {
    async fn send(&self, recipient: &Recipient, message: &str) -> DeliveryOutcome {
        log::info!("Email notification would be sent to {recipient}: {message}");
        DeliveryOutcome::Delivered
    }
}

pub struct LogOnlySmsSender;

#[async_trait]
impl ChannelSender for LogOnlySmsSender {
    async fn send(&self, recipient: &Recipient, message: &str) -> DeliveryOutcome {
        log::info!("SMS notification would be sent to {recipient}: {message}");
        DeliveryOutcome::Delivered
    }
}

pub struct LogOnlyInAppSender;

#[async_trait]
impl ChannelSender for LogOnlyInAppSender {
    async fn send(&self, recipient: &Recipient, message: &str) -> DeliveryOutcome {
        log::info!("In-app notification would be created for {recipient}: {message}");
        DeliveryOutcome::Delivered
    }
}
