mod reminder_log_storage;
mod renewal_log_storage;
mod renewal_storage;
mod user_storage;

pub use reminder_log_storage::InMemoryReminderLogStorage;
pub use renewal_log_storage::InMemoryRenewalLogStorage;
pub use renewal_storage::InMemoryRenewalStorage;
pub use user_storage::InMemoryUserStorage;

use renewly_models::renewal::RenewalId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MemoryStorageError {
    #[error("renewal {0} does not exist")]
    MissingRenewal(RenewalId),
}
