pub mod memory;
pub mod renewal;
pub mod renewal_log;
pub mod renewal_service;
pub mod reminder_log;
pub mod user;

pub use renewal::{NewRenewal, RenewalStorage};
pub use renewal_log::{NewRenewalLog, RenewalLogStorage};
pub use renewal_service::{RenewalService, RenewalServiceError};
pub use reminder_log::{NewReminderLog, ReminderLogStorage};
pub use user::{NewUser, UserStorage};
