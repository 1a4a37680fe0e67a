pub mod actor;
pub mod renewal;
pub mod renewal_log;
pub mod reminder_log;
pub mod user;

pub use chrono;
