pub mod evaluator;
mod scheduler;

pub use evaluator::{DEFAULT_REMINDER_OFFSETS, is_due};
pub use scheduler::{ReminderScheduler, SchedulerError, TickSummary};
