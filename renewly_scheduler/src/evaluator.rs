use renewly_models::chrono::NaiveDate;
use renewly_models::renewal::{Renewal, RenewalStatus};

/// Offsets applied when a renewal has no `reminder_days_before` of its own.
pub const DEFAULT_REMINDER_OFFSETS: [u32; 3] = [1, 7, 30];

/// Whether `today` is a qualifying reminder day for `renewal`, and at which
/// offset. Due only when the whole-day distance to `end_date` exactly equals
/// a candidate offset; cancelled renewals are never due.
pub fn is_due(renewal: &Renewal, today: NaiveDate) -> Option<u32> {
    if renewal.status == RenewalStatus::Cancelled {
        return None;
    }

    let days_until_expiry = (renewal.end_date - today).num_days();
    match renewal.reminder_days_before {
        Some(offset) => (i64::from(offset) == days_until_expiry).then_some(offset),
        None => DEFAULT_REMINDER_OFFSETS
            .into_iter()
            .find(|&offset| i64::from(offset) == days_until_expiry),
    }
}
