use chrono::NaiveDate;

use crate::user::UserId;

pub type RenewalId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenewalStatus {
    Active,
    Renewed,
    Inactive,
    Cancelled,
}

impl RenewalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenewalStatus::Active => "active",
            RenewalStatus::Renewed => "renewed",
            RenewalStatus::Inactive => "inactive",
            RenewalStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for RenewalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Renewal {
    pub id: RenewalId,
    pub user_id: UserId,
    pub item_name: String,
    pub category: String,
    pub vendor: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Days before `end_date` at which to remind. `None` means the default
    /// offset set applies.
    pub reminder_days_before: Option<u32>,
    pub status: RenewalStatus,
    pub notes: Option<String>,
    pub cost: Option<f64>,
}
