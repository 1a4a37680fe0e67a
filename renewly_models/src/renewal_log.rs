use chrono::{DateTime, Utc};

use crate::actor::Actor;
use crate::renewal::{RenewalId, RenewalStatus};

pub type RenewalLogId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenewalAction {
    Created,
    Updated,
    Deleted,
    StatusUpdated(RenewalStatus),
}

impl std::fmt::Display for RenewalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenewalAction::Created => f.write_str("created"),
            RenewalAction::Updated => f.write_str("updated"),
            RenewalAction::Deleted => f.write_str("deleted"),
            RenewalAction::StatusUpdated(status) => write!(f, "status updated to {status}"),
        }
    }
}

/// Lifecycle audit entry for a renewal, independent of the reminder
/// subsystem.
#[derive(Debug, Clone, PartialEq)]
pub struct RenewalLog {
    pub id: RenewalLogId,
    pub renewal_id: RenewalId,
    pub action: RenewalAction,
    pub date: DateTime<Utc>,
    pub created_by: Actor,
    pub notes: Option<String>,
}
