use chrono::{DateTime, Duration, Utc};

use crate::{account_deletion, sea_orm_active_enums::AccountDeletionStatus};

pub const GRACE_PERIOD_DAYS: i64 = 30;

pub fn scheduled_deletion_at(requested_at: DateTime<Utc>) -> DateTime<Utc> {
    requested_at + Duration::days(GRACE_PERIOD_DAYS)
}

pub trait AccountDeletionTrait {
    fn is_pending(&self) -> bool;
    fn is_due(&self, now: DateTime<Utc>) -> bool;
    /// Whole days left before the deletion runs, truncated. Never negative.
    fn days_remaining(&self, now: DateTime<Utc>) -> i64;
}

impl AccountDeletionTrait for account_deletion::Model {
    fn is_pending(&self) -> bool {
        self.status == AccountDeletionStatus::Pending
    }

    fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.is_pending() && self.scheduled_deletion_at <= now
    }

    fn days_remaining(&self, now: DateTime<Utc>) -> i64 {
        if !self.is_pending() {
            return 0;
        }
        (self.scheduled_deletion_at.to_utc() - now).num_days().max(0)
    }
}
