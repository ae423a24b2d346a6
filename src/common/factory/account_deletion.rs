use chrono::{DateTime, Utc};
use entities::{
    account_deletion, custom_methods::account_deletion::scheduled_deletion_at,
    sea_orm_active_enums::AccountDeletionStatus,
};
use sea_orm::Set;
use uuid::Uuid;

pub fn account_deletion(user_id: Uuid) -> account_deletion::ActiveModel {
    let now = Utc::now();
    account_deletion::ActiveModel {
        id: Set(Uuid::now_v7()),
        user_id: Set(Some(user_id)),
        requested_at: Set(now.into()),
        scheduled_deletion_at: Set(scheduled_deletion_at(now).into()),
        status: Set(AccountDeletionStatus::Pending),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait AccountDeletionFactory {
    fn status(self, status: AccountDeletionStatus) -> account_deletion::ActiveModel;
    fn requested_at(self, requested_at: DateTime<Utc>) -> account_deletion::ActiveModel;
}

impl AccountDeletionFactory for account_deletion::ActiveModel {
    fn status(mut self, status: AccountDeletionStatus) -> account_deletion::ActiveModel {
        self.status = Set(status);
        self
    }

    /// Moves the whole grace period along with the request time.
    fn requested_at(mut self, requested_at: DateTime<Utc>) -> account_deletion::ActiveModel {
        self.requested_at = Set(requested_at.into());
        self.scheduled_deletion_at = Set(scheduled_deletion_at(requested_at).into());
        self
    }
}
