use chrono::{DateTime, Utc};
use db_adapters::{
    account_deletion_adapter::{
        AccountDeletionAdapter, AccountDeletionFilter, AccountDeletionMutation,
        AccountDeletionOrder, AccountDeletionQuery,
    },
    user_adapter::{UserAdapter, UserMutation, UserQuery},
    Order::Desc,
};
use entities::{
    account_deletion, custom_methods::account_deletion::AccountDeletionTrait,
    sea_orm_active_enums::AccountDeletionStatus, user as user_entity,
};
use validator::Validate;

use crate::{
    error_500,
    users::{
        password_matches,
        types::{AccountDeletionRequest, AccountDeletionVisible, DeletionStatusVisible},
    },
    FieldErrors, UseCaseError,
};

impl AccountDeletionVisible {
    fn new(deletion: &account_deletion::Model, now: DateTime<Utc>) -> Self {
        Self {
            scheduled_deletion_at: deletion.scheduled_deletion_at,
            days_remaining: deletion.days_remaining(now),
            requested_at: deletion.requested_at,
        }
    }
}

/// Starts the grace period. Earlier pending requests are cancelled first so
/// at most one stays pending.
pub async fn request_account_deletion<'a>(
    user: user_entity::Model,
    params: AccountDeletionRequest,
    account_deletion_adapter: AccountDeletionAdapter<'a>,
) -> Result<AccountDeletionVisible, UseCaseError> {
    let mut errors = match params.validate() {
        Ok(_) => FieldErrors::new(),
        Err(e) => e.into(),
    };
    if errors.get("password").is_none() && !password_matches(&user, &params.password) {
        errors.add("password", "The provided password is incorrect.");
    }
    errors.into_result()?;

    account_deletion_adapter
        .clone()
        .cancel_all_pending_for_user(&user)
        .await
        .map_err(error_500)?;

    account_deletion_adapter
        .create_pending(&user, Utc::now())
        .await
        .map(|deletion| AccountDeletionVisible::new(&deletion, deletion.requested_at.to_utc()))
        .map_err(error_500)
}

pub async fn cancel_account_deletion<'a>(
    user: user_entity::Model,
    account_deletion_adapter: AccountDeletionAdapter<'a>,
) -> Result<(), UseCaseError> {
    let deletion = _find_pending(&user, account_deletion_adapter.clone())
        .await?
        .ok_or(UseCaseError::NotFound(
            "No pending deletion request found.".to_string(),
        ))?;

    account_deletion_adapter
        .cancel(deletion)
        .await
        .map(|_| ())
        .map_err(error_500)
}

pub async fn get_deletion_status<'a>(
    user: user_entity::Model,
    account_deletion_adapter: AccountDeletionAdapter<'a>,
) -> Result<DeletionStatusVisible, UseCaseError> {
    let deletion = _find_pending(&user, account_deletion_adapter).await?;
    Ok(DeletionStatusVisible {
        has_pending_deletion: deletion.is_some(),
        deletion: deletion.map(|deletion| AccountDeletionVisible::new(&deletion, Utc::now())),
    })
}

/// Destroys the users whose grace period has ended and marks their records
/// completed. Returns how many records were completed.
pub async fn complete_due_deletions<'a>(
    account_deletion_adapter: AccountDeletionAdapter<'a>,
    user_adapter: UserAdapter<'a>,
) -> Result<usize, UseCaseError> {
    let due = account_deletion_adapter
        .clone()
        .filter_due(Utc::now())
        .get_all()
        .await
        .map_err(error_500)?;

    let mut completed = 0;
    for deletion in due {
        if let Some(user_id) = deletion.user_id {
            let user = user_adapter
                .clone()
                .get_by_id(user_id)
                .await
                .map_err(error_500)?;
            if let Some(user) = user {
                user_adapter.clone().delete(user).await.map_err(error_500)?;
                tracing::event!(target: "backend", tracing::Level::INFO, "Deleted user {} after grace period.", user_id);
            }
        }
        account_deletion_adapter
            .clone()
            .mark_completed(deletion)
            .await
            .map_err(error_500)?;
        completed += 1;
    }
    Ok(completed)
}

async fn _find_pending(
    user: &user_entity::Model,
    account_deletion_adapter: AccountDeletionAdapter<'_>,
) -> Result<Option<account_deletion::Model>, UseCaseError> {
    account_deletion_adapter
        .filter_eq_user(user)
        .filter_eq_status(AccountDeletionStatus::Pending)
        .order_by_requested_at(Desc)
        .get_one()
        .await
        .map_err(error_500)
}
