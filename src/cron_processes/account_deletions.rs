use db_adapters::{account_deletion_adapter::AccountDeletionAdapter, user_adapter::UserAdapter};
use sea_orm::DbConn;
use tracing::{event, Level};
use use_cases::users::account_deletion::complete_due_deletions as complete_due_deletions_uc;

pub(crate) async fn complete_due_deletions(db: &DbConn) {
    match complete_due_deletions_uc(AccountDeletionAdapter::init(db), UserAdapter::init(db)).await
    {
        Ok(0) => (),
        Ok(count) => {
            event!(target: "backend", Level::INFO, "Completed {} due account deletions.", count)
        }
        Err(e) => event!(target: "backend", Level::ERROR, "{:?}", e),
    }
}
