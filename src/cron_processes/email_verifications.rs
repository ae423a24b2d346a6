use db_adapters::email_verification_adapter::EmailVerificationAdapter;
use sea_orm::DbConn;
use tracing::{event, Level};
use use_cases::users::email_change::cleanup_expired_verifications as cleanup_expired_verifications_uc;

pub(crate) async fn cleanup_expired_verifications(db: &DbConn) {
    match cleanup_expired_verifications_uc(EmailVerificationAdapter::init(db)).await {
        Ok(0) => (),
        Ok(count) => {
            event!(target: "backend", Level::INFO, "Removed {} expired email verifications.", count)
        }
        Err(e) => event!(target: "backend", Level::ERROR, "{:?}", e),
    }
}
