use db_adapters::user_adapter::{UserAdapter, UserMutation};
use entities::user as user_entity;

use crate::{error_500, UseCaseError};

/// Bumps the user's session version. Returns the new version so the caller
/// can re-stamp the session it wants to keep.
pub async fn logout_all_devices<'a>(
    user: user_entity::Model,
    user_adapter: UserAdapter<'a>,
) -> Result<i32, UseCaseError> {
    user_adapter
        .increment_session_version(user)
        .await
        .map(|user| user.session_version)
        .map_err(error_500)
}
