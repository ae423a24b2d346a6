use db_adapters::user_adapter::{UserAdapter, UserFilter, UserQuery};
use entities::user;

use crate::{
    error_500,
    users::{password_matches, types::LoginRequest},
    validation::normalize_email,
    UseCaseError,
};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "These credentials do not match our records.";

/// Resolves an active user by email and password. Unknown email and wrong
/// password are indistinguishable to the caller.
pub async fn authenticate<'a>(
    params: LoginRequest,
    user_adapter: UserAdapter<'a>,
) -> Result<user::Model, UseCaseError> {
    let user = user_adapter
        .filter_eq_is_active(true)
        .get_by_email(normalize_email(&params.email))
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            INVALID_CREDENTIALS_MESSAGE.to_string(),
        ))?;

    match password_matches(&user, &params.password) {
        true => Ok(user),
        false => Err(UseCaseError::NotFound(
            INVALID_CREDENTIALS_MESSAGE.to_string(),
        )),
    }
}
