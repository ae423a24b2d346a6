use common::auth::password::hash;
use db_adapters::user_adapter::{UserAdapter, UserMutation};
use entities::user as user_entity;
use validator::Validate;

use crate::{
    error_500,
    users::{
        password_matches,
        types::{UpdatePasswordRequest, UserVisible},
    },
    FieldErrors, UseCaseError,
};

pub async fn update_password<'a>(
    user: user_entity::Model,
    params: UpdatePasswordRequest,
    user_adapter: UserAdapter<'a>,
) -> Result<UserVisible, UseCaseError> {
    let mut errors = match params.validate() {
        Ok(_) => FieldErrors::new(),
        Err(e) => e.into(),
    };
    if errors.get("current_password").is_none()
        && !password_matches(&user, &params.current_password)
    {
        errors.add("current_password", "The current password is incorrect.");
    }
    if params.password != params.password_confirmation {
        errors.add("password", "Password confirmation does not match.");
    }
    if params.password == params.current_password {
        errors.add(
            "password",
            "New password must be different from current password.",
        );
    }
    errors.into_result()?;

    let hashed_password = hash(params.password.as_bytes()).map_err(error_500)?;
    user_adapter
        .update_password(user, hashed_password)
        .await
        .map(UserVisible::from)
        .map_err(error_500)
}
