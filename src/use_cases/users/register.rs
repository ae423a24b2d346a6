use common::auth::password::hash;
use db_adapters::user_adapter::{CreateUserParams, UserAdapter, UserMutation, UserQuery};
use validator::Validate;

use crate::{
    error_500,
    users::types::{RegisterRequest, UserVisible},
    validation::{normalize_email, strip_tags},
    FieldErrors, UseCaseError,
};

pub async fn register_user<'a>(
    params: RegisterRequest,
    user_adapter: UserAdapter<'a>,
) -> Result<UserVisible, UseCaseError> {
    let params = RegisterRequest {
        name: strip_tags(&params.name),
        email: normalize_email(&params.email),
        ..params
    };

    let mut errors = match params.validate() {
        Ok(_) => FieldErrors::new(),
        Err(e) => e.into(),
    };
    if params.password != params.password_confirmation {
        errors.add("password", "Password confirmation does not match.");
    }
    if errors.get("email").is_none()
        && user_adapter
            .clone()
            .get_by_email(params.email.clone())
            .await
            .map_err(error_500)?
            .is_some()
    {
        errors.add("email", "This email address is already in use.");
    }
    errors.into_result()?;

    let hashed_password = hash(params.password.as_bytes()).map_err(error_500)?;
    user_adapter
        .create(CreateUserParams {
            name: params.name,
            email: params.email,
            password: hashed_password,
        })
        .await
        .map(UserVisible::from)
        .map_err(error_500)
}
