use db_adapters::user_adapter::{UserAdapter, UserMutation};
use entities::user as user_entity;
use validator::Validate;

use crate::{
    error_500,
    users::types::{UpdateNameRequest, UserVisible},
    validation::strip_tags,
    UseCaseError,
};

pub async fn update_name<'a>(
    user: user_entity::Model,
    params: UpdateNameRequest,
    user_adapter: UserAdapter<'a>,
) -> Result<UserVisible, UseCaseError> {
    let params = UpdateNameRequest {
        name: strip_tags(&params.name),
    };
    params
        .validate()
        .map_err(|e| UseCaseError::Validation(e.into()))?;

    user_adapter
        .update_name(user, params.name)
        .await
        .map(UserVisible::from)
        .map_err(error_500)
}
