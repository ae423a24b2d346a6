use actix_web::{get, web::ReqData, HttpResponse};
use entities::user as user_entity;
use serde_json::json;
use use_cases::users::types::UserVisible;

use crate::utils::{response_200, response_401};

#[get("")]
pub async fn get_user(user: Option<ReqData<user_entity::Model>>) -> HttpResponse {
    match user {
        Some(user) => response_200(
            None,
            Some(json!({ "user": UserVisible::from(user.into_inner()) })),
        ),
        None => response_401(),
    }
}
