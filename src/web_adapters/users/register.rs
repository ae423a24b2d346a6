use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use db_adapters::user_adapter::UserAdapter;
use sea_orm::DbConn;
use serde_json::json;
use use_cases::users::{register::register_user as register_user_uc, types::RegisterRequest};

use crate::utils::{response_200, response_use_case_error};

#[tracing::instrument(name = "Registering a user", skip(db, req), fields(user_email = &req.email))]
#[post("/register")]
pub async fn register_user(db: Data<DbConn>, req: Json<RegisterRequest>) -> HttpResponse {
    match register_user_uc(req.into_inner(), UserAdapter::init(&db)).await {
        Ok(user) => response_200(
            Some("Registration completed successfully."),
            Some(json!({ "user": user })),
        ),
        Err(e) => response_use_case_error(e),
    }
}
