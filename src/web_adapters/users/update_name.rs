use actix_web::{
    put,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use db_adapters::user_adapter::UserAdapter;
use entities::user as user_entity;
use sea_orm::DbConn;
use serde_json::json;
use use_cases::users::{types::UpdateNameRequest, update_name::update_name as update_name_uc};

use crate::utils::{response_200, response_401, response_use_case_error};

#[tracing::instrument(name = "Updating user's name", skip(db, user))]
#[put("/name")]
pub async fn update_name(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<UpdateNameRequest>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            match update_name_uc(user, req.into_inner(), UserAdapter::init(&db)).await {
                Ok(user) => response_200(
                    Some("Name updated successfully."),
                    Some(json!({ "user": user })),
                ),
                Err(e) => response_use_case_error(e),
            }
        }
        None => response_401(),
    }
}
