use actix_web::{
    put,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use chrono::Utc;
use common::settings::types::Settings;
use db_adapters::user_adapter::UserAdapter;
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::users::{
    types::UpdatePasswordRequest, update_password::update_password as update_password_uc,
};

use crate::utils::{
    emails::{notify, Notification},
    response_200_message, response_401, response_use_case_error,
};

#[tracing::instrument(name = "Updating user's password", skip(db, user, req, settings))]
#[put("/password")]
pub async fn update_password(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<UpdatePasswordRequest>,
    settings: Data<Settings>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            match update_password_uc(user, req.into_inner(), UserAdapter::init(&db)).await {
                Ok(user) => {
                    notify(
                        &settings,
                        &user.name,
                        &user.email,
                        Notification::PasswordChanged {
                            changed_at: Utc::now(),
                        },
                    );
                    response_200_message("Password updated successfully.")
                }
                Err(e) => response_use_case_error(e),
            }
        }
        None => response_401(),
    }
}
