use actix_session::Session;
use actix_web::{
    post,
    web::{Data, ReqData},
    HttpResponse,
};
use db_adapters::user_adapter::UserAdapter;
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::users::logout_all_devices::logout_all_devices as logout_all_devices_uc;

use crate::utils::{
    auth::session::stamp_session_version, response_200_message, response_401, response_500,
    response_use_case_error,
};

#[tracing::instrument(name = "Logging out all other devices", skip(db, user, session))]
#[post("/logout-all-devices")]
pub async fn logout_all_devices(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    session: Session,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            match logout_all_devices_uc(user, UserAdapter::init(&db)).await {
                Ok(session_version) => match stamp_session_version(&session, session_version) {
                    Ok(_) => response_200_message("Logged out from all other devices successfully."),
                    Err(e) => response_500(e),
                },
                Err(e) => response_use_case_error(e),
            }
        }
        None => response_401(),
    }
}
