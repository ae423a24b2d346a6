use actix_web::{
    delete, get, post,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use common::settings::types::Settings;
use db_adapters::account_deletion_adapter::AccountDeletionAdapter;
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::users::{
    account_deletion::{
        cancel_account_deletion as cancel_account_deletion_uc,
        get_deletion_status as get_deletion_status_uc,
        request_account_deletion as request_account_deletion_uc,
    },
    types::AccountDeletionRequest,
};

use crate::utils::{
    emails::{notify, Notification},
    response_200, response_200_message, response_401, response_use_case_error,
};

#[tracing::instrument(name = "Requesting account deletion", skip(db, user, req, settings))]
#[post("/deletion")]
pub async fn request_account_deletion(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<AccountDeletionRequest>,
    settings: Data<Settings>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            let (name, email) = (user.name.clone(), user.email.clone());
            match request_account_deletion_uc(
                user,
                req.into_inner(),
                AccountDeletionAdapter::init(&db),
            )
            .await
            {
                Ok(deletion) => {
                    notify(
                        &settings,
                        &name,
                        &email,
                        Notification::AccountDeletionRequested {
                            scheduled_deletion_at: deletion.scheduled_deletion_at,
                            days_remaining: deletion.days_remaining,
                        },
                    );
                    response_200(
                        Some("Account deletion requested. You have 30 days to cancel."),
                        Some(deletion),
                    )
                }
                Err(e) => response_use_case_error(e),
            }
        }
        None => response_401(),
    }
}

#[tracing::instrument(name = "Cancelling account deletion", skip(db, user, settings))]
#[delete("/deletion")]
pub async fn cancel_account_deletion(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    settings: Data<Settings>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            let (name, email) = (user.name.clone(), user.email.clone());
            match cancel_account_deletion_uc(user, AccountDeletionAdapter::init(&db)).await {
                Ok(_) => {
                    notify(
                        &settings,
                        &name,
                        &email,
                        Notification::AccountDeletionCancelled,
                    );
                    response_200_message("Account deletion cancelled successfully.")
                }
                Err(e) => response_use_case_error(e),
            }
        }
        None => response_401(),
    }
}

#[get("/deletion")]
pub async fn get_deletion_status(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            match get_deletion_status_uc(user, AccountDeletionAdapter::init(&db)).await {
                Ok(status) => response_200(None, Some(status)),
                Err(e) => response_use_case_error(e),
            }
        }
        None => response_401(),
    }
}
