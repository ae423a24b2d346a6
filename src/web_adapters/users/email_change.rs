use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use common::settings::types::Settings;
use db_adapters::{
    email_verification_adapter::EmailVerificationAdapter, user_adapter::UserAdapter,
};
use entities::user as user_entity;
use sea_orm::DbConn;
use serde_json::json;
use use_cases::users::{
    email_change::{
        request_email_change as request_email_change_uc,
        verify_email_change as verify_email_change_uc,
    },
    types::{EmailChangeRequest, VerifyEmailChangeRequest},
};

use crate::utils::{
    emails::{notify, Notification},
    response_200, response_401, response_use_case_error,
};

#[tracing::instrument(name = "Requesting an email change", skip(db, user, req, settings))]
#[post("/email-change")]
pub async fn request_email_change(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<EmailChangeRequest>,
    settings: Data<Settings>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            let name = user.name.clone();
            match request_email_change_uc(
                user,
                req.into_inner(),
                EmailVerificationAdapter::init(&db),
                UserAdapter::init(&db),
            )
            .await
            {
                Ok(ticket) => {
                    notify(
                        &settings,
                        &name,
                        &ticket.new_email,
                        Notification::EmailChangeVerification {
                            token: ticket.token,
                            expires_in_minutes: ticket.expires_in_minutes,
                        },
                    );
                    notify(
                        &settings,
                        &name,
                        &ticket.old_email,
                        Notification::EmailChangeAlert {
                            new_email: ticket.new_email.clone(),
                        },
                    );
                    response_200(
                        Some("Verification code sent to your new email address."),
                        Some(json!({
                            "new_email": ticket.new_email,
                            "expires_in_minutes": ticket.expires_in_minutes,
                        })),
                    )
                }
                Err(e) => response_use_case_error(e),
            }
        }
        None => response_401(),
    }
}

#[tracing::instrument(name = "Verifying an email change", skip(db, user, req, settings))]
#[post("/email-change/verify")]
pub async fn verify_email_change(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<VerifyEmailChangeRequest>,
    settings: Data<Settings>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            match verify_email_change_uc(
                user,
                req.into_inner(),
                EmailVerificationAdapter::init(&db),
                UserAdapter::init(&db),
            )
            .await
            {
                Ok(outcome) => {
                    notify(
                        &settings,
                        &outcome.user.name,
                        &outcome.old_email,
                        Notification::EmailChanged {
                            new_email: outcome.user.email.clone(),
                        },
                    );
                    notify(
                        &settings,
                        &outcome.user.name,
                        &outcome.user.email,
                        Notification::EmailChangeConfirmed,
                    );
                    response_200(
                        Some("Email address updated successfully."),
                        Some(json!({ "user": outcome.user })),
                    )
                }
                Err(e) => response_use_case_error(e),
            }
        }
        None => response_401(),
    }
}
