use actix_session::Session;
use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use common::settings::types::Settings;
use db_adapters::user_adapter::UserAdapter;
use deadpool_redis::{
    redis::{AsyncCommands, SetExpiry, SetOptions},
    Connection, Pool,
};
use sea_orm::DbConn;
use serde_json::json;
use use_cases::{
    users::{login::authenticate, types::LoginRequest, types::UserVisible},
    UseCaseError,
};

use crate::utils::{
    auth::session::renew_session, response_200, response_429, response_500,
    response_use_case_error,
};

#[tracing::instrument(name = "Logging a user in", skip(db, redis_pool, req, session, settings), fields(user_email = &req.email))]
#[post("/login")]
pub async fn login_user(
    db: Data<DbConn>,
    redis_pool: Option<Data<Pool>>,
    req: Json<LoginRequest>,
    session: Session,
    settings: Data<Settings>,
) -> HttpResponse {
    let mut redis_con = match redis_pool {
        Some(pool) => match pool.get().await {
            Ok(redis_con) => Some(redis_con),
            Err(e) => return response_500(e),
        },
        None => {
            tracing::event!(target: "redis", tracing::Level::WARN, "No Redis pool configured. Login attempts are not limited.");
            None
        }
    };

    let login_request_count_key = format!("login_count_{}", req.email.trim().to_lowercase());
    let login_request_count = match redis_con.as_mut() {
        Some(redis_con) => {
            match validate_request_count(redis_con, &login_request_count_key, &settings).await {
                Ok(count) => count,
                Err(e) => return response_429(&e),
            }
        }
        None => 0,
    };

    match authenticate(req.into_inner(), UserAdapter::init(&db)).await {
        Ok(user) => {
            tracing::event!(target: "backend", tracing::Level::INFO, "User logged in successfully.");
            if let Some(redis_con) = redis_con.as_mut() {
                if let Err(e) = redis_con
                    .del::<&str, u64>(&login_request_count_key)
                    .await
                {
                    tracing::event!(target: "redis", tracing::Level::WARN, "Error deleting login_request_count_key from Redis: {:#?}", e)
                };
            }
            match renew_session(&session, &user) {
                Ok(_) => response_200(
                    Some("Logged in successfully."),
                    Some(json!({ "user": UserVisible::from(user) })),
                ),
                Err(e) => response_500(e),
            }
        }
        Err(e) => {
            if let (UseCaseError::NotFound(_), Some(redis_con)) = (&e, redis_con.as_mut()) {
                increment_login_request_count(
                    redis_con,
                    &login_request_count_key,
                    login_request_count,
                    &settings,
                )
                .await;
            }
            response_use_case_error(e)
        }
    }
}

async fn validate_request_count(
    redis_con: &mut Connection,
    login_request_count_key: &str,
    settings: &Settings,
) -> Result<u64, String> {
    let login_request_count = redis_con.get(login_request_count_key).await.map_err(|e| {
        tracing::event!(target: "backend", tracing::Level::WARN, "Error getting login_request_count, defaults to 0: {}", e);
    }).unwrap_or(0);
    if login_request_count >= settings.application.max_login_attempts {
        Err(format!(
            "Too many login attempts. Please try again in {} seconds.",
            settings.application.login_attempts_cool_time_seconds
        ))
    } else {
        Ok(login_request_count)
    }
}

async fn increment_login_request_count(
    redis_con: &mut Connection,
    login_request_count_key: &str,
    login_request_count: u64,
    settings: &Settings,
) {
    if let Err(e) = redis_con
        .set_options::<&str, u64, ()>(
            login_request_count_key,
            login_request_count + 1,
            SetOptions::default().with_expiration(SetExpiry::EX(
                settings.application.login_attempts_cool_time_seconds,
            )),
        )
        .await
    {
        tracing::event!(target: "redis", tracing::Level::WARN, "Error adding login_request_count_key to Redis: {:#?}", e)
    };
}
