use actix_session::{
    config::{PersistentSession, SessionMiddlewareBuilder},
    storage::{RedisSessionStore, SessionStore},
};
use actix_web::{cookie, web::scope, HttpResponse, Scope};
use common::settings::types::Settings;
use web_adapters::{json_config, user_routes, ApiResponse};

pub async fn get_preps_for_redis_session_store(
    settings: &Settings,
) -> Result<(RedisSessionStore, cookie::Key), String> {
    let secret_key = session_key(settings)?;
    let redis_store = RedisSessionStore::new(settings.redis.url.clone())
        .await
        .map_err(|e| format!("Error on getting RedisSessionStore: {:?}", e))?;
    Ok((redis_store, secret_key))
}

/// `cookie::Key::from` panics below 64 bytes, so the length is checked first.
pub fn session_key(settings: &Settings) -> Result<cookie::Key, String> {
    let secret = settings.secret.hmac_secret.as_bytes();
    if secret.len() < 64 {
        return Err("APP_SECRET__HMAC_SECRET must be at least 64 bytes.".to_string());
    }
    Ok(cookie::Key::from(secret))
}

pub fn setup_session_middleware_builder<Store: SessionStore>(
    builder: SessionMiddlewareBuilder<Store>,
    settings: &Settings,
) -> SessionMiddlewareBuilder<Store> {
    let builder = builder
        .session_lifecycle(PersistentSession::default().session_ttl(cookie::time::Duration::days(7)))
        .cookie_name("sessionId".to_string());
    if settings.debug {
        builder
            .cookie_same_site(cookie::SameSite::None)
            .cookie_secure(false)
    } else {
        builder
    }
}

pub fn get_routes() -> Scope {
    scope("/api")
        .app_data(json_config())
        .service(health_check)
        .configure(user_routes)
}

#[actix_web::get("/health-check")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse {
        success: true,
        message: Some("Application is safe and healthy.".to_string()),
        data: None,
        errors: None,
    })
}
