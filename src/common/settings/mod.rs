use std::env;

use crate::settings::types::{
    ApplicationSettings, DatabaseSettings, EmailSettings, Environment, RedisSettings,
    SecretSettings, Settings,
};

pub mod types;

const TEST_HMAC_SECRET: &str =
    "test-hmac-secret-test-hmac-secret-test-hmac-secret-test-hmac-secret";

pub fn get_settings(env_file_name: &str) -> Result<Settings, String> {
    dotenvy::from_filename(env_file_name)
        .map_err(|e| format!("Failed to fetch env file: {}", e.to_string()))?;

    match Environment::try_from(env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "production".into()))
    {
        Ok(env) => match env {
            Environment::Testing => Ok(get_test_settings()),
            Environment::Development => get_development_settings(),
            Environment::Production => get_production_settings(),
        },
        Err(e) => return Err(format!("Failed to parse APP_ENVIRONMENT: {}", e)),
    }
}

/// Works without any env file: the database falls back to in-memory SQLite and mail is off.
pub fn get_test_settings() -> Settings {
    dotenvy::from_filename(".env.testing").ok();
    let b = Settings::base_settings();
    Settings {
        application: ApplicationSettings {
            host: "127.0.0.1".to_string(),
            max_login_attempts: 5,
            login_attempts_cool_time_seconds: 3600,
            ..b.application
        },
        database: DatabaseSettings {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string()),
        },
        debug: true,
        redis: RedisSettings {
            url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string()),
        },
        secret: SecretSettings {
            hmac_secret: TEST_HMAC_SECRET.to_string(),
        },
        email: EmailSettings::default(),
    }
}

fn get_development_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            host: "127.0.0.1".to_string(),
            ..b.application
        },
        debug: true,
        ..b
    })
}

fn get_production_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            host: "0.0.0.0".to_string(),
            ..b.application
        },
        debug: false,
        ..b
    })
}

fn merge_env(s: Settings) -> Result<Settings, String> {
    Ok(Settings {
        application: ApplicationSettings {
            port: match env::var("APP_APPLICATION__PORT") {
                Ok(port) => port.parse::<u16>().map_err(|e| e.to_string())?,
                Err(_) => s.application.port,
            },
            max_login_attempts: get_env_var("MAX_LOGIN_ATTEMPTS")?
                .parse::<u64>()
                .map_err(|e| e.to_string())?,
            login_attempts_cool_time_seconds: get_env_var("LOGIN_ATTEMPTS_COOL_TIME_SECONDS")?
                .parse::<u64>()
                .map_err(|e| e.to_string())?,
            ..s.application
        },
        database: DatabaseSettings {
            url: get_env_var("DATABASE_URL")?,
        },
        debug: match env::var("APP_DEBUG") {
            Ok(debug) => &debug == "true",
            Err(_) => s.debug,
        },
        redis: RedisSettings {
            url: get_env_var("REDIS_URL")?,
            ..s.redis
        },
        secret: SecretSettings {
            hmac_secret: get_env_var("APP_SECRET__HMAC_SECRET")?,
            ..s.secret
        },
        email: EmailSettings {
            host: get_env_var("APP_EMAIL__HOST")?,
            host_user: get_env_var("APP_EMAIL__HOST_USER")?,
            host_user_password: get_env_var("APP_EMAIL__HOST_USER_PASSWORD")?,
            sender: get_env_var("APP_EMAIL__SENDER")?,
            ..s.email
        },
        ..s
    })
}

fn get_env_var(key: &str) -> Result<String, String> {
    env::var(key).map_err(|e| format!("{}: {}", key, e))
}
