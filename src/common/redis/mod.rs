use deadpool_redis::{Config, CreatePoolError, Pool, Runtime};

use crate::settings::types::Settings;

/// Connections are opened lazily, so this succeeds even while Redis is down.
pub fn init_redis_pool(settings: &Settings) -> Result<Pool, CreatePoolError> {
    Config::from_url(&settings.redis.url).create_pool(Some(Runtime::Tokio1))
}
