use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use std::str::FromStr;
use tracing::{error, info};

use super::dsn::{connection_url, mask_dsn};
use super::settings::PoolSettings;
use crate::config::DbConfig;
use crate::error::DbError;

/// Session adjustments shared by both client stacks.
///
/// sqlx pins sessions to `+00:00` by default; the server's own time zone is kept instead.
pub fn session_options(options: MySqlConnectOptions) -> MySqlConnectOptions {
    options.timezone(None::<String>)
}

/// Parse the config's connection URL into sqlx options.
pub fn mysql_connect_options(config: &DbConfig) -> Result<MySqlConnectOptions, DbError> {
    let url = connection_url(config);
    let options = MySqlConnectOptions::from_str(&url).map_err(|e| {
        error!("❌ Invalid MySQL connection string {}: {}", mask_dsn(&url), e);
        DbError::Pool(e)
    })?;
    Ok(session_options(options))
}

/// Create a lazy sqlx pool. Nothing is contacted until the first query.
///
/// Must be called from within a tokio runtime, the pool spawns its reaper there.
pub fn init_sqlx(config: &DbConfig) -> Result<MySqlPool, DbError> {
    let connect_options = mysql_connect_options(config)?;

    let settings = PoolSettings::from_config(config);
    let mut pool_options = MySqlPoolOptions::new();
    if let Some(max) = settings.max_connections {
        pool_options = pool_options.max_connections(max);
    }
    if let Some(min) = settings.min_connections {
        pool_options = pool_options.min_connections(min);
    }
    if let Some(lifetime) = settings.max_lifetime {
        pool_options = pool_options.max_lifetime(lifetime);
    }
    if let Some(idle) = settings.idle_timeout {
        pool_options = pool_options.idle_timeout(idle);
    }

    info!("🔧 Created lazy MySQL pool for {}", mask_dsn(&connection_url(config)));
    Ok(pool_options.connect_lazy_with(connect_options))
}

/// Close a pool created by [`init_sqlx`]. `None` is a no-op.
pub async fn close_pool(pool: Option<MySqlPool>) {
    if let Some(pool) = pool {
        pool.close().await;
        info!("MySQL pool closed");
    }
}
