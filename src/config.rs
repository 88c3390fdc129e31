use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::str::FromStr;

pub const DEFAULT_CHARSET: &str = "utf8mb4";
pub const DEFAULT_PORT: u16 = 3306;

/// Connection settings shared by both client stacks.
///
/// Pool limits and durations use `0` for "leave the driver default alone".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
    /// Empty means [`DEFAULT_CHARSET`].
    pub charset: String,
    pub max_idle_conns: u32,
    pub max_open_conns: u32,
    /// Seconds.
    pub conn_max_lifetime: u64,
    /// Seconds.
    pub conn_max_idle_time: u64,
    pub log_level: String,
    /// Milliseconds. Statements slower than this are logged at warn.
    pub slow_threshold: u64,
    pub skip_default_txn: bool,
    pub prepare_stmt: bool,
    pub singular_table: bool,
    pub disable_foreign_key: bool,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_PORT,
            database: String::new(),
            username: String::new(),
            password: String::new(),
            charset: String::new(),
            max_idle_conns: 0,
            max_open_conns: 0,
            conn_max_lifetime: 0,
            conn_max_idle_time: 0,
            log_level: String::new(),
            slow_threshold: 0,
            skip_default_txn: false,
            prepare_stmt: false,
            singular_table: false,
            disable_foreign_key: false,
        }
    }
}

impl DbConfig {
    pub fn charset(&self) -> &str {
        if self.charset.is_empty() {
            DEFAULT_CHARSET
        } else {
            &self.charset
        }
    }

    pub fn log_level(&self) -> LogLevel {
        LogLevel::parse(&self.log_level)
    }

    /// Load from `DB_*` environment variables. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(DbConfig {
            host: env::var("DB_HOST").unwrap_or(defaults.host),
            port: parse_var("DB_PORT")?.unwrap_or(defaults.port),
            database: env::var("DB_NAME").unwrap_or_default(),
            username: env::var("DB_USER").unwrap_or_default(),
            password: env::var("DB_PASSWORD").unwrap_or_default(),
            charset: env::var("DB_CHARSET").unwrap_or_default(),
            max_idle_conns: parse_var("DB_MAX_IDLE_CONNS")?.unwrap_or(0),
            max_open_conns: parse_var("DB_MAX_OPEN_CONNS")?.unwrap_or(0),
            conn_max_lifetime: parse_var("DB_CONN_MAX_LIFETIME")?.unwrap_or(0),
            conn_max_idle_time: parse_var("DB_CONN_MAX_IDLE_TIME")?.unwrap_or(0),
            log_level: env::var("DB_LOG_LEVEL").unwrap_or_default(),
            slow_threshold: parse_var("DB_SLOW_THRESHOLD")?.unwrap_or(0),
            skip_default_txn: parse_var("DB_SKIP_DEFAULT_TXN")?.unwrap_or(false),
            prepare_stmt: parse_var("DB_PREPARE_STMT")?.unwrap_or(false),
            singular_table: parse_var("DB_SINGULAR_TABLE")?.unwrap_or(false),
            disable_foreign_key: parse_var("DB_DISABLE_FOREIGN_KEY")?.unwrap_or(false),
        })
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("Invalid value for {}: {:?}", name, raw)),
        Err(_) => Ok(None),
    }
}

/// Statement log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Silent,
    Error,
    Warn,
    Info,
}

impl LogLevel {
    /// Unknown names, including the empty string, fall back to `Warn`.
    pub fn parse(level: &str) -> Self {
        match level {
            "silent" => LogLevel::Silent,
            "error" => LogLevel::Error,
            "warn" => LogLevel::Warn,
            "info" => LogLevel::Info,
            _ => LogLevel::Warn,
        }
    }

    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Silent => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
        }
    }
}
