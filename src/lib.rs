// MySQL bootstrap library
// Builds sea-orm and sqlx connections from one config record, plus a UUID helper

pub mod config;
pub mod db;
pub mod error;
pub mod id;

pub use config::{DbConfig, LogLevel};
pub use db::{close_orm, close_pool, format_dsn, init_orm, init_sqlx, Orm};
pub use error::{DbError, IdError};
pub use id::generate_uuid;
