use std::time::{Duration, SystemTimeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Failed to connect to database: {0}")]
    Connect(#[source] sea_orm::DbErr),

    #[error("Failed to open connection pool: {0}")]
    Pool(#[source] sqlx::Error),

    #[error("Database health check failed: {0}")]
    HealthCheck(#[source] sea_orm::DbErr),

    #[error("Database health check timed out after {0:?}")]
    HealthCheckTimeout(Duration),

    #[error("Failed to close database connection: {0}")]
    Close(#[source] sea_orm::DbErr),

    #[error("Database error: {0}")]
    Query(#[from] sea_orm::DbErr),
}

#[derive(Debug, Error)]
pub enum IdError {
    #[error("Failed to generate UUID: system clock is before the Unix epoch: {0}")]
    Clock(#[from] SystemTimeError),
}
