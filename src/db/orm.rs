use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, ExecResult, Statement,
    TransactionTrait,
};
use std::time::Duration;
use tracing::{debug, error, info};

use super::dsn::{connection_url_with, mask_dsn};
use super::naming::NamingStrategy;
use super::pool::session_options;
use super::settings::PoolSettings;
use super::PING_TIMEOUT;
use crate::config::{DbConfig, LogLevel};
use crate::error::DbError;

/// Behaviour flags applied on top of the raw connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrmBehavior {
    pub skip_default_transaction: bool,
    pub prepare_stmt: bool,
    pub singular_table: bool,
    pub disable_foreign_key: bool,
}

impl OrmBehavior {
    pub fn from_config(config: &DbConfig) -> Self {
        Self {
            skip_default_transaction: config.skip_default_txn,
            prepare_stmt: config.prepare_stmt,
            singular_table: config.singular_table,
            disable_foreign_key: config.disable_foreign_key,
        }
    }
}

/// A sea-orm connection opened by [`init_orm`].
#[derive(Debug, Clone)]
pub struct Orm {
    conn: DatabaseConnection,
    behavior: OrmBehavior,
}

impl Orm {
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    pub fn behavior(&self) -> OrmBehavior {
        self.behavior
    }

    pub fn into_inner(self) -> DatabaseConnection {
        self.conn
    }

    pub fn table_name(&self, model: &str) -> String {
        NamingStrategy::new(self.behavior.singular_table).table_name(model)
    }

    pub async fn ping(&self) -> Result<(), DbError> {
        ping_with_timeout(&self.conn, PING_TIMEOUT).await
    }

    /// Run a single write statement. Unless `skip_default_transaction` is set
    /// the statement gets its own transaction.
    pub async fn execute_write(&self, sql: &str) -> Result<ExecResult, DbError> {
        let backend = self.conn.get_database_backend();
        let stmt = Statement::from_string(backend, sql.to_owned());

        if self.behavior.skip_default_transaction {
            return Ok(self.conn.execute(stmt).await?);
        }

        let txn = self.conn.begin().await?;
        let result = txn.execute(stmt).await?;
        txn.commit().await?;
        Ok(result)
    }

    /// Run schema statements in order on a single connection.
    pub async fn migrate(&self, statements: &[&str]) -> Result<(), DbError> {
        let disable_fk = self.behavior.disable_foreign_key;
        // The transaction pins one pooled connection so the session variable applies.
        let txn = self.conn.begin().await?;

        if disable_fk {
            txn.execute_unprepared("SET FOREIGN_KEY_CHECKS = 0").await?;
        }

        let mut outcome = Ok(());
        for (index, sql) in statements.iter().enumerate() {
            debug!("Running migration statement {}/{}", index + 1, statements.len());
            if let Err(e) = txn.execute_unprepared(sql).await {
                error!("❌ Migration statement {} failed: {}", index + 1, e);
                outcome = Err(e);
                break;
            }
        }

        if disable_fk {
            txn.execute_unprepared("SET FOREIGN_KEY_CHECKS = 1").await?;
        }

        outcome?;
        txn.commit().await?;
        info!("✅ Applied {} migration statements", statements.len());
        Ok(())
    }
}

/// Build the sea-orm options for a config without opening anything.
pub fn connect_options(config: &DbConfig) -> ConnectOptions {
    let extra: &[(&str, &str)] = if config.prepare_stmt {
        &[]
    } else {
        &[("statement-cache-capacity", "0")]
    };

    let mut opt = ConnectOptions::new(connection_url_with(config, extra));
    opt.connect_timeout(PING_TIMEOUT)
        .map_sqlx_mysql_opts(session_options);

    let pool = PoolSettings::from_config(config);
    if let Some(max) = pool.max_connections {
        opt.max_connections(max);
    }
    if let Some(min) = pool.min_connections {
        opt.min_connections(min);
    }
    if let Some(lifetime) = pool.max_lifetime {
        opt.max_lifetime(lifetime);
    }
    if let Some(idle) = pool.idle_timeout {
        opt.idle_timeout(idle);
    }

    let level = config.log_level();
    opt.sqlx_logging(level != LogLevel::Silent)
        .sqlx_logging_level(level.level_filter());

    if config.slow_threshold > 0 {
        opt.sqlx_slow_statements_logging_settings(
            log::LevelFilter::Warn,
            Duration::from_millis(config.slow_threshold),
        );
    }

    opt
}

/// Open a sea-orm connection, apply pool settings and verify it with a bounded ping.
pub async fn init_orm(config: &DbConfig) -> Result<Orm, DbError> {
    let opt = connect_options(config);
    info!("🔌 Initiating database connection to: {}", mask_dsn(opt.get_url()));

    let pool = PoolSettings::from_config(config);
    info!("📊 Database connection pool configuration:");
    info!("  - Max connections: {:?}", pool.max_connections);
    info!("  - Min connections: {:?}", pool.min_connections);
    info!("  - Max lifetime: {:?}", pool.max_lifetime);
    info!("  - Idle timeout: {:?}", pool.idle_timeout);

    let conn = Database::connect(opt).await.map_err(|e| {
        error!("❌ Database connection failed: {}", e);
        DbError::Connect(e)
    })?;

    ping_with_timeout(&conn, PING_TIMEOUT).await?;
    info!("✅ Database connection established successfully");

    Ok(Orm {
        conn,
        behavior: OrmBehavior::from_config(config),
    })
}

/// Close a connection opened by [`init_orm`]. `None` is a no-op.
pub async fn close_orm(orm: Option<Orm>) -> Result<(), DbError> {
    let Some(orm) = orm else {
        return Ok(());
    };

    orm.conn.close().await.map_err(DbError::Close)?;
    info!("Database connection closed");
    Ok(())
}

async fn ping_with_timeout(conn: &DatabaseConnection, limit: Duration) -> Result<(), DbError> {
    match tokio::time::timeout(limit, conn.ping()).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
            error!("❌ Database health check failed: {}", e);
            Err(DbError::HealthCheck(e))
        }
        Err(_) => {
            error!("❌ Database health check timed out after {:?}", limit);
            Err(DbError::HealthCheckTimeout(limit))
        }
    }
}
