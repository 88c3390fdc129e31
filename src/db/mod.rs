//! MySQL connection setup for the sea-orm and sqlx client stacks.

pub mod dsn;
pub mod naming;
pub mod orm;
pub mod pool;
pub mod settings;

use std::time::Duration;

/// Upper bound on the liveness check and on acquiring the first connection.
pub const PING_TIMEOUT: Duration = Duration::from_secs(5);

pub use dsn::{connection_url, format_dsn, mask_dsn};
pub use naming::NamingStrategy;
pub use orm::{close_orm, init_orm, Orm, OrmBehavior};
pub use pool::{close_pool, init_sqlx, mysql_connect_options};
pub use settings::PoolSettings;
