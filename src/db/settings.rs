use crate::config::DbConfig;
use std::time::Duration;

/// Pool limits resolved from [`DbConfig`]. `None` leaves the driver default in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub max_lifetime: Option<Duration>,
    pub idle_timeout: Option<Duration>,
}

impl PoolSettings {
    pub fn from_config(config: &DbConfig) -> Self {
        let max_connections = positive(config.max_open_conns);

        // Idle connections can never exceed the open limit.
        let min_connections = positive(config.max_idle_conns).map(|idle| match max_connections {
            Some(max) => idle.min(max),
            None => idle,
        });

        Self {
            max_connections,
            min_connections,
            max_lifetime: positive(config.conn_max_lifetime).map(Duration::from_secs),
            idle_timeout: positive(config.conn_max_idle_time).map(Duration::from_secs),
        }
    }
}

fn positive<T: PartialOrd + Default>(value: T) -> Option<T> {
    if value > T::default() {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_values_keep_driver_defaults() {
        assert_eq!(
            PoolSettings::from_config(&DbConfig::default()),
            PoolSettings::default()
        );
    }

    #[test]
    fn test_pool_settings_from_config() {
        let config = DbConfig {
            max_idle_conns: 10,
            max_open_conns: 100,
            conn_max_lifetime: 3600,
            conn_max_idle_time: 600,
            ..DbConfig::default()
        };
        let settings = PoolSettings::from_config(&config);

        assert_eq!(settings.max_connections, Some(100));
        assert_eq!(settings.min_connections, Some(10));
        assert_eq!(settings.max_lifetime, Some(Duration::from_secs(3600)));
        assert_eq!(settings.idle_timeout, Some(Duration::from_secs(600)));
    }

    #[test]
    fn test_idle_connections_clamped_to_open_limit() {
        let config = DbConfig {
            max_idle_conns: 20,
            max_open_conns: 5,
            ..DbConfig::default()
        };
        assert_eq!(PoolSettings::from_config(&config).min_connections, Some(5));
    }
}
