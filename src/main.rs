use anyhow::bail;
use dotenv::dotenv;
use mysql_bootstrap::db::{close_orm, close_pool, format_dsn, init_orm, init_sqlx, mask_dsn};
use mysql_bootstrap::{generate_uuid, DbConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Client {
    Orm,
    Sqlx,
}

impl Client {
    fn parse(name: &str) -> anyhow::Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "" | "orm" => Ok(Client::Orm),
            "sqlx" => Ok(Client::Sqlx),
            other => bail!("Unknown DB_CLIENT {:?}, expected \"orm\" or \"sqlx\"", other),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mysql_bootstrap=info".parse()?)
                .add_directive("sea_orm=warn".parse()?)
                .add_directive("sqlx=warn".parse()?),
        )
        .init();

    let config = DbConfig::from_env()?;
    let client = Client::parse(&std::env::var("DB_CLIENT").unwrap_or_default())?;
    println!("DSN: {}", mask_dsn(&format_dsn(&config)));

    match client {
        Client::Sqlx => {
            let pool = init_sqlx(&config)?;
            sqlx::query("SELECT 1").execute(&pool).await?;
            tracing::info!("sqlx pool answered SELECT 1");
            close_pool(Some(pool)).await;
        }
        Client::Orm => {
            let orm = init_orm(&config).await?;
            tracing::info!(
                "Connected; model `UserProfile` maps to table `{}`",
                orm.table_name("UserProfile")
            );
            close_orm(Some(orm)).await?;
        }
    }

    println!("UUID: {}", generate_uuid()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_parse() {
        assert_eq!(Client::parse("").unwrap(), Client::Orm);
        assert_eq!(Client::parse("ORM").unwrap(), Client::Orm);
        assert_eq!(Client::parse("sqlx").unwrap(), Client::Sqlx);
    }

    #[test]
    fn test_client_parse_rejects_unknown() {
        let err = Client::parse("gorm").unwrap_err();
        assert!(err.to_string().contains("gorm"));
    }
}
