use std::{sync::OnceLock, time::Duration};

use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use tokio_postgres::NoTls;
use tracing::{info, instrument};

use crate::config::{DbConnectConfig, DbOptionsConfig};

static SQL_DATABASE_POOL: OnceLock<Pool> = OnceLock::new();

fn pg_config<C>(config: &C) -> Result<tokio_postgres::Config, anyhow::Error>
where
    C: DbConnectConfig,
{
    if let Some(uri) = config.uri() {
        return Ok(uri.parse::<tokio_postgres::Config>()?);
    }

    let mut pg_config = tokio_postgres::Config::new();
    pg_config
        .host(config.host())
        .port(config.port())
        .user(config.username())
        .dbname(config.name());
    if !config.password().is_empty() {
        pg_config.password(config.password());
    }
    Ok(pg_config)
}

/// Builds a pool and proves it can reach the server with one round-trip.
#[instrument(skip_all, name = "build-pgsql-pool")]
pub async fn build_postgres_pool<C>(config: &C) -> Result<Pool, anyhow::Error>
where
    C: DbConnectConfig + DbOptionsConfig,
{
    let pg_config = pg_config(config)?;

    info!(
        postgres.host = config.host(),
        postgres.port = config.port(),
        postgres.name = config.name(),
        postgres.from_uri = config.uri().is_some(),
        postgres.max_conn = ?config.max_conn(),
    );

    let mgr_config = ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    };
    let mgr = Manager::from_config(pg_config, NoTls, mgr_config);

    let mut pool_builder = Pool::builder(mgr)
        .runtime(deadpool_postgres::Runtime::Tokio1)
        .wait_timeout(Some(Duration::from_millis(config.wait_timeout_ms())))
        .create_timeout(Some(Duration::from_millis(
            config.create_timeout_ms(),
        )))
        .recycle_timeout(Some(Duration::from_millis(100)));

    if let Some(max_conn) = config.max_conn() {
        pool_builder = pool_builder.max_size(max_conn as usize);
    }

    let pool = pool_builder.build()?;

    let client = pool.get().await?;
    client.query_one("SELECT 1", &[]).await?;
    drop(client);

    info!("PostgreSQL connection verified");
    Ok(pool)
}

#[instrument(skip_all, name = "connect-pgsql")]
pub async fn connect_postgres_db<C>(config: &C) -> Result<(), anyhow::Error>
where
    C: DbConnectConfig + DbOptionsConfig,
{
    let pool = build_postgres_pool(config).await?;

    if SQL_DATABASE_POOL.set(pool).is_err() {
        anyhow::bail!("SQL database pool already established");
    }

    Ok(())
}

pub fn get_sql_pool() -> &'static Pool {
    SQL_DATABASE_POOL
        .get()
        .expect("SQL database pool not established")
}
