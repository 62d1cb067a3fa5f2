use std::net::SocketAddr;

use clap::Parser;
use sql_connection::PostgresDbConfig;

/// Single-page event manager backed by PostgreSQL.
#[derive(Parser, Debug, Clone)]
#[command(name = "event-manager", version, about)]
pub struct Cli {
    /// Address the HTTP listener binds to
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Full connection string; takes precedence over the individual
    /// `--db-*` settings
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    #[arg(long, env = "DB_USER", default_value = "postgres")]
    pub db_user: String,

    #[arg(long, env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
    pub db_password: String,

    #[arg(long, env = "DB_NAME", default_value = "events")]
    pub db_name: String,

    /// Upper bound on pooled connections
    #[arg(long, env = "DB_MAX_CONN", default_value_t = 16)]
    pub db_max_conn: u32,
}

impl From<&Cli> for PostgresDbConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            uri: cli.database_url.clone().filter(|uri| !uri.is_empty()),
            host: cli.db_host.clone(),
            port: cli.db_port,
            username: cli.db_user.clone(),
            password: cli.db_password.clone(),
            name: cli.db_name.clone(),
            max_conn: Some(cli.db_max_conn),
        }
    }
}
