mod config;

use std::process::ExitCode;

use axum::Router;
use clap::Parser;
use events_http::{EventHandlers, EventServices};
use sql_connection::{PostgresDbConfig, SqlConnect, connect_postgres_db};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let db_config = PostgresDbConfig::from(&cli);

    info!("Initializing connection pool...");
    connect_postgres_db(&db_config).await?;
    info!("PostgreSQL connection pool initialized");

    let event_services = EventServices::new(SqlConnect::from_global());

    let app = Router::new()
        .merge(EventHandlers::routes())
        .with_state(event_services)
        .layer(TraceLayer::new_for_http());

    info!("Event manager listening on {}", cli.bind);

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
}
