use std::sync::Arc;

use account_service::config::Config;
use account_service::domain::account::service::AccountService;
use account_service::inbound::http::router::create_router;
use account_service::outbound::repositories::PostgresUserDirectory;
use chrono::Duration;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "account-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // Fatal on error: without a signing key nothing may be served.
    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_minutes = config.auth.token_ttl_minutes,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let directory = Arc::new(PostgresUserDirectory::new(pg_pool));
    let account_service = Arc::new(AccountService::new(
        directory,
        config.auth.secret.as_bytes(),
        Duration::minutes(config.auth.token_ttl_minutes),
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(account_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
