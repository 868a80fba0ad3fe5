//! API Server Entry Point
//!
//! Uses `anyhow` for startup errors; request errors go through
//! `kernel::error::AppError` inside the feature crates.

use api::{build_router, config::Config, cors_layer};
use auth::{AuthConfig, PgUserRepository};
use bookmark::PgBookmarkRepository;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,bookmark=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_config = AuthConfig::new(config.token, config.password);

    // Build router
    let app = build_router(
        PgUserRepository::new(pool.clone()),
        PgBookmarkRepository::new(pool),
        auth_config,
        &config.api_prefix,
    )
    .layer(TraceLayer::new_for_http())
    .layer(cors_layer(config.frontend_origins));

    // Start server
    tracing::info!(prefix = %config.api_prefix, "Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
