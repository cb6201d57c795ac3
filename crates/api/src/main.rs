use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use assetline_api::config::{DatabaseConfig, ServerConfig, DEFAULT_LOG_FILTER};
use assetline_api::router::build_app_router;
use assetline_api::state::AppState;
use assetline_db::{PgLifecycleStore, PgReferenceResolver};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("LOG_FORMAT").is_ok_and(|f| f == "json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");
    let db_config = DatabaseConfig::from_env().expect("Invalid database configuration");
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let pool = assetline_db::create_pool(&db_config.url, db_config.max_connections)
        .await
        .expect("Failed to connect to database");
    tracing::info!(
        max_connections = db_config.max_connections,
        "Database connection pool created"
    );

    assetline_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    assetline_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- App state ---
    let state = AppState {
        store: Arc::new(PgLifecycleStore::new(pool.clone())),
        resolver: Arc::new(PgReferenceResolver::new(pool.clone())),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    let shutdown_started = Arc::new(Notify::new());
    let server = axum::serve(listener, app)
        .with_graceful_shutdown({
            let shutdown_started = Arc::clone(&shutdown_started);
            async move {
                shutdown_signal().await;
                shutdown_started.notify_one();
            }
        })
        .into_future();

    let drain = Duration::from_secs(config.shutdown_timeout_secs);
    tokio::select! {
        result = server => result.expect("Server error"),
        () = async {
            shutdown_started.notified().await;
            tokio::time::sleep(drain).await;
        } => {
            tracing::warn!(
                shutdown_timeout_secs = config.shutdown_timeout_secs,
                "In-flight requests did not drain in time, stopping anyway"
            );
        }
    }

    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
