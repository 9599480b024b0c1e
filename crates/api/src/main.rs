use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vca_api::config::ServerConfig;
use vca_api::proxy::UpstreamClient;
use vca_api::router::build_app_router;
use vca_api::state::AppState;
use vca_jobs::broker::{RedisJobChannel, RedisResultStore};
use vca_jobs::{Poller, ResultStore, Submitter};
use vca_render::RendererClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vca_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = vca_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    vca_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    vca_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Job channel / result store (Redis) ---
    let redis_url =
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".into());

    let redis = vca_jobs::broker::connect(&redis_url)
        .await
        .expect("Failed to connect to Redis");
    tracing::info!(queue = %config.job_queue_key, "Job channel connected");

    let channel = Arc::new(RedisJobChannel::new(
        redis.clone(),
        config.job_queue_key.clone(),
    ));
    let result_store: Arc<dyn ResultStore> = Arc::new(RedisResultStore::new(redis));

    let submitter = Arc::new(Submitter::new(channel));
    let poller = Arc::new(Poller::new(result_store.clone()));

    // --- External service clients ---
    let renderer = Arc::new(RendererClient::new(
        config.renderer_url.clone(),
        config.renderer_token.clone(),
    ));
    let financing = Arc::new(UpstreamClient::new(&config.financing));
    let inspections = Arc::new(UpstreamClient::new(&config.inspections));
    let customers = Arc::new(UpstreamClient::new(&config.customers));

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        submitter,
        poller,
        result_store,
        renderer,
        financing,
        inspections,
        customers,
    };

    // --- Router ---
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

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // No background tasks to drain: submit/poll are single-shot calls that
    // run to completion before the server finishes shutting down.
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server shuts
/// down cleanly whether stopped interactively or by a process manager.
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
