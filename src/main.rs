// [library] Error handling crate - startup failures bubble out of main and end the process
use anyhow::Result;

use rifas::{config::Config, db::create_pool, web};

// [library] Tower ecosystem - request/response tracing middleware
use tower_http::trace::TraceLayer;

// [library] Tokio signal handling for graceful shutdown
use tokio::signal;

// [library] Structured logging framework
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // [library] Initialize structured logging; RUST_LOG overrides the default filter
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("rifas=info,tower_http=debug")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    info!("Starting rifas - raffle participants and winners service");

    let config = Config::from_env()?;
    let bind_address = config.bind_address();

    // [business] Unreachable database or failed table creation is fatal
    info!("Connecting to MySQL at {}:{}...", config.db_host, config.db_port);
    let db = create_pool(&config).await?;
    info!("Database connection established and tables ready");

    let app = web::create_app_router(db, config).layer(TraceLayer::new_for_http());

    info!("Server listening on http://{}", bind_address);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

// [business] Resolves on Ctrl+C or SIGTERM so in-flight requests can drain
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => warn!("Received Ctrl+C, shutting down"),
        _ = terminate => warn!("Received SIGTERM, shutting down"),
    }
}
