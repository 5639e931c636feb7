use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use portal_backend::{api, AppState, Config, Database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = Config::from_env()?;

    let db = Database::open(&config.db_path);
    // Fail fast on an unreadable store; this also creates the file if missing
    db.read().await?;
    tracing::info!(path = %config.db_path.display(), "Store ready");

    let state = Arc::new(AppState { db });
    let app = api::router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!(
        static_dir = %config.static_dir.display(),
        "Server listening on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
