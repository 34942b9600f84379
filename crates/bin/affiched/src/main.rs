//! # affiched
//!
//! Server binary — the composition root.
//!
//! Loads configuration, initializes logging, opens the database, wires the
//! adapters to the application services, and serves HTTP until a shutdown
//! signal arrives.

use affiche_adapter_http_axum::router;
use affiche_adapter_http_axum::state::AppState;
use affiche_adapter_storage_sqlite_sqlx::SqlitePosterRepository;
use affiche_adapter_storage_sqlite_sqlx::pool;
use affiche_app::extractor::HeuristicDateExtractor;
use affiche_app::services::extraction_service::ExtractionService;
use affiche_app::services::poster_service::PosterService;
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let database = pool::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;

    let poster_repo = SqlitePosterRepository::new(database.pool().clone());
    let poster_service = PosterService::new(poster_repo);
    let extraction_service = ExtractionService::new(HeuristicDateExtractor::new());

    let state = AppState::new(poster_service, extraction_service);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(address = %bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down cleanly");
    Ok(())
}

/// Resolve when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install ctrl-c handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install sigterm handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received ctrl-c, shutting down"),
        () = terminate => tracing::info!("received sigterm, shutting down"),
    }
}
