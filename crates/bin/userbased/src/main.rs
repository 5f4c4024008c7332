//! # userbased — userbase daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Create the `PostgreSQL` connection pool and ensure the `users` table
//! - Construct the repository, the user service and the axum router
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT) and close the pool
//!
//! Any failure before the listener is bound terminates the process with a
//! non-zero exit status; no request is ever served.
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use userbase_adapter_http_axum::state::AppState;
use userbase_adapter_storage_postgres_sqlx::{PostgresUserRepository, StorageError};
use userbase_app::services::user_service::UserService;

use crate::config::Config;

/// Errors that abort the daemon.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    /// Pool creation or schema bootstrap failed.
    #[error("storage initialization failed: {0}")]
    Storage(#[from] StorageError),
    /// Binding or serving the listener failed.
    #[error("server failure: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("userbased: {err}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging.filter);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "userbased terminated");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(filter: &str) {
    let (env_filter, rejected) = parse_filter(filter);
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Some(err) = rejected {
        tracing::warn!(filter, error = %err, "invalid log filter, falling back to info");
    }
}

/// Parse a filter directive, falling back to `info` and returning the
/// parse error when it is invalid.
fn parse_filter(filter: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(filter) {
        Ok(env_filter) => (env_filter, None),
        Err(err) => (EnvFilter::new("info"), Some(err)),
    }
}

async fn run(config: Config) -> Result<(), StartupError> {
    // Database
    let db = config.storage_config().build().await?;

    // Repository & service
    let user_repo = PostgresUserRepository::new(db.pool().clone());
    let user_service = UserService::new(user_repo);

    // HTTP
    let state = AppState::new(user_service);
    let app = userbase_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            db.close().await;
            return Err(err.into());
        }
    };
    tracing::info!(%bind_addr, "userbased listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    db.close().await;
    served?;

    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::warn!("received Ctrl+C, shutting down"),
        () = terminate => tracing::warn!("received SIGTERM, shutting down"),
    }
}
