//! gigbook-web - booking directory web service
//!
//! Startup order: parse arguments, load the TOML config, initialize logging,
//! resolve the final configuration, open the database (optionally reseeding
//! it), then serve until Ctrl+C or SIGTERM.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use gigbook_common::config::{AppConfig, ConfigOverrides, LoggingConfig, TomlConfig};
use gigbook_common::db::{init_database, seed};
use gigbook_web::{build_router, AppState};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for gigbook-web
#[derive(Parser, Debug)]
#[command(name = "gigbook-web")]
#[command(about = "Venue, artist and show booking directory")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "GIGBOOK_CONFIG")]
    config: Option<PathBuf>,

    /// SQLite database file
    #[arg(short, long, env = "GIGBOOK_DATABASE")]
    database: Option<PathBuf>,

    /// Interface to bind
    #[arg(long, env = "GIGBOOK_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "GIGBOOK_PORT")]
    port: Option<u16>,

    /// Key used to sign anti-forgery tokens
    #[arg(long, env = "GIGBOOK_SECRET_KEY", hide_env_values = true)]
    secret_key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Replace the database contents with sample data before serving
    #[arg(long)]
    seed: bool,
}

/// stderr output plus an optional plain-text log file
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("{},tower_http=info", logging.level)))
        .context("Invalid log level")?;

    let file_layer = match &logging.file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let toml = TomlConfig::load_or_default(args.config.as_deref())
        .context("Failed to load configuration file")?;

    let mut logging = toml.logging.clone();
    if let Some(level) = &args.log_level {
        logging.level = level.clone();
    }
    init_tracing(&logging)?;

    info!(
        "Starting gigbook-web v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let overrides = ConfigOverrides {
        database_path: args.database,
        host: args.host,
        port: args.port,
        secret_key: args.secret_key,
        log_level: args.log_level,
    };
    let config = AppConfig::resolve(overrides, toml);
    info!("Database path: {}", config.database_path.display());
    if !config.csrf_enabled {
        info!("Anti-forgery checks disabled by configuration");
    }

    let pool = init_database(&config.database_path)
        .await
        .context("Failed to initialize database")?;

    if args.seed {
        seed::seed(&pool, gigbook_common::time::now())
            .await
            .context("Failed to seed database")?;
    }

    let bind_addr = config.bind_addr();
    let state = AppState::new(pool, config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    info!("gigbook-web listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
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
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
