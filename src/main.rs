use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::anyhow;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tts_websocket::config::{ConfigError, MISSING_CREDENTIALS_HINT};
use tts_websocket::{AppState, ServerConfig, routes, runtime};

/// Serves a page carrying an authenticated Play.ht websocket URL
#[derive(Parser, Debug)]
#[command(name = "tts-websocket")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if it exists (must be done before config loading)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Configuration and platform checks run once, before anything is bound
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            report_config_error(&e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = runtime::check_toolchain() {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    match serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<ServerConfig, ConfigError> {
    match path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            ServerConfig::from_file(path)
        }
        None => ServerConfig::from_env(),
    }
}

fn report_config_error(e: &ConfigError) {
    match e {
        ConfigError::MissingCredentials(missing) => {
            for name in missing {
                error!("{name} not found in environment.");
            }
            error!("{MISSING_CREDENTIALS_HINT}");
        }
        other => error!("{other}"),
    }
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    info!("USER_ID = {}", config.masked_user_id());
    info!("API_KEY = {}", config.masked_api_key());
    info!(
        model = %config.model,
        api_version = %config.api_version,
        auth_url = %config.auth_url,
        template = %config.template_path.display(),
        "Configuration loaded"
    );

    let address = config.address();
    let socket_addr: SocketAddr = address
        .parse()
        .map_err(|e| anyhow!("Invalid server address '{}': {}", address, e))?;

    let app = routes::create_router(AppState::new(config));

    let listener = TcpListener::bind(&socket_addr)
        .await
        .map_err(|e| anyhow!("Failed to bind {}: {}", socket_addr, e))?;
    info!("*** Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
