//! Demo server for localized JSON responses.
//!
//! Serves one route per response shape so the localized bodies can be
//! inspected with any HTTP client:
//!
//! ```text
//! GET /test-bad-request      → 400 CLT001
//! GET /test-not-found        → 404 CLT002
//! GET /test-unauthorized     → 401 AUT001
//! GET /test-field-required   → 400 VAL001 (field = "email")
//! GET /test-username-length  → 400 VAL002 (untranslated key)
//! GET /test-field            → 400 VAL001 (field = "อีเมล")
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use localized_response::config::{load_config, validation::validate_config, ConfigError, ServerConfig};
use localized_response::http::HttpServer;
use localized_response::observability::logging;

#[derive(Parser)]
#[command(name = "localized-response")]
#[command(about = "Demo server for localized JSON response bodies", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override i18n.language.
    #[arg(short, long)]
    language: Option<String>,
}

fn resolve_config(cli: &Cli) -> Result<ServerConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
    }
    if let Some(language) = &cli.language {
        config.i18n.language = language.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    logging::init(&config.observability)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        language = %config.i18n.language,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
