use std::future::IntoFuture;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_content::{ContentClient, ContentConfig};
use folio_web::config::ServerConfig;
use folio_web::export::export_site;
use folio_web::router::build_app_router;
use folio_web::state::AppState;

#[derive(Parser)]
#[command(name = "folio-web", version, about = "Portfolio site server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the site over HTTP (default).
    Serve,
    /// Pre-render every page into a directory of static HTML files.
    Export {
        #[arg(long, env = "EXPORT_DIR", default_value = "dist")]
        out_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "folio_web=debug,folio_content=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    let content_config = ContentConfig::from_env().context("Invalid content configuration")?;
    if content_config.project_id.is_none() {
        tracing::warn!("SANITY_PROJECT_ID is not set; pages will render their empty states");
    }
    tracing::info!(
        dataset = %content_config.dataset,
        api_version = %content_config.api_version,
        use_cdn = content_config.use_cdn,
        "Loaded content configuration"
    );

    // --- Content store ---
    let content =
        Arc::new(ContentClient::new(content_config).context("Failed to build content client")?);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config, content).await,
        Command::Export { out_dir } => {
            let report = export_site(content.as_ref(), &config.site, &out_dir).await?;
            for slug in &report.skipped {
                tracing::warn!(%slug, "Skipped project page");
            }
            Ok(())
        }
    }
}

async fn serve(config: ServerConfig, content: Arc<ContentClient>) -> anyhow::Result<()> {
    let state = AppState {
        config: Arc::new(config.clone()),
        content,
    };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let host = config
        .host
        .parse::<IpAddr>()
        .with_context(|| format!("Invalid HOST address {:?}", config.host))?;
    let addr = SocketAddr::new(host, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .into_future();
    let drain = Duration::from_secs(config.shutdown_timeout_secs);
    tokio::select! {
        result = server => result.context("Server error")?,
        () = async {
            shutdown_requested().await;
            tokio::time::sleep(drain).await;
        } => {
            tracing::warn!(
                timeout_secs = config.shutdown_timeout_secs,
                "Shutdown timed out, dropping open connections"
            );
        }
    }

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    shutdown_requested().await;
    tracing::info!("Starting graceful shutdown");
}

async fn shutdown_requested() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl-C");
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
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
