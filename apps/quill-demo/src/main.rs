//! Quill demo server
//!
//! Small axum app wired with every logging observer. Configure with
//! `QUILL_ADDR`, `QUILL_SINK` and `RUST_LOG` (a `.env` file is honoured).

mod config;
mod routes;

use anyhow::{Context, Result};
use quill_core::{important, SemanticLogger};
use quill_http::HttpLogging;
use std::net::SocketAddr;
use tracing::info;

use config::DemoConfig;

/// Initialize tracing with a compact, colored console layer
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    // RUST_LOG takes precedence
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,quill_core=debug,quill_http=debug"));

    let console_layer = fmt::layer()
        .with_ansi(true)
        .compact()
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = DemoConfig::from_env()?;
    info!(addr = %config.addr, sink = ?config.sink, "Starting demo server");

    let logging = HttpLogging::with_shared_sink(config.sink.into_sink());
    let app = logging.apply(routes::router());

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    SemanticLogger::Setup.line(format!("listening on http://{}", config.addr), &[]);
    important(SemanticLogger::Info, "quill demo ready");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("server error")?;

    Ok(())
}
