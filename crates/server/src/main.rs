//! dashboard-server: clinical question dashboard HTTP server binary entrypoint.

use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dashboard_server::config::Config;
use dashboard_server::source::QuestionSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = Config::from_env();

    let source = match &config.question_source_url {
        Some(url) => {
            tracing::info!(url = %url, "Serving questions from question service");
            QuestionSource::rest(url.clone(), config.question_page_size)
        }
        None => {
            tracing::info!("QUESTION_SOURCE_URL not set, serving built-in catalog");
            QuestionSource::fixture(dashboard_core::fixture::seed())
        }
    };

    if config.api_key.is_some() {
        tracing::info!("API key authentication enabled");
    } else {
        tracing::warn!("API key authentication disabled (no API_KEY env var)");
    }
    match &config.llm {
        Some(llm) => tracing::info!(model = %llm.model, "OpenAI API key configured, problem constructor enabled"),
        None => tracing::warn!("OPENAI_API_KEY not set, problem constructor disabled"),
    }
    tracing::info!("Rate limiting: {} requests/second", config.rate_limit_rps);

    let app = dashboard_server::build_app(source, &config);

    let addr: SocketAddr = config.bind_address.parse()?;
    tracing::info!("Starting dashboard server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
