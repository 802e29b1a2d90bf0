//! HTTP server initialization and runtime setup.
//!
//! Builds the provider client, starts the initial catalog load and runs the
//! Axum server until Ctrl-C.

use crate::api::middleware::rate_limit;
use crate::config::Config;
use crate::domain::options::RankingOptions;
use crate::domain::repositories::CountrySource;
use crate::infrastructure::rest_countries::RestCountriesClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - REST Countries client
/// - Catalog preload in the background (unless disabled)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = RestCountriesClient::new(&config.countries_api_url, config.http_timeout())?;
    tracing::info!(base = %client.endpoints().base(), "Countries client ready");

    let source: Arc<dyn CountrySource> = Arc::new(client);
    let options = RankingOptions::default().with_page_size(config.page_size);
    let state = AppState::new(source, options);

    if config.preload_catalog {
        let catalog = state.catalog.clone();
        tokio::spawn(async move {
            catalog.load().await;
        });
        tracing::info!("Catalog preload started");
    } else {
        tracing::info!("Catalog preload disabled, waiting for refresh");
    }

    let limiter = rate_limit::layer(config.rate_limit_per_second, config.rate_limit_burst)?;
    let app = app_router(state, Some(limiter));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
