//! Podium server entry point.

use std::error::Error;
use std::sync::Arc;

use podium_core::clock::SystemClock;
use podium_core::source::CatalogSource;
use podium_server::config::Config;
use podium_server::routes;
use podium_server::state::AppState;
use podium_site::sources::{BuiltinCatalogSource, FileCatalogSource};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Podium server");

    let config = Config::from_env()?;

    let catalog_source: Arc<dyn CatalogSource> = match &config.catalog_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "serving catalog from file");
            Arc::new(FileCatalogSource::new(path.clone()))
        }
        None => {
            tracing::info!("serving built-in catalog");
            Arc::new(BuiltinCatalogSource)
        }
    };

    let app_state = AppState::new(catalog_source, Arc::new(SystemClock));
    let app = routes::build_app(app_state);

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
