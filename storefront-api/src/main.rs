use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use storefront_api::{app, app_config::Config, AppState};
use storefront_catalog::{Catalog, DeliveryOptionTable};
use storefront_order::{OrderCalculator, SystemClock};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront_api=debug,storefront_order=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;

    let catalog = Catalog::load(&config.catalog.products_path)
        .with_context(|| format!("Failed to load catalog from {}", config.catalog.products_path.display()))?;

    let calculator = OrderCalculator::new(Arc::new(catalog), Arc::new(DeliveryOptionTable::standard()))
        .with_promotion(config.promotion);

    let app_state = AppState {
        calculator: Arc::new(calculator),
        clock: Arc::new(SystemClock),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Server running at http://localhost:{}", config.server.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
