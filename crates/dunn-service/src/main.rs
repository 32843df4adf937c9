//! Dunn Service - HTTP API for recurring invoice billing
//!
//! This is the main entry point for the dunn service.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dunn_service::demo::{seed_demo_data, ApprovingGateway, FlatRates};
use dunn_service::{create_router, AppState, ServiceConfig};
use dunn_store::MemoryStore;

/// Demo customers seeded at startup.
const DEMO_CUSTOMERS: usize = 20;

/// Pending invoices per demo customer.
const DEMO_INVOICES_PER_CUSTOMER: usize = 5;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,dunn=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Dunn Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        retry_limit = config.billing.retry_limit,
        seed_demo_data = config.seed_demo_data,
        "Service configuration loaded"
    );

    let store = Arc::new(MemoryStore::new());
    if config.seed_demo_data {
        seed_demo_data(store.as_ref(), DEMO_CUSTOMERS, DEMO_INVOICES_PER_CUSTOMER)?;
    }

    // Stub collaborators until real gateway/rate integrations are wired in
    let state = AppState::new(
        store,
        Arc::new(ApprovingGateway),
        Arc::new(FlatRates),
        config.clone(),
    );

    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
