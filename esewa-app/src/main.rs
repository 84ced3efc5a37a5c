//! # eSewa Gateway Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the HMAC signer adapter
//! - Create the payment service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use esewa_hex::{PaymentService, inbound::HttpServer};
use esewa_signer::HmacSigner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,esewa_app=debug,esewa_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting eSewa gateway server on port {}", config.port);
    if config.gateway.secret_key.is_empty() {
        tracing::warn!("ESEWA_SECRET_KEY is not set; payment requests will fail");
    }

    // Create the payment service over the HMAC signer
    let service = PaymentService::new(HmacSigner::new(), config.gateway);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
