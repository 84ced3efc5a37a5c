//! Configuration loading from environment.

use std::env;

use esewa_hex::GatewayConfig;
use esewa_types::SecretKey;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub gateway: GatewayConfig,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Missing gateway credentials do not abort startup; the payment
    /// operation reports the configuration error per request instead.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let gateway = GatewayConfig {
            product_code: env::var("ESEWA_MERCHANT_CODE").unwrap_or_default(),
            secret_key: SecretKey::new(env::var("ESEWA_SECRET_KEY").unwrap_or_default()),
            callback_url: env::var("ESEWA_PAYMENT_CALLBACK_URL").unwrap_or_default(),
        };

        Ok(Self { port, gateway })
    }
}
