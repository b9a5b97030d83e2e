//! # Application State
//!
//! Shared state for the Axum application: the payment gateway, the
//! session store, and the redirect URLs, all constructed once at process
//! start and injected into the handlers.

use checkout_core::{BoxedPaymentGateway, BoxedSessionStore, MemorySessionStore, RedirectUrls};
use checkout_paypal::PayPalGateway;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Base URL handed to the provider as the redirect target
    pub base_url: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8880),
            base_url: std::env::var("BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8880".to_string()),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<std::net::SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment gateway
    pub gateway: BoxedPaymentGateway,
    /// Per-browser-session storage
    pub sessions: BoxedSessionStore,
    /// Redirect targets for the create leg
    pub urls: RedirectUrls,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create the production state: PayPal gateway from the environment,
    /// in-memory session store.
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let urls = RedirectUrls::new(&config.base_url);

        let gateway = PayPalGateway::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize PayPal: {}", e))?;

        Ok(Self::with_parts(
            Arc::new(gateway),
            Arc::new(MemorySessionStore::new()),
            urls,
            config,
        ))
    }

    /// Assemble state from explicit parts (used by tests to substitute a
    /// fake gateway or a pre-seeded session store)
    pub fn with_parts(
        gateway: BoxedPaymentGateway,
        sessions: BoxedSessionStore,
        urls: RedirectUrls,
        config: AppConfig,
    ) -> Self {
        Self {
            gateway,
            sessions,
            urls,
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("BASE_URL");

        let config = AppConfig::from_env();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8880);
        assert_eq!(config.base_url, "http://localhost:8880");
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8880,
            base_url: "http://localhost:8880".to_string(),
            environment: "test".to_string(),
        };

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:8880");
    }
}
