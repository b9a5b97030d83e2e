//! # PayPal Configuration
//!
//! Configuration management for the PayPal integration.
//! All secrets are loaded from environment variables. The mode is fixed
//! at startup; there is no runtime switching between sandbox and live.

use checkout_core::CheckoutError;
use std::env;

/// PayPal environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayPalMode {
    /// Sandbox/testing environment (default)
    Sandbox,
    /// Live environment
    Live,
}

impl PayPalMode {
    /// The API host for this mode
    pub fn base_url(&self) -> &'static str {
        match self {
            PayPalMode::Sandbox => "https://api-m.sandbox.paypal.com",
            PayPalMode::Live => "https://api-m.paypal.com",
        }
    }

    fn parse(value: &str) -> Result<Self, CheckoutError> {
        match value {
            "sandbox" => Ok(PayPalMode::Sandbox),
            "live" => Ok(PayPalMode::Live),
            other => Err(CheckoutError::Configuration(format!(
                "PAYPAL_MODE must be \"sandbox\" or \"live\", got \"{}\"",
                other
            ))),
        }
    }
}

impl std::fmt::Display for PayPalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayPalMode::Sandbox => write!(f, "sandbox"),
            PayPalMode::Live => write!(f, "live"),
        }
    }
}

/// PayPal API configuration
#[derive(Debug, Clone)]
pub struct PayPalConfig {
    /// REST app client ID
    pub client_id: String,

    /// REST app client secret
    pub client_secret: String,

    /// Environment, fixed at startup
    pub mode: PayPalMode,

    /// API base URL (overridable for testing against a mock server)
    pub api_base_url: String,
}

impl PayPalConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `PAYPAL_CLIENT_ID`
    /// - `PAYPAL_CLIENT_SECRET`
    ///
    /// Optional:
    /// - `PAYPAL_MODE` ("sandbox" or "live", defaults to sandbox)
    pub fn from_env() -> Result<Self, CheckoutError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let client_id = env::var("PAYPAL_CLIENT_ID").map_err(|_| {
            CheckoutError::Configuration("PAYPAL_CLIENT_ID not set".to_string())
        })?;

        let client_secret = env::var("PAYPAL_CLIENT_SECRET").map_err(|_| {
            CheckoutError::Configuration("PAYPAL_CLIENT_SECRET not set".to_string())
        })?;

        let mode = match env::var("PAYPAL_MODE") {
            Ok(value) => PayPalMode::parse(&value)?,
            Err(_) => PayPalMode::Sandbox,
        };

        Self::build(client_id, client_secret, mode)
    }

    /// Create config with explicit values (for testing)
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        mode: PayPalMode,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            mode,
            api_base_url: mode.base_url().to_string(),
        }
    }

    fn build(
        client_id: String,
        client_secret: String,
        mode: PayPalMode,
    ) -> Result<Self, CheckoutError> {
        if client_id.is_empty() {
            return Err(CheckoutError::Configuration(
                "PAYPAL_CLIENT_ID is empty".to_string(),
            ));
        }
        if client_secret.is_empty() {
            return Err(CheckoutError::Configuration(
                "PAYPAL_CLIENT_SECRET is empty".to_string(),
            ));
        }

        Ok(Self {
            client_id,
            client_secret,
            mode,
            api_base_url: mode.base_url().to_string(),
        })
    }

    /// Check if running against the sandbox
    pub fn is_sandbox(&self) -> bool {
        self.mode == PayPalMode::Sandbox
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}
