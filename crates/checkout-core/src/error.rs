//! # Checkout Error Types
//!
//! Typed error handling for the checkout flow.
//! All checkout operations return `Result<T, CheckoutError>`.

use thiserror::Error;

/// Core error type for all checkout operations
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Configuration errors (missing credentials, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data (missing or malformed cart)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No cart stored in the session on the execute leg
    #[error("Cart not found")]
    CartNotFound,

    /// The session's payment was already executed
    #[error("Payment already processed: {payment_id}")]
    PaymentAlreadyProcessed { payment_id: String },

    /// The payment provider rejected a request
    #[error("Provider error [{provider}]: {message}")]
    ProviderRejected {
        provider: String,
        message: String,
        /// Provider-supplied detail payload, relayed to the caller on the
        /// create leg
        details: Option<serde_json::Value>,
    },

    /// Network/HTTP error communicating with the provider
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CheckoutError {
    /// Returns the HTTP status code appropriate for this error on the
    /// create leg. The execute leg surfaces provider rejections as 500
    /// instead; that mapping lives at the handler boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            CheckoutError::Configuration(_) => 500,
            CheckoutError::InvalidRequest(_) => 400,
            CheckoutError::CartNotFound => 400,
            CheckoutError::PaymentAlreadyProcessed { .. } => 400,
            CheckoutError::ProviderRejected { .. } => 400,
            CheckoutError::Network(_) => 500,
            CheckoutError::Serialization(_) => 500,
            CheckoutError::Internal(_) => 500,
        }
    }

    /// Returns true if the caller supplied bad input (as opposed to the
    /// provider or this service failing)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CheckoutError::InvalidRequest(_)
                | CheckoutError::CartNotFound
                | CheckoutError::PaymentAlreadyProcessed { .. }
        )
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;
