//! # checkout-paypal
//!
//! PayPal REST gateway for bloom-checkout.
//!
//! Implements the `PaymentGateway` trait from `checkout-core` against
//! PayPal's classic Payments API:
//!
//! 1. **create** - `POST /v1/payments/payment` returns a payment whose
//!    `approval_url` link the payer is sent to.
//! 2. **execute** - `POST /v1/payments/payment/{id}/execute` finalizes
//!    the payment once the payer returns.
//!
//! Authentication is OAuth2 client-credentials; the access token is
//! cached until shortly before expiry.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use checkout_paypal::PayPalGateway;
//! use checkout_core::{PaymentGateway, PaymentRequest};
//!
//! // Reads PAYPAL_CLIENT_ID / PAYPAL_CLIENT_SECRET, sandbox by default
//! let gateway = PayPalGateway::from_env()?;
//!
//! let created = gateway.create_payment(&request).await?;
//! // Redirect the payer to created.approval_url
//! ```

pub mod auth;
pub mod client;
pub mod config;

// Re-exports
pub use client::PayPalGateway;
pub use config::{PayPalConfig, PayPalMode};
