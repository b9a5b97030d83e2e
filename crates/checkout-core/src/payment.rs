//! # Payment Types
//!
//! The provider-facing request/result types for the two legs of the
//! checkout: create (before the payer approves) and execute (after the
//! provider redirects the payer back).

use crate::cart::{Cart, CartItem};
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// Payment intent sent on the create leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntent {
    /// Immediate sale
    Sale,
}

impl PaymentIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentIntent::Sale => "sale",
        }
    }
}

impl Default for PaymentIntent {
    fn default() -> Self {
        PaymentIntent::Sale
    }
}

/// How the payer pays. This flow only supports the provider's own wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayerMethod {
    Paypal,
}

impl PayerMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayerMethod::Paypal => "paypal",
        }
    }
}

impl Default for PayerMethod {
    fn default() -> Self {
        PayerMethod::Paypal
    }
}

/// A payment-creation request, derived deterministically from a cart.
///
/// The item list mirrors the cart and the total is the sum of the item
/// prices (zero for an empty cart).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Payment intent
    #[serde(default)]
    pub intent: PaymentIntent,

    /// Payer method
    #[serde(default)]
    pub payer_method: PayerMethod,

    /// Absolute URL the provider redirects to after approval
    pub return_url: String,

    /// Absolute URL the provider redirects to on cancellation
    pub cancel_url: String,

    /// Line items, mirroring the cart
    pub items: Vec<CartItem>,

    /// Transaction total
    pub total: Price,

    /// Transaction description shown on the provider's approval page
    pub description: String,
}

impl PaymentRequest {
    /// Build a creation request from a cart and the configured redirect
    /// targets.
    pub fn from_cart(cart: &Cart, urls: &crate::gateway::RedirectUrls) -> Self {
        Self {
            intent: PaymentIntent::Sale,
            payer_method: PayerMethod::Paypal,
            return_url: urls.return_url(),
            cancel_url: urls.cancel_url(),
            items: cart.items.clone(),
            total: cart.total(),
            description: "Payment for Bloom Bhutan flowers.".to_string(),
        }
    }
}

/// A payment created at the provider, awaiting payer approval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedPayment {
    /// Provider's payment ID
    pub payment_id: String,

    /// Provider-reported state (e.g. "created")
    pub state: String,

    /// The hosted approval page the payer must be sent to.
    ///
    /// Extracted from the provider response link whose relation tag is
    /// `approval_url`. The caller performs the navigation; the server
    /// never issues an HTTP redirect itself.
    pub approval_url: String,
}

/// A payment finalized at the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutedPayment {
    /// Provider's payment ID
    pub payment_id: String,

    /// Provider-reported state (e.g. "approved")
    pub state: String,
}
