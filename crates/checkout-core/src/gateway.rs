//! # Payment Gateway Trait
//!
//! The capability boundary between the checkout controller and the
//! payment provider. The controller is a caller, not an implementer, of
//! the provider's protocol: one outbound call per operation, awaited
//! before responding, never retried.

use crate::error::CheckoutResult;
use crate::money::Price;
use crate::payment::{CreatedPayment, ExecutedPayment, PaymentRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for the payment provider boundary.
///
/// Implementations hold their own credentials and HTTP client; the
/// controller depends only on this trait, so tests substitute a fake.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a payment and return the provider's approval redirect.
    ///
    /// # Arguments
    /// * `request` - The creation request derived from the cart
    ///
    /// # Returns
    /// A `CreatedPayment` carrying the payment ID and the hosted
    /// approval URL the payer must visit.
    async fn create_payment(&self, request: &PaymentRequest) -> CheckoutResult<CreatedPayment>;

    /// Execute (finalize) a payment the payer has approved.
    ///
    /// # Arguments
    /// * `payment_id` - The provider's payment ID from the return redirect
    /// * `payer_id` - The payer identifier from the return redirect
    /// * `total` - The transaction total, recomputed from the stored cart
    async fn execute_payment(
        &self,
        payment_id: &str,
        payer_id: &str,
        total: Price,
    ) -> CheckoutResult<ExecutedPayment>;

    /// Get the provider name (for logging and error messages).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;

/// The absolute redirect targets handed to the provider on the create
/// leg. Configured once at startup from the application base URL.
#[derive(Debug, Clone)]
pub struct RedirectUrls {
    /// Base URL of the application (e.g. "http://localhost:8880")
    pub base_url: String,
    /// Return page path
    pub return_path: String,
    /// Cancel page path
    pub cancel_path: String,
}

impl RedirectUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            return_path: "/success".to_string(),
            cancel_path: "/cancel".to_string(),
        }
    }

    pub fn return_url(&self) -> String {
        format!("{}{}", self.base_url, self.return_path)
    }

    pub fn cancel_url(&self) -> String {
        format!("{}{}", self.base_url, self.cancel_path)
    }
}

impl Default for RedirectUrls {
    fn default() -> Self {
        Self::new("http://localhost:8880")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_urls() {
        let urls = RedirectUrls::new("http://localhost:8880");

        assert_eq!(urls.return_url(), "http://localhost:8880/success");
        assert_eq!(urls.cancel_url(), "http://localhost:8880/cancel");
    }
}
