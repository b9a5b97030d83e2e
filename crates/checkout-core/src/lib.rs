//! # checkout-core
//!
//! Core types and traits for the bloom-checkout payment flow.
//!
//! This crate provides:
//! - `PaymentGateway` trait for the payment provider boundary
//! - `Cart` and `CartItem` for the shopping cart
//! - `PaymentRequest`, `CreatedPayment`, `ExecutedPayment` for the
//!   create/execute legs of the checkout
//! - `SessionStore` for per-browser-session state between the two legs
//! - `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use checkout_core::{Cart, CartItem, Currency, PaymentRequest, Price, RedirectUrls};
//!
//! let cart = Cart::new(vec![CartItem::new("Rose", Price::new(12.50, Currency::USD))]);
//!
//! let urls = RedirectUrls::new("http://localhost:8880");
//! let request = PaymentRequest::from_cart(&cart, &urls);
//!
//! // Hand the request to a gateway
//! let created = gateway.create_payment(&request).await?;
//!
//! // Redirect the payer to created.approval_url
//! ```

pub mod cart;
pub mod error;
pub mod gateway;
pub mod money;
pub mod payment;
pub mod session;

// Re-exports for convenience
pub use cart::{Cart, CartItem, ITEM_QUANTITY};
pub use error::{CheckoutError, CheckoutResult};
pub use gateway::{BoxedPaymentGateway, PaymentGateway, RedirectUrls};
pub use money::{Currency, Price};
pub use payment::{
    CreatedPayment, ExecutedPayment, PayerMethod, PaymentIntent, PaymentRequest,
};
pub use session::{
    BoxedSessionStore, MemorySessionStore, SessionStore, CART_KEY, COMPLETED_PAYMENT_KEY,
};
