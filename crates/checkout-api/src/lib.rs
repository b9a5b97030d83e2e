//! # checkout-api
//!
//! HTTP layer for bloom-checkout.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The checkout controller: create-payment and execute-payment handlers
//! - Cookie-backed session identification
//! - The three HTML views (home, success, cancel)
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Home page (cart UI) |
//! | POST | `/paypal` | Create payment, returns approval redirect URL |
//! | GET | `/success` | Execute payment after provider approval |
//! | GET | `/cancel` | Cancellation page |
//! | GET | `/health` | Health check |

pub mod handlers;
pub mod routes;
pub mod session_cookie;
pub mod state;
pub mod views;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
