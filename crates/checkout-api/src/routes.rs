//! # Routes
//!
//! Axum router configuration for the checkout flow.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /        - Home page
/// - POST /paypal  - Create payment, returns the approval redirect URL
/// - GET  /success - Execute payment (provider return redirect)
/// - GET  /cancel  - Cancellation page
/// - GET  /health  - Health check
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/paypal", post(handlers::create_payment))
        .route("/success", get(handlers::execute_payment))
        .route("/cancel", get(handlers::cancel))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
