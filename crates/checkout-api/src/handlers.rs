//! # Request Handlers
//!
//! The checkout controller: validates the cart, relays the provider's
//! approval redirect on the create leg, and relays payer confirmation
//! into a payment execution on the return leg. All failures are mapped
//! to HTTP responses here; nothing is retried.

use crate::session_cookie::resolve_session;
use crate::state::AppState;
use crate::views;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use checkout_core::{
    Cart, CartItem, CheckoutError, Currency, PaymentRequest, Price, CART_KEY,
    COMPLETED_PAYMENT_KEY,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create payment request body
#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    /// Items to pay for
    #[serde(default)]
    pub cart: Option<Vec<CartItemPayload>>,
}

/// Cart item as submitted by the storefront
#[derive(Debug, Deserialize)]
pub struct CartItemPayload {
    /// Item name
    pub name: String,
    /// Unit price as a decimal amount
    pub price: f64,
}

/// Create payment response
#[derive(Debug, Serialize)]
pub struct CreatePaymentResponse {
    /// The provider's hosted approval page; the caller navigates there
    pub redirect_url: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Provider-supplied detail, relayed on create-leg rejections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Option<serde_json::Value>) -> Self {
        self.details = details;
        self
    }
}

/// Query parameters on the provider's return redirect
#[derive(Debug, Deserialize)]
pub struct SuccessParams {
    #[serde(rename = "PayerID")]
    pub payer_id: Option<String>,
    #[serde(rename = "paymentId")]
    pub payment_id: Option<String>,
}

fn parse_cart(request: CreatePaymentRequest) -> Result<Cart, CheckoutError> {
    let items = request.cart.ok_or_else(|| {
        CheckoutError::InvalidRequest("Missing cart in request body.".to_string())
    })?;

    let items = items
        .into_iter()
        .map(|item| {
            if !item.price.is_finite() || item.price < 0.0 {
                return Err(CheckoutError::InvalidRequest(format!(
                    "Invalid price for item \"{}\"",
                    item.name
                )));
            }
            Ok(CartItem::new(item.name, Price::new(item.price, Currency::USD)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Cart::new(items))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "bloom-checkout",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Home page (the cart UI lives client-side)
pub async fn home() -> impl IntoResponse {
    views::home_page()
}

/// Create a payment (`POST /paypal`)
///
/// Stores the cart in the session, asks the gateway to create the
/// payment, and returns the approval URL for client-side navigation.
#[instrument(skip(state, jar, request))]
pub async fn create_payment(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<CreatePaymentRequest>,
) -> Response {
    let (session_id, jar) = resolve_session(jar);

    let cart = match parse_cart(request) {
        Ok(cart) => cart,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                jar,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response();
        }
    };

    let cart_value = match serde_json::to_value(&cart) {
        Ok(value) => value,
        Err(e) => {
            error!("Failed to serialize cart: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                jar,
                Json(ErrorResponse::new("Failed to process PayPal payment.")),
            )
                .into_response();
        }
    };

    // The cart is stored before the provider call: a rejected creation
    // still leaves it in the session. Starting a new checkout supersedes
    // any previously completed payment for this session.
    state.sessions.set(&session_id, CART_KEY, cart_value).await;
    state
        .sessions
        .remove(&session_id, COMPLETED_PAYMENT_KEY)
        .await;

    let payment_request = PaymentRequest::from_cart(&cart, &state.urls);

    info!(
        "Creating payment: {} items, total={}",
        cart.item_count(),
        cart.total().display()
    );

    match state.gateway.create_payment(&payment_request).await {
        Ok(created) => (
            jar,
            Json(CreatePaymentResponse {
                redirect_url: created.approval_url,
            }),
        )
            .into_response(),
        Err(CheckoutError::ProviderRejected {
            message, details, ..
        }) => {
            error!("Failed to create payment: {}", message);
            (
                StatusCode::BAD_REQUEST,
                jar,
                Json(ErrorResponse::new("Failed to create payment.").with_details(details)),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to process PayPal payment: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                jar,
                Json(ErrorResponse::new("Failed to process PayPal payment.")),
            )
                .into_response()
        }
    }
}

/// Execute a payment the payer approved (`GET /success`)
///
/// The provider redirects the payer here with `PayerID` and `paymentId`
/// query parameters. The transaction total is recomputed from the cart
/// stored in the session on the create leg.
#[instrument(skip(state, jar, params))]
pub async fn execute_payment(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<SuccessParams>,
) -> Response {
    let (session_id, jar) = resolve_session(jar);

    // Replay guard: once this session's payment executed, reject without
    // contacting the provider again.
    if state
        .sessions
        .get(&session_id, COMPLETED_PAYMENT_KEY)
        .await
        .is_some()
    {
        return (StatusCode::BAD_REQUEST, jar, "Payment already processed.").into_response();
    }

    let Some(cart_value) = state.sessions.get(&session_id, CART_KEY).await else {
        return (StatusCode::BAD_REQUEST, jar, "Cart not found.").into_response();
    };

    let (Some(payer_id), Some(payment_id)) = (params.payer_id, params.payment_id) else {
        return (StatusCode::BAD_REQUEST, jar, "Missing PayerID or paymentId.").into_response();
    };

    let cart: Cart = match serde_json::from_value(cart_value) {
        Ok(cart) => cart,
        Err(e) => {
            error!("Stored cart is unreadable: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                jar,
                "Error processing payment.",
            )
                .into_response();
        }
    };

    let total = cart.total();

    match state
        .gateway
        .execute_payment(&payment_id, &payer_id, total)
        .await
    {
        Ok(executed) => {
            // The cart's lifecycle ends here; the completed marker guards
            // against replayed return redirects.
            state.sessions.remove(&session_id, CART_KEY).await;
            state
                .sessions
                .set(
                    &session_id,
                    COMPLETED_PAYMENT_KEY,
                    serde_json::Value::String(executed.payment_id.clone()),
                )
                .await;

            info!(
                "Payment executed: id={}, total={}",
                executed.payment_id,
                total.display()
            );

            (jar, views::success_page("Payment was successful!")).into_response()
        }
        Err(e) => {
            error!("Failed to execute payment: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                jar,
                "Error processing payment.",
            )
                .into_response()
        }
    }
}

/// Cancellation page (`GET /cancel`)
///
/// Renders a fixed message. No session reads or writes, no provider
/// interaction.
pub async fn cancel() -> impl IntoResponse {
    views::cancel_page("Payment has been cancelled.")
}
