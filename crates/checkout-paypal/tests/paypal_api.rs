//! Integration tests for the PayPal gateway against a mock HTTP server.

use checkout_core::{
    Cart, CartItem, CheckoutError, Currency, PaymentGateway, PaymentRequest, Price,
    RedirectUrls,
};
use checkout_paypal::{PayPalConfig, PayPalGateway, PayPalMode};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> PayPalGateway {
    let config = PayPalConfig::new("client-id", "client-secret", PayPalMode::Sandbox)
        .with_api_base_url(server.uri());
    PayPalGateway::new(config).unwrap()
}

fn rose_request() -> PaymentRequest {
    let cart = Cart::new(vec![CartItem::new(
        "Rose",
        Price::new(12.50, Currency::USD),
    )]);
    PaymentRequest::from_cart(&cart, &RedirectUrls::new("http://localhost:8880"))
}

async fn mount_token_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "test-token",
            "token_type": "Bearer",
            "expires_in": 32400
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn create_payment_returns_approval_url() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1/payments/payment"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_partial_json(json!({
            "intent": "sale",
            "payer": { "payment_method": "paypal" },
            "transactions": [{
                "amount": { "currency": "USD", "total": "12.50" }
            }]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "PAY-123",
            "state": "created",
            "links": [
                { "href": "https://api-m.sandbox.paypal.com/v1/payments/payment/PAY-123",
                  "rel": "self", "method": "GET" },
                { "href": "https://www.sandbox.paypal.com/checkoutnow?token=EC-1",
                  "rel": "approval_url", "method": "REDIRECT" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = gateway_for(&server)
        .create_payment(&rose_request())
        .await
        .unwrap();

    assert_eq!(created.payment_id, "PAY-123");
    assert_eq!(created.state, "created");
    assert_eq!(
        created.approval_url,
        "https://www.sandbox.paypal.com/checkoutnow?token=EC-1"
    );
}

#[tokio::test]
async fn create_payment_without_approval_link_is_provider_error() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1/payments/payment"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "PAY-123",
            "state": "created",
            "links": []
        })))
        .mount(&server)
        .await;

    let result = gateway_for(&server).create_payment(&rose_request()).await;

    assert!(matches!(
        result,
        Err(CheckoutError::ProviderRejected { .. })
    ));
}

#[tokio::test]
async fn create_payment_relays_provider_rejection_details() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1/payments/payment"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "name": "VALIDATION_ERROR",
            "message": "Invalid request - see details",
            "details": [
                { "field": "transactions[0].amount", "issue": "Must be greater than zero" }
            ]
        })))
        .mount(&server)
        .await;

    let result = gateway_for(&server).create_payment(&rose_request()).await;

    match result {
        Err(CheckoutError::ProviderRejected {
            provider,
            message,
            details,
        }) => {
            assert_eq!(provider, "paypal");
            assert!(message.starts_with("VALIDATION_ERROR"));
            let details = details.expect("details should be relayed");
            assert_eq!(
                details[0]["issue"],
                "Must be greater than zero"
            );
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn execute_payment_posts_payer_and_total() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1/payments/payment/PAY-123/execute"))
        .and(body_partial_json(json!({
            "payer_id": "P1",
            "transactions": [{
                "amount": { "currency": "USD", "total": "12.50" }
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "PAY-123",
            "state": "approved"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let executed = gateway_for(&server)
        .execute_payment("PAY-123", "P1", Price::new(12.50, Currency::USD))
        .await
        .unwrap();

    assert_eq!(executed.payment_id, "PAY-123");
    assert_eq!(executed.state, "approved");
}

#[tokio::test]
async fn execute_payment_surfaces_provider_rejection() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1/payments/payment/PAY-404/execute"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "name": "INVALID_RESOURCE_ID",
            "message": "Requested resource ID was not found."
        })))
        .mount(&server)
        .await;

    let result = gateway_for(&server)
        .execute_payment("PAY-404", "P1", Price::new(12.50, Currency::USD))
        .await;

    assert!(matches!(
        result,
        Err(CheckoutError::ProviderRejected { .. })
    ));
}

#[tokio::test]
async fn access_token_is_cached_across_calls() {
    let server = MockServer::start().await;

    // The token endpoint must be hit exactly once for two payment calls
    Mock::given(method("POST"))
        .and(path("/v1/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "test-token",
            "token_type": "Bearer",
            "expires_in": 32400
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/payments/payment"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "PAY-123",
            "state": "created",
            "links": [
                { "href": "https://www.sandbox.paypal.com/checkoutnow?token=EC-1",
                  "rel": "approval_url", "method": "REDIRECT" }
            ]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    gateway.create_payment(&rose_request()).await.unwrap();
    gateway.create_payment(&rose_request()).await.unwrap();
}

#[tokio::test]
async fn token_rejection_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/oauth2/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid_client",
            "error_description": "Client Authentication failed"
        })))
        .mount(&server)
        .await;

    let result = gateway_for(&server).create_payment(&rose_request()).await;

    assert!(matches!(
        result,
        Err(CheckoutError::ProviderRejected { .. })
    ));
}
