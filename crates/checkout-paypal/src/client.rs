//! # PayPal Payments Client
//!
//! Implementation of PayPal's classic Payments API: create a payment,
//! send the payer to the returned approval link, then execute the
//! payment when the payer comes back.

use crate::auth::TokenCache;
use crate::config::PayPalConfig;
use async_trait::async_trait;
use checkout_core::{
    CheckoutError, CheckoutResult, CreatedPayment, ExecutedPayment, PaymentGateway,
    PaymentRequest, Price, ITEM_QUANTITY,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Link relation tag of the hosted approval page in a create response
const APPROVAL_REL: &str = "approval_url";

/// PayPal payment gateway
///
/// Holds the credentials, a pooled HTTP client, and the cached OAuth2
/// token. One outbound call per checkout operation, never retried.
pub struct PayPalGateway {
    config: PayPalConfig,
    client: Client,
    token_cache: TokenCache,
}

impl PayPalGateway {
    /// Create a new gateway
    pub fn new(config: PayPalConfig) -> CheckoutResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| {
                CheckoutError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            client,
            token_cache: TokenCache::new(),
        })
    }

    /// Create from environment variables
    pub fn from_env() -> CheckoutResult<Self> {
        let config = PayPalConfig::from_env()?;
        Self::new(config)
    }

    /// Build the create-payment wire body
    fn build_create_body(&self, request: &PaymentRequest) -> CreatePaymentBody {
        let items = request
            .items
            .iter()
            .map(|item| PayPalItem {
                name: item.name.clone(),
                price: item.price.to_provider_string(),
                currency: item.price.currency.as_provider_code().to_string(),
                quantity: ITEM_QUANTITY,
            })
            .collect();

        CreatePaymentBody {
            intent: request.intent.as_str().to_string(),
            payer: PayPalPayer {
                payment_method: request.payer_method.as_str().to_string(),
            },
            redirect_urls: PayPalRedirectUrls {
                return_url: request.return_url.clone(),
                cancel_url: request.cancel_url.clone(),
            },
            transactions: vec![PayPalTransaction {
                item_list: Some(PayPalItemList { items }),
                amount: PayPalAmount {
                    currency: request.total.currency.as_provider_code().to_string(),
                    total: request.total.to_provider_string(),
                },
                description: Some(request.description.clone()),
            }],
        }
    }

    async fn post_json<B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> CheckoutResult<PaymentResponse> {
        let token = self
            .token_cache
            .access_token(&self.client, &self.config)
            .await?;

        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("PayPal API error: status={}, body={}", status, body);
            return Err(parse_error_body(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            CheckoutError::Serialization(format!("Failed to parse PayPal response: {}", e))
        })
    }
}

#[async_trait]
impl PaymentGateway for PayPalGateway {
    #[instrument(skip(self, request), fields(items = request.items.len()))]
    async fn create_payment(&self, request: &PaymentRequest) -> CheckoutResult<CreatedPayment> {
        let body = self.build_create_body(request);

        debug!(
            "Creating PayPal payment: {} items, total={}",
            request.items.len(),
            request.total.to_provider_string()
        );

        let url = format!("{}/v1/payments/payment", self.config.api_base_url);
        let payment = self.post_json(&url, &body).await?;

        let approval_url = payment
            .links
            .iter()
            .find(|link| link.rel == APPROVAL_REL)
            .map(|link| link.href.clone())
            .ok_or_else(|| CheckoutError::ProviderRejected {
                provider: "paypal".to_string(),
                message: "create response carried no approval_url link".to_string(),
                details: None,
            })?;

        info!(
            "Created PayPal payment: id={}, state={}",
            payment.id, payment.state
        );

        Ok(CreatedPayment {
            payment_id: payment.id,
            state: payment.state,
            approval_url,
        })
    }

    #[instrument(skip(self), fields(payment_id = %payment_id))]
    async fn execute_payment(
        &self,
        payment_id: &str,
        payer_id: &str,
        total: Price,
    ) -> CheckoutResult<ExecutedPayment> {
        let body = ExecutePaymentBody {
            payer_id: payer_id.to_string(),
            transactions: vec![PayPalExecuteTransaction {
                amount: PayPalAmount {
                    currency: total.currency.as_provider_code().to_string(),
                    total: total.to_provider_string(),
                },
            }],
        };

        let url = format!(
            "{}/v1/payments/payment/{}/execute",
            self.config.api_base_url, payment_id
        );
        let payment = self.post_json(&url, &body).await?;

        info!(
            "Executed PayPal payment: id={}, state={}",
            payment.id, payment.state
        );

        Ok(ExecutedPayment {
            payment_id: payment.id,
            state: payment.state,
        })
    }

    fn provider_name(&self) -> &'static str {
        "paypal"
    }
}

fn parse_error_body(status: u16, body: &str) -> CheckoutError {
    if let Ok(err) = serde_json::from_str::<PayPalErrorBody>(body) {
        return CheckoutError::ProviderRejected {
            provider: "paypal".to_string(),
            message: match err.message {
                Some(message) => format!("{}: {}", err.name, message),
                None => err.name,
            },
            details: err.details,
        };
    }

    CheckoutError::ProviderRejected {
        provider: "paypal".to_string(),
        message: format!("HTTP {}: {}", status, body),
        details: None,
    }
}

// =============================================================================
// PayPal API Types
// =============================================================================

#[derive(Debug, Serialize)]
struct CreatePaymentBody {
    intent: String,
    payer: PayPalPayer,
    redirect_urls: PayPalRedirectUrls,
    transactions: Vec<PayPalTransaction>,
}

#[derive(Debug, Serialize)]
struct PayPalPayer {
    payment_method: String,
}

#[derive(Debug, Serialize)]
struct PayPalRedirectUrls {
    return_url: String,
    cancel_url: String,
}

#[derive(Debug, Serialize)]
struct PayPalTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    item_list: Option<PayPalItemList>,
    amount: PayPalAmount,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

#[derive(Debug, Serialize)]
struct PayPalItemList {
    items: Vec<PayPalItem>,
}

#[derive(Debug, Serialize)]
struct PayPalItem {
    name: String,
    /// Formatted to 2 decimals, as the API requires string amounts
    price: String,
    currency: String,
    quantity: u32,
}

#[derive(Debug, Serialize)]
struct PayPalAmount {
    currency: String,
    total: String,
}

#[derive(Debug, Serialize)]
struct ExecutePaymentBody {
    payer_id: String,
    transactions: Vec<PayPalExecuteTransaction>,
}

#[derive(Debug, Serialize)]
struct PayPalExecuteTransaction {
    amount: PayPalAmount,
}

#[derive(Debug, Deserialize)]
struct PaymentResponse {
    id: String,
    state: String,
    #[serde(default)]
    links: Vec<PayPalLink>,
}

#[derive(Debug, Deserialize)]
struct PayPalLink {
    href: String,
    rel: String,
}

#[derive(Debug, Deserialize)]
struct PayPalErrorBody {
    name: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PayPalMode;
    use checkout_core::{Cart, CartItem, Currency, RedirectUrls};

    fn gateway() -> PayPalGateway {
        let config = PayPalConfig::new("client-id", "client-secret", PayPalMode::Sandbox);
        PayPalGateway::new(config).unwrap()
    }

    #[test]
    fn test_create_body_shape() {
        let cart = Cart::new(vec![CartItem::new(
            "Rose",
            Price::new(12.50, Currency::USD),
        )]);
        let urls = RedirectUrls::new("http://localhost:8880");
        let request = PaymentRequest::from_cart(&cart, &urls);

        let body = gateway().build_create_body(&request);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["intent"], "sale");
        assert_eq!(json["payer"]["payment_method"], "paypal");
        assert_eq!(
            json["redirect_urls"]["return_url"],
            "http://localhost:8880/success"
        );
        assert_eq!(
            json["redirect_urls"]["cancel_url"],
            "http://localhost:8880/cancel"
        );

        let item = &json["transactions"][0]["item_list"]["items"][0];
        assert_eq!(item["name"], "Rose");
        assert_eq!(item["price"], "12.50");
        assert_eq!(item["currency"], "USD");
        assert_eq!(item["quantity"], 1);

        assert_eq!(json["transactions"][0]["amount"]["total"], "12.50");
        assert_eq!(json["transactions"][0]["amount"]["currency"], "USD");
    }

    #[test]
    fn test_create_body_empty_cart() {
        let request = PaymentRequest::from_cart(
            &Cart::default(),
            &RedirectUrls::new("http://localhost:8880"),
        );

        let body = gateway().build_create_body(&request);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json["transactions"][0]["item_list"]["items"]
                .as_array()
                .unwrap()
                .len(),
            0
        );
        assert_eq!(json["transactions"][0]["amount"]["total"], "0.00");
    }

    #[test]
    fn test_parse_error_body() {
        let body = r#"{"name":"VALIDATION_ERROR","message":"Invalid request","details":[{"field":"transactions.amount","issue":"Cannot be zero"}]}"#;
        let err = parse_error_body(400, body);

        match err {
            CheckoutError::ProviderRejected {
                provider,
                message,
                details,
            } => {
                assert_eq!(provider, "paypal");
                assert_eq!(message, "VALIDATION_ERROR: Invalid request");
                assert!(details.unwrap().is_array());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_unstructured_error_body() {
        let err = parse_error_body(502, "Bad Gateway");

        match err {
            CheckoutError::ProviderRejected {
                message, details, ..
            } => {
                assert!(message.contains("502"));
                assert!(details.is_none());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
