//! # PayPal OAuth2
//!
//! Client-credentials token handling for the PayPal REST API.
//! The access token is cached and refreshed 60 seconds before expiry.

use crate::config::PayPalConfig;
use checkout_core::{CheckoutError, CheckoutResult};
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;

/// Refresh margin before the provider-reported expiry
const EXPIRY_MARGIN_SECS: i64 = 60;

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

/// Cached OAuth2 access token for one set of credentials.
///
/// Concurrent callers may race to refresh an expired token; the last
/// writer wins and every caller still gets a valid token.
#[derive(Default)]
pub struct TokenCache {
    inner: RwLock<Option<CachedToken>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a valid access token, fetching a fresh one if the cached
    /// token is missing or about to expire.
    pub async fn access_token(
        &self,
        client: &Client,
        config: &PayPalConfig,
    ) -> CheckoutResult<String> {
        {
            let cached = self.inner.read().await;
            if let Some(token) = cached.as_ref() {
                if token.expires_at > Utc::now() {
                    return Ok(token.access_token.clone());
                }
            }
        }

        let token = fetch_access_token(client, config).await?;

        let mut cached = self.inner.write().await;
        *cached = Some(token.clone());

        Ok(token.access_token)
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    3600
}

async fn fetch_access_token(
    client: &Client,
    config: &PayPalConfig,
) -> CheckoutResult<CachedToken> {
    let url = format!("{}/v1/oauth2/token", config.api_base_url);

    debug!("Fetching PayPal access token ({})", config.mode);

    let response = client
        .post(&url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| CheckoutError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| CheckoutError::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(CheckoutError::ProviderRejected {
            provider: "paypal".to_string(),
            message: format!("token request failed: HTTP {}", status),
            details: serde_json::from_str(&body).ok(),
        });
    }

    let token: TokenResponse = serde_json::from_str(&body).map_err(|e| {
        CheckoutError::Serialization(format!("Failed to parse token response: {}", e))
    })?;

    Ok(CachedToken {
        access_token: token.access_token,
        expires_at: Utc::now() + Duration::seconds(token.expires_in - EXPIRY_MARGIN_SECS),
    })
}
