//! # eSewa Client SDK
//!
//! A typed Rust client for the gateway service API.

use reqwest::Client;
use serde::de::DeserializeOwned;

use esewa_types::{Amount, CreatePaymentRequest, PaymentPayload, VerifyResponse};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Gateway service API client.
pub struct EsewaClient {
    base_url: String,
    http: Client,
}

impl EsewaClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Requests a signed payment payload for the given amounts.
    pub async fn create_payment(
        &self,
        amount: &str,
        tax_amount: Option<&str>,
        product_service_charge: Option<&str>,
        product_delivery_charge: Option<&str>,
    ) -> Result<PaymentPayload, ClientError> {
        let req = CreatePaymentRequest {
            amount: Some(Amount::Text(amount.to_string())),
            tax_amount: tax_amount.map(|t| Amount::Text(t.to_string())),
            product_service_charge: product_service_charge.map(|t| Amount::Text(t.to_string())),
            product_delivery_charge: product_delivery_charge.map(|t| Amount::Text(t.to_string())),
        };
        self.post("/payments/esewa/", &req).await
    }

    /// Decodes a base64 callback payload through the verify endpoint.
    pub async fn verify(&self, data: &str) -> Result<VerifyResponse, ClientError> {
        let mut req = self
            .http
            .get(format!("{}/payments/esewa/verify/", self.base_url));
        req = req.query(&[("data", data)]);
        let resp = req.send().await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            // 4xx bodies carry "error", 5xx bodies carry "error_message".
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("error")
                        .or_else(|| v.get("error_message"))
                        .and_then(|e| e.as_str())
                        .map(String::from)
                })
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = EsewaClient::new("http://localhost:3000");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = EsewaClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }
}
