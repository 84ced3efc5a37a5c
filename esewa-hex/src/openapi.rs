//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use esewa_types::dto::{CreatePaymentRequest, PaymentPayload, VerifyResponse};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Build and sign a payment payload
#[utoipa::path(
    post,
    path = "/payments/esewa/",
    tag = "payments",
    request_body = CreatePaymentRequest,
    responses(
        (status = 200, description = "Signed payment payload", body = PaymentPayload),
        (status = 400, description = "Amount field missing or empty"),
        (status = 500, description = "Gateway credentials missing or unexpected error")
    )
)]
async fn create_payment() {}

/// Decode a gateway callback payload
#[utoipa::path(
    get,
    path = "/payments/esewa/verify/",
    tag = "payments",
    params(
        ("data" = Option<String>, Query, description = "Base64-encoded callback payload")
    ),
    responses(
        (status = 200, description = "Decoded callback data", body = VerifyResponse),
        (status = 400, description = "Data parameter absent or malformed")
    )
)]
async fn verify_payment() {}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "eSewa Gateway Service API",
        description = "Signed payment payload construction and gateway callback decoding"
    ),
    paths(health, create_payment, verify_payment),
    components(schemas(CreatePaymentRequest, PaymentPayload, VerifyResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Payment payload signing and callback decoding"),
    )
)]
pub struct ApiDoc;
