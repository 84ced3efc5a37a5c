//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use esewa_types::{AppError, CreatePaymentRequest, Signer, VerifyResponse};

use crate::PaymentService;

/// Application state shared across handlers.
pub struct AppState<S: Signer> {
    pub service: PaymentService<S>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            AppError::MissingField(msg) => bad_request(msg),
            AppError::Decode(detail) => {
                tracing::warn!(%detail, "failed to decode callback data");
                bad_request("Invalid data format")
            }
            AppError::Configuration => {
                server_error("Unable to fetch merchant key. Please try again later.")
            }
            AppError::Internal(msg) => {
                tracing::error!(detail = %msg, "unexpected error handling request");
                server_error(&format!("Unable to fetch merchant key. Details: {msg}"))
            }
        }
    }
}

fn bad_request(message: &str) -> Response {
    let body = serde_json::json!({ "error": message });
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

fn server_error(message: &str) -> Response {
    // The gateway API contract ships "code": 0 on every 5xx body.
    let body = serde_json::json!({
        "error_message": message,
        "code": 0
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Query parameters of the callback verification endpoint.
#[derive(Debug, Deserialize)]
pub struct VerifyParams {
    /// Base64-encoded callback payload from the gateway.
    pub data: Option<String>,
}

/// Builds and signs a payment payload for submission to the gateway.
#[tracing::instrument(skip(state, req))]
pub async fn create_payment<S: Signer>(
    State(state): State<Arc<AppState<S>>>,
    Json(req): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let payload = state.service.create_payment(req)?;
    tracing::info!(transaction_uuid = %payload.transaction_uuid, "payment payload signed");
    Ok(Json(payload))
}

/// Decodes the gateway's base64 callback payload.
#[tracing::instrument(skip(state, params))]
pub async fn verify_payment<S: Signer>(
    State(state): State<Arc<AppState<S>>>,
    Query(params): Query<VerifyParams>,
) -> Result<impl IntoResponse, ApiError> {
    let data = state.service.decode_callback(params.data.as_deref())?;
    Ok(Json(VerifyResponse { data }))
}
