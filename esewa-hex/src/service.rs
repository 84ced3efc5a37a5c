//! Payment Application Service
//!
//! Orchestrates the signing core behind the HTTP boundary.
//! Contains NO infrastructure logic - pure request orchestration.

use std::collections::HashMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use esewa_types::{
    Amount, AppError, CallbackData, CreatePaymentRequest, PaymentPayload, SecretKey,
    SignedFieldSet, Signer, TransactionUuid,
};

/// Read-only gateway credentials, constructed once at process start and
/// injected into the service. Never accessed through ambient global state.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Merchant/product code registered with the gateway.
    pub product_code: String,
    /// Shared HMAC secret.
    pub secret_key: SecretKey,
    /// Callback URL used for both success and failure redirects.
    pub callback_url: String,
}

impl GatewayConfig {
    /// Fails when any credential is absent, so nothing is ever signed with
    /// an empty key.
    fn ensure_complete(&self) -> Result<(), AppError> {
        if self.product_code.is_empty()
            || self.secret_key.is_empty()
            || self.callback_url.is_empty()
        {
            return Err(AppError::Configuration);
        }
        Ok(())
    }
}

/// Application service for gateway payment operations.
///
/// Generic over `S: Signer` - the adapter is injected at compile time.
/// This enables:
/// - Swapping signers without code changes
/// - Testing with a mock signer
/// - Compile-time checks for port implementation
pub struct PaymentService<S: Signer> {
    signer: S,
    config: GatewayConfig,
}

impl<S: Signer> PaymentService<S> {
    /// Creates a new payment service with the given signer and credentials.
    pub fn new(signer: S, config: GatewayConfig) -> Self {
        Self { signer, config }
    }

    /// Returns the injected gateway configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Assembles and signs a payment request payload.
    ///
    /// The canonical string covers the fixed field order
    /// `total_amount,transaction_uuid,product_code`; the gateway signs only
    /// these three fields, so the secondary charges travel unsigned.
    pub fn create_payment(&self, req: CreatePaymentRequest) -> Result<PaymentPayload, AppError> {
        let amount = match req.amount {
            Some(a) if !a.is_falsy() => a.to_text(),
            _ => return Err(AppError::MissingField("amount field is required".into())),
        };

        // Credentials are validated before any signing work begins.
        self.config.ensure_complete()?;

        let transaction_uuid = TransactionUuid::generate();
        let total_amount = amount.clone();

        let fields = SignedFieldSet::payment_request();
        let mut values = HashMap::new();
        values.insert("total_amount", total_amount.clone());
        values.insert("transaction_uuid", transaction_uuid.to_string());
        values.insert("product_code", self.config.product_code.clone());

        let message = fields.canonical_string(&values);
        tracing::debug!(%transaction_uuid, signed_string = %message, "built canonical string");

        let signature = self.signer.sign(&self.config.secret_key, &message)?;

        Ok(PaymentPayload {
            amount,
            tax_amount: charge_or_zero(req.tax_amount),
            total_amount,
            transaction_uuid,
            product_code: self.config.product_code.clone(),
            product_service_charge: charge_or_zero(req.product_service_charge),
            product_delivery_charge: charge_or_zero(req.product_delivery_charge),
            success_url: self.config.callback_url.clone(),
            failure_url: self.config.callback_url.clone(),
            signed_field_names: fields.joined(),
            signature,
        })
    }

    /// Decodes a base64-encoded gateway callback into structured data.
    ///
    /// The embedded signature is NOT verified here; callers who need
    /// integrity assurance must add that check themselves.
    pub fn decode_callback(&self, encoded: Option<&str>) -> Result<CallbackData, AppError> {
        let encoded = match encoded {
            Some(s) if !s.is_empty() => s,
            _ => return Err(AppError::MissingField("No data received".into())),
        };

        let bytes = BASE64
            .decode(encoded)
            .map_err(|e| AppError::Decode(e.to_string()))?;
        let text = String::from_utf8(bytes).map_err(|e| AppError::Decode(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| AppError::Decode(e.to_string()))
    }
}

/// Absent charge fields default to the textual zero value. A provided
/// value, including the empty string, passes through unchanged.
fn charge_or_zero(charge: Option<Amount>) -> String {
    charge
        .map(|a| a.to_text())
        .unwrap_or_else(|| "0".to_string())
}
