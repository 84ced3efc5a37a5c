//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::TransactionUuid;

/// Arbitrary structured data decoded from a gateway callback.
///
/// Entirely gateway-controlled and untrusted; nothing in it is validated
/// here, including the signature it may carry.
pub type CallbackData = serde_json::Value;

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// A monetary field as received on the wire: either a JSON string or a
/// JSON number. Rendered to text for the payload and the canonical string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// Textual amount, passed through unchanged.
    Text(String),
    /// Numeric amount, stringified.
    Number(serde_json::Number),
}

impl Amount {
    /// Renders the amount to its textual wire form.
    pub fn to_text(&self) -> String {
        match self {
            Amount::Text(s) => s.clone(),
            Amount::Number(n) => n.to_string(),
        }
    }

    /// True for the values the API treats as "no amount": the empty string
    /// and numeric zero. The text "0" is not falsy.
    pub fn is_falsy(&self) -> bool {
        match self {
            Amount::Text(s) => s.is_empty(),
            Amount::Number(n) => n.as_f64() == Some(0.0),
        }
    }
}

/// Request to create a signed payment payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentRequest {
    /// Payment amount (required; string or number)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "100")]
    pub amount: Option<Amount>,
    /// Tax amount; defaults to "0" when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub tax_amount: Option<Amount>,
    /// Service charge; defaults to "0" when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub product_service_charge: Option<Amount>,
    /// Delivery charge; defaults to "0" when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub product_delivery_charge: Option<Amount>,
}

/// Signed payment payload handed back to the caller for submission to the
/// gateway.
///
/// Constructed fresh per request; no persisted lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentPayload {
    /// Base payment amount, as provided by the caller
    #[schema(example = "100")]
    pub amount: String,
    /// Tax amount
    #[schema(example = "0")]
    pub tax_amount: String,
    /// Total amount covered by the signature
    #[schema(example = "100")]
    pub total_amount: String,
    /// Fresh per-request transaction identifier
    #[schema(value_type = String, example = "123e4567-e89b-12d3-a456-426614174000")]
    pub transaction_uuid: TransactionUuid,
    /// Merchant/product code registered with the gateway
    #[schema(example = "EPAYTEST")]
    pub product_code: String,
    /// Service charge
    #[schema(example = "0")]
    pub product_service_charge: String,
    /// Delivery charge
    #[schema(example = "0")]
    pub product_delivery_charge: String,
    /// Redirect target after a successful payment
    pub success_url: String,
    /// Redirect target after a failed payment (same URL as success_url)
    pub failure_url: String,
    /// Comma-joined list of the signed field names, in signing order
    #[schema(example = "total_amount,transaction_uuid,product_code")]
    pub signed_field_names: String,
    /// Base64 HMAC-SHA256 over the canonical string
    pub signature: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Callback DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Response wrapping a decoded gateway callback.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifyResponse {
    /// Decoded callback structure, returned unchanged
    #[schema(value_type = Object)]
    pub data: CallbackData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_accepts_string_or_number() {
        let req: CreatePaymentRequest = serde_json::from_str(r#"{"amount": "100"}"#).unwrap();
        assert_eq!(req.amount.unwrap().to_text(), "100");

        let req: CreatePaymentRequest = serde_json::from_str(r#"{"amount": 250.5}"#).unwrap();
        assert_eq!(req.amount.unwrap().to_text(), "250.5");
    }

    #[test]
    fn falsy_amounts() {
        let empty: Amount = serde_json::from_str(r#""""#).unwrap();
        let zero: Amount = serde_json::from_str("0").unwrap();
        let zero_text: Amount = serde_json::from_str(r#""0""#).unwrap();

        assert!(empty.is_falsy());
        assert!(zero.is_falsy());
        assert!(!zero_text.is_falsy());
    }

    #[test]
    fn missing_optional_charges_deserialize_to_none() {
        let req: CreatePaymentRequest = serde_json::from_str(r#"{"amount": "100"}"#).unwrap();
        assert!(req.tax_amount.is_none());
        assert!(req.product_service_charge.is_none());
        assert!(req.product_delivery_charge.is_none());
    }
}
