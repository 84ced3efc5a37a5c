//! HMAC-SHA256 signing adapter.
//!
//! Implements the `Signer` port: standard base64 of an HMAC-SHA256 digest
//! over the canonical string, plus the verifying half for callers that add
//! an integrity check on callbacks.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use esewa_types::{SecretKey, SignError, Signer};

type HmacSha256 = Hmac<Sha256>;

/// Production signer backed by HMAC-SHA256.
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacSigner;

impl HmacSigner {
    /// Creates the signer. Stateless; the secret is supplied per call.
    pub fn new() -> Self {
        Self
    }
}

impl Signer for HmacSigner {
    fn sign(&self, secret: &SecretKey, message: &str) -> Result<String, SignError> {
        sign_message(secret, message)
    }
}

/// Signs `message` with HMAC-SHA256 and returns the standard base64
/// encoding of the raw digest bytes.
///
/// An empty key or an empty message is rejected: both would produce a
/// predictable signature.
pub fn sign_message(secret: &SecretKey, message: &str) -> Result<String, SignError> {
    if secret.is_empty() {
        return Err(SignError::InvalidArgument("secret key must not be empty"));
    }
    if message.is_empty() {
        return Err(SignError::InvalidArgument("message must not be empty"));
    }

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

/// Verifies a signature against a message using constant-time comparison.
///
/// The callback decode path does not call this; it is the hook for callers
/// who need integrity assurance on decoded callbacks.
pub fn verify_signature(
    secret: &SecretKey,
    message: &str,
    signature: &str,
) -> Result<bool, SignError> {
    let expected = sign_message(secret, message)?;
    Ok(expected.as_bytes().ct_eq(signature.as_bytes()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> SecretKey {
        SecretKey::new("8gBm/:&EnhH.1/q")
    }

    #[test]
    fn known_vector_from_gateway_sandbox() {
        let message = "total_amount=100,transaction_uuid=11-201-13,product_code=EPAYTEST";
        let signature = sign_message(&secret(), message).unwrap();

        assert_eq!(signature, "5DZywcrTKD0gia/rsSMcrRHmJl+4Tbol6S+lWgdJ94E=");
    }

    #[test]
    fn signature_is_deterministic_and_44_chars() {
        let message = "total_amount=110,transaction_uuid=241028,product_code=EPAYTEST";
        let first = sign_message(&secret(), message).unwrap();
        let second = sign_message(&secret(), message).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 44);
    }

    #[test]
    fn one_byte_change_flips_the_signature() {
        let a = sign_message(&secret(), "total_amount=100,transaction_uuid=x,product_code=A").unwrap();
        let b = sign_message(&secret(), "total_amount=101,transaction_uuid=x,product_code=A").unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn empty_secret_is_rejected() {
        let err = sign_message(&SecretKey::new(""), "message").unwrap_err();
        assert_eq!(err, SignError::InvalidArgument("secret key must not be empty"));
    }

    #[test]
    fn empty_message_is_rejected() {
        let err = sign_message(&secret(), "").unwrap_err();
        assert_eq!(err, SignError::InvalidArgument("message must not be empty"));
    }

    #[test]
    fn verify_accepts_genuine_and_rejects_tampered() {
        let message = "total_amount=100,transaction_uuid=abc,product_code=EPAYTEST";
        let signature = sign_message(&secret(), message).unwrap();

        assert!(verify_signature(&secret(), message, &signature).unwrap());
        assert!(
            !verify_signature(
                &secret(),
                "total_amount=999,transaction_uuid=abc,product_code=EPAYTEST",
                &signature
            )
            .unwrap()
        );
        assert!(!verify_signature(&SecretKey::new("wrong"), message, &signature).unwrap());
    }

    #[test]
    fn port_impl_matches_free_function() {
        let signer = HmacSigner::new();
        let message = "total_amount=100,transaction_uuid=11-201-13,product_code=EPAYTEST";

        assert_eq!(
            signer.sign(&secret(), message).unwrap(),
            sign_message(&secret(), message).unwrap()
        );
    }
}
