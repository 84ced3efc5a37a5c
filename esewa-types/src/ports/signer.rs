//! Signing port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! The HMAC adapter (and test mocks) implement this trait.

use crate::domain::SecretKey;
use crate::error::SignError;

/// Computes a keyed signature over a canonical message string.
///
/// The application service is generic over this port, so the production
/// HMAC adapter can be swapped for a mock in tests.
pub trait Signer: Send + Sync + 'static {
    /// Signs `message` with `secret`, returning the signature as the
    /// standard base64 encoding of the raw digest bytes.
    ///
    /// Deterministic: the same key and message always yield the same
    /// signature. Fails with [`SignError::InvalidArgument`] when either the
    /// secret or the message is empty.
    fn sign(&self, secret: &SecretKey, message: &str) -> Result<String, SignError>;
}
