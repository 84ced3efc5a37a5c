//! Opaque shared secret for payload signing.

use std::fmt;

/// Shared secret used as the HMAC key.
///
/// Loaded once from configuration and immutable for the process lifetime.
/// `Debug` output is redacted so the key never reaches logs or error
/// messages.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    /// Wraps a configuration-provided secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// True when no secret was configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw key bytes for the MAC.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(redacted)")
    }
}

impl From<String> for SecretKey {
    fn from(secret: String) -> Self {
        Self(secret)
    }
}

impl From<&str> for SecretKey {
    fn from(secret: &str) -> Self {
        Self(secret.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_is_redacted() {
        let key = SecretKey::new("8gBm/:&EnhH.1/q");
        assert_eq!(format!("{:?}", key), "SecretKey(redacted)");
    }

    #[test]
    fn empty_key_is_detected() {
        assert!(SecretKey::new("").is_empty());
        assert!(!SecretKey::new("s").is_empty());
    }
}
