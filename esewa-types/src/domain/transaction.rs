//! Transaction identifier for payment attempts.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a payment attempt.
///
/// Generated fresh per request. It is both a signed field and the
/// merchant's cross-reference key for its own records. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionUuid(Uuid);

impl TransactionUuid {
    /// Generates a new random transaction identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a TransactionUuid from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TransactionUuid {
    fn default() -> Self {
        Self::generate()
    }
}

impl std::fmt::Display for TransactionUuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TransactionUuid {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_distinct() {
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(TransactionUuid::generate()));
        }
    }

    #[test]
    fn displays_canonical_uuid_form() {
        let id = TransactionUuid::generate();
        let text = id.to_string();

        assert_eq!(text.len(), 36);
        assert_eq!(id, text.parse().unwrap());
    }
}
