//! Domain models for the gateway signing protocol.

pub mod canonical;
pub mod secret;
pub mod transaction;

pub use canonical::{PAYMENT_SIGNED_FIELDS, SignedFieldSet};
pub use secret::SecretKey;
pub use transaction::TransactionUuid;
