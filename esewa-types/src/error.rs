//! Error types for the gateway service.

/// Signing-core errors (domain layer).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignError {
    /// An empty key or message would produce a predictable signature.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Required request input absent (400).
    #[error("{0}")]
    MissingField(String),

    /// Deployment misconfigured (500). The message stays generic so the
    /// secret key can never leak through an error response.
    #[error("Unable to fetch merchant key. Please try again later.")]
    Configuration,

    /// Malformed callback payload (400). The carried detail is for tracing
    /// only; the response body is always "Invalid data format".
    #[error("Invalid data format")]
    Decode(String),

    /// Unexpected failure (500).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<SignError> for AppError {
    fn from(err: SignError) -> Self {
        AppError::Internal(err.to_string())
    }
}
