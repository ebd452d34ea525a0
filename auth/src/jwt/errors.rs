use thiserror::Error;

/// Error type for token issuance.
#[derive(Debug, Clone, Error)]
pub enum SigningError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),
}

/// Error type for token verification.
///
/// Callers at the HTTP boundary collapse every variant to a single
/// unauthorized outcome; the distinction exists for logging only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    BadSignature,

    #[error("Token is not yet valid")]
    NotYetValid,
}
