//! Error types for sigval.
//!
//! Errors cover caller misuse of the API surface only. Every validation
//! outcome — missing revocation data, an expired certificate, a broken
//! trust chain — is encoded as a [`crate::verdict::Conclusion`] value and
//! never raised as an error.

/// Validation API error types.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Certificate path is empty")]
    EmptyCertificatePath,
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, ValidationError>;
