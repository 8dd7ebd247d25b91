//! Data structures for validation verdicts.

use serde::{Deserialize, Serialize};

use crate::model::TokenId;

// ---------------------------------------------------------------------------
// Indication
// ---------------------------------------------------------------------------

/// Top-level verdict of a validation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Indication {
    Passed,
    Failed,
    Indeterminate,
}

impl std::fmt::Display for Indication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => write!(f, "PASSED"),
            Self::Failed => write!(f, "FAILED"),
            Self::Indeterminate => write!(f, "INDETERMINATE"),
        }
    }
}

// ---------------------------------------------------------------------------
// Sub-indication
// ---------------------------------------------------------------------------

/// Refinement of a `Failed` or `Indeterminate` indication.
///
/// The `NO_POE` family marks outcomes that a later long-term validation
/// stage may still rescue with a proof of existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubIndication {
    FormatFailure,
    NoSigningCertificateFound,
    NoCertificateChainFound,
    NotYetValid,
    Expired,
    OutOfBoundsNoPoe,
    RevokedNoPoe,
    Revoked,
    TryLater,
    HashFailure,
    SigCryptoFailure,
    CryptoConstraintsFailureNoPoe,
    ChainConstraintsFailure,
    SigConstraintsFailure,
}

// ---------------------------------------------------------------------------
// Check results
// ---------------------------------------------------------------------------

/// Outcome status of a single executed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    Ok,
    Warning,
    NotOk,
    Ignored,
}

/// One entry in a chain's check trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Policy name of the check.
    pub name: String,
    pub status: CheckStatus,
    /// Stable message tag consumed by report generation.
    pub message_tag: String,
    /// Token the check was evaluated against, when there is one.
    /// Long-term validation matches timestamp results by this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_id: Option<TokenId>,
}

// ---------------------------------------------------------------------------
// Conclusion
// ---------------------------------------------------------------------------

/// Terminal outcome of a validation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conclusion {
    pub indication: Indication,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_indication: Option<SubIndication>,
}

impl Conclusion {
    pub fn passed() -> Self {
        Self {
            indication: Indication::Passed,
            sub_indication: None,
        }
    }

    pub fn new(indication: Indication, sub_indication: Option<SubIndication>) -> Self {
        Self {
            indication,
            sub_indication,
        }
    }

    pub fn is_passed(&self) -> bool {
        self.indication == Indication::Passed
    }
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// Category of a non-fatal diagnostic note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticKind {
    /// A timestamp was discarded because its message imprint was not
    /// found or did not verify intact.
    TimestampImprintInvalid,
    /// A timestamp had no matching entry in the timestamp-validation
    /// results; it was skipped without affecting the outcome.
    TimestampValidationMissing,
}

/// A non-fatal note recorded during validation.
///
/// Diagnostics are the explicit secondary channel: nothing in the
/// conclusion depends on them, and they are returned to the caller
/// rather than emitted only to a logging sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_id: Option<TokenId>,
    pub message: String,
}
