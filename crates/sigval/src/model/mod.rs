//! Wrapper model — read-only snapshots of extracted validation material.
//!
//! Wrappers are produced by a format-specific extraction step (out of
//! scope here) and handed to the engine as immutable inputs. The engine
//! never mutates them; it only reads facts off them and folds those
//! facts into conclusions.

pub mod certificate;
pub mod index;
pub mod qualification;
pub mod revocation;
pub mod signature;
pub mod timestamp;

use serde::{Deserialize, Serialize};

pub use certificate::{CertificateWrapper, KeyUsage};
pub use index::{CertificateIndex, RevocationIndex};
pub use qualification::{policy_oids_indicate_qscd, qc_statements_indicate_qscd};
pub use revocation::{RevocationOrigin, RevocationRefOrigin, RevocationStatus, RevocationWrapper};
pub use signature::SignatureWrapper;
pub use timestamp::{TimestampType, TimestampWrapper};

/// Unique identifier of a validation token (certificate, revocation
/// data, timestamp, or signature).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId(pub String);

impl TokenId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TokenId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
