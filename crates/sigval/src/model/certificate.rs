//! Certificate wrapper — the facts certificate chain validation reads.

use serde::{Deserialize, Serialize};

use super::TokenId;

/// Key usage bits relevant to signature validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyUsage {
    DigitalSignature,
    NonRepudiation,
    KeyEncipherment,
    DataEncipherment,
    KeyAgreement,
    KeyCertSign,
    CrlSign,
}

/// Read-only snapshot of one certificate in a validation path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateWrapper {
    pub id: TokenId,
    /// Start of the validity interval (epoch micros).
    pub not_before: u64,
    /// End of the validity interval (epoch micros).
    pub not_after: u64,
    pub key_usages: Vec<KeyUsage>,
    /// Certificate-policy OIDs, dotted-decimal.
    pub policy_oids: Vec<String>,
    /// QC-statement identifiers, dotted-decimal.
    pub qc_statement_ids: Vec<String>,
    /// Is this certificate a trust anchor?
    pub trusted: bool,
}

impl CertificateWrapper {
    /// Minimal wrapper valid over `[not_before, not_after]`, usable for
    /// signing, not a trust anchor.
    pub fn new(id: impl Into<TokenId>, not_before: u64, not_after: u64) -> Self {
        Self {
            id: id.into(),
            not_before,
            not_after,
            key_usages: vec![KeyUsage::NonRepudiation],
            policy_oids: Vec::new(),
            qc_statement_ids: Vec::new(),
            trusted: false,
        }
    }

    pub fn trust_anchor(id: impl Into<TokenId>, not_before: u64, not_after: u64) -> Self {
        Self {
            key_usages: vec![KeyUsage::KeyCertSign, KeyUsage::CrlSign],
            trusted: true,
            ..Self::new(id, not_before, not_after)
        }
    }

    /// Does the validity interval cover `time`?
    pub fn validity_covers(&self, time: u64) -> bool {
        self.not_before <= time && time <= self.not_after
    }

    /// May this certificate's key produce signatures?
    pub fn allows_signing(&self) -> bool {
        self.key_usages
            .iter()
            .any(|u| matches!(u, KeyUsage::DigitalSignature | KeyUsage::NonRepudiation))
    }
}
