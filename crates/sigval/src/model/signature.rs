//! Signature wrapper — pre-computed facts about one signature.
//!
//! Cryptographic verification happens upstream; the wrapper carries the
//! resulting booleans alongside the identifiers the acceptance checks
//! compare against policy.

use serde::{Deserialize, Serialize};

use super::TokenId;

/// Read-only snapshot of one signature under validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureWrapper {
    pub id: TokenId,
    /// Container well-formedness, including presence of all referenced
    /// (possibly detached) content.
    pub format_sound: bool,
    /// Was the signing certificate unambiguously identified?
    pub signing_certificate_identified: bool,
    /// Signing certificate id as reported from embedded attributes,
    /// present even when the signature itself is not technically valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_certificate_id: Option<TokenId>,
    /// Certificate path from signer to (intended) trust anchor.
    pub certificate_path: Vec<TokenId>,
    /// Did the digest of the signed data match?
    pub digest_intact: bool,
    /// Did the signature value verify against the signing key?
    pub signature_intact: bool,
    /// Claimed signing time, unauthenticated (epoch micros).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimed_signing_time: Option<u64>,
    /// Claimed commitment-type identifiers.
    pub commitment_type_ids: Vec<String>,
    /// Claimed signature policy identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_policy_id: Option<String>,
}

impl SignatureWrapper {
    /// A well-formed, intact signature with no claimed attributes.
    pub fn sound(id: impl Into<TokenId>) -> Self {
        Self {
            id: id.into(),
            format_sound: true,
            signing_certificate_identified: true,
            signing_certificate_id: None,
            certificate_path: Vec::new(),
            digest_intact: true,
            signature_intact: true,
            claimed_signing_time: None,
            commitment_type_ids: Vec::new(),
            signature_policy_id: None,
        }
    }

    pub fn with_certificate_path(mut self, path: impl IntoIterator<Item = TokenId>) -> Self {
        self.certificate_path = path.into_iter().collect();
        self.signing_certificate_id = self.certificate_path.first().cloned();
        self
    }
}
