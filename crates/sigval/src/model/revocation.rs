//! Revocation wrapper — status, freshness window, and provenance.

use serde::{Deserialize, Serialize};

use super::TokenId;

/// Revocation status of the owning certificate, as asserted by the
/// revocation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevocationStatus {
    Good,
    Revoked {
        /// When the certificate was revoked (epoch micros).
        revocation_time: u64,
    },
    Unknown,
}

/// Where the revocation value was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevocationOrigin {
    /// Embedded in the signature's revocation-values attribute.
    RevocationValues,
    /// Embedded in timestamp validation data.
    TimestampValidationData,
    /// Supplied by the caller (fetched out of band).
    External,
}

/// Where a matching revocation reference was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevocationRefOrigin {
    CompleteRevocationRefs,
    AttributeRevocationRefs,
}

/// Read-only snapshot of one revocation token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevocationWrapper {
    pub id: TokenId,
    /// Certificate this token speaks for.
    pub certificate_id: TokenId,
    pub status: RevocationStatus,
    /// Start of the assertion window (epoch micros).
    pub this_update: u64,
    /// End of the assertion window (None = open-ended).
    pub next_update: Option<u64>,
    /// When the token itself was produced.
    pub production_time: u64,
    pub origin: RevocationOrigin,
    /// Matching reference in the signature, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_origin: Option<RevocationRefOrigin>,
}

impl RevocationWrapper {
    /// A `Good` assertion covering `[this_update, next_update]`.
    pub fn good(
        id: impl Into<TokenId>,
        certificate_id: impl Into<TokenId>,
        this_update: u64,
        next_update: u64,
    ) -> Self {
        Self {
            id: id.into(),
            certificate_id: certificate_id.into(),
            status: RevocationStatus::Good,
            this_update,
            next_update: Some(next_update),
            production_time: this_update,
            origin: RevocationOrigin::RevocationValues,
            ref_origin: None,
        }
    }

    /// A `Revoked` assertion effective from `revocation_time`.
    pub fn revoked(
        id: impl Into<TokenId>,
        certificate_id: impl Into<TokenId>,
        revocation_time: u64,
        this_update: u64,
        next_update: u64,
    ) -> Self {
        Self {
            status: RevocationStatus::Revoked { revocation_time },
            ..Self::good(id, certificate_id, this_update, next_update)
        }
    }

    /// Does the assertion window cover `time`?
    pub fn covers(&self, time: u64) -> bool {
        self.this_update <= time && self.next_update.map_or(true, |nu| time <= nu)
    }

    /// Is the certificate revoked as of `time`?
    pub fn revoked_at(&self, time: u64) -> bool {
        matches!(self.status, RevocationStatus::Revoked { revocation_time } if revocation_time <= time)
    }
}
