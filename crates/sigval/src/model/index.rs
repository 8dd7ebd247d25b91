//! Indexes for efficient token lookups during a validation run.
//!
//! Each run builds these once over its borrowed wrapper slices so the
//! engines resolve ids in O(1) instead of re-scanning lists. The indexes
//! borrow; ownership of the wrappers stays with the caller.

use std::collections::HashMap;

use super::certificate::CertificateWrapper;
use super::revocation::RevocationWrapper;
use super::TokenId;

// ── CertificateIndex ────────────────────────────────────────────────────────

/// Index over certificate wrappers by token id.
pub struct CertificateIndex<'a> {
    by_id: HashMap<&'a TokenId, &'a CertificateWrapper>,
}

impl<'a> CertificateIndex<'a> {
    pub fn build(certificates: &'a [CertificateWrapper]) -> Self {
        Self {
            by_id: certificates.iter().map(|c| (&c.id, c)).collect(),
        }
    }

    pub fn get(&self, id: &TokenId) -> Option<&'a CertificateWrapper> {
        self.by_id.get(id).copied()
    }

    /// Resolve an ordered id path into wrapper references, dropping ids
    /// with no known wrapper.
    pub fn resolve_path(&self, ids: &[TokenId]) -> Vec<&'a CertificateWrapper> {
        ids.iter().filter_map(|id| self.get(id)).collect()
    }
}

// ── RevocationIndex ─────────────────────────────────────────────────────────

/// Index over revocation wrappers by token id and by owning certificate.
pub struct RevocationIndex<'a> {
    by_id: HashMap<&'a TokenId, &'a RevocationWrapper>,
    by_certificate: HashMap<&'a TokenId, Vec<&'a RevocationWrapper>>,
}

impl<'a> RevocationIndex<'a> {
    pub fn build(revocations: &'a [RevocationWrapper]) -> Self {
        let mut by_id = HashMap::new();
        let mut by_certificate: HashMap<&TokenId, Vec<&RevocationWrapper>> = HashMap::new();
        for rev in revocations {
            by_id.insert(&rev.id, rev);
            by_certificate.entry(&rev.certificate_id).or_default().push(rev);
        }
        Self {
            by_id,
            by_certificate,
        }
    }

    pub fn get(&self, id: &TokenId) -> Option<&'a RevocationWrapper> {
        self.by_id.get(id).copied()
    }

    /// All revocation tokens speaking for `certificate_id`, in input order.
    pub fn for_certificate(&self, certificate_id: &TokenId) -> &[&'a RevocationWrapper] {
        self.by_certificate
            .get(certificate_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}
