//! Certificate path walking and per-certificate sub-chains.

use serde::{Deserialize, Serialize};

use crate::chain::{evaluate, Chain, ChainReport, Check};
use crate::error::{Result, ValidationError};
use crate::model::{
    policy_oids_indicate_qscd, qc_statements_indicate_qscd, CertificateWrapper, KeyUsage,
    RevocationIndex, RevocationStatus, RevocationWrapper, TokenId,
};
use crate::poe::PoeRegistry;
use crate::policy::{ConstraintLevel, ValidationPolicy};
use crate::verdict::{Conclusion, Indication, SubIndication};

// ---------------------------------------------------------------------------
// Check names (policy keys)
// ---------------------------------------------------------------------------

pub const CHECK_CHAIN_TRUSTED: &str = "certificate_chain_trusted";
pub const CHECK_VALIDITY_RANGE: &str = "certificate_validity_range";
pub const CHECK_REVOCATION_AVAILABLE: &str = "revocation_data_available";
pub const CHECK_NOT_REVOKED: &str = "certificate_not_revoked";
pub const CHECK_KEY_USAGE: &str = "certificate_key_usage";
pub const CHECK_QUALIFIED: &str = "certificate_qualified";
pub const CHECK_QSCD: &str = "certificate_qscd_supported";

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// Sub-chain outcome for one certificate in the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubXcvReport {
    pub certificate_id: TokenId,
    pub report: ChainReport,
}

/// Outcome of validating one certificate path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XcvReport {
    pub conclusion: Conclusion,
    /// Path-level checks (trust-anchor reachability).
    pub report: ChainReport,
    /// One sub-report per non-anchor certificate, signer first.
    pub sub_reports: Vec<SubXcvReport>,
}

// ---------------------------------------------------------------------------
// Path validation
// ---------------------------------------------------------------------------

/// Validate an ordered certificate path (signer first) as of
/// `reference_time`, substituting proven existence times from `poe`
/// where the reference time falls outside an interval the proof covers.
pub fn validate_certificate_path(
    path: &[CertificateWrapper],
    revocations: &[RevocationWrapper],
    policy: &ValidationPolicy,
    poe: &PoeRegistry,
    reference_time: u64,
) -> Result<XcvReport> {
    if path.is_empty() {
        return Err(ValidationError::EmptyCertificatePath);
    }

    // Trust-anchor reachability terminates the whole process on its own.
    let anchor_reached = path.iter().any(|c| c.trusted);
    let prologue = evaluate(vec![Check::new(
        CHECK_CHAIN_TRUSTED,
        ConstraintLevel::Fail,
        || anchor_reached,
    )
    .on_failure(
        Indication::Indeterminate,
        Some(SubIndication::NoCertificateChainFound),
    )]);
    if !prologue.conclusion.is_passed() {
        return Ok(XcvReport {
            conclusion: prologue.conclusion,
            report: prologue,
            sub_reports: Vec::new(),
        });
    }

    let revocation_index = RevocationIndex::build(revocations);

    // Sub-chains run for every certificate below the anchor; the anchor
    // itself is trusted by fiat and carries no checks.
    let mut sub_reports = Vec::new();
    let mut conclusion = Conclusion::passed();
    for (position, cert) in path.iter().enumerate() {
        if cert.trusted {
            break;
        }
        let report = validate_certificate(
            cert,
            position,
            &revocation_index,
            policy,
            poe,
            reference_time,
        );
        if conclusion.is_passed() && !report.conclusion.is_passed() {
            // First failure closest to the signer wins.
            conclusion = report.conclusion;
        }
        sub_reports.push(SubXcvReport {
            certificate_id: cert.id.clone(),
            report,
        });
    }

    Ok(XcvReport {
        conclusion,
        report: prologue,
        sub_reports,
    })
}

// ---------------------------------------------------------------------------
// Per-certificate sub-chain
// ---------------------------------------------------------------------------

fn validate_certificate(
    cert: &CertificateWrapper,
    position: usize,
    revocations: &RevocationIndex<'_>,
    policy: &ValidationPolicy,
    poe: &PoeRegistry,
    reference_time: u64,
) -> ChainReport {
    let poe_time = poe.query(&cert.id);
    let poe_in_range = poe_time.is_some_and(|t| cert.validity_covers(t));

    // Time every later check evaluates at: the reference time, or the
    // proven existence time when the reference falls outside the
    // validity interval but the proof falls inside it.
    let evaluation_time = if !cert.validity_covers(reference_time) && poe_in_range {
        poe_time.unwrap_or(reference_time)
    } else {
        reference_time
    };

    let validity_sub = if reference_time < cert.not_before {
        SubIndication::NotYetValid
    } else {
        SubIndication::Expired
    };

    let mut chain = Chain::new().push(
        Check::new(
            CHECK_VALIDITY_RANGE,
            policy.level_or(CHECK_VALIDITY_RANGE, ConstraintLevel::Fail),
            move || cert.validity_covers(reference_time) || poe_in_range,
        )
        .on_failure(Indication::Indeterminate, Some(validity_sub))
        .for_token(cert.id.clone()),
    );

    // Revocation checks: selection happens eagerly so the designated
    // failure conclusion can depend on the revocation found.
    let selected = select_covering_revocation(revocations, &cert.id, evaluation_time);
    chain = chain.push(
        Check::new(
            CHECK_REVOCATION_AVAILABLE,
            policy.level_or(CHECK_REVOCATION_AVAILABLE, ConstraintLevel::Fail),
            || selected.is_some(),
        )
        .on_failure(Indication::Indeterminate, Some(SubIndication::TryLater))
        .for_token(cert.id.clone()),
    );

    let revoked_failure = selected.and_then(|rev| match rev.status {
        RevocationStatus::Revoked { revocation_time } if revocation_time <= evaluation_time => {
            if poe_time.is_some_and(|p| p < revocation_time) {
                Some((Indication::Indeterminate, SubIndication::RevokedNoPoe))
            } else {
                Some((Indication::Failed, SubIndication::Revoked))
            }
        }
        RevocationStatus::Unknown => {
            Some((Indication::Indeterminate, SubIndication::TryLater))
        }
        _ => None,
    });
    let (fail_indication, fail_sub) = revoked_failure
        .unwrap_or((Indication::Indeterminate, SubIndication::RevokedNoPoe));
    chain = chain.push(
        Check::new(
            CHECK_NOT_REVOKED,
            policy.level_or(CHECK_NOT_REVOKED, ConstraintLevel::Fail),
            move || revoked_failure.is_none(),
        )
        .on_failure(fail_indication, Some(fail_sub))
        .for_token(cert.id.clone()),
    );

    // Applicable use: the signer signs, issuers certify.
    let usage_ok = if position == 0 {
        cert.allows_signing()
    } else {
        cert.key_usages.contains(&KeyUsage::KeyCertSign)
    };
    chain = chain.push(
        Check::new(
            CHECK_KEY_USAGE,
            policy.level_or(CHECK_KEY_USAGE, ConstraintLevel::Fail),
            move || usage_ok,
        )
        .on_failure(
            Indication::Indeterminate,
            Some(SubIndication::ChainConstraintsFailure),
        )
        .for_token(cert.id.clone()),
    );

    // Qualification constraints apply to the signing certificate and
    // only when the policy configures them.
    if position == 0 {
        chain = chain
            .push(
                Check::new(CHECK_QUALIFIED, policy.level_of(CHECK_QUALIFIED), || {
                    crate::model::qualification::is_qualified(cert)
                })
                .on_failure(
                    Indication::Indeterminate,
                    Some(SubIndication::ChainConstraintsFailure),
                )
                .for_token(cert.id.clone()),
            )
            .push(
                Check::new(CHECK_QSCD, policy.level_of(CHECK_QSCD), || {
                    policy_oids_indicate_qscd(cert) || qc_statements_indicate_qscd(cert)
                })
                .on_failure(
                    Indication::Indeterminate,
                    Some(SubIndication::ChainConstraintsFailure),
                )
                .for_token(cert.id.clone()),
            );
    }

    chain.evaluate()
}

/// Pick the revocation token covering `time` with the latest
/// `this_update`, the freshest assertion available.
fn select_covering_revocation<'a>(
    revocations: &RevocationIndex<'a>,
    certificate_id: &TokenId,
    time: u64,
) -> Option<&'a RevocationWrapper> {
    revocations
        .for_certificate(certificate_id)
        .iter()
        .filter(|rev| rev.covers(time))
        .max_by_key(|rev| rev.this_update)
        .copied()
}
