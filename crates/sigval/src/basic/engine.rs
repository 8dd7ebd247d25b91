//! Basic signature validation chain.

use serde::{Deserialize, Serialize};

use crate::chain::{evaluate, Chain, Check};
use crate::error::Result;
use crate::model::{
    CertificateIndex, CertificateWrapper, RevocationWrapper, SignatureWrapper, TokenId,
};
use crate::poe::PoeRegistry;
use crate::policy::{AcceptancePolicy, ConstraintLevel, ValidationPolicy};
use crate::verdict::{CheckResult, Conclusion, Indication, SubIndication};
use crate::xcv::{self, XcvReport};

// ---------------------------------------------------------------------------
// Check names (policy keys)
// ---------------------------------------------------------------------------

pub const CHECK_FORMAT: &str = "signature_format_sound";
pub const CHECK_SIGNING_CERTIFICATE: &str = "signing_certificate_identified";
pub const CHECK_CERTIFICATE_CHAIN: &str = "certificate_chain_conclusive";
pub const CHECK_DIGEST: &str = "digest_intact";
pub const CHECK_SIGNATURE: &str = "signature_intact";
pub const CHECK_SIGNING_TIME: &str = "claimed_signing_time_plausible";
pub const CHECK_COMMITMENTS: &str = "commitment_types_acceptable";
pub const CHECK_POLICY_ID: &str = "signature_policy_matched";

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Outcome of basic signature validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BsvReport {
    pub conclusion: Conclusion,
    pub checks: Vec<CheckResult>,
    /// Nested certificate chain validation, when the chain stage was
    /// reached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xcv: Option<XcvReport>,
    /// Signing certificate id as reported from embedded data. Present
    /// independently of whether validation succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_certificate_id: Option<TokenId>,
    /// Did the whole chain conclude `Passed`?
    pub technically_valid: bool,
}

/// May long-term validation data still rescue this conclusion?
///
/// Only `Passed` and the three `NO_POE` indeterminates are eligible;
/// every other outcome propagates unchanged.
pub fn is_acceptable(conclusion: &Conclusion) -> bool {
    match conclusion.indication {
        Indication::Passed => true,
        Indication::Indeterminate => matches!(
            conclusion.sub_indication,
            Some(SubIndication::CryptoConstraintsFailureNoPoe)
                | Some(SubIndication::RevokedNoPoe)
                | Some(SubIndication::OutOfBoundsNoPoe)
        ),
        Indication::Failed => false,
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Run basic signature validation as of `current_time`.
pub fn validate_basic_signature(
    signature: &SignatureWrapper,
    certificates: &[CertificateWrapper],
    revocations: &[RevocationWrapper],
    policy: &ValidationPolicy,
    acceptance: &AcceptancePolicy,
    poe: &PoeRegistry,
    current_time: u64,
) -> Result<BsvReport> {
    // Format and identification facts gate everything behind them; the
    // certificate chain is only walked once they hold.
    let prelude = evaluate(vec![
        Check::new(
            CHECK_FORMAT,
            policy.level_or(CHECK_FORMAT, ConstraintLevel::Fail),
            || signature.format_sound,
        )
        .on_failure(Indication::Indeterminate, Some(SubIndication::FormatFailure))
        .for_token(signature.id.clone()),
        Check::new(
            CHECK_SIGNING_CERTIFICATE,
            policy.level_or(CHECK_SIGNING_CERTIFICATE, ConstraintLevel::Fail),
            || signature.signing_certificate_identified,
        )
        .on_failure(
            Indication::Indeterminate,
            Some(SubIndication::NoSigningCertificateFound),
        )
        .for_token(signature.id.clone()),
    ]);

    if !prelude.conclusion.is_passed() {
        return Ok(BsvReport {
            conclusion: prelude.conclusion,
            checks: prelude.checks,
            xcv: None,
            signing_certificate_id: signature.signing_certificate_id.clone(),
            technically_valid: false,
        });
    }

    let certificate_index = CertificateIndex::build(certificates);
    let path: Vec<CertificateWrapper> = certificate_index
        .resolve_path(&signature.certificate_path)
        .into_iter()
        .cloned()
        .collect();
    let xcv_report = if path.is_empty() {
        unreachable_chain_report()
    } else {
        xcv::validate_certificate_path(&path, revocations, policy, poe, current_time)?
    };

    // Adopt the chain conclusion on failure, mapping validity-range
    // failures to OUT_OF_BOUNDS_NO_POE: as an aggregate outcome they
    // stay eligible for proof-of-existence rescue.
    let adopted = adopt_xcv_conclusion(&xcv_report.conclusion);
    let xcv_passed = xcv_report.conclusion.is_passed();

    let rest = Chain::new()
        .push(
            Check::new(
                CHECK_CERTIFICATE_CHAIN,
                policy.level_or(CHECK_CERTIFICATE_CHAIN, ConstraintLevel::Fail),
                move || xcv_passed,
            )
            .on_failure(adopted.indication, adopted.sub_indication)
            .for_token(signature.id.clone()),
        )
        .push(
            Check::new(
                CHECK_DIGEST,
                policy.level_or(CHECK_DIGEST, ConstraintLevel::Fail),
                || signature.digest_intact,
            )
            .on_failure(Indication::Failed, Some(SubIndication::HashFailure))
            .for_token(signature.id.clone()),
        )
        .push(
            Check::new(
                CHECK_SIGNATURE,
                policy.level_or(CHECK_SIGNATURE, ConstraintLevel::Fail),
                || signature.signature_intact,
            )
            .on_failure(Indication::Failed, Some(SubIndication::SigCryptoFailure))
            .for_token(signature.id.clone()),
        )
        .push(
            Check::new(
                CHECK_SIGNING_TIME,
                policy.level_or(CHECK_SIGNING_TIME, ConstraintLevel::Fail),
                || {
                    signature
                        .claimed_signing_time
                        .map_or(true, |t| t <= current_time)
                },
            )
            .on_failure(
                Indication::Indeterminate,
                Some(SubIndication::SigConstraintsFailure),
            )
            .for_token(signature.id.clone()),
        )
        .push(
            Check::new(
                CHECK_COMMITMENTS,
                policy.level_or(CHECK_COMMITMENTS, ConstraintLevel::Fail),
                || acceptance.commitments_acceptable(&signature.commitment_type_ids),
            )
            .on_failure(
                Indication::Indeterminate,
                Some(SubIndication::SigConstraintsFailure),
            )
            .for_token(signature.id.clone()),
        )
        .push(
            Check::new(
                CHECK_POLICY_ID,
                policy.level_or(CHECK_POLICY_ID, ConstraintLevel::Fail),
                || acceptance.policy_id_acceptable(signature.signature_policy_id.as_deref()),
            )
            .on_failure(
                Indication::Indeterminate,
                Some(SubIndication::SigConstraintsFailure),
            )
            .for_token(signature.id.clone()),
        )
        .evaluate();

    let mut checks = prelude.checks;
    checks.extend(rest.checks);

    Ok(BsvReport {
        conclusion: rest.conclusion,
        technically_valid: rest.conclusion.is_passed(),
        checks,
        xcv: Some(xcv_report),
        signing_certificate_id: signature.signing_certificate_id.clone(),
    })
}

/// XCV stand-in for a signature whose certificate path resolves to
/// nothing: the trust anchor is unreachable by definition.
fn unreachable_chain_report() -> XcvReport {
    let report = evaluate(vec![Check::new(
        xcv::engine::CHECK_CHAIN_TRUSTED,
        ConstraintLevel::Fail,
        || false,
    )
    .on_failure(
        Indication::Indeterminate,
        Some(SubIndication::NoCertificateChainFound),
    )]);
    XcvReport {
        conclusion: report.conclusion,
        report,
        sub_reports: Vec::new(),
    }
}

fn adopt_xcv_conclusion(conclusion: &Conclusion) -> Conclusion {
    match conclusion.sub_indication {
        Some(SubIndication::Expired) | Some(SubIndication::NotYetValid) => Conclusion::new(
            Indication::Indeterminate,
            Some(SubIndication::OutOfBoundsNoPoe),
        ),
        _ => *conclusion,
    }
}
