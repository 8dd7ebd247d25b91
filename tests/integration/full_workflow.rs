//! End-to-end validation workflows: basic validation feeding the
//! long-term process, proof-of-existence rescue, and report contents.

use std::collections::HashMap;

use sigval::basic::{is_acceptable, validate_basic_signature};
use sigval::chain::{evaluate, Check};
use sigval::ltv::{validate_long_term, LtvInputs};
use sigval::model::{
    CertificateWrapper, RevocationOrigin, RevocationRefOrigin, RevocationWrapper,
    SignatureWrapper, TimestampType, TimestampWrapper, TokenId,
};
use sigval::poe::PoeRegistry;
use sigval::policy::{AcceptancePolicy, ConstraintLevel, ValidationPolicy};
use sigval::verdict::{Conclusion, Indication, SubIndication};
use sigval::xcv::validate_certificate_path;

const NOW: u64 = 100_000;

fn certificates(not_after: u64) -> Vec<CertificateWrapper> {
    vec![
        CertificateWrapper::new("signer", 1_000, not_after),
        CertificateWrapper::trust_anchor("root", 0, 10_000_000),
    ]
}

fn sound_signature() -> SignatureWrapper {
    SignatureWrapper::sound("sig-1")
        .with_certificate_path([TokenId::new("signer"), TokenId::new("root")])
}

/// Timestamp-validation results with one OK entry per id.
fn timestamp_validation(ids: &[&str]) -> sigval::ChainReport {
    evaluate(
        ids.iter()
            .map(|id| {
                Check::new("timestamp_conclusive", ConstraintLevel::Fail, || true)
                    .for_token(TokenId::new(*id))
            })
            .collect(),
    )
}

#[test]
fn archive_and_signature_timestamps_counted() {
    let certs = certificates(1_000_000);
    let mut revocation = RevocationWrapper::good("rev-1", "signer", 1_000, 1_000_000);
    revocation.origin = RevocationOrigin::RevocationValues;
    revocation.ref_origin = Some(RevocationRefOrigin::CompleteRevocationRefs);
    let revocations = vec![revocation];

    // One signature timestamp over 3 objects, carrying the found
    // revocation value; one archive timestamp over 11 objects.
    let signature_ts = TimestampWrapper {
        found_revocations: vec![TokenId::new("rev-1")],
        ..TimestampWrapper::valid("ts-sig", TimestampType::Signature, 50_000).covering(
            ["sig-1", "signer", "rev-1"].map(TokenId::new),
        )
    };
    let archive_objects: Vec<TokenId> = (0..11).map(|i| TokenId::new(format!("obj-{i}"))).collect();
    assert_eq!(archive_objects.len(), 11);
    let archive_ts =
        TimestampWrapper::valid("ts-arc", TimestampType::Archive, 80_000).covering(archive_objects);
    let timestamps = vec![signature_ts, archive_ts];

    let poe = PoeRegistry::new(NOW);
    let basic = validate_basic_signature(
        &sound_signature(),
        &certs,
        &revocations,
        &ValidationPolicy::new(),
        &AcceptancePolicy::open(),
        &poe,
        NOW,
    )
    .unwrap();
    assert!(basic.technically_valid);

    let validation = timestamp_validation(&["ts-sig", "ts-arc"]);
    let mut bbbs = HashMap::new();
    bbbs.insert(TokenId::new("rev-1"), Conclusion::passed());

    let mut poe = PoeRegistry::new(NOW);
    let report = validate_long_term(
        LtvInputs {
            signature_id: TokenId::new("sig-1"),
            basic: &basic,
            timestamp_validation: &validation,
            timestamps: &timestamps,
            revocations: &revocations,
            bbbs: &bbbs,
            current_time: NOW,
        },
        &mut poe,
    );

    // Exactly one timestamp of each kind survived and was counted
    assert_eq!(report.timestamp_counts[&TimestampType::Signature], 1);
    assert_eq!(report.timestamp_counts[&TimestampType::Archive], 1);
    assert_eq!(report.retained_timestamps.len(), 2);

    // The revocation's provenance is intact on the wrapper
    assert_eq!(revocations[0].origin, RevocationOrigin::RevocationValues);
    assert_eq!(
        revocations[0].ref_origin,
        Some(RevocationRefOrigin::CompleteRevocationRefs)
    );

    // Earliest trustworthy timestamp wins, and the run stays acceptable
    assert_eq!(report.best_signature_time, 50_000);
    assert!(is_acceptable(&report.conclusion));
    assert!(report.diagnostics.is_empty());
}

#[test]
fn detached_reference_missing_keeps_signer_id() {
    // Format unsound (absent detached reference): the signature is not
    // technically valid, but the signing certificate id is still
    // reported from embedded attributes.
    let certs = certificates(1_000_000);
    let mut signature = sound_signature();
    signature.format_sound = false;

    let poe = PoeRegistry::new(NOW);
    let basic = validate_basic_signature(
        &signature,
        &certs,
        &[],
        &ValidationPolicy::new(),
        &AcceptancePolicy::open(),
        &poe,
        NOW,
    )
    .unwrap();

    assert!(!basic.technically_valid);
    assert_eq!(basic.signing_certificate_id, Some(TokenId::new("signer")));
    assert_eq!(
        basic.conclusion.sub_indication,
        Some(SubIndication::FormatFailure)
    );
}

#[test]
fn expired_certificate_rescued_by_proof_of_existence() {
    // Signer certificate expired at 2_000, long before NOW. A signature
    // timestamp from 1_500 proves the signature (and certificate)
    // existed inside the validity interval.
    let certs = certificates(2_000);
    let revocations = vec![RevocationWrapper::good("rev-1", "signer", 1_000, 1_000_000)];

    let empty_poe = PoeRegistry::new(NOW);
    let basic = validate_basic_signature(
        &sound_signature(),
        &certs,
        &revocations,
        &ValidationPolicy::new(),
        &AcceptancePolicy::open(),
        &empty_poe,
        NOW,
    )
    .unwrap();
    assert_eq!(
        basic.conclusion.sub_indication,
        Some(SubIndication::OutOfBoundsNoPoe)
    );
    assert!(is_acceptable(&basic.conclusion));

    let timestamps = vec![
        TimestampWrapper::valid("ts-sig", TimestampType::Signature, 1_500)
            .covering(["sig-1", "signer"].map(TokenId::new)),
    ];
    let validation = timestamp_validation(&["ts-sig"]);
    let bbbs = HashMap::new();

    let mut poe = PoeRegistry::new(NOW);
    let ltv = validate_long_term(
        LtvInputs {
            signature_id: TokenId::new("sig-1"),
            basic: &basic,
            timestamp_validation: &validation,
            timestamps: &timestamps,
            revocations: &revocations,
            bbbs: &bbbs,
            current_time: NOW,
        },
        &mut poe,
    );
    assert!(ltv.conclusion.is_passed());
    assert_eq!(ltv.best_signature_time, 1_500);

    // Re-evaluating the chain as of the proven time now passes: the POE
    // falls inside the certificate's validity interval.
    let xcv = validate_certificate_path(
        &certs,
        &revocations,
        &ValidationPolicy::new(),
        &poe,
        NOW,
    )
    .unwrap();
    assert!(xcv.conclusion.is_passed());
}

#[test]
fn revoked_signature_not_rescued_without_earlier_proof() {
    // Revoked at 5_000; the only timestamp is later, so nothing proves
    // existence before the revocation.
    let certs = certificates(1_000_000);
    let revocations = vec![RevocationWrapper::revoked(
        "rev-1", "signer", 5_000, 1_000, 1_000_000,
    )];

    let poe = PoeRegistry::new(NOW);
    let basic = validate_basic_signature(
        &sound_signature(),
        &certs,
        &revocations,
        &ValidationPolicy::new(),
        &AcceptancePolicy::open(),
        &poe,
        NOW,
    )
    .unwrap();
    assert_eq!(basic.conclusion.indication, Indication::Failed);
    assert_eq!(basic.conclusion.sub_indication, Some(SubIndication::Revoked));
    assert!(!is_acceptable(&basic.conclusion));

    // The long-term process returns the failure verbatim
    let validation = timestamp_validation(&["ts-sig"]);
    let timestamps = vec![TimestampWrapper::valid(
        "ts-sig",
        TimestampType::Signature,
        50_000,
    )];
    let bbbs = HashMap::new();
    let mut poe = PoeRegistry::new(NOW);
    let ltv = validate_long_term(
        LtvInputs {
            signature_id: TokenId::new("sig-1"),
            basic: &basic,
            timestamp_validation: &validation,
            timestamps: &timestamps,
            revocations: &revocations,
            bbbs: &bbbs,
            current_time: NOW,
        },
        &mut poe,
    );
    assert_eq!(ltv.conclusion, basic.conclusion);
    assert_eq!(ltv.best_signature_time, NOW);
}

#[test]
fn conclusion_tree_serializes_for_reporting() {
    let certs = certificates(1_000_000);
    let revocations = vec![RevocationWrapper::good("rev-1", "signer", 1_000, 1_000_000)];
    let poe = PoeRegistry::new(NOW);
    let basic = validate_basic_signature(
        &sound_signature(),
        &certs,
        &revocations,
        &ValidationPolicy::new(),
        &AcceptancePolicy::open(),
        &poe,
        NOW,
    )
    .unwrap();

    let json = serde_json::to_value(&basic).unwrap();
    assert_eq!(json["conclusion"]["indication"], "PASSED");
    assert!(json["checks"].as_array().unwrap().len() >= 5);
    assert_eq!(json["checks"][0]["status"], "OK");
}
