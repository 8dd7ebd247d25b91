//! Stress: long constraint chains and deep certificate paths.

use sigval::chain::{evaluate, Check};
use sigval::model::{CertificateWrapper, KeyUsage, RevocationWrapper};
use sigval::poe::PoeRegistry;
use sigval::policy::{ConstraintLevel, ValidationPolicy};
use sigval::verdict::{Indication, SubIndication};
use sigval::xcv::validate_certificate_path;

#[test]
fn stress_10_000_check_chain() {
    let checks: Vec<Check> = (0..10_000)
        .map(|i| Check::new(format!("check_{i}"), ConstraintLevel::Fail, || true))
        .collect();
    let report = evaluate(checks);
    assert!(report.conclusion.is_passed());
    assert_eq!(report.checks.len(), 10_000);
}

#[test]
fn stress_short_circuit_in_10_000_check_chain() {
    // Failure at position 5_000: exactly 5_001 results recorded
    let checks: Vec<Check> = (0..10_000)
        .map(|i| {
            Check::new(format!("check_{i}"), ConstraintLevel::Fail, move || i != 5_000)
                .on_failure(Indication::Failed, Some(SubIndication::HashFailure))
        })
        .collect();
    let report = evaluate(checks);
    assert_eq!(report.checks.len(), 5_001);
    assert_eq!(report.conclusion.indication, Indication::Failed);
}

#[test]
fn stress_100_certificate_path() {
    let mut path = Vec::new();
    let mut revocations = Vec::new();
    for i in 0..100 {
        let id = format!("cert-{i}");
        let mut cert = CertificateWrapper::new(id.as_str(), 0, 1_000_000);
        if i > 0 {
            cert.key_usages = vec![KeyUsage::KeyCertSign];
        }
        revocations.push(RevocationWrapper::good(
            format!("rev-{i}").as_str(),
            id.as_str(),
            0,
            1_000_000,
        ));
        path.push(cert);
    }
    path.push(CertificateWrapper::trust_anchor("root", 0, 1_000_000));

    let poe = PoeRegistry::new(500_000);
    let report = validate_certificate_path(
        &path,
        &revocations,
        &ValidationPolicy::new(),
        &poe,
        500_000,
    )
    .unwrap();
    assert!(report.conclusion.is_passed());
    assert_eq!(report.sub_reports.len(), 100);
}
