//! Concurrency test: independent validation runs over shared read-only
//! inputs.
//!
//! Each run owns its own report tree and POE registry; runs share only
//! the wrapper collections and policy. Results must be identical across
//! threads.

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use sigval::basic::validate_basic_signature;
use sigval::chain::{evaluate, Check};
use sigval::ltv::{validate_long_term, LtvInputs};
use sigval::model::{
    CertificateWrapper, RevocationWrapper, SignatureWrapper, TimestampType, TimestampWrapper,
    TokenId,
};
use sigval::poe::PoeRegistry;
use sigval::policy::{AcceptancePolicy, ConstraintLevel, ValidationPolicy};

const NOW: u64 = 100_000;

struct SharedInputs {
    certificates: Vec<CertificateWrapper>,
    revocations: Vec<RevocationWrapper>,
    timestamps: Vec<TimestampWrapper>,
    signature: SignatureWrapper,
    policy: ValidationPolicy,
    acceptance: AcceptancePolicy,
}

fn shared_inputs() -> SharedInputs {
    SharedInputs {
        certificates: vec![
            CertificateWrapper::new("signer", 1_000, 1_000_000),
            CertificateWrapper::trust_anchor("root", 0, 10_000_000),
        ],
        revocations: vec![RevocationWrapper::good("rev-1", "signer", 1_000, 1_000_000)],
        timestamps: vec![
            TimestampWrapper::valid("ts-sig", TimestampType::Signature, 50_000)
                .covering(["sig-1", "signer"].map(TokenId::new)),
        ],
        signature: SignatureWrapper::sound("sig-1")
            .with_certificate_path([TokenId::new("signer"), TokenId::new("root")]),
        policy: ValidationPolicy::new(),
        acceptance: AcceptancePolicy::open(),
    }
}

#[test]
fn stress_32_concurrent_validation_runs() {
    let shared = Arc::new(shared_inputs());

    let mut handles = Vec::new();
    for _ in 0..32 {
        let shared = Arc::clone(&shared);
        handles.push(thread::spawn(move || {
            let mut results = Vec::new();
            for _ in 0..50 {
                let poe = PoeRegistry::new(NOW);
                let basic = validate_basic_signature(
                    &shared.signature,
                    &shared.certificates,
                    &shared.revocations,
                    &shared.policy,
                    &shared.acceptance,
                    &poe,
                    NOW,
                )
                .expect("path is never empty here");

                let validation = evaluate(vec![Check::new(
                    "timestamp_conclusive",
                    ConstraintLevel::Fail,
                    || true,
                )
                .for_token(TokenId::new("ts-sig"))]);

                let mut run_poe = PoeRegistry::new(NOW);
                let ltv = validate_long_term(
                    LtvInputs {
                        signature_id: TokenId::new("sig-1"),
                        basic: &basic,
                        timestamp_validation: &validation,
                        timestamps: &shared.timestamps,
                        revocations: &shared.revocations,
                        bbbs: &HashMap::new(),
                        current_time: NOW,
                    },
                    &mut run_poe,
                );
                results.push((basic.conclusion, ltv.conclusion, ltv.best_signature_time));
            }
            results
        }));
    }

    let mut all = Vec::new();
    for handle in handles {
        all.extend(handle.join().unwrap());
    }

    assert_eq!(all.len(), 32 * 50);
    for (basic, ltv, best) in &all {
        assert!(basic.is_passed());
        assert!(ltv.is_passed());
        assert_eq!(*best, 50_000);
    }
}
