//! Best-signature-time computation and final acceptability.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::basic::{is_acceptable, BsvReport};
use crate::chain::{Chain, ChainReport, Check};
use crate::model::{RevocationWrapper, TimestampType, TimestampWrapper, TokenId};
use crate::poe::PoeRegistry;
use crate::policy::ConstraintLevel;
use crate::verdict::{
    CheckResult, CheckStatus, Conclusion, Diagnostic, DiagnosticKind, Indication, SubIndication,
};

// ---------------------------------------------------------------------------
// Check names
// ---------------------------------------------------------------------------

pub const CHECK_BASIC_ACCEPTABLE: &str = "basic_signature_acceptable";
pub const CHECK_REVOCATION_BBB: &str = "revocation_building_blocks_conclusive";

// ---------------------------------------------------------------------------
// Inputs and report
// ---------------------------------------------------------------------------

/// Inputs to the long-term validation data process. All collections are
/// borrowed; the process owns only its own report.
pub struct LtvInputs<'a> {
    pub signature_id: TokenId,
    /// Basic signature validation outcome.
    pub basic: &'a BsvReport,
    /// Per-token timestamp validation results, matched by token id.
    pub timestamp_validation: &'a ChainReport,
    /// The signature's timestamp tokens.
    pub timestamps: &'a [TimestampWrapper],
    /// The signature's revocation tokens.
    pub revocations: &'a [RevocationWrapper],
    /// Building-block conclusions per token id, used to validate each
    /// revocation token's own trust chain.
    pub bbbs: &'a HashMap<TokenId, Conclusion>,
    pub current_time: u64,
}

/// Outcome of the long-term validation data process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LtvReport {
    pub conclusion: Conclusion,
    pub checks: Vec<CheckResult>,
    /// Earliest proven existence instant for the signature. Starts at
    /// the entry current time and only ever moves earlier.
    pub best_signature_time: u64,
    pub diagnostics: Vec<Diagnostic>,
    /// Timestamps that survived the message-imprint filter.
    pub retained_timestamps: Vec<TokenId>,
    /// Retained timestamps counted per type.
    pub timestamp_counts: BTreeMap<TimestampType, usize>,
}

// ---------------------------------------------------------------------------
// Process
// ---------------------------------------------------------------------------

/// Run the long-term validation data process, recording resulting
/// proofs of existence into `poe` for upstream re-evaluation.
pub fn validate_long_term(inputs: LtvInputs<'_>, poe: &mut PoeRegistry) -> LtvReport {
    let mut best_signature_time = inputs.current_time;
    let mut diagnostics = Vec::new();

    // Step 2: only a passed basic validation or one of the NO_POE
    // indeterminates may continue; anything else returns verbatim.
    let basic_conclusion = inputs.basic.conclusion;
    let mut chain = Chain::new().push(
        Check::new(CHECK_BASIC_ACCEPTABLE, ConstraintLevel::Fail, move || {
            is_acceptable(&basic_conclusion)
        })
        .on_failure(basic_conclusion.indication, basic_conclusion.sub_indication)
        .for_token(inputs.signature_id.clone()),
    );

    // Step 3: each revocation token with a known building-block
    // conclusion must itself be acceptable. A broken revocation trust
    // chain halts the process.
    for revocation in inputs.revocations {
        if let Some(bbb) = inputs.bbbs.get(&revocation.id) {
            let bbb = *bbb;
            let designated = if bbb.sub_indication.is_some() {
                bbb
            } else {
                Conclusion::new(
                    Indication::Indeterminate,
                    Some(SubIndication::ChainConstraintsFailure),
                )
            };
            chain = chain.push(
                Check::new(CHECK_REVOCATION_BBB, ConstraintLevel::Fail, move || {
                    is_acceptable(&bbb)
                })
                .on_failure(designated.indication, designated.sub_indication)
                .for_token(revocation.id.clone()),
            );
        }
    }

    let report = chain.evaluate();
    if !report.conclusion.is_passed() {
        return LtvReport {
            conclusion: report.conclusion,
            checks: report.checks,
            best_signature_time,
            diagnostics,
            retained_timestamps: Vec::new(),
            timestamp_counts: BTreeMap::new(),
        };
    }

    // Step 4: the message-imprint filter. Discards are diagnostics, not
    // failures.
    let mut retained = Vec::new();
    for timestamp in inputs.timestamps {
        if timestamp.imprint_valid() {
            retained.push(timestamp);
        } else {
            log::info!("timestamp {} skipped: message imprint not intact", timestamp.id);
            diagnostics.push(Diagnostic {
                kind: DiagnosticKind::TimestampImprintInvalid,
                token_id: Some(timestamp.id.clone()),
                message: format!("timestamp {} discarded: message imprint not intact", timestamp.id),
            });
        }
    }

    // Step 5: fold each retained timestamp's validated production time
    // into best-signature-time. The validation trail is indexed by token
    // id once, up front. A timestamp with no validation entry is a
    // genuine no-op: noted, never fatal.
    let validation_entries = inputs.timestamp_validation.checks_by_token();
    for timestamp in &retained {
        match validation_entries.get(&timestamp.id) {
            Some(entry) => {
                if entry.status == CheckStatus::Ok
                    && timestamp.production_time < best_signature_time
                {
                    best_signature_time = timestamp.production_time;
                }
            }
            None => {
                log::warn!("cannot find timestamp validation info for {}", timestamp.id);
                diagnostics.push(Diagnostic {
                    kind: DiagnosticKind::TimestampValidationMissing,
                    token_id: Some(timestamp.id.clone()),
                    message: format!("no validation info for timestamp {}", timestamp.id),
                });
            }
        }
    }

    // Step 6: export the proof of existence for upstream "as of" checks.
    poe.record(inputs.signature_id.clone(), best_signature_time);
    for timestamp in &retained {
        poe.fold_timestamp(timestamp);
    }

    let mut timestamp_counts: BTreeMap<TimestampType, usize> = BTreeMap::new();
    for timestamp in &retained {
        *timestamp_counts.entry(timestamp.timestamp_type).or_insert(0) += 1;
    }

    LtvReport {
        conclusion: report.conclusion,
        checks: report.checks,
        best_signature_time,
        diagnostics,
        retained_timestamps: retained.iter().map(|t| t.id.clone()).collect(),
        timestamp_counts,
    }
}
