//! Chain evaluation — level-aware ordered checks with short-circuit.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::TokenId;
use crate::policy::ConstraintLevel;
use crate::verdict::{CheckResult, CheckStatus, Conclusion, Indication, SubIndication};

// ---------------------------------------------------------------------------
// Check descriptor
// ---------------------------------------------------------------------------

/// One check in a chain.
///
/// The predicate is lazy: it is never run for an `Ignore`-level check or
/// for any check after a `Fail`-level failure earlier in the chain.
pub struct Check<'a> {
    name: String,
    level: ConstraintLevel,
    predicate: Box<dyn FnOnce() -> bool + 'a>,
    message_tag: String,
    fail_indication: Indication,
    fail_sub_indication: Option<SubIndication>,
    token_id: Option<TokenId>,
}

impl<'a> Check<'a> {
    /// Create a check. A failing `Fail`-level check concludes
    /// `Indeterminate` with no sub-indication unless `on_failure`
    /// designates otherwise.
    pub fn new(
        name: impl Into<String>,
        level: ConstraintLevel,
        predicate: impl FnOnce() -> bool + 'a,
    ) -> Self {
        let name = name.into();
        Self {
            message_tag: name.clone(),
            name,
            level,
            predicate: Box::new(predicate),
            fail_indication: Indication::Indeterminate,
            fail_sub_indication: None,
            token_id: None,
        }
    }

    /// Designate the conclusion a `Fail`-level failure produces.
    pub fn on_failure(mut self, indication: Indication, sub: Option<SubIndication>) -> Self {
        self.fail_indication = indication;
        self.fail_sub_indication = sub;
        self
    }

    /// Set the message tag recorded in the check trail (defaults to the
    /// check name).
    pub fn message_tag(mut self, tag: impl Into<String>) -> Self {
        self.message_tag = tag.into();
        self
    }

    /// Attach the id of the token this check evaluates.
    pub fn for_token(mut self, id: TokenId) -> Self {
        self.token_id = Some(id);
        self
    }
}

impl std::fmt::Debug for Check<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Check")
            .field("name", &self.name)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Chain report
// ---------------------------------------------------------------------------

/// Accumulated outcome of one evaluated chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainReport {
    pub conclusion: Conclusion,
    /// Trail of executed checks, in execution order.
    pub checks: Vec<CheckResult>,
}

impl ChainReport {
    /// Index the trail by token id. Built once per consumer; the first
    /// result recorded for a token wins. Results without a token id are
    /// not indexed.
    pub fn checks_by_token(&self) -> HashMap<&TokenId, &CheckResult> {
        let mut by_token = HashMap::new();
        for check in &self.checks {
            if let Some(id) = &check.token_id {
                by_token.entry(id).or_insert(check);
            }
        }
        by_token
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Evaluate an ordered chain of checks.
///
/// - `Ignore`: skipped entirely, not executed, not recorded.
/// - `Inform`: executed and recorded (`Ok`/`Warning`) with no effect on
///   the conclusion.
/// - `Warn`: executed; a failure records `Warning` and the chain
///   proceeds.
/// - `Fail`: executed; a failure records `NotOk`, the conclusion becomes
///   the check's designated (indication, sub-indication), and no later
///   check executes.
///
/// A chain whose checks all pass (or are ignored/warned) concludes
/// `Passed`.
pub fn evaluate(checks: Vec<Check<'_>>) -> ChainReport {
    let mut trail = Vec::new();

    for check in checks {
        if check.level == ConstraintLevel::Ignore {
            continue;
        }

        let ok = (check.predicate)();
        let status = match (check.level, ok) {
            (_, true) => CheckStatus::Ok,
            (ConstraintLevel::Fail, false) => CheckStatus::NotOk,
            (_, false) => CheckStatus::Warning,
        };

        trail.push(CheckResult {
            name: check.name,
            status,
            message_tag: check.message_tag,
            token_id: check.token_id,
        });

        if check.level == ConstraintLevel::Fail && !ok {
            return ChainReport {
                conclusion: Conclusion::new(check.fail_indication, check.fail_sub_indication),
                checks: trail,
            };
        }
    }

    ChainReport {
        conclusion: Conclusion::passed(),
        checks: trail,
    }
}

/// Builder for an ordered chain, for call sites that assemble checks
/// conditionally.
#[derive(Default)]
pub struct Chain<'a> {
    checks: Vec<Check<'a>>,
}

impl<'a> Chain<'a> {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    pub fn push(mut self, check: Check<'a>) -> Self {
        self.checks.push(check);
        self
    }

    pub fn extend(mut self, checks: impl IntoIterator<Item = Check<'a>>) -> Self {
        self.checks.extend(checks);
        self
    }

    pub fn evaluate(self) -> ChainReport {
        evaluate(self.checks)
    }
}
