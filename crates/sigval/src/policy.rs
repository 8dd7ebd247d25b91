//! Validation policy — per-check enforcement levels.
//!
//! The policy is consumed as an already-parsed mapping from check name
//! to enforcement level. Loading and parsing policy files is the
//! caller's concern.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constraint level
// ---------------------------------------------------------------------------

/// Enforcement level for one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstraintLevel {
    /// Check is skipped entirely: not executed, not recorded.
    Ignore,
    /// Check is executed and recorded but never alters the conclusion.
    Inform,
    /// A failing check records a warning; the chain proceeds.
    Warn,
    /// A failing check sets the chain's conclusion and short-circuits.
    Fail,
}

// ---------------------------------------------------------------------------
// Validation policy
// ---------------------------------------------------------------------------

/// Mapping from check name to enforcement level.
///
/// A check absent from the policy is unchecked: `level_of` answers
/// `Ignore`. Certificate sub-chain checks instead default to `Fail`
/// through `level_or`, since the chain checks are mandatory unless the
/// policy relaxes them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationPolicy {
    levels: HashMap<String, ConstraintLevel>,
}

impl ValidationPolicy {
    /// Create an empty policy: every check defaults per its call site.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a policy from an already-parsed name → level mapping.
    pub fn from_map(levels: HashMap<String, ConstraintLevel>) -> Self {
        Self { levels }
    }

    /// Set the level for one check. Builder-style.
    pub fn with_level(mut self, name: &str, level: ConstraintLevel) -> Self {
        self.levels.insert(name.to_string(), level);
        self
    }

    /// Level of a check, defaulting to `Ignore` when the policy omits it.
    pub fn level_of(&self, name: &str) -> ConstraintLevel {
        self.level_or(name, ConstraintLevel::Ignore)
    }

    /// Level of a check with an explicit default for omitted entries.
    pub fn level_or(&self, name: &str, default: ConstraintLevel) -> ConstraintLevel {
        self.levels.get(name).copied().unwrap_or(default)
    }
}

// ---------------------------------------------------------------------------
// Signature acceptance policy
// ---------------------------------------------------------------------------

/// Constraints applied to signature-acceptance checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AcceptancePolicy {
    /// Accepted commitment-type identifiers (None = any).
    pub accepted_commitments: Option<Vec<String>>,
    /// Required signature policy identifier (None = any).
    pub required_policy_id: Option<String>,
}

impl AcceptancePolicy {
    /// Accept any commitment type and any signature policy.
    pub fn open() -> Self {
        Self::default()
    }

    /// Are the claimed commitment types all acceptable?
    pub fn commitments_acceptable(&self, claimed: &[String]) -> bool {
        match &self.accepted_commitments {
            Some(accepted) => claimed.iter().all(|c| accepted.contains(c)),
            None => true,
        }
    }

    /// Does the claimed signature policy id satisfy the requirement?
    pub fn policy_id_acceptable(&self, claimed: Option<&str>) -> bool {
        match &self.required_policy_id {
            Some(required) => claimed == Some(required.as_str()),
            None => true,
        }
    }
}
