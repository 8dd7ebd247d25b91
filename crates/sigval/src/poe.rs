//! Proof-of-existence registry.
//!
//! Tracks, per token, the earliest time at which a trustworthy timestamp
//! proves the token existed. Entries only ever move earlier; a token
//! without an entry is proven no earlier than "now" (the registry's
//! creation time). Time-sensitive checks substitute a recorded proven
//! time for the wall-clock reference time, turning an otherwise-fatal
//! "expired or revoked now" into "valid as of proof".

use std::collections::HashMap;

use crate::model::{TimestampWrapper, TokenId};

/// Per-run registry of earliest proven existence times.
///
/// One registry per validation run; runs never share a mutable registry.
#[derive(Debug, Clone)]
pub struct PoeRegistry {
    /// Wall-clock time at creation. Recorded proofs are floored here:
    /// nothing can be proven to have existed only after "now", and
    /// absent tokens are proven no earlier than this.
    created_at: u64,
    earliest: HashMap<TokenId, u64>,
}

impl PoeRegistry {
    /// Create a registry at the current wall-clock time.
    pub fn new(current_time: u64) -> Self {
        Self {
            created_at: current_time,
            earliest: HashMap::new(),
        }
    }

    /// Record that `token_id` provably existed at `proven_time`.
    ///
    /// Keeps the earliest time seen; recording a later time than the
    /// stored one is a no-op. A `proven_time` past the registry's
    /// creation time is clamped to it. Entries are never removed.
    pub fn record(&mut self, token_id: TokenId, proven_time: u64) {
        let proven_time = proven_time.min(self.created_at);
        self.earliest
            .entry(token_id)
            .and_modify(|t| {
                if proven_time < *t {
                    *t = proven_time;
                }
            })
            .or_insert(proven_time);
    }

    /// Earliest proven existence time for `token_id`, if any.
    pub fn query(&self, token_id: &TokenId) -> Option<u64> {
        self.earliest.get(token_id).copied()
    }

    /// Fold a timestamp's coverage into the registry.
    ///
    /// Each timestamped object gains a proof at the timestamp's
    /// production time, but only when the message imprint is usable and
    /// the timestamp's own building blocks concluded `Passed` — an
    /// untrustworthy timestamp proves nothing.
    pub fn fold_timestamp(&mut self, timestamp: &TimestampWrapper) {
        if !timestamp.imprint_valid() || !timestamp.conclusion.is_passed() {
            return;
        }
        for object in &timestamp.timestamped_objects {
            self.record(object.clone(), timestamp.production_time);
        }
        self.record(timestamp.id.clone(), timestamp.production_time);
    }

    /// Number of tokens with a recorded proof.
    pub fn len(&self) -> usize {
        self.earliest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.earliest.is_empty()
    }
}
