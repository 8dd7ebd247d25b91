//! Timestamp wrapper — production time, imprint facts, and coverage.

use serde::{Deserialize, Serialize};

use super::TokenId;
use crate::verdict::Conclusion;

/// Kind of timestamp token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimestampType {
    /// Covers the signature value.
    Signature,
    /// Covers signed content before signing.
    Content,
    /// Covers individual data objects.
    IndividualDataObjects,
    /// Covers the whole signature with its validation material.
    Archive,
}

/// Read-only snapshot of one timestamp token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimestampWrapper {
    pub id: TokenId,
    pub timestamp_type: TimestampType,
    /// When the timestamp authority produced the token (epoch micros).
    pub production_time: u64,
    /// Was the message imprint located in the timestamped data?
    pub message_imprint_found: bool,
    /// Did the message imprint verify intact?
    pub message_imprint_intact: bool,
    /// Tokens whose existence this timestamp proves.
    pub timestamped_objects: Vec<TokenId>,
    /// Revocation tokens found inside the timestamp's validation data.
    pub found_revocations: Vec<TokenId>,
    /// The timestamp's own basic-building-block conclusion.
    pub conclusion: Conclusion,
}

impl TimestampWrapper {
    /// A timestamp with a found, intact imprint and a passed conclusion.
    pub fn valid(
        id: impl Into<TokenId>,
        timestamp_type: TimestampType,
        production_time: u64,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp_type,
            production_time,
            message_imprint_found: true,
            message_imprint_intact: true,
            timestamped_objects: Vec::new(),
            found_revocations: Vec::new(),
            conclusion: Conclusion::passed(),
        }
    }

    pub fn covering(mut self, objects: impl IntoIterator<Item = TokenId>) -> Self {
        self.timestamped_objects.extend(objects);
        self
    }

    /// Is the message imprint usable as proof?
    pub fn imprint_valid(&self) -> bool {
        self.message_imprint_found && self.message_imprint_intact
    }
}
