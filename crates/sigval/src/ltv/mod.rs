//! Long-term validation data process.
//!
//! Accepts the basic-validation conclusion, the signature's timestamps
//! and revocation tokens, and per-token building-block conclusions, and
//! computes the signature's proof-of-existence instant — the
//! best-signature-time — by folding trustworthy timestamps down to the
//! earliest proven moment. A signature whose certificate has since
//! expired or been revoked can still be accepted when a timestamp
//! proves it existed before the problem arose.

pub mod engine;

pub use engine::{validate_long_term, LtvInputs, LtvReport};
