//! Basic signature validation.
//!
//! Aggregates format facts, signing-certificate identification,
//! certificate chain validation, cryptographic-verification facts, and
//! signature-acceptance constraints into one conclusion. Also decides
//! which conclusions long-term validation data may still rescue.

pub mod engine;

pub use engine::{is_acceptable, validate_basic_signature, BsvReport};
