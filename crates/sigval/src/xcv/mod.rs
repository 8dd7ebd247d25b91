//! Certificate chain validation (XCV).
//!
//! Walks a certificate path from the signing certificate to a trust
//! anchor, running a per-certificate sub-chain of checks: validity range
//! (with proof-of-existence substitution), revocation coverage and
//! status, key usage, and qualification constraints. The first failing
//! certificate, closest to the signer, determines the overall
//! conclusion; an unreachable trust anchor is its own terminal failure.

pub mod engine;

pub use engine::{validate_certificate_path, SubXcvReport, XcvReport};
