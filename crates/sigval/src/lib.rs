//! sigval — policy-driven signature validity evaluation.
//!
//! Evaluates the trust validity of a digital signature against a
//! configurable policy, producing a structured, auditable verdict
//! (indication, sub-indication, per-check trail) rather than a boolean.
//! The core pieces are a level-aware constraint chain engine with
//! short-circuit semantics, certificate chain validation with
//! proof-of-existence substitution, and the long-term validation data
//! process that computes a signature's best-signature-time by chaining
//! timestamps.
//!
//! The engine is synchronous and deterministic: all wrappers are
//! pre-extracted read-only snapshots, all cryptographic facts are
//! pre-computed booleans, and every abnormal situation is encoded as a
//! conclusion value rather than a fault.

pub mod basic;
pub mod chain;
pub mod error;
pub mod ltv;
pub mod model;
pub mod poe;
pub mod policy;
pub mod time;
pub mod verdict;
pub mod xcv;

// Re-export primary types
pub use error::{Result, ValidationError};
pub use verdict::{
    CheckResult, CheckStatus, Conclusion, Diagnostic, DiagnosticKind, Indication, SubIndication,
};

pub use chain::{evaluate, Chain, ChainReport, Check};
pub use policy::{AcceptancePolicy, ConstraintLevel, ValidationPolicy};

// Re-export wrapper model
pub use model::{
    CertificateWrapper, KeyUsage, RevocationOrigin, RevocationRefOrigin, RevocationStatus,
    RevocationWrapper, SignatureWrapper, TimestampType, TimestampWrapper, TokenId,
};

// Re-export validation processes
pub use basic::{is_acceptable, validate_basic_signature, BsvReport};
pub use ltv::{validate_long_term, LtvInputs, LtvReport};
pub use poe::PoeRegistry;
pub use xcv::{validate_certificate_path, SubXcvReport, XcvReport};
