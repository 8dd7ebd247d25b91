//! Structured validation verdicts.
//!
//! A validation run never answers with a bare boolean. Every chain of
//! checks terminates in a [`Conclusion`] — an indication, optionally
//! refined by a sub-indication — accompanied by the ordered trail of
//! [`CheckResult`] entries that produced it and any [`Diagnostic`] notes
//! recorded along the way.

pub mod types;

pub use types::{
    CheckResult, CheckStatus, Conclusion, Diagnostic, DiagnosticKind, Indication, SubIndication,
};
