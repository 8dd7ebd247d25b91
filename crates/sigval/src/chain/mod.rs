//! Constraint chain engine — ordered checks sharing one conclusion.
//!
//! Every check in the system is one [`Check`] descriptor: an enforcement
//! level, a lazy predicate, and the conclusion a failure designates.
//! [`evaluate`] runs a chain in order with level-aware semantics and
//! FAIL-level short-circuit, and returns the accumulated report.

pub mod engine;

pub use engine::{evaluate, Chain, ChainReport, Check};
