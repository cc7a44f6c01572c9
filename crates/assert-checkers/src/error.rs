// crates/assert-checkers/src/error.rs
// ============================================================================
// Module: Checker Error Definitions
// Description: Errors for registry lookups and failed verifications.
// Purpose: Give harness callers `std::error::Error` values they can propagate.
// Dependencies: serde::Serialize, thiserror
// ============================================================================

//! ## Overview
//! `check` itself never errors. These types exist for the layers around it:
//! [`RegistryError`] for name-based lookup and [`CheckFailure`] for turning a
//! failed outcome into something a test can return with `?`.

use std::fmt::Write as _;

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Registry Errors
// ============================================================================

/// Errors raised by [`crate::CheckerRegistry`]
///
/// # Invariants
/// - Payloads carry the checker name that triggered the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No checker is registered under the name
    #[error("unknown checker: {0}")]
    UnknownChecker(String),
    /// A checker with the same name is already registered
    #[error("duplicate checker: {0}")]
    DuplicateChecker(String),
}

// ============================================================================
// SECTION: Check Failure
// ============================================================================

/// A failed check, with the arguments labelled for reporting
///
/// # Invariants
/// - `arguments` pairs each supplied argument with its parameter label, in
///   positional order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{}", render_failure(.checker, .diagnostic, .arguments))]
pub struct CheckFailure {
    /// Name of the checker that failed
    pub checker: String,
    /// Diagnostic reported by the checker; may be empty
    pub diagnostic: String,
    /// Parameter labels zipped with rendered argument values
    pub arguments: Vec<(String, String)>,
}

/// Renders a failure as a header line followed by one line per argument.
fn render_failure(checker: &str, diagnostic: &str, arguments: &[(String, String)]) -> String {
    let mut out = format!("{checker} check failed");
    if !diagnostic.is_empty() {
        let _ = write!(out, ": {diagnostic}");
    }
    for (label, value) in arguments {
        let _ = write!(out, "\n  {label} = {value}");
    }
    out
}
