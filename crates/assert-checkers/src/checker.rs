// crates/assert-checkers/src/checker.rs
// ============================================================================
// Module: Checker Contract
// Description: Uniform shape every checker exposes to the host harness.
// Purpose: Define checker metadata, check outcomes, and the checker trait.
// Dependencies: crate::value, serde::{Deserialize, Serialize}
// ============================================================================

//! ## Overview
//! A checker pairs static metadata ([`CheckerInfo`]) with a single `check`
//! entry point. Wrong argument types, wrong argument counts and genuine value
//! mismatches all collapse into a failed [`CheckOutcome`] with a diagnostic;
//! there is no separate error channel.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::value::CheckValue;

// ============================================================================
// SECTION: Checker Metadata
// ============================================================================

/// Static metadata describing a checker
///
/// # Invariants
/// - `name` is stable for the lifetime of the process.
/// - `params` labels positional arguments; its length is the documented arity
///   but is not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckerInfo {
    /// Identifier used in diagnostics
    name: &'static str,
    /// Ordered labels for the positional arguments
    params: &'static [&'static str],
}

impl CheckerInfo {
    /// Creates checker metadata
    #[must_use]
    pub const fn new(name: &'static str, params: &'static [&'static str]) -> Self {
        Self {
            name,
            params,
        }
    }

    /// Returns the checker name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the positional argument labels
    #[must_use]
    pub const fn params(&self) -> &'static [&'static str] {
        self.params
    }
}

// ============================================================================
// SECTION: Check Outcome
// ============================================================================

/// Result of a single check invocation
///
/// # Invariants
/// - `diagnostic` is empty whenever `passed` is true.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Whether the check passed
    pub passed: bool,
    /// Explanation for a failed or malformed check
    pub diagnostic: String,
}

impl CheckOutcome {
    /// Passing outcome with an empty diagnostic
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            passed: true,
            diagnostic: String::new(),
        }
    }

    /// Failing outcome with no diagnostic; the harness reports the arguments
    #[must_use]
    pub const fn mismatch() -> Self {
        Self {
            passed: false,
            diagnostic: String::new(),
        }
    }

    /// Failing outcome with a diagnostic
    #[must_use]
    pub fn fail(diagnostic: impl Into<String>) -> Self {
        Self {
            passed: false,
            diagnostic: diagnostic.into(),
        }
    }

    /// Builds a passing or mismatching outcome from a comparison result
    #[must_use]
    pub const fn from_bool(passed: bool) -> Self {
        if passed { Self::pass() } else { Self::mismatch() }
    }

    /// Returns true if the check passed
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        self.passed
    }
}

// ============================================================================
// SECTION: Checker Trait
// ============================================================================

/// Comparison rule invoked by an assertion harness
///
/// Implementations must be stateless with respect to `check`: the same
/// arguments always produce the same outcome, and concurrent calls need no
/// coordination.
pub trait Checker: Send + Sync {
    /// Returns the checker metadata
    fn info(&self) -> &CheckerInfo;

    /// Evaluates the positional arguments
    ///
    /// `params[0]` is the obtained value; the remainder are expected
    /// arguments. Implementations validate their own arity and must not panic
    /// on any input.
    fn check(&self, params: &[CheckValue]) -> CheckOutcome;

    /// Returns the checker name
    fn name(&self) -> &'static str {
        self.info().name()
    }

    /// Returns the positional argument labels
    fn parameter_names(&self) -> &'static [&'static str] {
        self.info().params()
    }
}
