// crates/assert-checkers/src/bytes_equals.rs
// ============================================================================
// Module: Byte Sequence Equality Checker
// Description: BytesEquals checker with absent-as-empty semantics.
// Purpose: Compare two byte sequences, treating a missing sequence as empty.
// Dependencies: crate::{checker, value}
// ============================================================================

//! ## Overview
//! [`BYTES_EQUALS`] compares exactly two byte-sequence arguments. Unlike a
//! structural equality check, an absent sequence is equal to a zero-length
//! one, so `(Absent, b"")` and `(Absent, Absent)` both pass while
//! `(Absent, b"\x01")` fails.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::checker::CheckOutcome;
use crate::checker::Checker;
use crate::checker::CheckerInfo;
use crate::value::CheckValue;

// ============================================================================
// SECTION: Diagnostics
// ============================================================================

/// Diagnostic for a call with other than two arguments
pub const ARITY_DIAGNOSTIC: &str = "BytesEqual takes 2 bytestring arguments";

/// Diagnostic for a non-bytes, non-absent argument
pub const TYPE_DIAGNOSTIC: &str = "Arguments to BytesEqual must both be bytestrings";

/// Diagnostic for differing byte sequences
pub const MISMATCH_DIAGNOSTIC: &str = "Byte arrays were different";

// ============================================================================
// SECTION: Bytes Equality Checker
// ============================================================================

/// Checker comparing two byte sequences with absent-as-empty semantics
///
/// # Invariants
/// - Zero-sized apart from its static metadata; carries no runtime state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BytesEqualsChecker {
    /// Checker metadata
    info: CheckerInfo,
}

impl BytesEqualsChecker {
    /// Creates the bytes equality checker
    #[must_use]
    pub const fn new() -> Self {
        Self {
            info: CheckerInfo::new("BytesEquals", &["bytes_one", "bytes_two"]),
        }
    }
}

impl Default for BytesEqualsChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker for BytesEqualsChecker {
    fn info(&self) -> &CheckerInfo {
        &self.info
    }

    fn check(&self, params: &[CheckValue]) -> CheckOutcome {
        let [first, second] = params else {
            return CheckOutcome::fail(ARITY_DIAGNOSTIC);
        };
        let (Some(first), Some(second)) = (first.as_bytes_or_empty(), second.as_bytes_or_empty())
        else {
            return CheckOutcome::fail(TYPE_DIAGNOSTIC);
        };
        if first == second { CheckOutcome::pass() } else { CheckOutcome::fail(MISMATCH_DIAGNOSTIC) }
    }
}

// ============================================================================
// SECTION: Stock Instance
// ============================================================================

/// Compares two byte sequences, treating an absent sequence as empty
///
/// ```
/// use assert_checkers::BYTES_EQUALS;
/// use assert_checkers::check_that;
///
/// assert!(check_that!(b"bar", BYTES_EQUALS, b"bar").is_ok());
/// assert!(check_that!(None::<Vec<u8>>, BYTES_EQUALS, b"").is_ok());
/// assert!(check_that!(b"bar", BYTES_EQUALS, b"baz").is_err());
/// ```
pub static BYTES_EQUALS: BytesEqualsChecker = BytesEqualsChecker::new();
