// crates/assert-checkers/src/bool_value.rs
// ============================================================================
// Module: Boolean Identity Checker
// Description: IsTrue / IsFalse checkers sharing one implementation.
// Purpose: Verify that the obtained value is a boolean equal to a fixed value.
// Dependencies: crate::{checker, value}
// ============================================================================

//! ## Overview
//! [`BoolValueChecker`] carries its expected boolean as immutable
//! configuration fixed at construction. [`IS_TRUE`] and [`IS_FALSE`] are the
//! two stock instances.
//!
//! Only `params[0]` is consulted; trailing arguments are ignored.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::checker::CheckOutcome;
use crate::checker::Checker;
use crate::checker::CheckerInfo;
use crate::value::CheckValue;

// ============================================================================
// SECTION: Boolean Checker
// ============================================================================

/// Checker asserting that the obtained value is a specific boolean
///
/// # Invariants
/// - `expected` never changes after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolValueChecker {
    /// Checker metadata
    info: CheckerInfo,
    /// Boolean the obtained value must equal
    expected: bool,
}

impl BoolValueChecker {
    /// Creates a boolean checker named `name` expecting `expected`
    #[must_use]
    pub const fn new(name: &'static str, expected: bool) -> Self {
        Self {
            info: CheckerInfo::new(name, &["obtained"]),
            expected,
        }
    }

    /// Returns the boolean this checker expects
    #[must_use]
    pub const fn expected(&self) -> bool {
        self.expected
    }
}

impl Checker for BoolValueChecker {
    fn info(&self) -> &CheckerInfo {
        &self.info
    }

    fn check(&self, params: &[CheckValue]) -> CheckOutcome {
        let Some(obtained) = params.first().and_then(CheckValue::as_bool) else {
            return CheckOutcome::fail(format!("{} requires a boolean argument", self.info.name()));
        };
        CheckOutcome::from_bool(obtained == self.expected)
    }
}

// ============================================================================
// SECTION: Stock Instances
// ============================================================================

/// Verifies that the obtained value is `true`
///
/// ```
/// use assert_checkers::IS_TRUE;
/// use assert_checkers::check_that;
///
/// assert!(check_that!(1 + 1 == 2, IS_TRUE).is_ok());
/// ```
pub static IS_TRUE: BoolValueChecker = BoolValueChecker::new("IsTrue", true);

/// Verifies that the obtained value is `false`
///
/// ```
/// use assert_checkers::IS_FALSE;
/// use assert_checkers::check_that;
///
/// assert!(check_that!("".is_empty(), IS_FALSE).is_err());
/// ```
pub static IS_FALSE: BoolValueChecker = BoolValueChecker::new("IsFalse", false);
