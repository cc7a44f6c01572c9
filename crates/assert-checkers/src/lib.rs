// crates/assert-checkers/src/lib.rs
// ============================================================================
// Module: Assert Checkers Root
// Description: Public API surface for the checker contract and stock checkers.
// Purpose: Wire together core modules, re-exports, and the assertion macro.
// Dependencies: crate::{bool_value, bytes_equals, checker, error, registry, value, verify}
// ============================================================================

//! ## Overview
//! `assert-checkers` supplies comparison checkers for assertion-style test
//! harnesses. A checker is a named, stateless rule that receives the obtained
//! value followed by any expected arguments and reports pass or fail with a
//! diagnostic. Malformed input never panics; it is reported through the
//! returned [`CheckOutcome`].
//!
//! Stock checkers are process-wide immutable statics: [`IS_TRUE`],
//! [`IS_FALSE`] and [`BYTES_EQUALS`]. The latter treats an absent byte
//! sequence as equal to an empty one.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod bool_value;
pub mod bytes_equals;
pub mod checker;
pub mod error;
pub mod registry;
pub mod value;
pub mod verify;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use bool_value::BoolValueChecker;
pub use bool_value::IS_FALSE;
pub use bool_value::IS_TRUE;
pub use bytes_equals::BYTES_EQUALS;
pub use bytes_equals::BytesEqualsChecker;
pub use checker::CheckOutcome;
pub use checker::Checker;
pub use checker::CheckerInfo;
pub use error::CheckFailure;
pub use error::RegistryError;
pub use registry::CheckerRegistry;
pub use value::CheckValue;
pub use verify::verify;

// ============================================================================
// SECTION: Assertion Macro
// ============================================================================

/// Runs a checker in the `assert(value, checker, ...expected)` call shape
///
/// Every argument is converted with [`CheckValue::from`], so booleans, byte
/// slices, `Option<Vec<u8>>` and strings can be passed directly:
///
/// ```
/// use assert_checkers::BYTES_EQUALS;
/// use assert_checkers::IS_TRUE;
/// use assert_checkers::check_that;
///
/// # fn main() -> Result<(), assert_checkers::CheckFailure> {
/// check_that!(true, IS_TRUE)?;
/// check_that!(b"bar", BYTES_EQUALS, b"bar")?;
/// check_that!(None::<Vec<u8>>, BYTES_EQUALS, b"")?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! check_that {
    ($obtained:expr, $checker:expr $(, $expected:expr)* $(,)?) => {
        $crate::verify::verify(
            $crate::value::CheckValue::from($obtained),
            &$checker,
            &[$($crate::value::CheckValue::from($expected)),*],
        )
    };
}
