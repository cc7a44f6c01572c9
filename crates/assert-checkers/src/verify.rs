// crates/assert-checkers/src/verify.rs
// ============================================================================
// Module: Verification Adapter
// Description: Bridge from a checker outcome to a propagatable error.
// Purpose: Let Rust tests invoke checkers in the `assert(value, checker, ...)`
//          shape and use `?` on failure.
// Dependencies: crate::{checker, error, value}, tracing
// ============================================================================

//! ## Overview
//! [`verify`] assembles `[obtained, expected...]`, runs the checker and maps a
//! failed outcome to [`CheckFailure`]. Failures are logged at `debug` level;
//! installing a subscriber is left to the caller.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::checker::Checker;
use crate::error::CheckFailure;
use crate::value::CheckValue;

// ============================================================================
// SECTION: Verification
// ============================================================================

/// Runs `checker` over the obtained value followed by `expected`
///
/// # Errors
/// Returns [`CheckFailure`] when the checker reports a failed outcome.
pub fn verify<C>(
    obtained: CheckValue,
    checker: &C,
    expected: &[CheckValue],
) -> Result<(), CheckFailure>
where
    C: Checker + ?Sized,
{
    let mut params = Vec::with_capacity(expected.len() + 1);
    params.push(obtained);
    params.extend_from_slice(expected);

    let outcome = checker.check(&params);
    if outcome.is_pass() {
        return Ok(());
    }

    tracing::debug!(
        checker = checker.name(),
        diagnostic = outcome.diagnostic.as_str(),
        arguments = params.len(),
        "check failed"
    );
    Err(CheckFailure {
        checker: checker.name().to_string(),
        diagnostic: outcome.diagnostic,
        arguments: label_arguments(checker.parameter_names(), &params),
    })
}

/// Pairs each argument with its parameter label.
///
/// Arguments beyond the declared parameters are labelled `arg<index>`.
pub(crate) fn label_arguments(names: &[&str], params: &[CheckValue]) -> Vec<(String, String)> {
    params
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let label = names
                .get(index)
                .map_or_else(|| format!("arg{index}"), |name| (*name).to_string());
            (label, value.to_string())
        })
        .collect()
}
