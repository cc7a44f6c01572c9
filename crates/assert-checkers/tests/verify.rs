// crates/assert-checkers/tests/verify.rs
// ============================================================================
// Module: Verification Adapter Tests
// Description: Coverage for `verify` and the `check_that!` macro.
// Purpose: Validate failure reports and `?` propagation in test code.
// Dependencies: assert_checkers::verify, serde_json
// ============================================================================
//! ## Overview
//! Integration tests for the harness-facing verification helpers.

mod support;

use assert_checkers::BYTES_EQUALS;
use assert_checkers::CheckFailure;
use assert_checkers::CheckValue;
use assert_checkers::Checker;
use assert_checkers::CheckerRegistry;
use assert_checkers::IS_FALSE;
use assert_checkers::IS_TRUE;
use assert_checkers::check_that;
use assert_checkers::verify;
use support::TestResult;
use support::ensure;

// ============================================================================
// SECTION: Passing Checks
// ============================================================================

/// Tests passing checks propagate through `?`.
#[test]
fn test_check_that_passes() -> TestResult {
    check_that!(true, IS_TRUE)?;
    check_that!(false, IS_FALSE)?;
    check_that!(b"bar", BYTES_EQUALS, b"bar")?;
    check_that!(None::<Vec<u8>>, BYTES_EQUALS, b"")?;
    check_that!(None::<&[u8]>, BYTES_EQUALS, None::<&[u8]>)?;
    Ok(())
}

/// Tests verify works through a registry trait object.
#[test]
fn test_verify_through_registry() -> TestResult {
    let registry = CheckerRegistry::stock();
    let checker = registry.get("BytesEquals")?;
    verify(CheckValue::from(vec![1_u8, 2]), checker, &[CheckValue::from(&[1_u8, 2])])?;
    ensure(
        verify(CheckValue::Absent, checker, &[CheckValue::from(&[1_u8])]).is_err(),
        "Expected absent to differ from non-empty bytes",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Failure Reports
// ============================================================================

/// Tests a boolean mismatch reports the labelled argument.
#[test]
fn test_bool_mismatch_report() -> TestResult {
    let Err(failure) = check_that!(false, IS_TRUE) else {
        return Err("Expected IsTrue to reject false".into());
    };
    ensure(failure.checker == IS_TRUE.name(), "Expected checker name in failure")?;
    ensure(failure.diagnostic.is_empty(), "Expected empty diagnostic for mismatch")?;
    ensure(
        failure.arguments == [("obtained".to_string(), "false".to_string())],
        "Expected labelled obtained argument",
    )?;
    ensure(
        failure.to_string() == "IsTrue check failed\n  obtained = false",
        "Expected rendered failure report",
    )?;
    Ok(())
}

/// Tests a bytes mismatch report carries the diagnostic and both arguments.
#[test]
fn test_bytes_mismatch_report() -> TestResult {
    let Err(failure) = check_that!(b"bar", BYTES_EQUALS, b"baz") else {
        return Err("Expected BytesEquals to reject differing bytes".into());
    };
    ensure(
        failure.to_string()
            == "BytesEquals check failed: Byte arrays were different\n  bytes_one = b\"bar\"\n  \
                bytes_two = b\"baz\"",
        "Expected rendered bytes failure report",
    )?;
    Ok(())
}

/// Tests surplus arguments receive positional labels.
#[test]
fn test_surplus_arguments_labelled() -> TestResult {
    let Err(failure) = check_that!(b"a", BYTES_EQUALS, b"a", "extra") else {
        return Err("Expected BytesEquals to reject three arguments".into());
    };
    ensure(
        failure.diagnostic == "BytesEqual takes 2 bytestring arguments",
        "Expected arity diagnostic",
    )?;
    ensure(
        failure.arguments.last() == Some(&("arg2".to_string(), "\"extra\"".to_string())),
        "Expected positional label for surplus argument",
    )?;
    Ok(())
}

/// Tests failures serialize for structured reporting.
#[test]
fn test_failure_serializes() -> TestResult {
    let failure: CheckFailure = match check_that!(1_i64, IS_FALSE) {
        Ok(()) => return Err("Expected IsFalse to reject an integer".into()),
        Err(failure) => failure,
    };
    let json = serde_json::to_value(&failure)?;
    ensure(json["checker"] == "IsFalse", "Expected checker field")?;
    ensure(
        json["diagnostic"] == "IsFalse requires a boolean argument",
        "Expected diagnostic field",
    )?;
    ensure(json["arguments"][0][1] == "1", "Expected rendered argument value")?;
    Ok(())
}
