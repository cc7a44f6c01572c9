// crates/assert-checkers/src/value.rs
// ============================================================================
// Module: Check Values
// Description: Tagged argument values passed positionally to checkers.
// Purpose: Replace untyped parameter lists with a closed, matchable variant set.
// Dependencies: serde::{Deserialize, Serialize}, std::fmt
// ============================================================================

//! ## Overview
//! Checkers receive their arguments as a slice of [`CheckValue`]. A wrong
//! argument type is a variant mismatch, detected by a `match` rather than a
//! runtime downcast. [`CheckValue::Absent`] is the "no value" form of a
//! reference-like argument, such as a `None` byte buffer.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Check Value
// ============================================================================

/// Positional argument passed to a checker
///
/// # Invariants
/// - `Absent` is distinct from `Bytes(vec![])`; only checkers that opt into
///   absent-as-empty semantics treat them alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CheckValue {
    /// Boolean value
    Bool(bool),
    /// Byte sequence
    Bytes(Vec<u8>),
    /// Missing or unset value
    Absent,
    /// Signed integer
    Int(i64),
    /// UTF-8 text
    Text(String),
}

impl CheckValue {
    /// Returns the boolean payload, if this is a boolean
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the byte payload, normalising `Absent` to an empty slice
    ///
    /// Returns `None` for every variant that is neither bytes nor absent.
    #[must_use]
    pub fn as_bytes_or_empty(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes.as_slice()),
            Self::Absent => Some(&[]),
            _ => None,
        }
    }

    /// Returns a short name for the variant
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Bytes(_) => "bytes",
            Self::Absent => "absent",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
        }
    }

    /// Returns true for [`CheckValue::Absent`]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

// ============================================================================
// SECTION: Display Implementation
// ============================================================================

impl fmt::Display for CheckValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Bytes(bytes) => write!(f, "b\"{}\"", bytes.escape_ascii()),
            Self::Absent => f.write_str("<absent>"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "\"{}\"", text.escape_default()),
        }
    }
}

// ============================================================================
// SECTION: Conversions
// ============================================================================

impl From<bool> for CheckValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<u8>> for CheckValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for CheckValue {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for CheckValue {
    fn from(bytes: &[u8; N]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Option<Vec<u8>>> for CheckValue {
    fn from(bytes: Option<Vec<u8>>) -> Self {
        bytes.map_or(Self::Absent, Self::Bytes)
    }
}

impl From<Option<&[u8]>> for CheckValue {
    fn from(bytes: Option<&[u8]>) -> Self {
        bytes.map_or(Self::Absent, Self::from)
    }
}

impl From<i64> for CheckValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for CheckValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for CheckValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
