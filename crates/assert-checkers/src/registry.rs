// crates/assert-checkers/src/registry.rs
// ============================================================================
// Module: Checker Registry
// Description: Name-keyed lookup of checker instances.
// Purpose: Let a harness resolve checkers by their stable names.
// Dependencies: crate::{bool_value, bytes_equals, checker, error}, tracing
// ============================================================================

//! ## Overview
//! [`CheckerRegistry`] borrows checkers rather than owning them, so the stock
//! statics and caller-owned checkers register the same way. Names are unique
//! within a registry.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::bool_value::IS_FALSE;
use crate::bool_value::IS_TRUE;
use crate::bytes_equals::BYTES_EQUALS;
use crate::checker::Checker;
use crate::error::RegistryError;

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Name-keyed collection of checkers
///
/// # Invariants
/// - Each key equals the registered checker's `name()`.
#[derive(Default)]
pub struct CheckerRegistry<'a> {
    /// Registered checkers ordered by name
    checkers: BTreeMap<&'static str, &'a dyn Checker>,
}

impl<'a> CheckerRegistry<'a> {
    /// Creates an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self {
            checkers: BTreeMap::new(),
        }
    }

    /// Registers a checker under its name
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateChecker`] when the name is taken.
    pub fn register(&mut self, checker: &'a dyn Checker) -> Result<(), RegistryError> {
        match self.checkers.entry(checker.name()) {
            Entry::Occupied(entry) => Err(RegistryError::DuplicateChecker((*entry.key()).to_string())),
            Entry::Vacant(entry) => {
                tracing::trace!(checker = checker.name(), "registered checker");
                entry.insert(checker);
                Ok(())
            }
        }
    }

    /// Looks up a checker by name
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownChecker`] when no checker has the name.
    pub fn get(&self, name: &str) -> Result<&'a dyn Checker, RegistryError> {
        self.checkers
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownChecker(name.to_string()))
    }

    /// Returns registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.checkers.keys().copied()
    }

    /// Returns the number of registered checkers
    #[must_use]
    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    /// Returns whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }
}

impl CheckerRegistry<'static> {
    /// Creates a registry holding the stock checkers
    #[must_use]
    pub fn stock() -> Self {
        let stock: [&'static dyn Checker; 3] = [&IS_TRUE, &IS_FALSE, &BYTES_EQUALS];
        Self {
            checkers: stock.into_iter().map(|checker| (checker.name(), checker)).collect(),
        }
    }
}
