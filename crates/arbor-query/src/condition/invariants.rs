//! Structural audit for condition trees; must not surface through the
//! public constructors.
//!
//! Normalization upholds every invariant checked here, so a failure signals
//! a defect in the normalization pass itself, not bad caller input. The
//! audit exists for tests and debug assertions.

use super::ast::{Condition, Junction};
use crate::error::QueryError;
use std::collections::BTreeSet;

impl Condition {
    /// Recursively verify the structural invariants normalization is
    /// supposed to guarantee.
    pub fn check_invariants(&self) -> Result<(), QueryError> {
        match self {
            Self::Numeric(_) | Self::String(_) => Ok(()),
            Self::Named(query) => {
                if query.name().is_empty() {
                    return Err(QueryError::MalformedTree(
                        "named query with empty name".to_string(),
                    ));
                }
                match query.condition() {
                    Some(inner) => inner.check_invariants(),
                    None => Ok(()),
                }
            }
            Self::Junction(junction) => audit_junction(junction),
        }
    }
}

fn audit_junction(junction: &Junction) -> Result<(), QueryError> {
    if junction.len() < 2 {
        return Err(QueryError::MalformedTree(format!(
            "junction holds {} member(s); collapse must yield the member itself",
            junction.len()
        )));
    }

    let mut names = BTreeSet::new();

    for member in junction.conditions() {
        match member {
            Condition::Junction(inner) if inner.kind() == junction.kind() => {
                return Err(QueryError::MalformedTree(format!(
                    "{} junction nested inside {} junction survived flattening",
                    inner.kind(),
                    junction.kind()
                )));
            }
            Condition::Named(query) => {
                if !names.insert(query.name().to_string()) {
                    return Err(QueryError::MalformedTree(format!(
                        "duplicate named query '{}' survived merging",
                        query.name()
                    )));
                }
            }
            _ => {}
        }

        member.check_invariants()?;
    }

    Ok(())
}
