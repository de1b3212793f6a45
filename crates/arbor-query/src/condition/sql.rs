//! SQL emission for condition trees.
//!
//! Two rendering positions exist. The *root* position compiles a named query
//! into a full `SELECT parent_id ...` statement; the *predicate* position
//! compiles any condition into a clause fragment of the enclosing WHERE. A
//! named query in predicate position becomes a correlated existence test
//! (`id IN (...)`) wrapping its own self-contained root statement — the only
//! place rendering recurses.
//!
//! Rendering is total over well-formed trees and deterministic: junction
//! members emit in canonical order, join lists in `Table` order, aliases are
//! fixed per table and never renumbered across nested subqueries.

use super::ast::{Condition, Junction, NamedQuery};
use crate::{error::QueryError, table::Table};
use std::fmt::{self, Write};

impl Condition {
    /// Predicate-position fragment for this condition.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Compile the tree into the statement selecting `parent_id` of every
    /// matching top-level record.
    ///
    /// The root must resolve to a named attribute: either a named query, or
    /// a junction whose members are all named queries (the canonically first
    /// member anchors the statement, the rest join as correlated
    /// subqueries). Anything else cannot anchor `o.name` and is rejected.
    pub fn sql(&self) -> Result<String, QueryError> {
        match self {
            Self::Named(query) => Ok(named_root(query)),
            Self::Junction(junction) => junction_root(junction),
            Self::Numeric(_) | Self::String(_) => Err(QueryError::UnanchoredQuery),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(leaf) => write!(
                f,
                "{}.value {} {}",
                Table::Value.alias(),
                leaf.op(),
                leaf.value()
            ),
            Self::String(leaf) => write!(
                f,
                "{}.value {} '{}'",
                Table::StringValue.alias(),
                leaf.op(),
                leaf.value()
            ),
            Self::Named(query) => write!(f, "id IN ({})", named_root(query)),
            Self::Junction(junction) => {
                f.write_str("(")?;
                let mut first = true;
                for member in junction.conditions() {
                    if !first {
                        write!(f, " {} ", junction.kind())?;
                    }
                    first = false;
                    write!(f, "{member}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Root statement for a named query: cross join of `object` with the tables
/// the inner condition requires, constrained by the WHERE clause.
fn named_root(query: &NamedQuery) -> String {
    let object = Table::Object;

    let mut sql = format!(
        "SELECT parent_id FROM {} AS {}",
        object.table_name(),
        object.alias()
    );

    if let Some(inner) = query.condition() {
        // A nested named query keeps its requirements inside its own
        // subquery, so only value tables ever reach this join list.
        for table in inner.tables() {
            if table == object {
                continue;
            }
            let _ = write!(sql, ", {} AS {}", table.table_name(), table.alias());
        }
    }

    let _ = write!(sql, " WHERE {}.name = '{}'", object.alias(), query.name());

    if let Some(inner) = query.condition() {
        let _ = write!(sql, " AND {inner}");
    }

    sql
}

/// Root statement for a junction: every member must be a named query. The
/// first member in canonical order anchors the outer SELECT; the remaining
/// members attach as correlated subqueries joined by the junction operator.
fn junction_root(junction: &Junction) -> Result<String, QueryError> {
    let mut members = junction.conditions();

    let Some(Condition::Named(anchor)) = members.next() else {
        return Err(QueryError::UnanchoredQuery);
    };

    let mut sql = named_root(anchor);
    for member in members {
        if !matches!(member, Condition::Named(_)) {
            return Err(QueryError::UnanchoredQuery);
        }
        let _ = write!(sql, " {} {member}", junction.kind());
    }

    Ok(sql)
}
