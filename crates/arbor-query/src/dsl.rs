//! Query DSL entry points.
//!
//! `q` is the only way to enter the algebra from the top level: every
//! compilable query must be anchored to a named attribute path. `v` and `sv`
//! build the two leaf comparison kinds, `and` / `or` combine conditions with
//! eager normalization. Combination yields a plain [`Condition`] — after the
//! singleton collapse, `and([x])` is indistinguishable from `x`, so callers
//! must not rely on receiving a junction.

use crate::{
    condition::{
        CompareOp, Condition, JunctionKind, NamedQuery, Number, NumericCondition, StringCondition,
        normalize,
    },
    error::QueryError,
};

/// Condition on objects carrying the attribute `name`, optionally
/// constrained further by `condition`.
pub fn q(
    name: impl Into<String>,
    condition: impl Into<Option<Condition>>,
) -> Result<Condition, QueryError> {
    Ok(NamedQuery::new(name, condition)?.into())
}

/// Numeric comparison leaf: `op` is one of `= != < <= > >=`.
pub fn v(op: &str, value: impl Into<Number>) -> Result<Condition, QueryError> {
    let op: CompareOp = op.parse()?;

    Ok(NumericCondition::new(op, value).into())
}

/// String comparison leaf: `op` is one of `= != < <= > >=`.
pub fn sv(op: &str, value: impl Into<String>) -> Result<Condition, QueryError> {
    let op: CompareOp = op.parse()?;

    Ok(StringCondition::new(op, value)?.into())
}

/// Conjunction of the given conditions. Absent entries are discarded;
/// `None` comes back when nothing survives normalization (no predicate).
pub fn and<I>(conditions: I) -> Option<Condition>
where
    I: IntoIterator,
    I::Item: Into<Option<Condition>>,
{
    junction(JunctionKind::And, conditions)
}

/// Disjunction of the given conditions, with the same discard and collapse
/// behavior as [`and`].
pub fn or<I>(conditions: I) -> Option<Condition>
where
    I: IntoIterator,
    I::Item: Into<Option<Condition>>,
{
    junction(JunctionKind::Or, conditions)
}

fn junction<I>(kind: JunctionKind, conditions: I) -> Option<Condition>
where
    I: IntoIterator,
    I::Item: Into<Option<Condition>>,
{
    normalize::junction(kind, conditions.into_iter().map(Into::into))
}
