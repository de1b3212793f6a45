use crate::{
    error::QueryError,
    table::{Table, TableSet},
};
use derive_more::Display;
use std::{
    collections::BTreeSet,
    fmt,
    ops::{BitAnd, BitOr},
    str::FromStr,
};

///
/// Condition AST
///
/// Pure representation of predicates over the attribute store. This layer
/// contains no rendering or execution semantics; interpretation occurs in
/// later passes:
///
/// - normalization (construction-time, `normalize`)
/// - canonical ordering (`ordering`)
/// - SQL emission (`sql`)
///

///
/// CompareOp
///
/// Closed comparison set. Anything outside it is rejected when parsed, which
/// is what keeps literals and operators from smuggling SQL fragments into the
/// rendered statement.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[repr(u8)]
pub enum CompareOp {
    #[display("=")]
    Eq = 0x01,
    #[display("!=")]
    Ne = 0x02,
    #[display("<")]
    Lt = 0x03,
    #[display("<=")]
    Lte = 0x04,
    #[display(">")]
    Gt = 0x05,
    #[display(">=")]
    Gte = 0x06,
}

impl CompareOp {
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

impl FromStr for CompareOp {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(Self::Eq),
            "!=" => Ok(Self::Ne),
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::Lte),
            ">" => Ok(Self::Gt),
            ">=" => Ok(Self::Gte),
            other => Err(QueryError::InvalidOperator(other.to_string())),
        }
    }
}

///
/// Number
///
/// Numeric literal carrier. Rendered in invariant, locale-independent
/// decimal form; `Real` uses Rust's shortest-roundtrip formatting, which
/// never emits an exponent or grouping separators.
///
/// Two numbers are interchangeable in the algebra iff they render to the
/// same decimal text; see `ordering` for how that feeds deduplication.
///

#[derive(Clone, Copy, Debug)]
pub enum Number {
    Int(i64),
    Real(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Real(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

///
/// NumericCondition
///
/// Leaf comparison against the `value` table.
///

#[derive(Clone, Debug)]
pub struct NumericCondition {
    op: CompareOp,
    value: Number,
}

impl NumericCondition {
    #[must_use]
    pub fn new(op: CompareOp, value: impl Into<Number>) -> Self {
        Self {
            op,
            value: value.into(),
        }
    }

    #[must_use]
    pub const fn op(&self) -> CompareOp {
        self.op
    }

    #[must_use]
    pub const fn value(&self) -> Number {
        self.value
    }
}

///
/// StringCondition
///
/// Leaf comparison against the `string_value` table. The literal is quoted
/// verbatim in the rendered statement, so quote-bearing input is rejected
/// here rather than escaped later.
///

#[derive(Clone, Debug)]
pub struct StringCondition {
    op: CompareOp,
    value: String,
}

impl StringCondition {
    pub fn new(op: CompareOp, value: impl Into<String>) -> Result<Self, QueryError> {
        let value = value.into();
        reject_embedded_quote(&value)?;

        Ok(Self { op, value })
    }

    #[must_use]
    pub const fn op(&self) -> CompareOp {
        self.op
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

///
/// NamedQuery
///
/// Scopes an inner condition (possibly absent) to objects carrying a given
/// attribute name. An absent inner condition means "attribute exists, no
/// further constraint". Two named queries sharing a name are merged whenever
/// they co-occur inside the same junction; see `normalize`.
///

#[derive(Clone, Debug)]
pub struct NamedQuery {
    name: String,
    condition: Option<Box<Condition>>,
}

impl NamedQuery {
    pub fn new(
        name: impl Into<String>,
        condition: impl Into<Option<Condition>>,
    ) -> Result<Self, QueryError> {
        let name = name.into();
        if name.is_empty() {
            return Err(QueryError::EmptyName);
        }
        reject_embedded_quote(&name)?;

        Ok(Self::from_validated(name, condition.into()))
    }

    /// Rebuild from parts that already passed validation (merge path).
    pub(crate) fn from_validated(name: String, condition: Option<Condition>) -> Self {
        Self {
            name,
            condition: condition.map(Box::new),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_deref()
    }

    pub(crate) fn into_parts(self) -> (String, Option<Condition>) {
        (self.name, self.condition.map(|inner| *inner))
    }
}

///
/// JunctionKind
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[repr(u8)]
pub enum JunctionKind {
    #[display("AND")]
    And = 0x01,
    #[display("OR")]
    Or = 0x02,
}

impl JunctionKind {
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

///
/// Junction
///
/// Two or more sub-conditions combined with AND/OR semantics. Members form a
/// set: order-irrelevant, duplicate-free by structural equality. Instances
/// only come out of `normalize::junction`, which upholds the structural
/// invariants (no same-kind nesting, one named query per name, at least two
/// members).
///

#[derive(Clone, Debug)]
pub struct Junction {
    kind: JunctionKind,
    conditions: BTreeSet<Condition>,
}

impl Junction {
    pub(crate) const fn from_normalized(
        kind: JunctionKind,
        conditions: BTreeSet<Condition>,
    ) -> Self {
        Self { kind, conditions }
    }

    #[must_use]
    pub const fn kind(&self) -> JunctionKind {
        self.kind
    }

    /// Members in canonical order.
    pub fn conditions(&self) -> impl Iterator<Item = &Condition> {
        self.conditions.iter()
    }

    pub(crate) fn into_conditions(self) -> BTreeSet<Condition> {
        self.conditions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

///
/// Condition
///
/// The closed sum over everything that can participate in the algebra.
/// Immutable after construction; all types are plain owned data, so trees
/// are `Send + Sync` and may be built and rendered concurrently without
/// coordination.
///

#[derive(Clone, Debug)]
pub enum Condition {
    Numeric(NumericCondition),
    String(StringCondition),
    Named(NamedQuery),
    Junction(Junction),
}

impl Condition {
    /// Physical tables this condition requires in the statement that renders
    /// it. A named query scopes its inner requirements to its own correlated
    /// subquery, so a junction's footprint excludes named members entirely.
    #[must_use]
    pub fn tables(&self) -> TableSet {
        match self {
            Self::Numeric(_) => TableSet::from([Table::Value]),
            Self::String(_) => TableSet::from([Table::StringValue]),
            Self::Named(_) => TableSet::from([Table::Object]),
            Self::Junction(junction) => junction
                .conditions()
                .filter(|condition| !matches!(condition, Self::Named(_)))
                .flat_map(Self::tables)
                .collect(),
        }
    }
}

impl From<NumericCondition> for Condition {
    fn from(condition: NumericCondition) -> Self {
        Self::Numeric(condition)
    }
}

impl From<StringCondition> for Condition {
    fn from(condition: StringCondition) -> Self {
        Self::String(condition)
    }
}

impl From<NamedQuery> for Condition {
    fn from(query: NamedQuery) -> Self {
        Self::Named(query)
    }
}

impl From<Junction> for Condition {
    fn from(junction: Junction) -> Self {
        Self::Junction(junction)
    }
}

impl BitAnd for Condition {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        join_pair(JunctionKind::And, self, rhs)
    }
}

impl BitOr for Condition {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        join_pair(JunctionKind::Or, self, rhs)
    }
}

fn join_pair(kind: JunctionKind, lhs: Condition, rhs: Condition) -> Condition {
    match super::normalize::junction(kind, [Some(lhs), Some(rhs)]) {
        Some(condition) => condition,
        None => unreachable!("junction of two present conditions is never empty"),
    }
}

fn reject_embedded_quote(text: &str) -> Result<(), QueryError> {
    if text.contains('\'') {
        return Err(QueryError::InvalidLiteral(text.to_string()));
    }

    Ok(())
}
