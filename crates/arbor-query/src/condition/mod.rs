pub(crate) mod ast;
pub(crate) mod invariants;
pub(crate) mod normalize;
pub(crate) mod ordering;
pub(crate) mod sql;

#[cfg(test)]
mod tests;

pub use ast::{
    CompareOp, Condition, Junction, JunctionKind, NamedQuery, Number, NumericCondition,
    StringCondition,
};
