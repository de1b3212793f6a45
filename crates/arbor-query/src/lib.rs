//! Condition algebra for tree-shaped attribute stores: build a boolean
//! predicate tree over named attributes, normalize it into a canonical
//! minimal form, and compile it to a correlated-subquery SQL statement
//! that selects the identifiers of matching top-level records.
//!
//! The algebra is pure and synchronous. Every tree is immutable after
//! construction; normalization runs once, eagerly, inside the constructors,
//! so a held [`Condition`] is always in canonical form.
#![warn(unreachable_pub)]

pub mod condition;
pub mod dsl;
pub mod error;
pub mod table;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Errors and rendering internals are not re-exported here.
///

pub mod prelude {
    pub use crate::{
        condition::{CompareOp, Condition, JunctionKind, Number},
        dsl::{and, or, q, sv, v},
        table::Table,
    };
}

pub use condition::{
    CompareOp, Condition, Junction, JunctionKind, NamedQuery, Number, NumericCondition,
    StringCondition,
};
pub use error::QueryError;
pub use table::Table;
