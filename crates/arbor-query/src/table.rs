use derive_more::Display;
use std::collections::BTreeSet;

///
/// Table
///
/// Closed enumeration of the physical relations a compiled statement may
/// reference. Conditions declare which tables they require so a junction can
/// compute its aggregate footprint and a named query can emit its join list.
///
/// The declaration order is the join-list order: `object` always leads a
/// statement, `value` precedes `string_value`.
///

#[derive(Clone, Copy, Debug, Display, Eq, Ord, PartialEq, PartialOrd)]
pub enum Table {
    /// Every stored node: columns `id`, `parent_id`, `name`.
    #[display("object")]
    Object,

    /// Numeric attribute rows: column `value`.
    #[display("value")]
    Value,

    /// String attribute rows: column `value`.
    #[display("string_value")]
    StringValue,
}

impl Table {
    /// Physical relation name as it appears in emitted SQL.
    #[must_use]
    pub const fn table_name(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Value => "value",
            Self::StringValue => "string_value",
        }
    }

    /// Alias bound to this table in every rendered statement. Aliases are
    /// fixed, never renumbered: each correlated subquery is self-contained.
    #[must_use]
    pub const fn alias(self) -> &'static str {
        match self {
            Self::Object => "o",
            Self::Value => "v",
            Self::StringValue => "sv",
        }
    }
}

/// Footprint of physical tables required by a condition, deterministic by
/// `Table` order.
pub type TableSet = BTreeSet<Table>;
