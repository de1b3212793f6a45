use thiserror::Error as ThisError;

///
/// QueryError
///
/// Every variant is detected at construction time, as close to the offending
/// input as possible. Rendering is total over any well-formed anchored tree,
/// so no error is deferred to render time.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum QueryError {
    /// Comparison operator outside the closed set `= != < <= > >=`.
    #[error("invalid comparison operator '{0}'")]
    InvalidOperator(String),

    /// A named query needs a non-empty attribute name to anchor against.
    #[error("named query requires a non-empty attribute name")]
    EmptyName,

    /// Literals are quoted verbatim with no escaping, so a literal or name
    /// carrying a quote would change the shape of the emitted statement.
    #[error("literal '{0}' contains a single quote")]
    InvalidLiteral(String),

    /// The root of a tree must resolve to a named attribute; a bare leaf or
    /// a junction with non-named members has no table to select from.
    #[error("query is not anchored to a named attribute")]
    UnanchoredQuery,

    /// A junction violated its structural invariants. Unreachable through
    /// the public constructors; reported only by the invariant audit.
    #[error("malformed condition tree: {0}")]
    MalformedTree(String),
}
