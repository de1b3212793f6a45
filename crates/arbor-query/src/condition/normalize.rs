use super::ast::{Condition, Junction, JunctionKind, NamedQuery};
use std::collections::{BTreeMap, BTreeSet};

///
/// Build a junction from a collection of optional conditions, normalizing
/// into canonical minimal form. Runs once, eagerly; the returned tree is
/// never rewritten afterwards.
///
/// Normalization guarantees:
/// - Logical equivalence is preserved
/// - Absent conditions are discarded
/// - Same-kind nested junctions are flattened:
///       And(And(a, b), c)  →  And(a, b, c)
/// - Members are deduplicated by structural equality:
///       And(a, b, a)       →  And(a, b)
/// - Named queries sharing a name are merged recursively:
///       And(Named(n, a), Named(n, b))  →  Named(n, And(a, b))
/// - A single surviving member is returned in place of a junction
/// - An empty member set yields `None` (no predicate)
///
/// Because the result of a collapse may not be a junction at all, the
/// constructor hands back the sum type rather than a committed `Junction`.
///
pub(crate) fn junction(
    kind: JunctionKind,
    conditions: impl IntoIterator<Item = Option<Condition>>,
) -> Option<Condition> {
    let mut others = BTreeSet::new();
    let mut named: BTreeMap<String, Vec<NamedQuery>> = BTreeMap::new();

    collect(
        kind,
        conditions.into_iter().flatten().collect(),
        &mut others,
        &mut named,
    );

    for (name, queries) in named {
        others.insert(Condition::Named(merge_named(kind, name, queries)));
    }

    finish(kind, others)
}

/// Partition inputs into named queries (grouped by name) and everything
/// else, unwrapping same-kind junctions along the way. A worklist replaces
/// recursion; children were already flattened at their own construction
/// time, so depth stays shallow either way.
fn collect(
    kind: JunctionKind,
    input: Vec<Condition>,
    others: &mut BTreeSet<Condition>,
    named: &mut BTreeMap<String, Vec<NamedQuery>>,
) {
    let mut stack = input;

    while let Some(condition) = stack.pop() {
        match condition {
            Condition::Junction(inner) if inner.kind() == kind => {
                stack.extend(inner.into_conditions());
            }
            Condition::Named(query) => {
                named.entry(query.name().to_string()).or_default().push(query);
            }
            other => {
                others.insert(other);
            }
        }
    }
}

/// Merge a group of named queries sharing one name into a single query whose
/// inner condition junctions the group's inner conditions.
///
/// An absent inner condition means "match by name only", which is a superset
/// of any narrower match. It therefore absorbs the whole group under OR and
/// acts as the identity under AND (where discarding absences inside the
/// recursive junction build has the same effect).
fn merge_named(kind: JunctionKind, name: String, mut queries: Vec<NamedQuery>) -> NamedQuery {
    if queries.len() == 1 {
        // Already normalized at its own construction time.
        if let Some(query) = queries.pop() {
            return query;
        }
    }

    let inners: Vec<Option<Condition>> = queries
        .into_iter()
        .map(|query| query.into_parts().1)
        .collect();

    let inner = if kind == JunctionKind::Or && inners.iter().any(Option::is_none) {
        None
    } else {
        junction(kind, inners)
    };

    NamedQuery::from_validated(name, inner)
}

fn finish(kind: JunctionKind, mut conditions: BTreeSet<Condition>) -> Option<Condition> {
    match conditions.len() {
        0 => None,
        1 => conditions.pop_first(),
        _ => Some(Condition::Junction(Junction::from_normalized(
            kind, conditions,
        ))),
    }
}
