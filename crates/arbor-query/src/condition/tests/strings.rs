//! Exact rendered-statement fixtures for the three-table schema.

use super::{named, num};
use crate::{
    dsl::{and, or, q, sv, v},
    error::QueryError,
};

#[test]
fn name_only_query() {
    let query = q("a", None).unwrap();

    assert_eq!(
        query.sql().unwrap(),
        "SELECT parent_id FROM object AS o WHERE o.name = 'a'"
    );
}

#[test]
fn query_with_string_value() {
    let query = q("a", sv("=", "value").unwrap()).unwrap();

    assert_eq!(
        query.sql().unwrap(),
        "SELECT parent_id FROM object AS o, string_value AS sv \
         WHERE o.name = 'a' AND sv.value = 'value'"
    );
}

#[test]
fn query_with_numeric_value() {
    let query = q("a", v("=", 1).unwrap()).unwrap();

    assert_eq!(
        query.sql().unwrap(),
        "SELECT parent_id FROM object AS o, value AS v \
         WHERE o.name = 'a' AND v.value = 1"
    );
}

#[test]
fn query_with_real_value() {
    let query = q("a", v("<", 0.5).unwrap()).unwrap();

    assert_eq!(
        query.sql().unwrap(),
        "SELECT parent_id FROM object AS o, value AS v \
         WHERE o.name = 'a' AND v.value < 0.5"
    );
}

#[test]
fn simple_and() {
    let query = q("a", and([num("<", 1), num(">", 0)])).unwrap();

    assert_eq!(
        query.sql().unwrap(),
        "SELECT parent_id FROM object AS o, value AS v \
         WHERE o.name = 'a' AND (v.value < 1 AND v.value > 0)"
    );
}

#[test]
fn simple_or() {
    let query = q("a", or([num("<", 1), num(">", 0)])).unwrap();

    assert_eq!(
        query.sql().unwrap(),
        "SELECT parent_id FROM object AS o, value AS v \
         WHERE o.name = 'a' AND (v.value < 1 OR v.value > 0)"
    );
}

#[test]
fn second_level_correlated_subquery() {
    let query = q("a", and([num("<", 1), named("b", num(">", 0))])).unwrap();

    assert_eq!(
        query.sql().unwrap(),
        "SELECT parent_id FROM object AS o, value AS v \
         WHERE o.name = 'a' AND (v.value < 1 AND id IN (\
         SELECT parent_id FROM object AS o, value AS v \
         WHERE o.name = 'b' AND v.value > 0))"
    );
}

#[test]
fn junction_root_anchors_first_named_query() {
    let query = and([named("a", num("<", 1)), named("b", num(">", 0))]).unwrap();

    assert_eq!(
        query.sql().unwrap(),
        "SELECT parent_id FROM object AS o, value AS v \
         WHERE o.name = 'a' AND v.value < 1 \
         AND id IN (SELECT parent_id FROM object AS o, value AS v \
         WHERE o.name = 'b' AND v.value > 0)"
    );
}

#[test]
fn or_junction_root_joins_with_or() {
    let query = or([q("a", None).unwrap(), named("b", num(">", 0))]).unwrap();

    assert_eq!(
        query.sql().unwrap(),
        "SELECT parent_id FROM object AS o WHERE o.name = 'a' \
         OR id IN (SELECT parent_id FROM object AS o, value AS v \
         WHERE o.name = 'b' AND v.value > 0)"
    );
}

#[test]
fn mixed_value_kinds_join_both_tables() {
    let query = q(
        "a",
        and([num("<", 1), sv("=", "centre").unwrap()]),
    )
    .unwrap();

    assert_eq!(
        query.sql().unwrap(),
        "SELECT parent_id FROM object AS o, value AS v, string_value AS sv \
         WHERE o.name = 'a' AND (v.value < 1 AND sv.value = 'centre')"
    );
}

#[test]
fn display_renders_predicate_fragment() {
    let condition = and([num("<", 1), num(">", 0)]).unwrap();

    assert_eq!(condition.to_string(), "(v.value < 1 AND v.value > 0)");
    assert_eq!(condition.to_text(), condition.to_string());
}

#[test]
fn leaf_root_is_rejected() {
    assert_eq!(num("<", 1).sql(), Err(QueryError::UnanchoredQuery));
}

#[test]
fn mixed_junction_root_is_rejected() {
    let query = and([num("<", 1), named("b", num(">", 0))]).unwrap();

    assert_eq!(query.sql(), Err(QueryError::UnanchoredQuery));
}
