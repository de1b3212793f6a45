//! Property tests for the algebraic guarantees of junction construction:
//! structural invariants always hold, rendering is insertion-order
//! independent, duplication and nesting never change the canonical form.

use crate::{
    condition::{
        CompareOp, Condition, JunctionKind, NamedQuery, NumericCondition, StringCondition,
        normalize,
    },
    dsl::{and, or},
};
use proptest::prelude::*;

fn arb_op() -> impl Strategy<Value = CompareOp> {
    prop_oneof![
        Just(CompareOp::Eq),
        Just(CompareOp::Ne),
        Just(CompareOp::Lt),
        Just(CompareOp::Lte),
        Just(CompareOp::Gt),
        Just(CompareOp::Gte),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Condition> {
    prop_oneof![
        (arb_op(), any::<i32>()).prop_map(|(op, n)| NumericCondition::new(op, n).into()),
        (arb_op(), "[a-z0-9]{0,6}").prop_map(|(op, s)| {
            StringCondition::new(op, s)
                .map(Condition::from)
                .unwrap_or_else(|_| unreachable!("generated literal carries no quote"))
        }),
    ]
}

// Names are drawn from a tiny pool so that merges actually trigger.
fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![Just("a"), Just("b"), Just("c")].prop_map(str::to_string)
}

fn arb_condition() -> impl Strategy<Value = Condition> {
    arb_leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            (arb_name(), proptest::option::of(inner.clone())).prop_map(|(name, condition)| {
                NamedQuery::new(name, condition)
                    .map(Condition::from)
                    .unwrap_or_else(|_| unreachable!("generated name is non-empty"))
            }),
            (any::<bool>(), prop::collection::vec(inner, 2..4)).prop_map(|(is_and, members)| {
                let kind = if is_and {
                    JunctionKind::And
                } else {
                    JunctionKind::Or
                };
                normalize::junction(kind, members.into_iter().map(Some))
                    .unwrap_or_else(|| unreachable!("junction of present members is never empty"))
            }),
        ]
    })
}

proptest! {
    #[test]
    fn construction_upholds_structural_invariants(
        members in prop::collection::vec(arb_condition(), 0..6),
        is_and in any::<bool>(),
    ) {
        let combined = if is_and {
            and(members)
        } else {
            or(members)
        };

        if let Some(condition) = combined {
            prop_assert!(condition.check_invariants().is_ok());
        }
    }

    #[test]
    fn rendering_is_permutation_invariant(
        members in prop::collection::vec(arb_condition(), 2..5),
    ) {
        let forward = and(members.clone());
        let reversed = and(members.into_iter().rev().collect::<Vec<_>>());

        prop_assert_eq!(&forward, &reversed);
        prop_assert_eq!(
            forward.map(|c| c.to_text()),
            reversed.map(|c| c.to_text())
        );
    }

    #[test]
    fn duplication_is_idempotent(condition in arb_condition()) {
        prop_assert_eq!(
            and([condition.clone(), condition.clone()]),
            Some(condition)
        );
    }

    #[test]
    fn singleton_collapse_returns_the_member(condition in arb_condition()) {
        prop_assert_eq!(and([condition.clone()]), Some(condition.clone()));
        prop_assert_eq!(or([condition.clone()]), Some(condition));
    }

    #[test]
    fn flattening_matches_flat_construction(
        a in arb_condition(),
        b in arb_condition(),
        c in arb_condition(),
        is_and in any::<bool>(),
    ) {
        let (nested, flat) = if is_and {
            (
                and([and([a.clone(), b.clone()]), Some(c.clone())]),
                and([Some(a), Some(b), Some(c)]),
            )
        } else {
            (
                or([or([a.clone(), b.clone()]), Some(c.clone())]),
                or([Some(a), Some(b), Some(c)]),
            )
        };

        prop_assert_eq!(nested, flat);
    }

    #[test]
    fn named_footprint_never_leaks_into_junctions(
        members in prop::collection::vec(arb_condition(), 2..5),
    ) {
        if let Some(condition) = and(members) {
            let tables = condition.tables();
            if matches!(condition, Condition::Junction(_)) {
                prop_assert!(!tables.contains(&crate::table::Table::Object));
            }
        }
    }
}
