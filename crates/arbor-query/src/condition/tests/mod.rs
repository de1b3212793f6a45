mod property;
mod strings;

use crate::condition::Condition;
use crate::dsl::{q, v};

/// Numeric leaf; tests only ever use valid operators here.
pub(crate) fn num(op: &str, value: i64) -> Condition {
    v(op, value).unwrap()
}

/// Named query over a present condition.
pub(crate) fn named(name: &str, condition: Condition) -> Condition {
    q(name, condition).unwrap()
}
