//! Canonical total order over conditions.
//!
//! Canonical order underwrites everything set-shaped in the algebra: member
//! deduplication, deterministic junction rendering, and the guarantee that
//! two structurally-equal trees emit byte-identical SQL regardless of
//! construction-time insertion order.
//!
//! The order is explicit and documented rather than derived: variant tag
//! first (numeric < string < named < junction), then fields. Numeric
//! literals are keyed by their rendered decimal form so that equality
//! coincides with "renders identically with the same footprint".

use super::ast::Condition;
use std::cmp::Ordering;

impl PartialEq for Condition {
    fn eq(&self, other: &Self) -> bool {
        sort_key(self) == sort_key(other)
    }
}

impl Eq for Condition {}

impl PartialOrd for Condition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Condition {
    fn cmp(&self, other: &Self) -> Ordering {
        sort_key(self).cmp(&sort_key(other))
    }
}

const COND_NUMERIC: u8 = 0x00;
const COND_STRING: u8 = 0x01;
const COND_NAMED: u8 = 0x02;
const COND_JUNCTION: u8 = 0x03;

/// Deterministic, length-prefixed key. Used **only for ordering and
/// equality**, never for display.
fn sort_key(condition: &Condition) -> Vec<u8> {
    let mut out = Vec::new();
    encode_condition_key(&mut out, condition);
    out
}

// Encode keys with length-prefixed segments to avoid collisions between
// adjacent variable-length fields.
fn encode_condition_key(out: &mut Vec<u8>, condition: &Condition) {
    match condition {
        Condition::Numeric(leaf) => {
            out.push(COND_NUMERIC);
            out.push(leaf.op().tag());
            push_str(out, &leaf.value().to_string());
        }
        Condition::String(leaf) => {
            out.push(COND_STRING);
            out.push(leaf.op().tag());
            push_str(out, leaf.value());
        }
        Condition::Named(query) => {
            out.push(COND_NAMED);
            push_str(out, query.name());
            match query.condition() {
                Some(inner) => {
                    out.push(1);
                    push_condition(out, inner);
                }
                None => out.push(0),
            }
        }
        Condition::Junction(junction) => {
            out.push(COND_JUNCTION);
            out.push(junction.kind().tag());
            push_len(out, junction.len());
            for member in junction.conditions() {
                push_condition(out, member);
            }
        }
    }
}

fn push_condition(out: &mut Vec<u8>, condition: &Condition) {
    let len_pos = out.len();
    out.extend_from_slice(&0u64.to_be_bytes());
    let payload_start = out.len();

    encode_condition_key(out, condition);

    let payload_len = out.len().saturating_sub(payload_start);
    let payload_len = u64::try_from(payload_len).unwrap_or(u64::MAX);
    out[len_pos..len_pos + size_of::<u64>()].copy_from_slice(&payload_len.to_be_bytes());
}

fn push_len(out: &mut Vec<u8>, len: usize) {
    let len = u64::try_from(len).unwrap_or(u64::MAX);
    out.extend_from_slice(&len.to_be_bytes());
}

fn push_str(out: &mut Vec<u8>, s: &str) {
    push_len(out, s.len());
    out.extend_from_slice(s.as_bytes());
}
