//! Path lookups over a sibling list.
//!
//! A path is a run of keys joined by a separator, e.g. `devices/filter`.
//! Leading separators before each segment are skipped. Keys compare
//! byte for byte.

use tracing::debug;

use crate::types::{NodeRef, Nodes, Value};

pub fn find_node<'a>(mut siblings: Nodes<'a>, path: &str, separator: char) -> Option<NodeRef<'a>> {
    let mut rest = path;
    loop {
        rest = rest.trim_start_matches(separator);
        let (segment, tail) = match rest.find(separator) {
            Some(idx) => rest.split_at(idx),
            None => (rest, ""),
        };
        let node = siblings.find(|node| node.key() == segment)?;
        if tail.is_empty() {
            return Some(node);
        }
        siblings = node.children();
        rest = tail;
    }
}

pub fn find_value<'a>(siblings: Nodes<'a>, path: &str, separator: char) -> Option<Value<'a>> {
    find_node(siblings, path, separator)?.first_value()
}

pub fn find_str<'a>(siblings: Nodes<'a>, path: &str, separator: char, default: &'a str) -> &'a str {
    match find_value(siblings, path, separator) {
        Some(Value::String(value)) => value,
        _ => {
            debug!(path, default, "not found in config: using default");
            default
        }
    }
}

pub fn find_int(siblings: Nodes<'_>, path: &str, separator: char, default: i64) -> i64 {
    match find_value(siblings, path, separator) {
        Some(Value::Int(value)) => value,
        _ => default,
    }
}

pub fn find_float(siblings: Nodes<'_>, path: &str, separator: char, default: f64) -> f64 {
    match find_value(siblings, path, separator) {
        Some(Value::Float(value)) => value,
        _ => default,
    }
}
