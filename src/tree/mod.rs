// envtree: Environment-to-State-Tree Materializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Target tree materialization.
//!
//! ```text
//! assign(root, "a.b.c", v)
//!
//!   root ─┬─ a?  missing    → insert {}
//!         │      object     → descend
//!         │      scalar     → replace with {}
//!         └─ b?  (same rules)
//!              └─ c = v     (always overwrite)
//! ```
//!
//! The root map is borrowed mutably and never replaced, so the caller's
//! state keeps its identity across an import.

pub mod path;


pub use path::DottedPath;

use serde_json::{Map, Value};

/// Nested string-keyed mapping that receives materialized values.
pub type Tree = Map<String, Value>;

/// Write `value` at `path`, creating or replacing intermediate mappings.
///
/// Intermediate nodes that already are objects are reused, so siblings of
/// the written key survive. Any other intermediate value is replaced by an
/// empty object. The final segment is always overwritten.
pub fn assign(root: &mut Tree, path: &DottedPath, value: Value) {
    let Some((last, parents)) = path.segments().split_last() else {
        return;
    };

    let mut node = root;
    for segment in parents {
        let slot = node
            .entry(segment.as_str())
            .or_insert_with(|| Value::Object(Map::new()));
        let Some(next) = ensure_object(slot) else {
            return;
        };
        node = next;
    }
    node.insert(last.clone(), value);
}

/// Read the value at `path`, if every segment exists.
#[must_use]
pub fn lookup<'a>(root: &'a Tree, path: &DottedPath) -> Option<&'a Value> {
    let (first, rest) = path.segments().split_first()?;
    rest.iter()
        .try_fold(root.get(first.as_str())?, |node, segment| {
            node.as_object()?.get(segment.as_str())
        })
}

/// Turn `slot` into an object unless it already is one.
fn ensure_object(slot: &mut Value) -> Option<&mut Tree> {
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    slot.as_object_mut()
}
