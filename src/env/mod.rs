// envtree: Environment-to-State-Tree Materializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable snapshots.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write Arc<BTreeMap<String, String>>)
//! Sources: current_env(), Env::from_map(), FromIterator
//! Ops: set/get/remove/iter/with_prefix
//! ```
//!
//! - **Case-sensitive**: `FOO_` never selects `foo_bar`
//! - **Sorted**: iteration is always in name order
//! - **Copy-on-write**: clones share data until modified

pub mod container;


pub use container::Env;

/// Captures the current process environment.
///
/// Entries whose name or value is not valid UTF-8 are skipped.
#[must_use]
pub fn current_env() -> Env {
    std::env::vars_os()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (key, _) => {
                tracing::debug!(name = ?key, "skipping non UTF-8 environment variable");
                None
            }
        })
        .collect()
}
