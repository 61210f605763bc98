// envtree: Environment-to-State-Tree Materializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment-to-tree importer.
//!
//! # Import Pipeline
//!
//! ```text
//! Env (sorted)
//!   |  with_prefix(prefix)        non-matching names never parsed
//!   v
//! serde_json::from_str(raw) ----> Err: UnparsableValue(raw), stop
//!   |
//!   v
//! Descriptor::from_json --------> not actionable: skip (recorded)
//!   |
//!   v
//! tree::assign(path, value)       last writer wins
//!   |
//!   v
//! ImportReport
//! ```
//!
//! # Failure Modes
//!
//! ```text
//! atomic = false  applied-before-failure stays in the tree
//! atomic = true   work on a clone, swap in only on success
//! ```

pub mod descriptor;

#[cfg(test)]
mod tests;

use bon::Builder;
use serde::Serialize;
use serde_json::Value;

use crate::env::Env;
use crate::error::ImportError;
use crate::tree::{self, DottedPath, Tree};

pub use descriptor::{Assignment, Descriptor, SkipReason};

/// Options accepted by the importer and its registration wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
pub struct ImportOptions {
    /// Variable name prefix. Required and non-empty.
    #[builder(into)]
    pub prefix: Option<String>,
    /// Apply all assignments or none.
    #[builder(default)]
    pub atomic: bool,
}

/// An assignment that was written into the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Applied {
    pub variable: String,
    pub path: DottedPath,
}

/// A selected variable that produced no assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skipped {
    pub variable: String,
    pub reason: SkipReason,
}

/// Outcome of a successful import, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    applied: Vec<Applied>,
    skipped: Vec<Skipped>,
}

impl ImportReport {
    #[must_use]
    pub fn applied(&self) -> &[Applied] {
        &self.applied
    }

    #[must_use]
    pub fn skipped(&self) -> &[Skipped] {
        &self.skipped
    }

    /// Number of selected variables, applied or skipped.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.applied.len() + self.skipped.len()
    }
}

/// Materializes prefixed JSON environment variables into a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfigImporter {
    prefix: String,
    atomic: bool,
}

impl EnvConfigImporter {
    /// Create an importer for `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::MissingPrefix`] if `prefix` is empty.
    pub fn new(prefix: impl Into<String>) -> Result<Self, ImportError> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(ImportError::MissingPrefix);
        }
        Ok(Self {
            prefix,
            atomic: false,
        })
    }

    /// Create an importer from options.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::MissingPrefix`] if no non-empty prefix is set.
    pub fn from_options(options: &ImportOptions) -> Result<Self, ImportError> {
        let prefix = options
            .prefix
            .as_deref()
            .ok_or(ImportError::MissingPrefix)?;
        Ok(Self::new(prefix)?.with_atomic(options.atomic))
    }

    #[must_use]
    pub const fn with_atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub const fn is_atomic(&self) -> bool {
        self.atomic
    }

    /// Run one import pass over `env`, writing into `target`.
    ///
    /// Variables are processed in name order. In the default mode a parse
    /// failure stops the pass and leaves earlier assignments in place; in
    /// atomic mode `target` is only touched if the whole pass succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::UnparsableValue`] for the first selected
    /// variable whose value is not valid JSON.
    pub fn import(&self, env: &Env, target: &mut Tree) -> Result<ImportReport, ImportError> {
        if !self.atomic {
            return self.apply(env, target);
        }

        let mut staged = target.clone();
        let report = self.apply(env, &mut staged)?;
        *target = staged;
        Ok(report)
    }

    fn apply(&self, env: &Env, target: &mut Tree) -> Result<ImportReport, ImportError> {
        let mut report = ImportReport::default();

        for (name, raw) in env.with_prefix(&self.prefix) {
            tracing::debug!(variable = name, "selected");

            let json: Value =
                serde_json::from_str(raw).map_err(|source| ImportError::UnparsableValue {
                    name: name.to_owned(),
                    raw: raw.to_owned(),
                    source,
                })?;

            match Descriptor::from_json(json).and_then(Descriptor::into_assignment) {
                Ok(Assignment { path, value }) => {
                    if path.has_empty_segment() {
                        tracing::warn!(
                            variable = name,
                            path = %path,
                            "path has empty segments, using them as literal keys"
                        );
                    }
                    tree::assign(target, &path, value);
                    report.applied.push(Applied {
                        variable: name.to_owned(),
                        path,
                    });
                }
                Err(reason) => {
                    tracing::debug!(variable = name, %reason, "skipped");
                    report.skipped.push(Skipped {
                        variable: name.to_owned(),
                        reason,
                    });
                }
            }
        }

        tracing::info!(
            prefix = %self.prefix,
            applied = report.applied.len(),
            skipped = report.skipped.len(),
            "environment import finished"
        );
        Ok(report)
    }
}

/// Import every `prefix`-selected variable of `env` into `target`.
///
/// # Errors
///
/// Returns [`ImportError::MissingPrefix`] before reading `env` if `prefix`
/// is empty, or [`ImportError::UnparsableValue`] as described on
/// [`EnvConfigImporter::import`].
pub fn import(prefix: &str, env: &Env, target: &mut Tree) -> Result<ImportReport, ImportError> {
    EnvConfigImporter::new(prefix)?.import(env, target)
}
