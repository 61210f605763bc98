// envtree: Environment-to-State-Tree Materializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dotted key paths.
//!
//! ```text
//! "some.config.stuff" --> ["some", "config", "stuff"]
//! "a..b"              --> ["a", "", "b"]   (empty segment kept literally)
//! ""                  --> rejected
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

/// A non-empty, dot-separated key path into a nested mapping.
///
/// Splitting is purely on `.`: there are no array indices and no escapes.
/// Empty segments from leading, trailing or doubled dots are kept as
/// empty-string keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DottedPath {
    raw: String,
    segments: Vec<String>,
}

impl DottedPath {
    /// Parse a dotted path. Returns `None` for an empty string.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        Some(Self {
            raw: raw.to_owned(),
            segments: raw.split('.').map(str::to_owned).collect(),
        })
    }

    /// The path exactly as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Ordered key segments. Never empty.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// True if any segment is the empty string.
    #[must_use]
    pub fn has_empty_segment(&self) -> bool {
        self.segments.iter().any(String::is_empty)
    }
}

impl fmt::Display for DottedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for DottedPath {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}
