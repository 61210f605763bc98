// envtree: Environment-to-State-Tree Materializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Assignment descriptors decoded from variable values.
//!
//! ```text
//! '{"path":"a.b","value":null}' --> Descriptor { path: Some, value: Some(Null) }
//! '{"path":"a.b"}'              --> Descriptor { path: Some, value: None }
//! '{"path":7,"value":1}'        --> Descriptor { path: None, value: Some(1) }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::tree::DottedPath;

/// Why a selected variable produced no assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Decoded JSON was not an object.
    NotAnObject,
    /// `path` was absent, empty, or not a string.
    MissingPath,
    /// The `value` key was absent.
    MissingValue,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "not an object"),
            Self::MissingPath => write!(f, "missing path"),
            Self::MissingValue => write!(f, "missing value"),
        }
    }
}

/// Decoded `{path, value}` descriptor.
///
/// Only `path` and `value` are inspected; other keys are ignored. A present
/// `null` value is `Some(Value::Null)`, an absent one is `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Descriptor {
    #[serde(deserialize_with = "lenient_path")]
    pub path: Option<DottedPath>,
    #[serde(deserialize_with = "present")]
    pub value: Option<Value>,
}

/// A descriptor that names both a location and a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub path: DottedPath,
    pub value: Value,
}

impl Descriptor {
    /// Decode a descriptor from already-parsed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SkipReason::NotAnObject`] for anything but a JSON object.
    pub fn from_json(json: Value) -> std::result::Result<Self, SkipReason> {
        if !json.is_object() {
            return Err(SkipReason::NotAnObject);
        }
        serde_json::from_value(json).map_err(|_| SkipReason::NotAnObject)
    }

    /// Turn this descriptor into an assignment if it is actionable.
    ///
    /// # Errors
    ///
    /// Returns the reason the descriptor has nothing to apply.
    pub fn into_assignment(self) -> std::result::Result<Assignment, SkipReason> {
        let path = self.path.ok_or(SkipReason::MissingPath)?;
        let value = self.value.ok_or(SkipReason::MissingValue)?;
        Ok(Assignment { path, value })
    }
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn lenient_path<'de, D>(deserializer: D) -> std::result::Result<Option<DottedPath>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(raw) => DottedPath::parse(&raw),
        _ => None,
    })
}
