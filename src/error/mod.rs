// envtree: Environment-to-State-Tree Materializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!     EnvTreeError (~16 bytes)
//!             |
//!       +-----+-----+
//!       |           |
//!       v           v
//!    Import       Config
//!     Box          Box
//!
//! Sub-errors (unboxed internally):
//!   Import  MissingPrefix, UnparsableValue
//!   Config  ReadError, ParseError, InvalidValue, NotFound
//! ```
//!
//! `ImportError` is the only error the importer itself produces. Everything
//! above it (CLI, settings, output) uses `anyhow` through [`Result`].

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvTreeError`].
pub type EnvTreeResult<T> = std::result::Result<T, EnvTreeError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum pointer-sized plus a tag.
#[derive(Debug, Error)]
pub enum EnvTreeError {
    /// Environment import failed.
    #[error("import error: {0}")]
    Import(Box<ImportError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(Box<ConfigError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvTreeError {
                fn from(err: $error) -> Self {
                    EnvTreeError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ImportError => Import,
    ConfigError => Config,
}

// --- Import Errors ---

/// Errors raised while materializing environment variables into a tree.
#[derive(Debug, Error)]
pub enum ImportError {
    /// No prefix (or an empty one) was supplied.
    #[error("missing prefix")]
    MissingPrefix,

    /// A selected variable did not contain valid JSON.
    #[error("value unparsable: {raw}")]
    UnparsableValue {
        /// Name of the offending environment variable.
        name: String,
        /// The raw, unparsed variable value.
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ImportError {
    /// The raw value that failed to parse, if this is an
    /// [`ImportError::UnparsableValue`].
    #[must_use]
    pub fn raw_value(&self) -> Option<&str> {
        match self {
            Self::UnparsableValue { raw, .. } => Some(raw),
            Self::MissingPrefix => None,
        }
    }

    /// Name of the variable that failed to parse, if any.
    #[must_use]
    pub fn variable(&self) -> Option<&str> {
        match self {
            Self::UnparsableValue { name, .. } => Some(name),
            Self::MissingPrefix => None,
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("failed to read '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a file.
    #[error("failed to parse '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// File not found.
    #[error("file not found: {0}")]
    NotFound(String),
}
