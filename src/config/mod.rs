// envtree: Environment-to-State-Tree Materializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings for the `envtree` binary.
//!
//! These are the tool's own options, not the materialized application
//! state: they say which prefix to import, where to seed the tree from and
//! where to write it.
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envtree.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. ENVTREE_* env vars
//! 5. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVTREE_IMPORT__PREFIX=APP_CFG_  → import.prefix = "APP_CFG_"
//! ENVTREE_IMPORT__ATOMIC=true      → import.atomic = true
//! ENVTREE_OUTPUT__PATH=state.json  → output.path = "state.json"
//! ```

pub mod loader;


use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::importer::ImportOptions;
use crate::logging::LogLevel;

use loader::ConfigLoader;

/// Complete tool settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// What to import.
    pub import: ImportSettings,
    /// Where the resulting tree goes.
    pub output: OutputSettings,
    /// Logging.
    pub log: LogSettings,
}

/// `[import]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportSettings {
    /// Environment variable name prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Apply all assignments or none.
    pub atomic: bool,
    /// JSON file whose top-level object seeds the tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<PathBuf>,
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    /// Output file; stdout when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Pretty-print the JSON tree.
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: None,
            pretty: true,
        }
    }
}

/// `[log]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// Console log level (0-6).
    pub console_level: LogLevel,
    /// Log file level (0-6).
    pub file_level: LogLevel,
    /// Log file path; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            console_level: LogLevel::WARN,
            file_level: LogLevel::TRACE,
            file: None,
        }
    }
}

impl Settings {
    /// Create a new settings loader.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envtree::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file_optional("envtree.toml")
    ///     .with_env_prefix("ENVTREE")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load settings from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// does not match the `Settings` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// the `Settings` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate values that serde alone cannot check.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `import.prefix` is set but empty.
    pub fn resolve_and_validate(&mut self) -> std::result::Result<(), ConfigError> {
        if self.import.prefix.as_deref() == Some("") {
            return Err(ConfigError::InvalidValue {
                section: "import".to_string(),
                key: "prefix".to_string(),
                message: "prefix must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Importer options derived from the `[import]` section.
    #[must_use]
    pub fn import_options(&self) -> ImportOptions {
        ImportOptions::builder()
            .maybe_prefix(self.import.prefix.clone())
            .atomic(self.import.atomic)
            .build()
    }

    /// Flattened `section.key = value` lines for display.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        fn opt_path(path: Option<&PathBuf>) -> String {
            path.map_or_else(|| "(unset)".to_string(), |p| p.display().to_string())
        }

        vec![
            format!(
                "import.prefix = {}",
                self.import.prefix.as_deref().unwrap_or("(unset)")
            ),
            format!("import.atomic = {}", self.import.atomic),
            format!("import.base = {}", opt_path(self.import.base.as_ref())),
            format!("output.path = {}", opt_path(self.output.path.as_ref())),
            format!("output.pretty = {}", self.output.pretty),
            format!("log.console_level = {}", self.log.console_level),
            format!("log.file_level = {}", self.log.file_level),
            format!("log.file = {}", opt_path(self.log.file.as_ref())),
        ]
    }
}
