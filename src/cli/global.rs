// envtree: Environment-to-State-Tree Materializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! ```text
//! --config FILE      ← Additional settings files (can repeat)
//! --log-level N      ← Console verbosity (0-6 or name)
//! --file-log-level N ← File verbosity (defaults to TRACE)
//! --log-file FILE    ← Enables file logging
//! --log-json         ← JSON console records
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::error::Result;
use crate::logging::LogLevel;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML settings file(s).
    /// Can be specified multiple times; later files win.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Disables loading `envtree.toml` from the current directory.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// File log level.
    #[arg(long = "file-log-level", value_name = "LEVEL")]
    pub file_log_level: Option<LogLevel>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Emit console log records as JSON lines.
    #[arg(long = "log-json")]
    pub log_json: bool,
}

impl GlobalOptions {
    /// Applies logging flags as settings overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an override key is rejected by the loader.
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> Result<ConfigLoader> {
        if let Some(level) = self.log_level {
            loader = loader.set("log.console_level", i64::from(level.as_u8()))?;
        }
        if let Some(level) = self.file_log_level {
            loader = loader.set("log.file_level", i64::from(level.as_u8()))?;
        }
        if let Some(ref path) = self.log_file {
            loader = loader.set("log.file", path.display().to_string())?;
        }
        Ok(loader)
    }
}
