// envtree: Environment-to-State-Tree Materializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `import` command arguments.

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::error::Result;

/// Arguments for the `import` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ImportArgs {
    /// Environment variable name prefix (e.g. `APP_CFG_`).
    #[arg(short = 'p', long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// JSON file whose top-level object seeds the tree.
    #[arg(short = 'b', long, value_name = "FILE")]
    pub base: Option<PathBuf>,

    /// Write the tree to FILE instead of stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print compact JSON.
    #[arg(long)]
    pub compact: bool,

    /// Leave the tree untouched unless every variable parses.
    #[arg(long)]
    pub atomic: bool,
}

impl ImportArgs {
    /// Applies command flags as settings overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an override key is rejected by the loader.
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> Result<ConfigLoader> {
        if let Some(ref prefix) = self.prefix {
            loader = loader.set("import.prefix", prefix.as_str())?;
        }
        if let Some(ref base) = self.base {
            loader = loader.set("import.base", base.display().to_string())?;
        }
        if let Some(ref output) = self.output {
            loader = loader.set("output.path", output.display().to_string())?;
        }
        if self.compact {
            loader = loader.set("output.pretty", false)?;
        }
        if self.atomic {
            loader = loader.set("import.atomic", true)?;
        }
        Ok(loader)
    }
}
