// envtree: Environment-to-State-Tree Materializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envtree using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envtree [global options] <command>
//! import [--prefix P] [--base FILE] [--output FILE] [--compact] [--atomic]
//! settings
//! version
//! ```

pub mod global;
pub mod import;


use crate::cli::global::GlobalOptions;
use crate::cli::import::ImportArgs;
use clap::{Parser, Subcommand};

/// Materializes prefixed JSON environment variables into a state tree.
#[derive(Debug, Parser)]
#[command(
    name = "envtree",
    author,
    version,
    about = "Materialize JSON environment variables into a state tree",
    long_about = "Materialize JSON environment variables into a state tree.\n\n\
                  Every environment variable whose name starts with the configured\n\
                  prefix must hold a JSON object such as\n\
                  {\"path\": \"some.config.stuff\", \"value\": \"Bazinga!\"}.\n\
                  Each value is written at its dotted path in the resulting JSON\n\
                  tree, which is printed or written to --output.",
    after_help = "SETTINGS FILES:\n\n\
                  envtree reads `envtree.toml` from the current directory if it\n\
                  exists, then every --config file in order. ENVTREE_SECTION__KEY\n\
                  environment variables override files, and command-line flags\n\
                  override everything."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Imports prefixed environment variables and writes the tree.
    Import(ImportArgs),

    /// Lists the effective settings and the files they came from.
    Settings,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
