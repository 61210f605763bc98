// envtree: Environment-to-State-Tree Materializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `import` command.
//!
//! ```text
//! import.base? --load_base--> Tree ─┐
//!                                   v
//! current_env() ──────────────> Server::register(EnvConfigPlugin)
//!                                   |
//!                                render (pretty | compact)
//!                                   |
//!                  output.path? ──> NamedTempFile + persist
//!                  otherwise   ──> stdout
//! ```

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;

use crate::config::Settings;
use crate::env::{Env, current_env};
use crate::error::{ConfigError, Result};
use crate::plugin::{EnvConfigPlugin, Server};
use crate::tree::Tree;

/// Run the import command against the process environment.
///
/// # Errors
///
/// Returns an error if the base file cannot be loaded, the import fails, or
/// the output cannot be written.
pub fn run_import_command(settings: &Settings) -> Result<()> {
    let tree = materialize(settings, current_env())?;
    let rendered = render(&tree, settings.output.pretty)?;

    match &settings.output.path {
        Some(path) => {
            write_output(path, &rendered)?;
            tracing::info!(path = %path.display(), "state tree written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

/// Build the state tree: seed from `import.base`, then import from `env`.
///
/// # Errors
///
/// Returns an error if the base file is unusable or the import fails.
pub fn materialize(settings: &Settings, env: Env) -> Result<Tree> {
    let base = match &settings.import.base {
        Some(path) => load_base(path)?,
        None => Tree::new(),
    };

    let mut server = Server::with_env(env).with_app(base);
    server.register(&EnvConfigPlugin, &settings.import_options())?;
    Ok(server.into_app())
}

/// Load a JSON file whose top level must be an object.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file is missing, `ReadError` for
/// other I/O failures and `ParseError` for invalid or non-object JSON.
pub fn load_base(path: &Path) -> std::result::Result<Tree, ConfigError> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound(display.clone())
        } else {
            ConfigError::ReadError {
                path: display.clone(),
                source,
            }
        }
    })?;

    match serde_json::from_str(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ConfigError::ParseError {
            path: display,
            message: "top-level value must be a JSON object".to_string(),
        }),
        Err(e) => Err(ConfigError::ParseError {
            path: display,
            message: e.to_string(),
        }),
    }
}

/// Serialize the tree as JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render(tree: &Tree, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(tree)
    } else {
        serde_json::to_string(tree)
    };
    rendered.context("failed to serialize state tree")
}

/// Atomically replace `path` with `contents` plus a trailing newline.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created, written or
/// moved into place.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
    writeln!(file, "{contents}")
        .with_context(|| format!("failed to write {}", file.path().display()))?;
    file.persist(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
