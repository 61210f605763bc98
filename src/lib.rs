// envtree: Environment-to-State-Tree Materializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! Deployment environments inject configuration as prefixed environment
//! variables holding `{"path": "a.b.c", "value": <json>}` descriptors;
//! envtree writes each value into a nested state tree at its dotted path.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |              import / settings
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  envtree.toml, ENVTREE_*  |
//!              '-------------+-------------'
//!                            v
//!                   plugin (Server host)
//!                            |
//!                            v
//!                 importer (EnvConfigImporter)
//!                      |           |
//!                      v           v
//!                env (snapshot)  tree (DottedPath, assign)
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use envtree::env::Env;
//! use envtree::importer::import;
//! use envtree::tree::Tree;
//!
//! let env: Env = [
//!     ("FOO_VAR_1", r#"{"path":"some.config.stuff","value":"Bazinga!"}"#),
//!     ("SOME_VAR", "nothingness"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut state = Tree::new();
//! import("FOO_VAR_", &env, &mut state)?;
//! assert_eq!(state["some"]["config"]["stuff"], "Bazinga!");
//! # Ok::<(), envtree::error::ImportError>(())
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod env;
pub mod error;
pub mod importer;
pub mod logging;
pub mod plugin;
pub mod tree;
