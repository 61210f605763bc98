// envtree: Environment-to-State-Tree Materializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Host registration seam.
//!
//! ```text
//! Server { app: Tree, env: Env }
//!    |
//!    | register(&EnvConfigPlugin, &ImportOptions)
//!    v
//! EnvConfigPlugin::register --> EnvConfigImporter::import(env, &mut app)
//!    |
//!    +-- Ok  --> plugin name recorded
//!    +-- Err --> propagated, host aborts startup
//! ```


use crate::env::{Env, current_env};
use crate::error::EnvTreeResult;
use crate::importer::{EnvConfigImporter, ImportOptions};
use crate::tree::Tree;

/// Something that can be registered with a [`Server`] during startup.
pub trait Plugin {
    /// Options passed at registration time.
    type Options;

    /// Unique plugin name.
    fn name(&self) -> &'static str;

    /// Hook the plugin into `server`.
    ///
    /// # Errors
    ///
    /// Returns an error if the plugin cannot be registered. The server must
    /// not continue starting up.
    fn register(&self, server: &mut Server, options: &Self::Options) -> EnvTreeResult<()>;
}

/// Minimal host that owns the application state tree.
#[derive(Debug, Clone, Default)]
pub struct Server {
    app: Tree,
    env: Env,
    registered: Vec<&'static str>,
}

impl Server {
    /// Create a server over the current process environment.
    #[must_use]
    pub fn new() -> Self {
        Self::with_env(current_env())
    }

    /// Create a server over an explicit environment snapshot.
    #[must_use]
    pub fn with_env(env: Env) -> Self {
        Self {
            app: Tree::new(),
            env,
            registered: Vec::new(),
        }
    }

    /// Replace the initial application state.
    #[must_use]
    pub fn with_app(mut self, app: Tree) -> Self {
        self.app = app;
        self
    }

    #[must_use]
    pub const fn app(&self) -> &Tree {
        &self.app
    }

    pub const fn app_mut(&mut self) -> &mut Tree {
        &mut self.app
    }

    /// Consume the server, returning its application state.
    #[must_use]
    pub fn into_app(self) -> Tree {
        self.app
    }

    #[must_use]
    pub const fn env(&self) -> &Env {
        &self.env
    }

    /// Names of successfully registered plugins, in order.
    #[must_use]
    pub fn registrations(&self) -> &[&'static str] {
        &self.registered
    }

    /// Register `plugin` with `options`.
    ///
    /// # Errors
    ///
    /// Propagates the plugin's registration error; the plugin is not
    /// recorded as registered in that case.
    pub fn register<P: Plugin>(&mut self, plugin: &P, options: &P::Options) -> EnvTreeResult<()> {
        plugin.register(self, options)?;
        tracing::debug!(plugin = plugin.name(), "plugin registered");
        self.registered.push(plugin.name());
        Ok(())
    }
}

/// Plugin that materializes prefixed environment variables into `app`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfigPlugin;

impl Plugin for EnvConfigPlugin {
    type Options = ImportOptions;

    fn name(&self) -> &'static str {
        "env-config"
    }

    fn register(&self, server: &mut Server, options: &ImportOptions) -> EnvTreeResult<()> {
        let importer = EnvConfigImporter::from_options(options)?;
        let Server { app, env, .. } = server;
        importer.import(env, app)?;
        Ok(())
    }
}
