// envtree: Environment-to-State-Tree Materializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Settings --> Logging --> Command Dispatch
//!   Version | Import | Settings
//! ```

use std::process::ExitCode;

use envtree::cli::global::GlobalOptions;
use envtree::cli::{self, Command};
use envtree::cmd::import::run_import_command;
use envtree::cmd::settings::run_settings_command;
use envtree::config::Settings;
use envtree::config::loader::ConfigLoader;
use envtree::error::Result;
use envtree::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let Some(command) = &cli.command else {
        eprintln!("No command specified. Use --help for usage information.");
        return ExitCode::FAILURE;
    };

    if matches!(command, Command::Version) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let loader = match build_config_loader(&cli.global, command) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let loaded_files = loader.format_loaded_files();
    let settings = match loader.build() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&cli.global, &settings)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let result = match command {
        Command::Import(_) => run_import_command(&settings),
        Command::Settings => {
            run_settings_command(&settings, &loaded_files);
            Ok(())
        }
        Command::Version => Ok(()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config_loader(global: &GlobalOptions, command: &Command) -> Result<ConfigLoader> {
    let mut loader = Settings::builder();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional("envtree.toml");
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix("ENVTREE");
    loader = global.apply_overrides(loader)?;
    match command {
        Command::Import(args) => args.apply_overrides(loader),
        Command::Settings | Command::Version => Ok(loader),
    }
}

fn build_log_config(global: &GlobalOptions, settings: &Settings) -> LogConfig {
    LogConfig::builder()
        .with_console_level(settings.log.console_level)
        .with_file_level(settings.log.file_level)
        .maybe_with_log_file(settings.log.file.as_ref().map(|p| p.display().to_string()))
        .with_json(global.log_json)
        .build()
}
