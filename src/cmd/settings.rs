// envtree: Environment-to-State-Tree Materializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings-related commands.

use crate::config::Settings;

/// Display effective settings followed by the files they were read from.
pub fn run_settings_command(settings: &Settings, loaded_files: &[String]) {
    for line in settings.format_options() {
        println!("{line}");
    }
    println!();
    if loaded_files.is_empty() {
        println!("No settings files loaded");
    } else {
        for line in loaded_files {
            println!("{line}");
        }
    }
}
