// run-badges: Badge calculation bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `env` command: show what the badge calculation would receive.

use crate::bootstrap::{Bootstrapper, ConfigMap};
use crate::cli::EnvArgs;
use crate::config::Config;
use crate::error::Result;

/// Fetches the configuration and prints it, one variable per line.
///
/// # Errors
///
/// Returns the fetch error if the configuration cannot be retrieved.
pub async fn run_env_command(args: &EnvArgs, config: &Config) -> Result<()> {
    let map = Bootstrapper::new(config.clone()).fetch_config().await?;
    for line in format_env(&map, args.keys_only) {
        println!("{line}");
    }
    Ok(())
}

/// Formats the map as `KEY=VALUE` (or `KEY`) lines, sorted by key.
#[must_use]
pub fn format_env(map: &ConfigMap, keys_only: bool) -> Vec<String> {
    if keys_only {
        map.keys().map(str::to_string).collect()
    } else {
        map.iter().map(|(k, v)| format!("{k}={v}")).collect()
    }
}
