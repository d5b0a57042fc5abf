// run-badges: Badge calculation bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE           ← Additional settings files (can repeat)
//! --dry                   ← Fetch and build env, don't launch
//! --log-level N           ← Console verbosity (0-6)
//! --file-log-level N      ← File verbosity (defaults to --log-level)
//! --config-tool/--namespace/--runtime/--script/--propagate-exit-code
//!                         ← Direct settings overrides
//!
//! Precedence: CLI flags > BADGES_* env > --config > badges.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::config::loader::ConfigLoader;
use crate::error::Result;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML settings file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Fetches the configuration and builds the environment, but only logs
    /// the command that would be launched.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Configuration tool to run (overrides fetch.program).
    #[arg(long = "config-tool", value_name = "PATH")]
    pub config_tool: Option<PathBuf>,

    /// Configuration namespace to request (overrides fetch.namespace).
    #[arg(long = "namespace", value_name = "NAME")]
    pub namespace: Option<String>,

    /// Runtime that executes the script (overrides downstream.runtime).
    #[arg(long = "runtime", value_name = "PROGRAM")]
    pub runtime: Option<PathBuf>,

    /// Badge calculation script (overrides downstream.script).
    #[arg(long = "script", value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Exit with the badge calculation's exit code.
    #[arg(long = "propagate-exit-code")]
    pub propagate_exit_code: bool,

    /// Disables loading `badges.toml` from the current directory.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,
}

impl GlobalOptions {
    /// Builds the settings loader for these options.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be converted to a settings value.
    pub fn config_loader(&self) -> Result<ConfigLoader> {
        let mut loader = Config::builder();
        if !self.no_default_config {
            loader = loader.add_toml_file_optional("badges.toml");
        }
        for path in &self.configs {
            loader = loader.add_toml_file(path);
        }

        let display = |p: &PathBuf| p.display().to_string();
        let loader = loader
            .with_env_prefix("BADGES")
            .set_opt("fetch.program", self.config_tool.as_ref().map(display))?
            .set_opt("fetch.namespace", self.namespace.clone())?
            .set_opt("downstream.runtime", self.runtime.as_ref().map(display))?
            .set_opt("downstream.script", self.script.as_ref().map(display))?
            .set_opt(
                "downstream.propagate_exit_code",
                self.propagate_exit_code.then_some(true),
            )?;
        Ok(loader)
    }
}
