// run-badges: Badge calculation bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for run-badges using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! run-badges [global options] [command]
//! run        (default) fetch config, launch badge calculation
//! env        print the fetched configuration
//! options    print the effective settings
//! configs    print the settings files in use
//! version
//! ```

pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand};

/// Badge calculation bootstrapper.
///
/// Loads the deployment's environment configuration and launches the
/// badge calculation with it.
#[derive(Debug, Parser)]
#[command(
    name = "run-badges",
    author,
    version,
    about = "Badge calculation bootstrapper",
    long_about = "run-badges Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads the environment properties of the deployment from the\n\
                  platform configuration tool (`get-config environment`) and\n\
                  runs the badge calculation script with them set as environment\n\
                  variables. Without a command, `run` is assumed.",
    after_help = "SETTINGS:\n\n\
                  Settings are read from `badges.toml` in the current directory\n\
                  if present, then from every --config file in order, then from\n\
                  BADGES_<SECTION>__<KEY> environment variables (for example\n\
                  BADGES_FETCH__PROGRAM), and finally from command-line flags.\n\n\
                  EXIT STATUS:\n\n\
                  Non-zero only if the configuration cannot be fetched or the\n\
                  runtime cannot be started. The exit code of the badge\n\
                  calculation is ignored unless --propagate-exit-code is given."
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

    /// Fetches the configuration and launches the badge calculation (default).
    Run,

    /// Fetches the configuration and prints it without launching anything.
    Env(EnvArgs),

    /// Lists all settings and their effective values.
    Options,

    /// Lists the settings files in use.
    Configs,
}

/// Arguments for the `env` command.
#[derive(Debug, Clone, Default, Args)]
pub struct EnvArgs {
    /// Print variable names only.
    #[arg(short = 'k', long = "keys-only")]
    pub keys_only: bool,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

