// run-badges: Badge calculation bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Settings --> Command Dispatch
//!   Run (default) | Env | Options | Configs | Version
//! ```

use std::process::ExitCode;

use run_badges::cli::global::GlobalOptions;
use run_badges::cli::{self, Command};
use run_badges::cmd::config::{run_configs_command, run_options_command};
use run_badges::cmd::env::run_env_command;
use run_badges::cmd::run::run_bootstrap_command;
use run_badges::config::Config;
use run_badges::logging::{LogConfig, LogLevel, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
        Some(Command::Options) => load_config(&cli.global).map(|config| {
            run_options_command(&config);
            0
        }),
        Some(Command::Configs) => cli.global.config_loader().map(|loader| {
            run_configs_command(&loader.format_loaded_files());
            0
        }),
        Some(Command::Env(args)) => match load_config(&cli.global) {
            Ok(config) => run_env_command(args, &config).await.map(|()| 0),
            Err(e) => Err(e),
        },
        Some(Command::Run) | None => match load_config(&cli.global) {
            Ok(config) => run_bootstrap_command(&config, cli.global.dry).await,
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(global: &GlobalOptions) -> run_badges::error::Result<Config> {
    global.config_loader()?.build()
}
