// run-badges: Badge calculation bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["run-badges"]).unwrap();
    assert!(cli.command.is_none());
    assert!(!cli.global.dry);
    assert!(!cli.global.propagate_exit_code);
}

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["run-badges", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_env_keys_only() {
    let cli = Cli::try_parse_from(["run-badges", "env", "--keys-only"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Env(ref args)) if args.keys_only));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "run-badges",
        "-l",
        "5",
        "--dry",
        "--config-tool",
        "/usr/local/bin/get-config",
        "--script",
        "/srv/app/calculate-badges.js",
        "run",
    ])
    .unwrap();

    assert!(matches!(cli.command, Some(Command::Run)));
    assert_eq!(cli.global.log_level, Some(5));
    assert!(cli.global.dry);
    assert_eq!(
        cli.global.config_tool,
        Some(PathBuf::from("/usr/local/bin/get-config"))
    );
    assert_eq!(
        cli.global.script,
        Some(PathBuf::from("/srv/app/calculate-badges.js"))
    );
}

#[test]
fn test_parse_rejects_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["run-badges", "-l", "7"]).is_err());
}

#[test]
fn test_overrides_reach_config() {
    let cli = Cli::try_parse_from([
        "run-badges",
        "--no-default-config",
        "--namespace",
        "aws:elasticbeanstalk:application:environment",
        "--runtime",
        "/usr/bin/node",
        "--propagate-exit-code",
    ])
    .unwrap();

    let config = cli.global.config_loader().unwrap().build().unwrap();

    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    downstream.propagate_exit_code = true
    downstream.runtime             = /usr/bin/node
    downstream.script              = /var/app/current/scripts/calculate-badges.js
    fetch.namespace                = aws:elasticbeanstalk:application:environment
    fetch.program                  = /opt/elasticbeanstalk/bin/get-config
    ");
}
