// run-badges: Badge calculation bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::types::{DEFAULT_CONFIG_TOOL, DEFAULT_NAMESPACE, DEFAULT_RUNTIME, DEFAULT_SCRIPT};
use super::{Config, ConfigLoader};
use crate::error::{ConfigError, Result};
use std::io::Write as _;
use std::path::PathBuf;

fn parse(toml: &str) -> Result<Config> {
    ConfigLoader::new().add_toml_str(toml).build()
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.fetch.program, PathBuf::from(DEFAULT_CONFIG_TOOL));
    assert_eq!(config.fetch.namespace, DEFAULT_NAMESPACE);
    assert_eq!(config.downstream.runtime, PathBuf::from(DEFAULT_RUNTIME));
    assert_eq!(config.downstream.script, PathBuf::from(DEFAULT_SCRIPT));
    assert!(!config.downstream.propagate_exit_code);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_sources_yield_defaults() {
    let config = ConfigLoader::new().build().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_parse() {
    let toml = r#"
[fetch]
program = "/usr/local/bin/get-config"

[downstream]
runtime = "/usr/bin/node"
propagate_exit_code = true
"#;
    let config = parse(toml).unwrap();

    assert_eq!(config.fetch.program, PathBuf::from("/usr/local/bin/get-config"));
    assert_eq!(config.fetch.namespace, DEFAULT_NAMESPACE);
    assert_eq!(config.downstream.runtime, PathBuf::from("/usr/bin/node"));
    assert_eq!(config.downstream.script, PathBuf::from(DEFAULT_SCRIPT));
    assert!(config.downstream.propagate_exit_code);
}

#[test]
fn test_config_rejects_unknown_fields() {
    let toml = r#"
[fetch]
programme = "/usr/local/bin/get-config"
"#;
    assert!(parse(toml).is_err());
}

#[test]
fn test_config_rejects_empty_namespace() {
    let toml = r#"
[fetch]
namespace = ""
"#;
    let err = parse(toml).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'namespace' in section '[fetch]': must not be empty");
}

#[test]
fn test_overrides_win_over_files() {
    let config = ConfigLoader::new()
        .add_toml_str("[downstream]\nscript = \"/srv/app/badges.js\"\n")
        .set("downstream.script", "/tmp/other.js")
        .unwrap()
        .set_opt::<String>("downstream.runtime", None)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.downstream.script, PathBuf::from("/tmp/other.js"));
    assert_eq!(config.downstream.runtime, PathBuf::from(DEFAULT_RUNTIME));
}

#[test]
fn test_later_files_override_earlier() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.toml");
    let local = dir.path().join("local.toml");
    std::fs::File::create(&base)
        .unwrap()
        .write_all(b"[fetch]\nnamespace = \"aws:elasticbeanstalk:application:environment\"\nprogram = \"/bin/base\"\n")
        .unwrap();
    std::fs::File::create(&local)
        .unwrap()
        .write_all(b"[fetch]\nprogram = \"/bin/local\"\n")
        .unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file(&base)
        .add_toml_file_optional(&local)
        .add_toml_file_optional(dir.path().join("missing.toml"));
    assert_eq!(loader.format_loaded_files().len(), 2);

    let config = loader.build().unwrap();
    assert_eq!(config.fetch.program, PathBuf::from("/bin/local"));
    assert_eq!(
        config.fetch.namespace,
        "aws:elasticbeanstalk:application:environment"
    );
}

#[test]
fn test_missing_required_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConfigLoader::new()
        .add_toml_file(dir.path().join("nope.toml"))
        .build()
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::NotFound(path)) if path.ends_with("nope.toml")
    ));
}

#[test]
fn test_env_vars_reach_their_sections() {
    let config = ConfigLoader::new()
        .with_env_prefix("BADGES")
        .with_env_vars([
            ("BADGES_FETCH__NAMESPACE", "aws:elasticbeanstalk:application:environment"),
            ("badges_downstream__propagate_exit_code", "true"),
        ])
        .build()
        .unwrap();

    assert_eq!(
        config.fetch.namespace,
        "aws:elasticbeanstalk:application:environment"
    );
    assert!(config.downstream.propagate_exit_code);
}

#[test]
fn test_unrelated_prefixed_env_vars_are_ignored() {
    let config = ConfigLoader::new()
        .with_env_prefix("BADGES")
        .with_env_vars([
            ("BADGES_BUCKET", "observe-badges"),
            ("BADGES_TOKEN", "secret"),
            ("BADGES_FETCHER", "x"),
            ("BADGES_DOWNSTREAM", "x"),
            ("BADGES_DOWNSTREAM__SCRIPT", "/srv/app/badges.js"),
        ])
        .build()
        .unwrap();

    assert_eq!(config.downstream.script, PathBuf::from("/srv/app/badges.js"));
    assert_eq!(config.fetch, Config::default().fetch);
}

#[test]
fn test_misspelled_section_key_is_rejected() {
    let result = ConfigLoader::new()
        .with_env_prefix("BADGES")
        .with_env_vars([("BADGES_FETCH__PROGRAMME", "/bin/get-config")])
        .build();
    assert!(result.is_err());
}

#[test]
fn test_format_loaded_files() {
    let loader = ConfigLoader::new().add_toml_str("").add_toml_str("");
    insta::assert_snapshot!(loader.format_loaded_files().join("\n"), @r"
    1. [string] <string>
    2. [string] <string>
    ");
}

#[test]
fn test_format_options() {
    let options = Config::default().format_options();
    insta::assert_snapshot!(options.join("\n"), @r"
    downstream.propagate_exit_code = false
    downstream.runtime             = node
    downstream.script              = /var/app/current/scripts/calculate-badges.js
    fetch.namespace                = environment
    fetch.program                  = /opt/elasticbeanstalk/bin/get-config
    ");
}
