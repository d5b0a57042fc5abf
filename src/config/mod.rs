// run-badges: Badge calculation bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings of the bootstrapper itself.
//!
//! These describe *how* to fetch the environment configuration and *what*
//! to launch afterwards. The fetched configuration map lives in
//! [`crate::bootstrap`].
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults (Elastic Beanstalk get-config, node calculate-badges.js)
//! 2. badges.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. BADGES_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! BADGES_FETCH__PROGRAM=/usr/local/bin/get-config  → fetch.program
//! BADGES_DOWNSTREAM__RUNTIME=/usr/bin/node         → downstream.runtime
//! BADGES_DOWNSTREAM__PROPAGATE_EXIT_CODE=true      → downstream.propagate_exit_code
//! BADGES_BUCKET=...                                → ignored (no section)
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ConfigError;

use loader::ConfigLoader;
use types::{DownstreamConfig, FetchConfig};

/// Top-level settings sections, as spelled in TOML and `BADGES_<SECTION>__*`.
pub(crate) const SECTIONS: [&str; 2] = ["fetch", "downstream"];

/// Complete bootstrapper configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Configuration tool invocation.
    pub fetch: FetchConfig,
    /// Badge calculation invocation.
    pub downstream: DownstreamConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use run_badges::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("badges.toml")
    ///     .with_env_prefix("BADGES")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Validate the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first empty required field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("fetch", "program", self.fetch.program.as_os_str().is_empty()),
            ("fetch", "namespace", self.fetch.namespace.is_empty()),
            ("downstream", "runtime", self.downstream.runtime.as_os_str().is_empty()),
            ("downstream", "script", self.downstream.script.as_os_str().is_empty()),
        ];

        match required.into_iter().find(|(_, _, empty)| *empty) {
            Some((section, key, _)) => Err(ConfigError::InvalidValue {
                section: section.to_string(),
                key: key.to_string(),
                message: "must not be empty".to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Format configuration options for display, ordered by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert("fetch.program", self.fetch.program.display().to_string());
        options.insert("fetch.namespace", self.fetch.namespace.clone());
        options.insert(
            "downstream.runtime",
            self.downstream.runtime.display().to_string(),
        );
        options.insert(
            "downstream.script",
            self.downstream.script.display().to_string(),
        );
        options.insert(
            "downstream.propagate_exit_code",
            self.downstream.propagate_exit_code.to_string(),
        );

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
