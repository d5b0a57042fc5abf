// run-badges: Badge calculation bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for run-badges.
//!
//! ```text
//! Config
//!   fetch:      program, namespace
//!   downstream: runtime, script, propagate_exit_code
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the Elastic Beanstalk configuration tool.
pub const DEFAULT_CONFIG_TOOL: &str = "/opt/elasticbeanstalk/bin/get-config";

/// Configuration namespace holding the environment properties.
pub const DEFAULT_NAMESPACE: &str = "environment";

/// Runtime used to execute the badge calculation script.
pub const DEFAULT_RUNTIME: &str = "node";

/// Badge calculation script in the deployed application.
pub const DEFAULT_SCRIPT: &str = "/var/app/current/scripts/calculate-badges.js";

/// How the environment configuration is retrieved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchConfig {
    /// Configuration tool executable (absolute path or name in PATH).
    pub program: PathBuf,
    /// Namespace passed as the tool's only argument.
    pub namespace: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_CONFIG_TOOL),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

/// How the badge calculation is launched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DownstreamConfig {
    /// Interpreter executable.
    pub runtime: PathBuf,
    /// Script passed as the runtime's only argument.
    pub script: PathBuf,
    /// Exit with the downstream exit code instead of 0.
    pub propagate_exit_code: bool,
}

impl Default for DownstreamConfig {
    fn default() -> Self {
        Self {
            runtime: PathBuf::from(DEFAULT_RUNTIME),
            script: PathBuf::from(DEFAULT_SCRIPT),
            propagate_exit_code: false,
        }
    }
}
