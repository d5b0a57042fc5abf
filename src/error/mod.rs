// run-badges: Badge calculation bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        BootstrapError (16 bytes)
//!               |
//!   +--------+--+------+--------+
//!   |        |         |        |
//!   v        v         v        v
//! Fetch   Config    Process     Io
//!  Box     Box        Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Fetch   ToolNotFound, MalformedConfig, NotAnObject,
//!           InvalidKey, InvalidValue
//!   Config  InvalidValue, NotFound
//!   Process ExecutableNotFound, SpawnFailed
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`BootstrapError`].
pub type BootstrapResult<T> = std::result::Result<T, BootstrapError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum two words wide.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Fetching the environment configuration failed.
    #[error("fetch error: {0}")]
    Fetch(#[from] Box<FetchError>),

    /// Bootstrapper settings are invalid.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for BootstrapError {
                fn from(err: $error) -> Self {
                    BootstrapError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    FetchError => Fetch,
    ConfigError => Config,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Fetch Errors ---

/// Errors raised while retrieving and parsing the environment configuration.
///
/// Every variant is fatal: nothing is launched once one of these occurs.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The configuration tool does not exist or is not executable.
    #[error("configuration tool not found: '{program}'")]
    ToolNotFound { program: String },

    /// The tool output is not valid JSON (including invalid UTF-8).
    #[error("malformed configuration: {source}")]
    MalformedConfig {
        #[source]
        source: serde_json::Error,
    },

    /// The tool output is valid JSON but not an object.
    #[error("malformed configuration: expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// A key cannot be used as an environment variable name.
    #[error("malformed configuration: invalid variable name '{key}' ({reason})")]
    InvalidKey { key: String, reason: &'static str },

    /// A value cannot be stored in an environment variable.
    #[error("malformed configuration: value of '{key}' contains a NUL byte")]
    InvalidValue { key: String },
}

// --- Config Errors ---

/// Errors in the bootstrapper's own settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Settings file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
