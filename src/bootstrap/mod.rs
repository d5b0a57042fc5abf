// run-badges: Badge calculation bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment bootstrapper.
//!
//! ```text
//! Bootstrapper::run()
//!   1. fetch_config()  get-config environment --> ConfigMap   (missing/malformed: fatal)
//!   2. child_env()     current_env() + ConfigMap --> Env      (own env untouched)
//!   3. launch()        node calculate-badges.js, env = Env    (exit code recorded)
//!        |
//!        v
//!   RunReport { applied, launched, exit_code }
//! ```
//!
//! Exactly two processes are started, one after the other, with no retries
//! and no timeouts. The downstream exit code is reported, never raised.

pub mod config_map;

#[cfg(test)]
mod tests;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::env::container::Env;
use crate::core::env::current_env;
use crate::core::process::builder::ProcessBuilder;
use crate::error::{FetchError, Result};

pub use config_map::ConfigMap;

/// Outcome of a bootstrap run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    applied: usize,
    launched: bool,
    exit_code: Option<i32>,
}

impl RunReport {
    /// Number of variables taken from the configuration map.
    #[must_use]
    pub const fn applied(&self) -> usize {
        self.applied
    }

    /// Whether the downstream program was started (false on dry runs).
    #[must_use]
    pub const fn launched(&self) -> bool {
        self.launched
    }

    /// Exit code of the downstream program, `None` if it was not launched or
    /// was terminated by a signal.
    #[must_use]
    pub const fn downstream_exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    /// Exit status for the bootstrapper process.
    ///
    /// Always 0 unless `propagate` is set, in which case the downstream exit
    /// code is returned. Codes outside 0-255 and signal terminations map to 1.
    #[must_use]
    pub fn exit_status(&self, propagate: bool) -> u8 {
        if !propagate || !self.launched {
            return 0;
        }
        self.exit_code
            .and_then(|code| u8::try_from(code).ok())
            .unwrap_or(1)
    }
}

/// Fetches the environment configuration and launches the badge calculation.
#[derive(Debug, Clone)]
pub struct Bootstrapper {
    config: Config,
    dry: bool,
}

impl Bootstrapper {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config, dry: false }
    }

    /// Stop after building the environment instead of launching.
    #[must_use]
    pub const fn dry_run(mut self, dry: bool) -> Self {
        self.dry = dry;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the configuration tool and parses its output.
    ///
    /// Stdout is parsed whatever the tool's exit code; a non-zero exit is
    /// only logged.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] (inside `anyhow::Error`) when the tool is
    /// missing or prints something that is not a usable JSON object.
    pub async fn fetch_config(&self) -> Result<ConfigMap> {
        let fetch = &self.config.fetch;
        let program = fetch.program.display().to_string();

        let tool = ProcessBuilder::which(&fetch.program).map_err(|_| FetchError::ToolNotFound {
            program: program.clone(),
        })?;

        let output = tool
            .arg(&fetch.namespace)
            .name("get-config")
            .capture_output()
            .run()
            .await?;

        if !output.success() {
            warn!(
                program = %program,
                code = output.exit_code(),
                stderr = %output.stderr_lossy().trim(),
                "configuration tool exited with a non-zero code"
            );
        }

        let map = ConfigMap::parse(output.stdout())?;
        debug!(
            namespace = %fetch.namespace,
            count = map.len(),
            keys = ?map.keys().collect::<Vec<_>>(),
            "fetched environment configuration"
        );
        Ok(map)
    }

    /// Builds the downstream environment: the inherited variables overlaid
    /// with the configuration map.
    ///
    /// The current process environment is read, never written.
    #[must_use]
    pub fn child_env(&self, map: &ConfigMap) -> Env {
        let mut env = current_env();
        env.extend(map);
        env
    }

    /// Prepares the downstream command: `<runtime> <script>`.
    ///
    /// The runtime is resolved against the `PATH` the child will see.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if the runtime cannot be found.
    pub fn downstream_command(&self, env: Env) -> Result<ProcessBuilder> {
        let downstream = &self.config.downstream;
        let runtime = ProcessBuilder::which_in(&downstream.runtime, env.get("PATH"))?;
        let builder = runtime
            .arg(&downstream.script)
            .env(env)
            .name("calculate-badges")
            .inherit_stdio();
        Ok(builder)
    }

    /// Launches the downstream program and waits for it to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime cannot be found or spawned. A
    /// non-zero exit is not an error.
    pub async fn launch(&self, env: Env) -> Result<Option<i32>> {
        let command = self.downstream_command(env)?;
        info!(cmd = %command.command_line(), "launching badge calculation");

        let output = command.run().await?;
        match output.raw_exit_code() {
            Some(0) => info!("badge calculation finished"),
            Some(code) => warn!(code, "badge calculation exited with a non-zero code"),
            None => warn!("badge calculation was terminated by a signal"),
        }
        Ok(output.raw_exit_code())
    }

    /// Fetch, build the environment, launch.
    ///
    /// # Errors
    ///
    /// Fetch errors abort before anything is launched. See also
    /// [`Bootstrapper::launch`].
    pub async fn run(&self) -> Result<RunReport> {
        let map = self.fetch_config().await?;
        let env = self.child_env(&map);

        if self.dry {
            let command = self.downstream_command(env)?;
            info!(
                cmd = %command.command_line(),
                keys = ?map.keys().collect::<Vec<_>>(),
                "dry run, not launching"
            );
            return Ok(RunReport {
                applied: map.len(),
                launched: false,
                exit_code: None,
            });
        }

        let exit_code = self.launch(env).await?;
        Ok(RunReport {
            applied: map.len(),
            launched: true,
            exit_code,
        })
    }
}
