// run-badges: Badge calculation bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `run` command: the bootstrap itself.

use tracing::debug;

use crate::bootstrap::Bootstrapper;
use crate::config::Config;
use crate::error::Result;

/// Fetches the configuration, launches the badge calculation and returns
/// the exit status for this process.
///
/// # Errors
///
/// Returns an error if the configuration cannot be fetched or the runtime
/// cannot be started. The badge calculation's own exit code only matters
/// when `downstream.propagate_exit_code` is set.
pub async fn run_bootstrap_command(config: &Config, dry: bool) -> Result<u8> {
    let report = Bootstrapper::new(config.clone())
        .dry_run(dry)
        .run()
        .await?;

    let status = report.exit_status(config.downstream.propagate_exit_code);
    debug!(
        applied = report.applied(),
        launched = report.launched(),
        downstream = ?report.downstream_exit_code(),
        status,
        "bootstrap finished"
    );
    Ok(status)
}
