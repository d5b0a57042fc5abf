// run-badges: Badge calculation bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and management.
//!
//! ```text
//! ProcessBuilder::which("get-config")
//!   .arg() .env() .capture_stdout() / .inherit_stdio()
//!   .run()
//!       --> tokio::process::Command
//!           drain piped stdout/stderr
//!       --> ProcessOutput { exit_code, stdout, stderr }
//! ```

pub mod builder;
mod io;
mod runner;
