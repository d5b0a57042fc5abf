// run-badges: Badge calculation bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! ```text
//! Env (copy-on-write BTreeMap<String, String>)
//! Sources: current_env(), Env::from_map(), Env::new()
//! Ops: set/extend/get
//! ```
//!
//! - **Case-insensitive on Windows**, exact match elsewhere
//! - **Copy-on-write**: clones share data until modified
//! - **Scoped**: an `Env` is handed to a child process, the current
//!   process environment is only ever read

pub mod container;
pub mod types;

#[cfg(test)]
mod tests;

/// Captures the current process environment.
///
/// Variables whose name or value is not valid Unicode are skipped.
#[must_use]
pub fn current_env() -> container::Env {
    let vars = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect();
    container::Env::from_map(vars)
}
