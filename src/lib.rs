// run-badges: Badge calculation bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                   main.rs
//!                      |
//!           +----------+----------+
//!           v                     v
//!        cli (clap)          cmd (handlers)
//!           |             run / env / options
//!           +----------+----------+
//!                      v
//!         ,---------------------------,
//!         |          config           |
//!         |  TOML + BADGES_* + flags  |
//!         '-------------+-------------'
//!                       v
//!                   bootstrap
//!        get-config --> ConfigMap --> Env
//!                       --> node calculate-badges.js
//!
//!   +-----------------------------------------+
//!   |  core   process, env                    |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod bootstrap;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
