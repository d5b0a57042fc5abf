// run-badges: Badge calculation bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder with configuration options.
//!
//! ```text
//! ProcessBuilder
//!  • new/which/which_in/find
//!  • arg/args/env/name
//!  • capture_stdout/stderr/output, inherit_stdio
//!
//! StreamFlags: FORWARD_TO_LOG (default), BIT_BUCKET, KEEP_IN_BUFFER, INHERIT
//!
//! The exit code is reported in ProcessOutput, never turned into an error.
//! ```

use bitflags::bitflags;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::core::env::container::Env;
use crate::error::ProcessError;

/// Static cache for executable paths resolved via `which`.
static EXECUTABLE_CACHE: OnceLock<RwLock<BTreeMap<String, PathBuf>>> = OnceLock::new();

fn exe_cache() -> &'static RwLock<BTreeMap<String, PathBuf>> {
    EXECUTABLE_CACHE.get_or_init(|| RwLock::new(BTreeMap::new()))
}

bitflags! {
    /// Flags controlling stream handling for stdin/stdout/stderr.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StreamFlags: u32 {
        /// Forward output to tracing logs
        const FORWARD_TO_LOG = 0x01;
        /// Discard output (send to /dev/null)
        const BIT_BUCKET = 0x02;
        /// Keep the raw output bytes for later retrieval
        const KEEP_IN_BUFFER = 0x04;
        /// Inherit from parent process
        const INHERIT = 0x08;
    }
}

impl Default for StreamFlags {
    fn default() -> Self {
        Self::FORWARD_TO_LOG
    }
}

/// Output from a completed process.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    exit_code: Option<i32>,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl ProcessOutput {
    pub(super) const fn new(exit_code: Option<i32>, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
        }
    }

    /// Returns the process exit code, or -1 if it was terminated by a signal.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.exit_code.unwrap_or(-1)
    }

    /// Returns the exit code, `None` if the process was terminated by a signal.
    #[must_use]
    pub const fn raw_exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    /// Captured stdout bytes, exactly as written (if `KEEP_IN_BUFFER` was set).
    #[must_use]
    pub fn stdout(&self) -> &[u8] {
        &self.stdout
    }

    /// Captured stderr bytes (if `KEEP_IN_BUFFER` was set).
    #[must_use]
    pub fn stderr(&self) -> &[u8] {
        &self.stderr
    }

    /// Captured stderr as text, invalid UTF-8 replaced.
    #[must_use]
    pub fn stderr_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stderr)
    }

    /// Returns true if the process exited with code 0.
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }
}

/// Builder for configuring and running a process.
#[derive(Debug)]
pub struct ProcessBuilder {
    /// Path to the executable
    program: PathBuf,
    /// Command-line arguments
    args: Vec<String>,
    /// Complete environment of the child; inherited when unset
    env: Option<Env>,
    stdin: StreamFlags,
    stdout: StreamFlags,
    stderr: StreamFlags,
    /// Display name for logging
    name: Option<String>,
}

impl ProcessBuilder {
    /// Creates a new `ProcessBuilder` for the given program.
    ///
    /// The program can be an absolute path, relative path, or just the executable name.
    /// A bare name is resolved via PATH by the OS at spawn time.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            env: None,
            stdin: StreamFlags::BIT_BUCKET,
            stdout: StreamFlags::default(),
            stderr: StreamFlags::default(),
            name: None,
        }
    }

    /// Creates a `ProcessBuilder` after resolving the program.
    ///
    /// Bare names are looked up in PATH; paths are checked for an executable
    /// file. Results are cached for subsequent lookups of the same program.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError::ExecutableNotFound` if the executable cannot be found.
    ///
    /// # Example
    /// ```ignore
    /// let builder = ProcessBuilder::which("node")?;
    /// ```
    pub fn which(program: impl AsRef<OsStr>) -> Result<Self, ProcessError> {
        let program = program.as_ref();
        Self::find(program).map(Self::new).ok_or_else(|| {
            ProcessError::ExecutableNotFound {
                name: program.to_string_lossy().into_owned(),
            }
        })
    }

    /// Creates a `ProcessBuilder` after resolving the program against an
    /// explicit `PATH` value, such as the one a child environment will carry.
    ///
    /// Falls back to the current `PATH` when `path_var` is `None`. Not cached.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError::ExecutableNotFound` if the executable cannot be found.
    pub fn which_in(program: impl AsRef<OsStr>, path_var: Option<&str>) -> Result<Self, ProcessError> {
        let program = program.as_ref();
        let Some(path_var) = path_var else {
            return Self::which(program);
        };
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        which::which_in(program, Some(path_var), cwd)
            .map(Self::new)
            .map_err(|_| ProcessError::ExecutableNotFound {
                name: program.to_string_lossy().into_owned(),
            })
    }

    /// Finds the full path to an executable.
    ///
    /// Returns `None` if the executable is not found.
    #[must_use]
    pub fn find(program: impl AsRef<OsStr>) -> Option<PathBuf> {
        let program = program.as_ref();
        let key = program.to_string_lossy().into_owned();

        {
            let cache = exe_cache().read().unwrap_or_else(PoisonError::into_inner);
            if let Some(path) = cache.get(&key) {
                return Some(path.clone());
            }
        }

        let path = which::which(program).ok()?;
        exe_cache()
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, path.clone());
        Some(path)
    }

    /// Adds an argument to the command.
    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Adds multiple arguments to the command.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_string_lossy().into_owned()));
        self
    }

    /// Sets the complete environment of the process.
    ///
    /// The child sees exactly these variables; nothing is inherited.
    #[must_use]
    pub fn env(mut self, env: Env) -> Self {
        self.env = Some(env);
        self
    }

    /// Keeps stdout without logging it.
    #[must_use]
    pub const fn capture_stdout(mut self) -> Self {
        self.stdout = StreamFlags::KEEP_IN_BUFFER;
        self
    }

    /// Keeps stderr and also forwards it to the log.
    #[must_use]
    pub fn capture_stderr(mut self) -> Self {
        self.stderr = StreamFlags::KEEP_IN_BUFFER | StreamFlags::FORWARD_TO_LOG;
        self
    }

    /// Convenience: capture both stdout and stderr.
    #[must_use]
    pub fn capture_output(self) -> Self {
        self.capture_stdout().capture_stderr()
    }

    /// Convenience: share stdin, stdout and stderr with the parent.
    #[must_use]
    pub const fn inherit_stdio(mut self) -> Self {
        self.stdin = StreamFlags::INHERIT;
        self.stdout = StreamFlags::INHERIT;
        self.stderr = StreamFlags::INHERIT;
        self
    }

    /// Sets a display name for logging.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    // Getters for field access within the process module

    /// Returns a reference to the program path.
    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    /// Returns a slice of the arguments.
    #[must_use]
    pub fn args_slice(&self) -> &[String] {
        &self.args
    }

    pub(super) const fn environment(&self) -> Option<&Env> {
        self.env.as_ref()
    }

    pub(super) const fn stdin_flags(&self) -> StreamFlags {
        self.stdin
    }

    pub(super) const fn stdout_flags(&self) -> StreamFlags {
        self.stdout
    }

    pub(super) const fn stderr_flags(&self) -> StreamFlags {
        self.stderr
    }

    pub(super) fn name_override(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
