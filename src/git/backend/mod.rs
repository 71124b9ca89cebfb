// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git runner abstraction layer.
//!
//! ```text
//! Git::run()
//!     |
//!     v  Invocation { argv, env, cwd, stdin }
//! GitRunner::run
//!     |
//!     +--> ShellRunner    ProcessBuilder::which("git") ... .run()
//!     '--> test doubles   record the invocation, spawn nothing
//! ```
//!
//! Runners report the exit code; turning a non-zero code into
//! [`GitError::CommandFailed`](crate::error::GitError::CommandFailed) is the
//! caller's job, so every runner fails the same way.

use std::path::PathBuf;

use tracing::trace;

use crate::core::env::overrides::EnvOverrides;
use crate::core::process::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
use crate::error::FrontResult;

/// Everything needed to run git once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Arguments after the program name.
    pub argv: Vec<String>,
    /// Overlay on the inherited environment.
    pub env: EnvOverrides,
    /// Working directory; the caller's when unset.
    pub cwd: Option<PathBuf>,
    pub stdin: Option<String>,
}

/// Runs a git invocation and reports what it produced.
pub trait GitRunner {
    /// Program name shown in argv of failures.
    fn program(&self) -> &str;

    /// Runs the invocation to completion.
    ///
    /// A non-zero exit code is not an error here.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be found or spawned.
    fn run(&self, invocation: &Invocation) -> FrontResult<ProcessOutput>;
}

/// Runs the real git binary as a subprocess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellRunner {
    program: String,
}

impl ShellRunner {
    /// Runs `git` from PATH.
    #[must_use]
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Runs `program` instead; a name is looked up in PATH, a path is used
    /// as is.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRunner for ShellRunner {
    fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, invocation: &Invocation) -> FrontResult<ProcessOutput> {
        if !invocation.env.is_empty() {
            // names only; values may hold credentials
            let set: Vec<&str> = invocation.env.set_names().collect();
            let removed: Vec<&str> = invocation.env.removed().collect();
            trace!(?set, ?removed, "env overlay");
        }

        let mut builder = ProcessBuilder::which(&self.program)?
            .name("git")
            .args(&invocation.argv)
            .envs(&invocation.env)
            .flag(ProcessFlags::ALLOW_FAILURE | ProcessFlags::LOG_OUTPUT);
        if let Some(cwd) = &invocation.cwd {
            builder = builder.cwd(cwd);
        }
        if let Some(stdin) = &invocation.stdin {
            builder = builder.stdin(stdin.as_str());
        }
        builder.run()
    }
}
