// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!             FrontError (~24 bytes)
//!                     |
//!   +--------+--------+------+------+
//!   |        |        |      |      |
//!   v        v        v      v      v
//!  Git      Cfg     Proc    Io    Other
//!  Box      Box     Box     Box   Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Git     Conflict, Requires, InvalidValue, InvalidEnvName,
//!           CommandFailed(Box<CommandFailure>)
//!   Config  ParseError, InvalidValue
//!   Process ExecutableNotFound, SpawnFailed, StdinFailed,
//!           WaitFailed, NonZeroExit
//!
//! All variants boxed => FrontError fits in 24 bytes.
//! ```

use std::fmt;

use thiserror::Error;

use crate::core::env::overrides::EnvOverrides;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`FrontError`].
pub type FrontResult<T> = std::result::Result<T, FrontError>;

/// Exit code for usage errors (`EX_USAGE` from `sysexits.h`).
pub const EXIT_USAGE: i32 = 64;

/// Exit code for malformed input data (`EX_DATAERR` from `sysexits.h`).
pub const EXIT_DATA_ERR: i32 = 65;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum FrontError {
    /// Git validation or execution failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl FrontError {
    /// Returns the failed git invocation, if this error is one.
    #[must_use]
    pub fn command_failure(&self) -> Option<&CommandFailure> {
        match self {
            Self::Git(err) => match err.as_ref() {
                GitError::CommandFailed(failure) => Some(failure),
                _ => None,
            },
            _ => None,
        }
    }

    /// Process exit code that best describes this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Git(err) => err.exit_code(),
            _ => 1,
        }
    }
}

/// Exit code for an error that reached the top of the binary.
///
/// Git failures keep git's own code; anything unrecognised maps to 1.
#[must_use]
pub fn exit_code_of(err: &anyhow::Error) -> i32 {
    if let Some(err) = err.downcast_ref::<FrontError>() {
        return err.exit_code();
    }
    err.downcast_ref::<GitError>().map_or(1, GitError::exit_code)
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for FrontError {
                fn from(err: $error) -> Self {
                    FrontError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ConfigError => Config,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Git Errors ---

/// Git validation and execution errors.
///
/// Everything except [`GitError::CommandFailed`] is raised before a process
/// is spawned.
#[derive(Debug, Error)]
pub enum GitError {
    /// Two options that git refuses to combine were both requested.
    #[error("{subcommand}: {first} and {second} are not allowed together")]
    Conflict {
        subcommand: &'static str,
        first: &'static str,
        second: &'static str,
    },

    /// An option was requested without the option it depends on.
    #[error("{subcommand}: {option} requires {requires}")]
    Requires {
        subcommand: &'static str,
        option: &'static str,
        requires: &'static str,
    },

    /// An option carries a value git would reject.
    #[error("{subcommand}: invalid value for {option}: {message}")]
    InvalidValue {
        subcommand: &'static str,
        option: &'static str,
        message: String,
    },

    /// An environment override has a name no process can receive.
    #[error("invalid environment variable name '{name}'")]
    InvalidEnvName { name: String },

    /// Git ran and exited with a non-zero code.
    #[error(transparent)]
    CommandFailed(Box<CommandFailure>),
}

impl GitError {
    /// Exit code for this error: git's own for failed commands, `sysexits`
    /// codes for validation errors.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Conflict { .. } | Self::Requires { .. } => EXIT_USAGE,
            Self::InvalidValue { .. } | Self::InvalidEnvName { .. } => EXIT_DATA_ERR,
            Self::CommandFailed(failure) => failure.exit_code,
        }
    }

    /// Returns true if the error was raised before spawning git.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::CommandFailed(_))
    }
}

/// Inputs and captured outputs of a git invocation that exited non-zero.
#[derive(Debug, Clone)]
pub struct CommandFailure {
    argv: Vec<String>,
    env: EnvOverrides,
    stdout: String,
    stderr: String,
    exit_code: i32,
}

impl CommandFailure {
    #[must_use]
    pub const fn new(
        argv: Vec<String>,
        env: EnvOverrides,
        stdout: String,
        stderr: String,
        exit_code: i32,
    ) -> Self {
        Self {
            argv,
            env,
            stdout,
            stderr,
            exit_code,
        }
    }

    /// Full argv, starting with the program name.
    #[must_use]
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// Environment overrides the command ran with.
    #[must_use]
    pub const fn env(&self) -> &EnvOverrides {
        &self.env
    }

    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

impl fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` exited with code {}",
            self.argv.join(" "),
            self.exit_code
        )?;
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            write!(f, ": {stderr}")?;
        }
        Ok(())
    }
}

impl std::error::Error for CommandFailure {}

impl From<CommandFailure> for GitError {
    fn from(failure: CommandFailure) -> Self {
        Self::CommandFailed(Box::new(failure))
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
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

    /// Failed to feed stdin to the process.
    #[error("failed to write stdin of process '{command}': {source}")]
    StdinFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed while waiting for the process or collecting its output.
    #[error("failed to wait for process '{command}': {source}")]
    WaitFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with a code outside the accepted set.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },
}

#[cfg(test)]
mod tests;
