// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run()
//!   |
//!   v
//! build_command()   args, cwd, env overlay, piped stdio
//!   |
//!   v
//! spawn() --> stdin writer thread (if stdin set)
//!   |
//!   v
//! wait_with_output()
//!   |
//!   v
//! exit code 0, or ALLOW_FAILURE --> ProcessOutput
//! otherwise                     --> ProcessError::NonZeroExit
//! ```

use std::io::{self, Write as _};
use std::process::{Command, ExitStatus, Stdio};
use std::thread::JoinHandle;

use tracing::{debug, error, trace};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
use crate::core::env::types::EnvValue;
use crate::error::{FrontResult, ProcessError};

impl ProcessBuilder {
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Command line for logs and errors; arguments with spaces are quoted.
    fn command_line(&self) -> String {
        std::iter::once(self.program().display().to_string())
            .chain(self.args_slice().iter().map(|arg| {
                if arg.is_empty() || arg.contains(' ') {
                    format!("\"{arg}\"")
                } else {
                    arg.clone()
                }
            }))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Spawns the process and waits for it, capturing stdout and stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Spawning the child process fails.
    /// - Writing stdin or collecting output fails.
    /// - The process exits non-zero and `ALLOW_FAILURE` is not set.
    pub fn run(self) -> FrontResult<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut child = self
            .build_command()
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;
        trace!(process = %name, pid = child.id(), "spawned");

        let writer = match (self.stdin_content(), child.stdin.take()) {
            (Some(content), Some(pipe)) => Some(spawn_stdin_writer(pipe, content.to_owned())),
            _ => None,
        };

        let raw = child
            .wait_with_output()
            .map_err(|source| ProcessError::WaitFailed {
                command: cmd_line.clone(),
                source,
            })?;

        if let Some(writer) = writer {
            join_stdin_writer(writer).map_err(|source| ProcessError::StdinFailed {
                command: cmd_line.clone(),
                source,
            })?;
        }

        let exit_code = exit_code_of(raw.status);
        let log = self.process_flags().contains(ProcessFlags::LOG_OUTPUT);
        let stdout = decode(&name, "stdout", &raw.stdout, log);
        let stderr = decode(&name, "stderr", &raw.stderr, log);
        let output = ProcessOutput::new(exit_code, stdout, stderr);

        if !output.success() && !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE) {
            if !output.stderr().is_empty() {
                error!(process = %name, stderr = %output.stderr(), "process error output");
            }
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code: exit_code,
            }
            .into());
        }

        trace!(process = %name, exit_code, "completed");
        Ok(output)
    }

    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        for (key, value) in self.env_overlay().iter() {
            match value {
                EnvValue::Set(value) => {
                    command.env(key, value);
                }
                EnvValue::Removed => {
                    command.env_remove(key);
                }
            }
        }

        command.stdin(if self.stdin_content().is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        });
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());
        command
    }
}

/// Feeds stdin from its own thread so a child blocked on a full stdout pipe
/// cannot stall the writer.
fn spawn_stdin_writer(
    mut pipe: std::process::ChildStdin,
    content: String,
) -> JoinHandle<io::Result<()>> {
    std::thread::spawn(move || {
        pipe.write_all(content.as_bytes())?;
        pipe.flush()
    })
}

fn join_stdin_writer(writer: JoinHandle<io::Result<()>>) -> io::Result<()> {
    match writer.join() {
        // child exited without draining stdin
        Ok(Err(e)) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Ok(result) => result,
        Err(_) => Err(io::Error::other("stdin writer thread panicked")),
    }
}

#[cfg(unix)]
fn exit_code_of(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt as _;
    status
        .code()
        .or_else(|| status.signal().map(|sig| 128 + sig))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

fn decode(process: &str, stream: &'static str, bytes: &[u8], log: bool) -> String {
    let text = String::from_utf8_lossy(bytes).into_owned();
    if log {
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            trace!(process = %process, stream, "{line}");
        }
    }
    text
}
