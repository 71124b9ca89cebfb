// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `Git` façade.
//!
//! ```text
//! Git { opts, envs, root_dir, runner }
//!   |  with_opts / with_envs  -> new Git, receiver untouched
//!   v
//! run(&args)
//!   1. opts.validate()  envs.validate()  args.validate()   (no spawn on error)
//!   2. argv = main args + NAME + args.to_args()
//!   3. runner.run(Invocation)
//!   4. exit != 0  -> GitError::CommandFailed { argv, env, stdout, stderr, code }
//!      exit == 0  -> stdout with trailing whitespace trimmed
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use super::backend::{GitRunner, Invocation, ShellRunner};
use super::env::GitEnvVar;
use super::opts::GitOpts;
use super::subcmd::{
    AddArgs, CopyBranch, CreateBranch, DeleteBranch, EditDescription, HashObjectArgs,
    ListBranches, LsTreeArgs, RenameBranch, SetUpstream, StatusArgs, SubcommandArgs,
    UnsetUpstream, VersionArgs,
};
use crate::core::env::overrides::EnvOverrides;
use crate::error::{CommandFailure, FrontResult, GitError};

/// Typed entry point for running git.
///
/// Cloning is cheap; the runner is shared.
#[derive(Debug)]
pub struct Git<R: GitRunner = ShellRunner> {
    runner: Arc<R>,
    root_dir: Option<PathBuf>,
    opts: GitOpts,
    envs: EnvOverrides,
}

impl<R: GitRunner> Clone for Git<R> {
    fn clone(&self) -> Self {
        Self {
            runner: Arc::clone(&self.runner),
            root_dir: self.root_dir.clone(),
            opts: self.opts.clone(),
            envs: self.envs.clone(),
        }
    }
}

impl Git<ShellRunner> {
    /// Runs `git` from PATH in the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_runner(ShellRunner::new())
    }
}

impl Default for Git<ShellRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: GitRunner> Git<R> {
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner: Arc::new(runner),
            root_dir: None,
            opts: GitOpts::default(),
            envs: EnvOverrides::new(),
        }
    }

    /// Runs every command in `dir`.
    #[must_use]
    pub fn root_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.root_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn dir(&self) -> Option<&Path> {
        self.root_dir.as_deref()
    }

    #[must_use]
    pub const fn opts(&self) -> &GitOpts {
        &self.opts
    }

    #[must_use]
    pub const fn envs(&self) -> &EnvOverrides {
        &self.envs
    }

    #[must_use]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Returns a copy with main options changed by `edit`.
    ///
    /// Environment overrides are carried over untouched.
    #[must_use]
    pub fn with_opts(&self, edit: impl FnOnce(&mut GitOpts)) -> Self {
        let mut git = self.clone();
        edit(&mut git.opts);
        git
    }

    /// Returns a copy with environment overrides changed by `edit`.
    ///
    /// Main options are carried over untouched.
    #[must_use]
    pub fn with_envs(&self, edit: impl FnOnce(&mut EnvOverrides)) -> Self {
        let mut git = self.clone();
        edit(&mut git.envs);
        git
    }

    /// Returns a copy that never waits for a credential prompt.
    #[must_use]
    pub fn non_interactive(&self) -> Self {
        self.with_envs(|envs| {
            envs.set(GitEnvVar::GitTerminalPrompt, 0)
                .set(GitEnvVar::GcmInteractive, "never");
        })
    }

    /// Main options as argv, without the leading program name.
    #[must_use]
    pub fn build_main_args(&self) -> Vec<String> {
        self.opts.build_main_args()
    }

    /// Validates everything and returns the argv `run` would use.
    ///
    /// # Errors
    ///
    /// Returns the first validation error, exactly as `run` would.
    pub fn argv<A: SubcommandArgs>(&self, args: &A) -> Result<Vec<String>, GitError> {
        self.validate_common()?;
        args.validate().inspect_err(|e| {
            debug!(subcommand = A::NAME, error = %e, "rejected arguments");
        })?;

        let mut argv = self.build_main_args();
        argv.push(A::NAME.to_string());
        argv.extend(args.to_args());
        Ok(argv)
    }

    /// Validates, runs the subcommand and returns its stdout.
    ///
    /// # Errors
    ///
    /// Returns a validation [`GitError`] without spawning anything,
    /// [`GitError::CommandFailed`] if git exits non-zero, or a process
    /// error if git cannot be started.
    pub fn run<A: SubcommandArgs>(&self, args: &A) -> FrontResult<String> {
        let argv = self.argv(args)?;
        self.invoke(argv, args.stdin())
    }

    fn validate_common(&self) -> Result<(), GitError> {
        self.opts
            .validate()
            .and_then(|()| self.envs.validate())
            .inspect_err(|e| debug!(error = %e, "rejected main options"))
    }

    fn invoke(&self, argv: Vec<String>, stdin: Option<String>) -> FrontResult<String> {
        let invocation = Invocation {
            argv,
            env: self.envs.clone(),
            cwd: self.root_dir.clone(),
            stdin,
        };
        let output = self.runner.run(&invocation)?;
        if !output.success() {
            let (code, stdout, stderr) = output.into_parts();
            let mut full = Vec::with_capacity(invocation.argv.len() + 1);
            full.push(self.runner.program().to_string());
            full.extend(invocation.argv);
            debug!(exit_code = code, "git failed");
            return Err(
                GitError::from(CommandFailure::new(full, invocation.env, stdout, stderr, code))
                    .into(),
            );
        }
        let (_, mut stdout, _) = output.into_parts();
        stdout.truncate(stdout.trim_end().len());
        Ok(stdout)
    }

    /// Validates main options and returns `<main options> <flag>`, for
    /// flags such as `--exec-path` that print and exit.
    ///
    /// # Errors
    ///
    /// Returns the first validation error of the main options or env.
    pub fn query_argv(&self, flag: &str) -> Result<Vec<String>, GitError> {
        self.validate_common()?;
        let mut argv = self.build_main_args();
        argv.push(flag.to_string());
        Ok(argv)
    }

    fn query_main(&self, flag: &str) -> FrontResult<String> {
        let argv = self.query_argv(flag)?;
        self.invoke(argv, None)
    }

    // --- queries ---

    /// `git version`.
    ///
    /// # Errors
    ///
    /// See [`Git::run`].
    pub fn version(&self) -> FrontResult<String> {
        self.run(&VersionArgs::default())
    }

    /// `git version` with explicit arguments.
    ///
    /// # Errors
    ///
    /// See [`Git::run`].
    pub fn version_with(&self, args: &VersionArgs) -> FrontResult<String> {
        self.run(args)
    }

    /// `git --exec-path`: where git keeps its helper programs.
    ///
    /// # Errors
    ///
    /// See [`Git::run`].
    pub fn exec_path(&self) -> FrontResult<PathBuf> {
        self.query_main("--exec-path").map(PathBuf::from)
    }

    /// `git --html-path`.
    ///
    /// # Errors
    ///
    /// See [`Git::run`].
    pub fn html_path(&self) -> FrontResult<PathBuf> {
        self.query_main("--html-path").map(PathBuf::from)
    }

    /// `git --info-path`.
    ///
    /// # Errors
    ///
    /// See [`Git::run`].
    pub fn info_path(&self) -> FrontResult<PathBuf> {
        self.query_main("--info-path").map(PathBuf::from)
    }

    /// `git --man-path`.
    ///
    /// # Errors
    ///
    /// See [`Git::run`].
    pub fn man_path(&self) -> FrontResult<PathBuf> {
        self.query_main("--man-path").map(PathBuf::from)
    }

    // --- subcommands ---

    /// `git ls-tree`.
    ///
    /// # Errors
    ///
    /// See [`Git::run`].
    pub fn ls_tree(&self, args: &LsTreeArgs) -> FrontResult<String> {
        self.run(args)
    }

    /// `git add`.
    ///
    /// # Errors
    ///
    /// See [`Git::run`].
    pub fn add(&self, args: &AddArgs) -> FrontResult<String> {
        self.run(args)
    }

    /// `git hash-object`, one object id per hashed input.
    ///
    /// # Errors
    ///
    /// See [`Git::run`].
    pub fn hash_object(&self, args: &HashObjectArgs) -> FrontResult<Vec<String>> {
        let stdout = self.run(args)?;
        Ok(stdout.lines().map(str::to_string).collect())
    }

    /// `git status`.
    ///
    /// # Errors
    ///
    /// See [`Git::run`].
    pub fn status(&self, args: &StatusArgs) -> FrontResult<String> {
        self.run(args)
    }

    // --- branch ---

    /// # Errors
    ///
    /// See [`Git::run`].
    pub fn create_branch(&self, args: &CreateBranch) -> FrontResult<String> {
        self.run(args)
    }

    /// # Errors
    ///
    /// See [`Git::run`].
    pub fn set_upstream(&self, args: &SetUpstream) -> FrontResult<String> {
        self.run(args)
    }

    /// # Errors
    ///
    /// See [`Git::run`].
    pub fn unset_upstream(&self, args: &UnsetUpstream) -> FrontResult<String> {
        self.run(args)
    }

    /// # Errors
    ///
    /// See [`Git::run`].
    pub fn rename_branch(&self, args: &RenameBranch) -> FrontResult<String> {
        self.run(args)
    }

    /// # Errors
    ///
    /// See [`Git::run`].
    pub fn copy_branch(&self, args: &CopyBranch) -> FrontResult<String> {
        self.run(args)
    }

    /// # Errors
    ///
    /// See [`Git::run`].
    pub fn delete_branch(&self, args: &DeleteBranch) -> FrontResult<String> {
        self.run(args)
    }

    /// Runs `GIT_EDITOR` on the branch description; set it through
    /// [`Git::with_envs`] when no terminal is attached.
    ///
    /// # Errors
    ///
    /// See [`Git::run`].
    pub fn edit_description(&self, args: &EditDescription) -> FrontResult<String> {
        self.run(args)
    }

    /// # Errors
    ///
    /// See [`Git::run`].
    pub fn list_branches(&self, args: &ListBranches) -> FrontResult<String> {
        self.run(args)
    }
}
