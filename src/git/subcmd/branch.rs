// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git branch` operations.
//!
//! `git branch` multiplexes several unrelated operations behind its flags,
//! so each one gets its own record:
//!
//! ```text
//! CreateBranch     git branch [-f] [--[no-]track] <name> [<start-point>]
//! SetUpstream      git branch --set-upstream-to=<upstream> [<branch>]
//! UnsetUpstream    git branch --unset-upstream [<branch>]
//! RenameBranch     git branch (-m | -M) [<old>] <new>
//! CopyBranch       git branch (-c | -C) [<old>] <new>
//! DeleteBranch     git branch (-d | -D) [-r] <branch>...
//! EditDescription  git branch --edit-description [<branch>]
//! ListBranches     git branch [<list options>] --list [<pattern>...]
//! ```

use bon::Builder;

use super::{SubcommandArgs, push_flag, push_joined, push_toggle};
use crate::error::GitError;
use crate::git::rules::{self, Rule, flag_set};

const BRANCH: &str = "branch";

const LIST_RULES: &[Rule] = &[
    Rule::Conflicts("--verbose", "--column"),
    Rule::Conflicts("--abbrev", "--no-abbrev"),
    Rule::Conflicts("--show-current", "--list"),
];

/// Positional names are neither empty nor option-shaped; `git branch` takes
/// no `--` before them.
fn check_name(option: &'static str, value: &str) -> Result<(), GitError> {
    rules::non_empty(BRANCH, option, value)?;
    rules::not_option(BRANCH, option, value)
}

fn optional_name(option: &'static str, value: Option<&String>) -> Result<(), GitError> {
    value.map_or(Ok(()), |v| check_name(option, v))
}

/// Creates `name`, optionally at `start_point`.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct CreateBranch {
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub start_point: Option<String>,
    /// Reset `name` if it already exists.
    #[builder(default)]
    pub force: bool,
    /// `--track` / `--no-track`.
    pub track: Option<bool>,
    /// `--recurse-submodules` / `--no-recurse-submodules`.
    pub recurse_submodules: Option<bool>,
}

impl CreateBranch {
    pub fn new(name: impl Into<String>) -> Self {
        Self::builder().name(name).build()
    }
}

impl SubcommandArgs for CreateBranch {
    const NAME: &'static str = BRANCH;

    fn validate(&self) -> Result<(), GitError> {
        check_name("<branchname>", &self.name)?;
        optional_name("<start-point>", self.start_point.as_ref())
    }

    fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        push_flag(&mut args, self.force, "--force");
        push_toggle(&mut args, self.track, "--track", "--no-track");
        push_toggle(
            &mut args,
            self.recurse_submodules,
            "--recurse-submodules",
            "--no-recurse-submodules",
        );
        args.push(self.name.clone());
        args.extend(self.start_point.iter().cloned());
        args
    }
}

/// Points `branch` (default: current) at `upstream`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetUpstream {
    pub upstream: String,
    pub branch: Option<String>,
}

impl SetUpstream {
    pub fn new(upstream: impl Into<String>) -> Self {
        Self {
            upstream: upstream.into(),
            branch: None,
        }
    }

    #[must_use]
    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }
}

impl SubcommandArgs for SetUpstream {
    const NAME: &'static str = BRANCH;

    fn validate(&self) -> Result<(), GitError> {
        rules::non_empty(BRANCH, "--set-upstream-to", &self.upstream)?;
        optional_name("<branchname>", self.branch.as_ref())
    }

    fn to_args(&self) -> Vec<String> {
        let mut args = vec![format!("--set-upstream-to={}", self.upstream)];
        args.extend(self.branch.iter().cloned());
        args
    }
}

/// Removes the upstream of `branch` (default: current).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnsetUpstream {
    pub branch: Option<String>,
}

impl SubcommandArgs for UnsetUpstream {
    const NAME: &'static str = BRANCH;

    fn validate(&self) -> Result<(), GitError> {
        optional_name("<branchname>", self.branch.as_ref())
    }

    fn to_args(&self) -> Vec<String> {
        let mut args = vec!["--unset-upstream".to_string()];
        args.extend(self.branch.iter().cloned());
        args
    }
}

fn move_or_copy_args(
    (safe, forced): (&str, &str),
    force: bool,
    old: Option<&String>,
    new: &str,
) -> Vec<String> {
    let mut args = vec![if force { forced } else { safe }.to_string()];
    args.extend(old.cloned());
    args.push(new.to_string());
    args
}

/// Renames `old` (default: current) to `new`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameBranch {
    pub old: Option<String>,
    pub new: String,
    /// `-M` instead of `-m`: overwrite `new` if it exists.
    pub force: bool,
}

impl RenameBranch {
    pub fn new(new: impl Into<String>) -> Self {
        Self {
            old: None,
            new: new.into(),
            force: false,
        }
    }

    #[must_use]
    pub fn old(mut self, old: impl Into<String>) -> Self {
        self.old = Some(old.into());
        self
    }

    #[must_use]
    pub const fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

impl SubcommandArgs for RenameBranch {
    const NAME: &'static str = BRANCH;

    fn validate(&self) -> Result<(), GitError> {
        optional_name("<oldbranch>", self.old.as_ref())?;
        check_name("<newbranch>", &self.new)
    }

    fn to_args(&self) -> Vec<String> {
        move_or_copy_args(("-m", "-M"), self.force, self.old.as_ref(), &self.new)
    }
}

/// Copies `old` (default: current) to `new`, with its config and reflog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyBranch {
    pub old: Option<String>,
    pub new: String,
    /// `-C` instead of `-c`.
    pub force: bool,
}

impl CopyBranch {
    pub fn new(new: impl Into<String>) -> Self {
        Self {
            old: None,
            new: new.into(),
            force: false,
        }
    }

    #[must_use]
    pub fn old(mut self, old: impl Into<String>) -> Self {
        self.old = Some(old.into());
        self
    }

    #[must_use]
    pub const fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

impl SubcommandArgs for CopyBranch {
    const NAME: &'static str = BRANCH;

    fn validate(&self) -> Result<(), GitError> {
        optional_name("<oldbranch>", self.old.as_ref())?;
        check_name("<newbranch>", &self.new)
    }

    fn to_args(&self) -> Vec<String> {
        move_or_copy_args(("-c", "-C"), self.force, self.old.as_ref(), &self.new)
    }
}

/// Deletes one or more branches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteBranch {
    pub branches: Vec<String>,
    /// `-D` instead of `-d`: delete even if unmerged.
    pub force: bool,
    /// `-r`: the names are remote-tracking branches.
    pub remote: bool,
}

impl DeleteBranch {
    pub fn new<I, S>(branches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            branches: branches.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    #[must_use]
    pub const fn remote(mut self, remote: bool) -> Self {
        self.remote = remote;
        self
    }
}

impl SubcommandArgs for DeleteBranch {
    const NAME: &'static str = BRANCH;

    fn validate(&self) -> Result<(), GitError> {
        if self.branches.is_empty() {
            return Err(GitError::InvalidValue {
                subcommand: BRANCH,
                option: "<branchname>",
                message: "at least one branch is required".to_string(),
            });
        }
        for branch in &self.branches {
            check_name("<branchname>", branch)?;
        }
        Ok(())
    }

    fn to_args(&self) -> Vec<String> {
        let mut args = vec![if self.force { "-D" } else { "-d" }.to_string()];
        push_flag(&mut args, self.remote, "-r");
        args.extend(self.branches.iter().cloned());
        args
    }
}

/// Opens `GIT_EDITOR` on the description of `branch` (default: current).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDescription {
    pub branch: Option<String>,
}

impl SubcommandArgs for EditDescription {
    const NAME: &'static str = BRANCH;

    fn validate(&self) -> Result<(), GitError> {
        optional_name("<branchname>", self.branch.as_ref())
    }

    fn to_args(&self) -> Vec<String> {
        let mut args = vec!["--edit-description".to_string()];
        args.extend(self.branch.iter().cloned());
        args
    }
}

/// `--color[=<when>]` / `--no-color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorWhen {
    Always,
    Never,
    Auto,
    /// `--no-color`.
    Off,
}

/// `-v` or `-vv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Verbose,
    VeryVerbose,
}

/// `--column[=<options>]` / `--no-column`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnMode {
    Default,
    Layout(String),
    Off,
}

/// Lists branches, optionally filtered by `patterns`.
///
/// `--list` is always emitted when patterns are given, since bare
/// `git branch <name>` would create a branch instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
pub struct ListBranches {
    #[builder(default)]
    pub patterns: Vec<String>,
    pub color: Option<ColorWhen>,
    /// `--show-current`: print only the checked-out branch.
    #[builder(default)]
    pub show_current: bool,
    pub verbose: Option<Verbosity>,
    pub column: Option<ColumnMode>,
    /// `--abbrev=<n>`, 0 to 40.
    pub abbrev: Option<u8>,
    #[builder(default)]
    pub no_abbrev: bool,
    /// `--sort=<key>`, repeatable; the last key is the primary one.
    #[builder(default)]
    pub sort: Vec<String>,
    #[builder(into)]
    pub merged: Option<String>,
    #[builder(into)]
    pub no_merged: Option<String>,
    #[builder(into)]
    pub contains: Option<String>,
    #[builder(into)]
    pub no_contains: Option<String>,
    #[builder(into)]
    pub points_at: Option<String>,
    #[builder(into)]
    pub format: Option<String>,
    #[builder(default)]
    pub remotes: bool,
    #[builder(default)]
    pub all: bool,
    /// `--list` without patterns.
    #[builder(default)]
    pub list_only: bool,
    #[builder(default)]
    pub ignore_case: bool,
    #[builder(default)]
    pub omit_empty: bool,
}

impl ListBranches {
    fn lists(&self) -> bool {
        self.list_only || !self.patterns.is_empty()
    }
}

impl SubcommandArgs for ListBranches {
    const NAME: &'static str = BRANCH;

    fn validate(&self) -> Result<(), GitError> {
        let present = flag_set([
            (self.verbose.is_some(), "--verbose"),
            (
                matches!(self.column, Some(ColumnMode::Default | ColumnMode::Layout(_))),
                "--column",
            ),
            (self.abbrev.is_some(), "--abbrev"),
            (self.no_abbrev, "--no-abbrev"),
            (self.show_current, "--show-current"),
            (self.lists(), "--list"),
        ]);
        rules::check(BRANCH, &present, LIST_RULES)?;

        if let Some(abbrev) = self.abbrev {
            rules::in_range(BRANCH, "--abbrev", u32::from(abbrev), 0..=40)?;
        }
        if let Some(ColumnMode::Layout(layout)) = &self.column {
            rules::non_empty(BRANCH, "--column", layout)?;
        }
        for key in &self.sort {
            rules::non_empty(BRANCH, "--sort", key)?;
        }
        for (option, value) in [
            ("--merged", &self.merged),
            ("--no-merged", &self.no_merged),
            ("--contains", &self.contains),
            ("--no-contains", &self.no_contains),
            ("--points-at", &self.points_at),
        ] {
            if let Some(value) = value {
                rules::non_empty(BRANCH, option, value)?;
            }
        }
        for pattern in &self.patterns {
            check_name("<pattern>", pattern)?;
        }
        Ok(())
    }

    fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        match self.color {
            Some(ColorWhen::Always) => args.push("--color=always".to_string()),
            Some(ColorWhen::Never) => args.push("--color=never".to_string()),
            Some(ColorWhen::Auto) => args.push("--color=auto".to_string()),
            Some(ColorWhen::Off) => args.push("--no-color".to_string()),
            None => {}
        }
        push_flag(&mut args, self.show_current, "--show-current");
        match self.verbose {
            Some(Verbosity::Verbose) => args.push("-v".to_string()),
            Some(Verbosity::VeryVerbose) => args.push("-vv".to_string()),
            None => {}
        }
        match &self.column {
            Some(ColumnMode::Default) => args.push("--column".to_string()),
            Some(ColumnMode::Layout(layout)) => args.push(format!("--column={layout}")),
            Some(ColumnMode::Off) => args.push("--no-column".to_string()),
            None => {}
        }
        push_joined(&mut args, "--abbrev", self.abbrev);
        push_flag(&mut args, self.no_abbrev, "--no-abbrev");
        for key in &self.sort {
            args.push(format!("--sort={key}"));
        }
        push_joined(&mut args, "--merged", self.merged.as_deref());
        push_joined(&mut args, "--no-merged", self.no_merged.as_deref());
        push_joined(&mut args, "--contains", self.contains.as_deref());
        push_joined(&mut args, "--no-contains", self.no_contains.as_deref());
        push_joined(&mut args, "--points-at", self.points_at.as_deref());
        push_joined(&mut args, "--format", self.format.as_deref());
        push_flag(&mut args, self.remotes, "--remotes");
        push_flag(&mut args, self.all, "--all");
        push_flag(&mut args, self.ignore_case, "--ignore-case");
        push_flag(&mut args, self.omit_empty, "--omit-empty");
        push_flag(&mut args, self.lists(), "--list");
        args.extend(self.patterns.iter().cloned());
        args
    }
}
