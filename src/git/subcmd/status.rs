// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git status`.

use bon::Builder;

use super::{SubcommandArgs, push_after_separator, push_flag, push_joined, push_toggle};
use crate::error::GitError;
use crate::git::rules::{self, Rule, flag_set};

const RULES: &[Rule] = &[
    Rule::Conflicts("--long", "-z"),
    Rule::Conflicts("--no-renames", "--find-renames"),
];

/// Porcelain output version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PorcelainVersion {
    #[default]
    V1,
    V2,
}

/// Output format; git accepts only one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFormat {
    Short,
    Long,
    Porcelain(PorcelainVersion),
}

impl StatusFormat {
    fn as_arg(self) -> &'static str {
        match self {
            Self::Short => "--short",
            Self::Long => "--long",
            Self::Porcelain(PorcelainVersion::V1) => "--porcelain=v1",
            Self::Porcelain(PorcelainVersion::V2) => "--porcelain=v2",
        }
    }
}

/// `--untracked-files=<mode>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum UntrackedFiles {
    No,
    Normal,
    All,
}

impl UntrackedFiles {
    const fn as_str(self) -> &'static str {
        match self {
            Self::No => "no",
            Self::Normal => "normal",
            Self::All => "all",
        }
    }
}

/// `--ignore-submodules=<when>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum IgnoreSubmodules {
    None,
    Untracked,
    Dirty,
    All,
}

impl IgnoreSubmodules {
    const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Untracked => "untracked",
            Self::Dirty => "dirty",
            Self::All => "all",
        }
    }
}

/// `--ignored=<mode>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum IgnoredMode {
    Traditional,
    No,
    Matching,
}

impl IgnoredMode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Traditional => "traditional",
            Self::No => "no",
            Self::Matching => "matching",
        }
    }
}

/// Arguments for `git status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
pub struct StatusArgs {
    pub format: Option<StatusFormat>,
    /// `--branch`: include branch and tracking info.
    #[builder(default)]
    pub branch: bool,
    #[builder(default)]
    pub show_stash: bool,
    /// `-z`: NUL-terminated entries.
    #[builder(default)]
    pub z: bool,
    pub untracked_files: Option<UntrackedFiles>,
    pub ignore_submodules: Option<IgnoreSubmodules>,
    pub ignored: Option<IgnoredMode>,
    /// `--ahead-behind` / `--no-ahead-behind`.
    pub ahead_behind: Option<bool>,
    /// `--renames` / `--no-renames`.
    pub renames: Option<bool>,
    /// `--find-renames=<n>`, similarity percent up to 100.
    pub find_renames: Option<u8>,
    #[builder(default)]
    pub pathspecs: Vec<String>,
}

impl StatusArgs {
    /// `git status --short`.
    #[must_use]
    pub fn short() -> Self {
        Self::builder().format(StatusFormat::Short).build()
    }

    /// `git status --porcelain=<version>`.
    #[must_use]
    pub fn porcelain(version: PorcelainVersion) -> Self {
        Self::builder()
            .format(StatusFormat::Porcelain(version))
            .build()
    }
}

impl SubcommandArgs for StatusArgs {
    const NAME: &'static str = "status";

    fn validate(&self) -> Result<(), GitError> {
        let present = flag_set([
            (self.format == Some(StatusFormat::Long), "--long"),
            (self.z, "-z"),
            (self.renames == Some(false), "--no-renames"),
            (self.find_renames.is_some(), "--find-renames"),
        ]);
        rules::check(Self::NAME, &present, RULES)?;

        if let Some(percent) = self.find_renames {
            rules::in_range(Self::NAME, "--find-renames", u32::from(percent), 0..=100)?;
        }
        for pathspec in &self.pathspecs {
            rules::non_empty(Self::NAME, "<pathspec>", pathspec)?;
        }
        Ok(())
    }

    fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(format) = self.format {
            args.push(format.as_arg().to_string());
        }
        push_flag(&mut args, self.branch, "--branch");
        push_flag(&mut args, self.show_stash, "--show-stash");
        push_flag(&mut args, self.z, "-z");
        push_joined(
            &mut args,
            "--untracked-files",
            self.untracked_files.map(UntrackedFiles::as_str),
        );
        push_joined(
            &mut args,
            "--ignore-submodules",
            self.ignore_submodules.map(IgnoreSubmodules::as_str),
        );
        push_joined(&mut args, "--ignored", self.ignored.map(IgnoredMode::as_str));
        push_toggle(&mut args, self.ahead_behind, "--ahead-behind", "--no-ahead-behind");
        push_toggle(&mut args, self.renames, "--renames", "--no-renames");
        push_joined(&mut args, "--find-renames", self.find_renames);
        push_after_separator(&mut args, &self.pathspecs);
        args
    }
}
