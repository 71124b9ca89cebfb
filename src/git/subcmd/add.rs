// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git add`.
//!
//! Where the pathspecs come from is a single choice:
//!
//! ```text
//! PathspecSource::Args([..])          git add -- a b
//! PathspecSource::File { path, nul }  git add --pathspec-from-file=path [--pathspec-file-nul]
//! PathspecSource::Stdin { content }   git add --pathspec-from-file=- < content
//! ```
//!
//! so `--pathspec-file-nul` without a file, or positional pathspecs mixed
//! with a pathspec file, can't be expressed.

use std::path::PathBuf;

use bon::Builder;

use super::{SubcommandArgs, push_after_separator, push_flag, push_toggle};
use crate::error::GitError;
use crate::git::rules::{self, Rule, flag_set};

const RULES: &[Rule] = &[
    Rule::Requires("--ignore-missing", "--dry-run"),
    Rule::Conflicts("--pathspec-from-file", "--interactive"),
    Rule::Conflicts("--pathspec-from-file", "--patch"),
    Rule::Conflicts("--pathspec-from-file", "--edit"),
    Rule::Conflicts("--all", "--update"),
];

/// Where `git add` takes its pathspecs from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathspecSource {
    /// Positional pathspecs after `--`.
    Args(Vec<String>),
    /// `--pathspec-from-file=<path>`.
    File { path: PathBuf, nul: bool },
    /// `--pathspec-from-file=-` with `content` written to stdin.
    Stdin { content: String, nul: bool },
}

impl Default for PathspecSource {
    fn default() -> Self {
        Self::Args(Vec::new())
    }
}

impl PathspecSource {
    const fn is_file(&self) -> bool {
        !matches!(self, Self::Args(_))
    }
}

/// `--chmod=(+|-)x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Chmod {
    #[value(name = "+x")]
    Executable,
    #[value(name = "-x")]
    NotExecutable,
}

impl Chmod {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Executable => "+x",
            Self::NotExecutable => "-x",
        }
    }
}

/// Arguments for `git add`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
pub struct AddArgs {
    #[builder(default)]
    pub source: PathspecSource,
    #[builder(default)]
    pub dry_run: bool,
    #[builder(default)]
    pub verbose: bool,
    /// Add ignored files too.
    #[builder(default)]
    pub force: bool,
    #[builder(default)]
    pub interactive: bool,
    #[builder(default)]
    pub patch: bool,
    #[builder(default)]
    pub edit: bool,
    /// `--all` / `--no-all`.
    pub all: Option<bool>,
    /// `--ignore-removal` / `--no-ignore-removal`.
    pub ignore_removal: Option<bool>,
    /// Only stage already tracked files.
    #[builder(default)]
    pub update: bool,
    #[builder(default)]
    pub sparse: bool,
    /// `--intent-to-add`.
    #[builder(default)]
    pub intent_to_add: bool,
    #[builder(default)]
    pub refresh: bool,
    #[builder(default)]
    pub ignore_errors: bool,
    /// Only valid with `dry_run`.
    #[builder(default)]
    pub ignore_missing: bool,
    #[builder(default)]
    pub renormalize: bool,
    pub chmod: Option<Chmod>,
}

impl AddArgs {
    /// Stages the given pathspecs.
    pub fn pathspecs<I, S>(pathspecs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder()
            .source(PathspecSource::Args(
                pathspecs.into_iter().map(Into::into).collect(),
            ))
            .build()
    }

    /// Stages the pathspecs listed in `path`, one per line.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::builder()
            .source(PathspecSource::File {
                path: path.into(),
                nul: false,
            })
            .build()
    }

    /// Stages the pathspecs in `content`, passed on stdin.
    pub fn from_stdin(content: impl Into<String>) -> Self {
        Self::builder()
            .source(PathspecSource::Stdin {
                content: content.into(),
                nul: false,
            })
            .build()
    }

    fn pathspec_optional(&self) -> bool {
        self.all == Some(true) || self.update || self.interactive || self.patch || self.edit
    }
}

impl SubcommandArgs for AddArgs {
    const NAME: &'static str = "add";

    fn validate(&self) -> Result<(), GitError> {
        let present = flag_set([
            (self.dry_run, "--dry-run"),
            (self.ignore_missing, "--ignore-missing"),
            (self.source.is_file(), "--pathspec-from-file"),
            (self.interactive, "--interactive"),
            (self.patch, "--patch"),
            (self.edit, "--edit"),
            (self.all == Some(true), "--all"),
            (self.update, "--update"),
        ]);
        rules::check(Self::NAME, &present, RULES)?;

        match &self.source {
            PathspecSource::Args(pathspecs) => {
                if pathspecs.is_empty() && !self.pathspec_optional() {
                    return Err(GitError::InvalidValue {
                        subcommand: Self::NAME,
                        option: "<pathspec>",
                        message: "nothing specified; pass a pathspec, --all or --update"
                            .to_string(),
                    });
                }
                for pathspec in pathspecs {
                    rules::non_empty(Self::NAME, "<pathspec>", pathspec)?;
                }
            }
            PathspecSource::File { path, .. } => {
                let path = rules::utf8_path(Self::NAME, "--pathspec-from-file", path)?;
                rules::non_empty(Self::NAME, "--pathspec-from-file", path)?;
            }
            PathspecSource::Stdin { .. } => {}
        }
        Ok(())
    }

    fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        push_flag(&mut args, self.dry_run, "--dry-run");
        push_flag(&mut args, self.verbose, "--verbose");
        push_flag(&mut args, self.force, "--force");
        push_flag(&mut args, self.interactive, "--interactive");
        push_flag(&mut args, self.patch, "--patch");
        push_flag(&mut args, self.edit, "--edit");
        push_toggle(&mut args, self.all, "--all", "--no-all");
        push_toggle(
            &mut args,
            self.ignore_removal,
            "--ignore-removal",
            "--no-ignore-removal",
        );
        push_flag(&mut args, self.update, "--update");
        push_flag(&mut args, self.sparse, "--sparse");
        push_flag(&mut args, self.intent_to_add, "--intent-to-add");
        push_flag(&mut args, self.refresh, "--refresh");
        push_flag(&mut args, self.ignore_errors, "--ignore-errors");
        push_flag(&mut args, self.ignore_missing, "--ignore-missing");
        push_flag(&mut args, self.renormalize, "--renormalize");
        if let Some(chmod) = self.chmod {
            args.push(format!("--chmod={}", chmod.as_str()));
        }

        match &self.source {
            PathspecSource::Args(pathspecs) => push_after_separator(&mut args, pathspecs),
            PathspecSource::File { path, nul } => {
                args.push(format!("--pathspec-from-file={}", path.to_string_lossy()));
                push_flag(&mut args, *nul, "--pathspec-file-nul");
            }
            PathspecSource::Stdin { nul, .. } => {
                args.push("--pathspec-from-file=-".to_string());
                push_flag(&mut args, *nul, "--pathspec-file-nul");
            }
        }
        args
    }

    fn stdin(&self) -> Option<String> {
        match &self.source {
            PathspecSource::Stdin { content, .. } => Some(content.clone()),
            _ => None,
        }
    }
}
