// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git hash-object`.
//!
//! ```text
//! git hash-object [-t <type>] [-w] [--literally]
//!                 [--stdin | --stdin-paths] [--path=<file> | --no-filters]
//!                 [--] [<file>...]
//! ```
//!
//! `--stdin-paths` reads file names from stdin, so it excludes both file
//! arguments and `--stdin`. Output is one object id per line, stdin first.

use std::fmt;
use std::path::PathBuf;

use bon::Builder;

use super::{SubcommandArgs, push_after_separator, push_flag};
use crate::error::GitError;
use crate::git::rules::{self, Rule, flag_set};

const RULES: &[Rule] = &[
    Rule::Conflicts("--stdin-paths", "--stdin"),
    Rule::Conflicts("--stdin-paths", "<file>"),
    Rule::Conflicts("--stdin-paths", "--path"),
    Rule::Conflicts("--path", "--no-filters"),
];

/// Object type for `-t`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ObjectType {
    #[default]
    Blob,
    Tree,
    Commit,
    Tag,
}

impl ObjectType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blob => "blob",
            Self::Tree => "tree",
            Self::Commit => "commit",
            Self::Tag => "tag",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arguments for `git hash-object`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
pub struct HashObjectArgs {
    /// `-t <type>`.
    pub object_type: Option<ObjectType>,
    /// `-w`: write the object into the database.
    #[builder(default)]
    pub write: bool,
    #[builder(default)]
    pub literally: bool,
    /// Content hashed via `--stdin`.
    #[builder(into)]
    pub stdin: Option<String>,
    /// Paths fed to `--stdin-paths`, one per line.
    pub stdin_paths: Option<Vec<PathBuf>>,
    /// `--path=<file>`: apply filters as if the content lived there.
    #[builder(into)]
    pub path: Option<PathBuf>,
    /// `--no-filters`: hash the bytes as they are.
    #[builder(default)]
    pub no_filters: bool,
    /// Files to hash.
    #[builder(default)]
    pub files: Vec<PathBuf>,
}

impl HashObjectArgs {
    /// Hashes `content` as a blob read from stdin.
    pub fn content(content: impl Into<String>) -> Self {
        Self::builder().stdin(content).build()
    }

    /// Hashes the given files.
    pub fn files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::builder()
            .files(files.into_iter().map(Into::into).collect())
            .build()
    }
}

impl SubcommandArgs for HashObjectArgs {
    const NAME: &'static str = "hash-object";

    fn validate(&self) -> Result<(), GitError> {
        let present = flag_set([
            (self.stdin.is_some(), "--stdin"),
            (self.stdin_paths.is_some(), "--stdin-paths"),
            (!self.files.is_empty(), "<file>"),
            (self.path.is_some(), "--path"),
            (self.no_filters, "--no-filters"),
        ]);
        rules::check(Self::NAME, &present, RULES)?;

        if let Some(path) = &self.path {
            let path = rules::utf8_path(Self::NAME, "--path", path)?;
            rules::non_empty(Self::NAME, "--path", path)?;
        }
        for file in self.files.iter().chain(self.stdin_paths.iter().flatten()) {
            let file = rules::utf8_path(Self::NAME, "<file>", file)?;
            rules::non_empty(Self::NAME, "<file>", file)?;
        }
        Ok(())
    }

    fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(object_type) = self.object_type {
            args.push("-t".to_string());
            args.push(object_type.as_str().to_string());
        }
        push_flag(&mut args, self.write, "-w");
        push_flag(&mut args, self.literally, "--literally");
        push_flag(&mut args, self.stdin.is_some(), "--stdin");
        push_flag(&mut args, self.stdin_paths.is_some(), "--stdin-paths");
        if let Some(path) = &self.path {
            args.push(format!("--path={}", path.to_string_lossy()));
        }
        push_flag(&mut args, self.no_filters, "--no-filters");

        let files: Vec<String> = self
            .files
            .iter()
            .map(|f| f.to_string_lossy().into_owned())
            .collect();
        push_after_separator(&mut args, &files);
        args
    }

    fn stdin(&self) -> Option<String> {
        if let Some(content) = &self.stdin {
            return Some(content.clone());
        }
        self.stdin_paths.as_ref().map(|paths| {
            paths
                .iter()
                .map(|p| format!("{}\n", p.to_string_lossy()))
                .collect()
        })
    }
}
