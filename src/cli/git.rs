// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the single-operation git commands.
//!
//! # Commands
//!
//! ```text
//! version [--build-options]
//! path {exec|html|info|man}
//! ls-tree [-d -r -t -l -z ...] <tree-ish> [path..]
//! add [-n -v -f -A -u ...] [--pathspec-from-file F] [pathspec..]
//! hash-object [-t T -w --stdin --stdin-paths ...] [file..]
//! status [-s|--long|--porcelain[=v]] [-b -z -u[=mode] ...] [pathspec..]
//! ```
//!
//! Flags git documents as incompatible are accepted here and rejected by
//! the git layer, which reports them with a usage exit code.

use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::git::subcmd::{
    AddArgs, Chmod, HashObjectArgs, IgnoreSubmodules, IgnoredMode, LsTreeArgs, ObjectType,
    PathspecSource, PorcelainVersion, StatusArgs, StatusFormat, UntrackedFiles, VersionArgs,
};

/// Arguments for `version`.
#[derive(Debug, Clone, Default, Args)]
pub struct VersionCmd {
    /// Also print how git was built.
    #[arg(long)]
    pub build_options: bool,
}

impl From<&VersionCmd> for VersionArgs {
    fn from(cmd: &VersionCmd) -> Self {
        Self {
            build_options: cmd.build_options,
        }
    }
}

/// Which installation path `path` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PathKind {
    /// `--exec-path`: helper programs.
    Exec,
    /// `--html-path`: HTML documentation.
    Html,
    /// `--info-path`: info pages.
    Info,
    /// `--man-path`: manual pages.
    Man,
}

/// Arguments for `path`.
#[derive(Debug, Clone, Args)]
pub struct PathCmd {
    #[arg(value_enum)]
    pub kind: PathKind,
}

/// Arguments for `ls-tree`.
#[derive(Debug, Clone, Args)]
pub struct LsTreeCmd {
    /// Show only the named tree entry itself, not its children.
    #[arg(short = 'd')]
    pub dirs_only: bool,
    /// Recurse into sub-trees.
    #[arg(short = 'r')]
    pub recursive: bool,
    /// Show tree entries even when recursing.
    #[arg(short = 't')]
    pub show_trees: bool,
    /// Show object size of blobs.
    #[arg(short = 'l', long)]
    pub long: bool,
    /// NUL line termination.
    #[arg(short = 'z')]
    pub z: bool,
    #[arg(long)]
    pub name_only: bool,
    #[arg(long)]
    pub name_status: bool,
    #[arg(long)]
    pub object_only: bool,
    #[arg(long)]
    pub full_name: bool,
    #[arg(long)]
    pub full_tree: bool,
    /// Minimum object name length (0-40).
    #[arg(long, value_name = "N")]
    pub abbrev: Option<u8>,
    /// Custom line format.
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
    #[arg(value_name = "TREE-ISH")]
    pub tree_ish: String,
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

impl From<&LsTreeCmd> for LsTreeArgs {
    fn from(cmd: &LsTreeCmd) -> Self {
        Self {
            tree_ish: cmd.tree_ish.clone(),
            dirs_only: cmd.dirs_only,
            recursive: cmd.recursive,
            show_trees: cmd.show_trees,
            long: cmd.long,
            z: cmd.z,
            name_only: cmd.name_only,
            name_status: cmd.name_status,
            object_only: cmd.object_only,
            full_name: cmd.full_name,
            full_tree: cmd.full_tree,
            abbrev: cmd.abbrev,
            format: cmd.format.clone(),
            paths: cmd.paths.clone(),
        }
    }
}

/// Arguments for `add`.
#[derive(Debug, Clone, Args)]
pub struct AddCmd {
    #[arg(short = 'n', long)]
    pub dry_run: bool,
    #[arg(short = 'v', long)]
    pub verbose: bool,
    #[arg(short = 'f', long)]
    pub force: bool,
    #[arg(short = 'i', long)]
    pub interactive: bool,
    #[arg(short = 'p', long)]
    pub patch: bool,
    #[arg(short = 'e', long)]
    pub edit: bool,
    /// Stage all changes, including removals.
    #[arg(short = 'A', long, overrides_with = "no_all")]
    pub all: bool,
    #[arg(long, overrides_with = "all")]
    pub no_all: bool,
    #[arg(long, overrides_with = "no_ignore_removal")]
    pub ignore_removal: bool,
    #[arg(long, overrides_with = "ignore_removal")]
    pub no_ignore_removal: bool,
    /// Stage changes to tracked files only.
    #[arg(short = 'u', long)]
    pub update: bool,
    #[arg(long)]
    pub sparse: bool,
    #[arg(short = 'N', long)]
    pub intent_to_add: bool,
    #[arg(long)]
    pub refresh: bool,
    #[arg(long)]
    pub ignore_errors: bool,
    #[arg(long)]
    pub ignore_missing: bool,
    #[arg(long)]
    pub renormalize: bool,
    #[arg(long, value_enum, allow_hyphen_values = true)]
    pub chmod: Option<Chmod>,
    /// Read pathspecs from FILE; `-` reads them from stdin.
    #[arg(long, value_name = "FILE", conflicts_with = "pathspecs")]
    pub pathspec_from_file: Option<PathBuf>,
    /// Pathspecs in the file are NUL separated.
    #[arg(long, requires = "pathspec_from_file")]
    pub pathspec_file_nul: bool,
    #[arg(value_name = "PATHSPEC")]
    pub pathspecs: Vec<String>,
}

impl AddCmd {
    /// Builds the git record; `--pathspec-from-file=-` drains `stdin`.
    ///
    /// # Errors
    ///
    /// Returns an error if `stdin` cannot be read.
    pub fn to_args(&self, stdin: impl Read) -> io::Result<AddArgs> {
        let source = match &self.pathspec_from_file {
            Some(path) if path.as_os_str() == "-" => PathspecSource::Stdin {
                content: read_all(stdin)?,
                nul: self.pathspec_file_nul,
            },
            Some(path) => PathspecSource::File {
                path: path.clone(),
                nul: self.pathspec_file_nul,
            },
            None => PathspecSource::Args(self.pathspecs.clone()),
        };
        Ok(AddArgs {
            source,
            dry_run: self.dry_run,
            verbose: self.verbose,
            force: self.force,
            interactive: self.interactive,
            patch: self.patch,
            edit: self.edit,
            all: toggle(self.all, self.no_all),
            ignore_removal: toggle(self.ignore_removal, self.no_ignore_removal),
            update: self.update,
            sparse: self.sparse,
            intent_to_add: self.intent_to_add,
            refresh: self.refresh,
            ignore_errors: self.ignore_errors,
            ignore_missing: self.ignore_missing,
            renormalize: self.renormalize,
            chmod: self.chmod,
        })
    }
}

/// Arguments for `hash-object`.
#[derive(Debug, Clone, Args)]
pub struct HashObjectCmd {
    /// Object type (default: blob).
    #[arg(short = 't', value_enum, value_name = "TYPE")]
    pub object_type: Option<ObjectType>,
    /// Write the object into the object database.
    #[arg(short = 'w')]
    pub write: bool,
    #[arg(long)]
    pub literally: bool,
    /// Hash what is read from stdin.
    #[arg(long)]
    pub stdin: bool,
    /// Read file names from stdin, one per line.
    #[arg(long)]
    pub stdin_paths: bool,
    /// Apply filters as if the object were at PATH.
    #[arg(long, value_name = "PATH")]
    pub path: Option<PathBuf>,
    #[arg(long)]
    pub no_filters: bool,
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl HashObjectCmd {
    /// Builds the git record, draining `stdin` for `--stdin` or
    /// `--stdin-paths`.
    ///
    /// # Errors
    ///
    /// Returns an error if `stdin` cannot be read.
    pub fn to_args(&self, stdin: impl Read) -> io::Result<HashObjectArgs> {
        let input = if self.stdin || self.stdin_paths {
            Some(read_all(stdin)?)
        } else {
            None
        };
        let stdin_paths = if self.stdin_paths {
            input
                .as_deref()
                .map(|text| text.lines().map(PathBuf::from).collect())
        } else {
            None
        };
        Ok(HashObjectArgs {
            object_type: self.object_type,
            write: self.write,
            literally: self.literally,
            stdin: if self.stdin { input } else { None },
            stdin_paths,
            path: self.path.clone(),
            no_filters: self.no_filters,
            files: self.files.clone(),
        })
    }
}

/// Arguments for `status`.
#[derive(Debug, Clone, Args)]
#[command(group = clap::ArgGroup::new("format").multiple(false))]
pub struct StatusCmd {
    #[arg(short = 's', long, group = "format")]
    pub short: bool,
    #[arg(long, group = "format")]
    pub long: bool,
    /// Machine-readable output (v1 when no version is given).
    #[arg(
        long,
        group = "format",
        value_enum,
        value_name = "VERSION",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "v1"
    )]
    pub porcelain: Option<PorcelainVersion>,
    #[arg(short = 'b', long)]
    pub branch: bool,
    #[arg(long)]
    pub show_stash: bool,
    #[arg(short = 'z')]
    pub z: bool,
    #[arg(
        short = 'u',
        long,
        value_enum,
        value_name = "MODE",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "all"
    )]
    pub untracked_files: Option<UntrackedFiles>,
    #[arg(
        long,
        value_enum,
        value_name = "WHEN",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "all"
    )]
    pub ignore_submodules: Option<IgnoreSubmodules>,
    #[arg(
        long,
        value_enum,
        value_name = "MODE",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "traditional"
    )]
    pub ignored: Option<IgnoredMode>,
    #[arg(long, overrides_with = "no_ahead_behind")]
    pub ahead_behind: bool,
    #[arg(long, overrides_with = "ahead_behind")]
    pub no_ahead_behind: bool,
    #[arg(long, overrides_with = "no_renames")]
    pub renames: bool,
    #[arg(long, overrides_with = "renames")]
    pub no_renames: bool,
    /// Rename similarity threshold in percent.
    #[arg(short = 'M', long, value_name = "N")]
    pub find_renames: Option<u8>,
    #[arg(value_name = "PATHSPEC")]
    pub pathspecs: Vec<String>,
}

impl From<&StatusCmd> for StatusArgs {
    fn from(cmd: &StatusCmd) -> Self {
        let format = if cmd.short {
            Some(StatusFormat::Short)
        } else if cmd.long {
            Some(StatusFormat::Long)
        } else {
            cmd.porcelain.map(StatusFormat::Porcelain)
        };
        Self {
            format,
            branch: cmd.branch,
            show_stash: cmd.show_stash,
            z: cmd.z,
            untracked_files: cmd.untracked_files,
            ignore_submodules: cmd.ignore_submodules,
            ignored: cmd.ignored,
            ahead_behind: toggle(cmd.ahead_behind, cmd.no_ahead_behind),
            renames: toggle(cmd.renames, cmd.no_renames),
            find_renames: cmd.find_renames,
            pathspecs: cmd.pathspecs.clone(),
        }
    }
}

/// Maps a `--x` / `--no-x` pair onto an optional toggle.
pub(crate) const fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

fn read_all(mut input: impl Read) -> io::Result<String> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    Ok(text)
}
