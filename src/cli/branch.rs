// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch command arguments.
//!
//! # Subcommands
//!
//! ```text
//! branch list [-v|-vv] [--color[=when]] [--sort K].. [pattern..]
//! branch create NAME [START] [-f] [--[no-]track]
//! branch delete NAME.. [-D] [-r]
//! branch rename [OLD] NEW [-M]
//! branch copy [OLD] NEW [-C]
//! branch set-upstream UPSTREAM [BRANCH]
//! branch unset-upstream [BRANCH]
//! branch edit-description [BRANCH]
//! ```

use clap::{Args, Subcommand};

use super::git::toggle;
use crate::git::subcmd::{
    ColorWhen, ColumnMode, CopyBranch, CreateBranch, DeleteBranch, EditDescription, ListBranches,
    RenameBranch, SetUpstream, UnsetUpstream, Verbosity,
};

/// Arguments for the `branch` command.
#[derive(Debug, Clone, Args)]
pub struct BranchArgs {
    #[command(subcommand)]
    pub subcommand: BranchSubcommand,
}

/// Branch subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum BranchSubcommand {
    /// Lists branches.
    List(ListArgs),

    /// Creates a branch.
    Create(CreateArgs),

    /// Deletes branches.
    Delete(DeleteArgs),

    /// Renames a branch (default: the current one).
    Rename(MoveArgs),

    /// Copies a branch (default: the current one).
    Copy(MoveArgs),

    /// Sets the upstream of a branch.
    #[command(name = "set-upstream")]
    SetUpstream(SetUpstreamArgs),

    /// Removes the upstream of a branch.
    #[command(name = "unset-upstream")]
    UnsetUpstream(OptionalBranchArgs),

    /// Edits a branch description in GIT_EDITOR.
    #[command(name = "edit-description")]
    EditDescription(OptionalBranchArgs),
}

/// Arguments for `branch list`.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// `-v` once, `-vv` twice.
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Color the output; `off` passes `--no-color`.
    #[arg(
        long,
        value_enum,
        value_name = "WHEN",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "always"
    )]
    pub color: Option<ColorWhen>,
    /// Print only the current branch.
    #[arg(long)]
    pub show_current: bool,
    /// Column layout; bare `--column` uses git's default.
    #[arg(
        long,
        value_name = "OPTIONS",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = ""
    )]
    pub column: Option<String>,
    #[arg(long)]
    pub no_column: bool,
    #[arg(long, value_name = "N")]
    pub abbrev: Option<u8>,
    #[arg(long)]
    pub no_abbrev: bool,
    /// Sort key, repeatable.
    #[arg(long, value_name = "KEY", allow_hyphen_values = true, action = clap::ArgAction::Append)]
    pub sort: Vec<String>,
    #[arg(long, value_name = "COMMIT")]
    pub merged: Option<String>,
    #[arg(long, value_name = "COMMIT")]
    pub no_merged: Option<String>,
    #[arg(long, value_name = "COMMIT")]
    pub contains: Option<String>,
    #[arg(long, value_name = "COMMIT")]
    pub no_contains: Option<String>,
    #[arg(long, value_name = "OBJECT")]
    pub points_at: Option<String>,
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
    /// Remote-tracking branches.
    #[arg(short = 'r', long)]
    pub remotes: bool,
    /// Local and remote-tracking branches.
    #[arg(short = 'a', long)]
    pub all: bool,
    /// Pass `--list` even without patterns.
    #[arg(short = 'l', long)]
    pub list: bool,
    #[arg(short = 'i', long)]
    pub ignore_case: bool,
    #[arg(long)]
    pub omit_empty: bool,
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,
}

impl From<&ListArgs> for ListBranches {
    fn from(args: &ListArgs) -> Self {
        let verbose = match args.verbose {
            0 => None,
            1 => Some(Verbosity::Verbose),
            _ => Some(Verbosity::VeryVerbose),
        };
        let column = if args.no_column {
            Some(ColumnMode::Off)
        } else {
            args.column.as_ref().map(|layout| {
                if layout.is_empty() {
                    ColumnMode::Default
                } else {
                    ColumnMode::Layout(layout.clone())
                }
            })
        };
        Self {
            patterns: args.patterns.clone(),
            color: args.color,
            show_current: args.show_current,
            verbose,
            column,
            abbrev: args.abbrev,
            no_abbrev: args.no_abbrev,
            sort: args.sort.clone(),
            merged: args.merged.clone(),
            no_merged: args.no_merged.clone(),
            contains: args.contains.clone(),
            no_contains: args.no_contains.clone(),
            points_at: args.points_at.clone(),
            format: args.format.clone(),
            remotes: args.remotes,
            all: args.all,
            list_only: args.list,
            ignore_case: args.ignore_case,
            omit_empty: args.omit_empty,
        }
    }
}

/// Arguments for `branch create`.
#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    #[arg(value_name = "NAME")]
    pub name: String,
    #[arg(value_name = "START-POINT")]
    pub start_point: Option<String>,
    /// Reset the branch if it exists.
    #[arg(short = 'f', long)]
    pub force: bool,
    #[arg(long, overrides_with = "no_track")]
    pub track: bool,
    #[arg(long, overrides_with = "track")]
    pub no_track: bool,
    #[arg(long, overrides_with = "no_recurse_submodules")]
    pub recurse_submodules: bool,
    #[arg(long, overrides_with = "recurse_submodules")]
    pub no_recurse_submodules: bool,
}

impl From<&CreateArgs> for CreateBranch {
    fn from(args: &CreateArgs) -> Self {
        Self {
            name: args.name.clone(),
            start_point: args.start_point.clone(),
            force: args.force,
            track: toggle(args.track, args.no_track),
            recurse_submodules: toggle(args.recurse_submodules, args.no_recurse_submodules),
        }
    }
}

/// Arguments for `branch delete`.
#[derive(Debug, Clone, Args)]
pub struct DeleteArgs {
    #[arg(value_name = "BRANCH", required = true)]
    pub branches: Vec<String>,
    /// Delete even if not merged (`-D`).
    #[arg(short = 'D', long)]
    pub force: bool,
    /// Delete remote-tracking branches.
    #[arg(short = 'r', long)]
    pub remotes: bool,
}

impl From<&DeleteArgs> for DeleteBranch {
    fn from(args: &DeleteArgs) -> Self {
        Self::new(args.branches.iter())
            .force(args.force)
            .remote(args.remotes)
    }
}

/// Arguments for `branch rename` and `branch copy`.
#[derive(Debug, Clone, Args)]
pub struct MoveArgs {
    /// `[OLD] NEW`; with one name the current branch is used as OLD.
    #[arg(value_name = "NAME", num_args = 1..=2, required = true)]
    pub names: Vec<String>,
    /// Overwrite an existing target (`-M` / `-C`).
    #[arg(short = 'f', long)]
    pub force: bool,
}

impl MoveArgs {
    fn split(&self) -> (Option<&str>, &str) {
        match self.names.as_slice() {
            [old, new] => (Some(old.as_str()), new.as_str()),
            [new] => (None, new.as_str()),
            _ => (None, ""),
        }
    }
}

impl From<&MoveArgs> for RenameBranch {
    fn from(args: &MoveArgs) -> Self {
        let (old, new) = args.split();
        let rename = Self::new(new).force(args.force);
        match old {
            Some(old) => rename.old(old),
            None => rename,
        }
    }
}

impl From<&MoveArgs> for CopyBranch {
    fn from(args: &MoveArgs) -> Self {
        let (old, new) = args.split();
        let copy = Self::new(new).force(args.force);
        match old {
            Some(old) => copy.old(old),
            None => copy,
        }
    }
}

/// Arguments for `branch set-upstream`.
#[derive(Debug, Clone, Args)]
pub struct SetUpstreamArgs {
    #[arg(value_name = "UPSTREAM")]
    pub upstream: String,
    #[arg(value_name = "BRANCH")]
    pub branch: Option<String>,
}

impl From<&SetUpstreamArgs> for SetUpstream {
    fn from(args: &SetUpstreamArgs) -> Self {
        Self {
            upstream: args.upstream.clone(),
            branch: args.branch.clone(),
        }
    }
}

/// A branch that defaults to the current one.
#[derive(Debug, Clone, Default, Args)]
pub struct OptionalBranchArgs {
    #[arg(value_name = "BRANCH")]
    pub branch: Option<String>,
}

impl From<&OptionalBranchArgs> for UnsetUpstream {
    fn from(args: &OptionalBranchArgs) -> Self {
        Self {
            branch: args.branch.clone(),
        }
    }
}

impl From<&OptionalBranchArgs> for EditDescription {
    fn from(args: &OptionalBranchArgs) -> Self {
        Self {
            branch: args.branch.clone(),
        }
    }
}
