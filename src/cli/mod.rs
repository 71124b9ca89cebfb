// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gitfront [global options] <command>
//! version [--build-options]
//! path {exec|html|info|man}
//! ls-tree | add | hash-object | status
//! branch {list|create|delete|rename|copy|set-upstream|unset-upstream|edit-description}
//! options
//! inis
//! ```

pub mod branch;
pub mod git;
pub mod global;


use crate::cli::branch::BranchArgs;
use crate::cli::git::{AddCmd, HashObjectCmd, LsTreeCmd, PathCmd, StatusCmd, VersionCmd};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Typed Git Command Front End
///
/// Validates git options before running git.
#[derive(Debug, Parser)]
#[command(
    name = "gitfront",
    author,
    version,
    about = "Typed Git Command Front End",
    long_about = "gitfront Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Runs git with options that are checked before git starts.\n\
                  Combinations git documents as invalid are rejected with\n\
                  exit code 64, bad values with 65. When git itself fails,\n\
                  its exit code is passed through.",
    after_help = "CONFIG FILES:\n\n\
                  gitfront reads gitfront.toml from the current directory\n\
                  unless --no-default-inis is given, then every --ini in order.\n\
                  GITFRONT_<SECTION>__<KEY> environment variables and --set\n\
                  override file values. Use `gitfront inis` to see the files\n\
                  and `gitfront options` to see the effective settings."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Runs `git version`.
    Version(VersionCmd),

    /// Prints one of git's installation paths.
    Path(PathCmd),

    /// Lists the contents of a tree object.
    #[command(name = "ls-tree")]
    LsTree(LsTreeCmd),

    /// Adds file contents to the index.
    Add(AddCmd),

    /// Computes object IDs, optionally writing objects.
    #[command(name = "hash-object")]
    HashObject(HashObjectCmd),

    /// Shows the working tree status.
    Status(StatusCmd),

    /// Branch operations.
    Branch(BranchArgs),

    /// Lists the effective options, main git args and env overlay.
    Options,

    /// Lists the config files used by gitfront.
    Inis,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
