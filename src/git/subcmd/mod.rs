// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed argument records, one per subcommand.
//!
//! ```text
//! record            validate()                  to_args()
//! ----------------  --------------------------  -------------------------
//! VersionArgs       -                           [--build-options]
//! LsTreeArgs        exclusive output modes      [-r ... <tree-ish> path..]
//! AddArgs           dry-run, pathspec source    [... -- pathspec..]
//! HashObjectArgs    stdin / stdin-paths / path  [-t T -w ... -- file..]
//! StatusArgs        --long vs -z, renames       [... -- pathspec..]
//! branch::*         names, list modes           [-m old new] ...
//! ```
//!
//! Each record rejects what its types can't; [`Git`](super::command::Git)
//! calls [`SubcommandArgs::validate`] before anything is spawned.

use std::fmt::Display;

use crate::error::GitError;

pub mod add;
pub mod branch;
pub mod hash_object;
pub mod ls_tree;
pub mod status;
pub mod version;


pub use add::{AddArgs, Chmod, PathspecSource};
pub use branch::{
    ColorWhen, ColumnMode, CopyBranch, CreateBranch, DeleteBranch, EditDescription, ListBranches,
    RenameBranch, SetUpstream, UnsetUpstream, Verbosity,
};
pub use hash_object::{HashObjectArgs, ObjectType};
pub use ls_tree::LsTreeArgs;
pub use status::{
    IgnoreSubmodules, IgnoredMode, PorcelainVersion, StatusArgs, StatusFormat, UntrackedFiles,
};
pub use version::VersionArgs;

/// Arguments of one git subcommand.
pub trait SubcommandArgs {
    /// The subcommand as git spells it.
    const NAME: &'static str;

    /// Rejects invalid flag combinations and values.
    ///
    /// # Errors
    ///
    /// Returns a [`GitError`] describing the first problem found.
    fn validate(&self) -> Result<(), GitError>;

    /// Argv after the subcommand name.
    fn to_args(&self) -> Vec<String>;

    /// Content to feed the child's stdin.
    fn stdin(&self) -> Option<String> {
        None
    }
}

pub(crate) fn push_flag(args: &mut Vec<String>, present: bool, flag: &str) {
    if present {
        args.push(flag.to_string());
    }
}

/// `--flag=value` when a value is given.
pub(crate) fn push_joined(args: &mut Vec<String>, flag: &str, value: Option<impl Display>) {
    if let Some(value) = value {
        args.push(format!("{flag}={value}"));
    }
}

/// `--flag` / `--no-flag` for a tri-state option.
pub(crate) fn push_toggle(args: &mut Vec<String>, value: Option<bool>, on: &str, off: &str) {
    match value {
        Some(true) => args.push(on.to_string()),
        Some(false) => args.push(off.to_string()),
        None => {}
    }
}

/// `--` followed by the paths, if there are any.
pub(crate) fn push_after_separator<S: AsRef<str>>(args: &mut Vec<String>, paths: &[S]) {
    if !paths.is_empty() {
        args.push("--".to_string());
        args.extend(paths.iter().map(|p| p.as_ref().to_string()));
    }
}
