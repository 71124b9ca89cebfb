// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git ls-tree [<options>] <tree-ish> [<path>...]`.

use bon::Builder;

use super::{SubcommandArgs, push_flag, push_joined};
use crate::error::GitError;
use crate::git::rules::{self, Rule, flag_set};

const RULES: &[Rule] = &[Rule::Exclusive(&[
    "--long",
    "--name-only",
    "--name-status",
    "--object-only",
    "--format",
])];

/// Arguments for `git ls-tree`.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct LsTreeArgs {
    /// Tree, commit or tag to list.
    #[builder(into)]
    pub tree_ish: String,
    /// `-d`: only tree entries.
    #[builder(default)]
    pub dirs_only: bool,
    /// `-r`: recurse into subtrees.
    #[builder(default)]
    pub recursive: bool,
    /// `-t`: show trees while recursing.
    #[builder(default)]
    pub show_trees: bool,
    /// `--long`: include object size.
    #[builder(default)]
    pub long: bool,
    /// `-z`: NUL line termination.
    #[builder(default)]
    pub z: bool,
    #[builder(default)]
    pub name_only: bool,
    #[builder(default)]
    pub name_status: bool,
    #[builder(default)]
    pub object_only: bool,
    #[builder(default)]
    pub full_name: bool,
    #[builder(default)]
    pub full_tree: bool,
    /// `--abbrev=<n>`, 0 to 40.
    pub abbrev: Option<u8>,
    /// `--format=<format>`.
    #[builder(into)]
    pub format: Option<String>,
    /// Paths to restrict the listing to.
    #[builder(default)]
    pub paths: Vec<String>,
}

impl LsTreeArgs {
    /// Lists `tree_ish` with no options.
    pub fn new(tree_ish: impl Into<String>) -> Self {
        Self::builder().tree_ish(tree_ish).build()
    }
}

impl SubcommandArgs for LsTreeArgs {
    const NAME: &'static str = "ls-tree";

    fn validate(&self) -> Result<(), GitError> {
        let present = flag_set([
            (self.long, "--long"),
            (self.name_only, "--name-only"),
            (self.name_status, "--name-status"),
            (self.object_only, "--object-only"),
            (self.format.is_some(), "--format"),
        ]);
        rules::check(Self::NAME, &present, RULES)?;

        rules::non_empty(Self::NAME, "<tree-ish>", &self.tree_ish)?;
        rules::not_option(Self::NAME, "<tree-ish>", &self.tree_ish)?;
        if let Some(abbrev) = self.abbrev {
            rules::in_range(Self::NAME, "--abbrev", u32::from(abbrev), 0..=40)?;
        }
        // ls-tree takes no `--` before its paths
        for path in &self.paths {
            rules::non_empty(Self::NAME, "<path>", path)?;
            rules::not_option(Self::NAME, "<path>", path)?;
        }
        Ok(())
    }

    fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        push_flag(&mut args, self.dirs_only, "-d");
        push_flag(&mut args, self.recursive, "-r");
        push_flag(&mut args, self.show_trees, "-t");
        push_flag(&mut args, self.long, "--long");
        push_flag(&mut args, self.z, "-z");
        push_flag(&mut args, self.name_only, "--name-only");
        push_flag(&mut args, self.name_status, "--name-status");
        push_flag(&mut args, self.object_only, "--object-only");
        push_flag(&mut args, self.full_name, "--full-name");
        push_flag(&mut args, self.full_tree, "--full-tree");
        push_joined(&mut args, "--abbrev", self.abbrev);
        push_joined(&mut args, "--format", self.format.as_deref());
        args.push(self.tree_ish.clone());
        args.extend(self.paths.iter().cloned());
        args
    }
}
