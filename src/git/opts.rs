// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Main options: everything between `git` and the subcommand name.
//!
//! ```text
//! git -C repo -c core.quotepath=false --no-pager status --short
//!     '--------------------------------------'
//!                    GitOpts
//! ```
//!
//! Emission order is fixed by [`GitOpts::build_main_args`], so two records
//! with the same fields always produce the same argv.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::rules::{self, FlagSet, Rule, flag_set};
use super::subcmd::push_flag;
use crate::core::env::overrides::is_valid_env_name;
use crate::error::GitError;

const SUBCOMMAND: &str = "git";

const MAIN_RULES: &[Rule] = &[
    Rule::Conflicts("--paginate", "--no-pager"),
    Rule::Conflicts("--glob-pathspecs", "--noglob-pathspecs"),
    Rule::Conflicts("--literal-pathspecs", "--glob-pathspecs"),
    Rule::Conflicts("--literal-pathspecs", "--noglob-pathspecs"),
    Rule::Conflicts("--literal-pathspecs", "--icase-pathspecs"),
];

/// Value of a `-c name[=value]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// `true` renders as the bare name, `false` as `name=`.
    Bool(bool),
    Str(String),
}

impl ConfigValue {
    fn render(&self, name: &str) -> String {
        match self {
            Self::Bool(true) => name.to_string(),
            Self::Bool(false) => format!("{name}="),
            Self::Str(value) => format!("{name}={value}"),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Options accepted by `git` itself, before any subcommand.
///
/// Flags left `false`/`None`/empty are not emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitOpts {
    /// `-C <path>`, applied in order.
    pub chdir: Vec<PathBuf>,
    /// `-c <name>[=<value>]`.
    pub config: BTreeMap<String, ConfigValue>,
    /// `--config-env <name>=<envvar>`.
    pub config_env: BTreeMap<String, String>,
    /// `--exec-path=<path>`.
    pub exec_path: Option<PathBuf>,
    pub paginate: bool,
    pub no_pager: bool,
    pub git_dir: Option<PathBuf>,
    pub work_tree: Option<PathBuf>,
    pub namespace: Option<String>,
    pub bare: bool,
    pub no_replace_objects: bool,
    pub no_lazy_fetch: bool,
    pub no_optional_locks: bool,
    pub no_advice: bool,
    pub literal_pathspecs: bool,
    pub glob_pathspecs: bool,
    pub noglob_pathspecs: bool,
    pub icase_pathspecs: bool,
    /// `--list-cmds=<group>,...`.
    pub list_cmds: Vec<String>,
    /// `--attr-source <tree-ish>`.
    pub attr_source: Option<String>,
}

impl GitOpts {
    /// Creates an empty set of main options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers `other` on top of `self`.
    ///
    /// Values in `other` win, flags set in either stay set, and repeatable
    /// options accumulate.
    pub fn merge(&mut self, other: &Self) -> &mut Self {
        self.chdir.extend(other.chdir.iter().cloned());
        self.config
            .extend(other.config.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.config_env
            .extend(other.config_env.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.list_cmds.extend(other.list_cmds.iter().cloned());

        merge_option(&mut self.exec_path, &other.exec_path);
        merge_option(&mut self.git_dir, &other.git_dir);
        merge_option(&mut self.work_tree, &other.work_tree);
        merge_option(&mut self.namespace, &other.namespace);
        merge_option(&mut self.attr_source, &other.attr_source);

        self.paginate |= other.paginate;
        self.no_pager |= other.no_pager;
        self.bare |= other.bare;
        self.no_replace_objects |= other.no_replace_objects;
        self.no_lazy_fetch |= other.no_lazy_fetch;
        self.no_optional_locks |= other.no_optional_locks;
        self.no_advice |= other.no_advice;
        self.literal_pathspecs |= other.literal_pathspecs;
        self.glob_pathspecs |= other.glob_pathspecs;
        self.noglob_pathspecs |= other.noglob_pathspecs;
        self.icase_pathspecs |= other.icase_pathspecs;
        self
    }

    /// The flags present in this record, by git spelling.
    #[must_use]
    pub fn present_flags(&self) -> FlagSet {
        flag_set([
            (!self.chdir.is_empty(), "-C"),
            (!self.config.is_empty(), "-c"),
            (!self.config_env.is_empty(), "--config-env"),
            (self.exec_path.is_some(), "--exec-path"),
            (self.paginate, "--paginate"),
            (self.no_pager, "--no-pager"),
            (self.git_dir.is_some(), "--git-dir"),
            (self.work_tree.is_some(), "--work-tree"),
            (self.namespace.is_some(), "--namespace"),
            (self.bare, "--bare"),
            (self.no_replace_objects, "--no-replace-objects"),
            (self.no_lazy_fetch, "--no-lazy-fetch"),
            (self.no_optional_locks, "--no-optional-locks"),
            (self.no_advice, "--no-advice"),
            (self.literal_pathspecs, "--literal-pathspecs"),
            (self.glob_pathspecs, "--glob-pathspecs"),
            (self.noglob_pathspecs, "--noglob-pathspecs"),
            (self.icase_pathspecs, "--icase-pathspecs"),
            (!self.list_cmds.is_empty(), "--list-cmds"),
            (self.attr_source.is_some(), "--attr-source"),
        ])
    }

    /// Rejects combinations and values git would refuse.
    ///
    /// # Errors
    ///
    /// Returns a [`GitError`] describing the first problem found.
    pub fn validate(&self) -> Result<(), GitError> {
        rules::check(SUBCOMMAND, &self.present_flags(), MAIN_RULES)?;

        for dir in &self.chdir {
            rules::utf8_path(SUBCOMMAND, "-C", dir)?;
        }
        for (option, path) in [
            ("--exec-path", &self.exec_path),
            ("--git-dir", &self.git_dir),
            ("--work-tree", &self.work_tree),
        ] {
            if let Some(path) = path {
                rules::utf8_path(SUBCOMMAND, option, path)?;
            }
        }

        for name in self.config.keys() {
            config_key(name, "-c")?;
        }
        for (name, var) in &self.config_env {
            config_key(name, "--config-env")?;
            if !is_valid_env_name(var) {
                return Err(GitError::InvalidValue {
                    subcommand: SUBCOMMAND,
                    option: "--config-env",
                    message: format!("'{var}' is not an environment variable name"),
                });
            }
        }
        for group in &self.list_cmds {
            rules::non_empty(SUBCOMMAND, "--list-cmds", group)?;
        }
        if let Some(namespace) = &self.namespace {
            rules::non_empty(SUBCOMMAND, "--namespace", namespace)?;
        }
        if let Some(source) = &self.attr_source {
            rules::non_empty(SUBCOMMAND, "--attr-source", source)?;
        }
        Ok(())
    }

    /// Serialises the options into argv, without the leading `git`.
    ///
    /// Paths are converted lossily; [`GitOpts::validate`] rejects the ones
    /// that would change.
    #[must_use]
    pub fn build_main_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        for dir in &self.chdir {
            args.push("-C".to_string());
            args.push(dir.to_string_lossy().into_owned());
        }
        for (name, value) in &self.config {
            args.push("-c".to_string());
            args.push(value.render(name));
        }
        for (name, var) in &self.config_env {
            args.push("--config-env".to_string());
            args.push(format!("{name}={var}"));
        }
        // bare --exec-path prints instead of setting
        if let Some(path) = &self.exec_path {
            args.push(format!("--exec-path={}", path.to_string_lossy()));
        }

        push_flag(&mut args, self.paginate, "--paginate");
        push_flag(&mut args, self.no_pager, "--no-pager");
        push_value(
            &mut args,
            "--git-dir",
            self.git_dir.as_ref().map(|p| p.to_string_lossy()),
        );
        push_value(
            &mut args,
            "--work-tree",
            self.work_tree.as_ref().map(|p| p.to_string_lossy()),
        );
        push_value(&mut args, "--namespace", self.namespace.as_deref().map(Into::into));
        push_flag(&mut args, self.bare, "--bare");
        push_flag(&mut args, self.no_replace_objects, "--no-replace-objects");
        push_flag(&mut args, self.no_lazy_fetch, "--no-lazy-fetch");
        push_flag(&mut args, self.no_optional_locks, "--no-optional-locks");
        push_flag(&mut args, self.no_advice, "--no-advice");
        push_flag(&mut args, self.literal_pathspecs, "--literal-pathspecs");
        push_flag(&mut args, self.glob_pathspecs, "--glob-pathspecs");
        push_flag(&mut args, self.noglob_pathspecs, "--noglob-pathspecs");
        push_flag(&mut args, self.icase_pathspecs, "--icase-pathspecs");

        if !self.list_cmds.is_empty() {
            args.push(format!("--list-cmds={}", self.list_cmds.join(",")));
        }
        push_value(
            &mut args,
            "--attr-source",
            self.attr_source.as_deref().map(Into::into),
        );

        args
    }
}

fn merge_option<T: Clone>(target: &mut Option<T>, other: &Option<T>) {
    if other.is_some() {
        target.clone_from(other);
    }
}

fn config_key(name: &str, option: &'static str) -> Result<(), GitError> {
    if rules::is_valid_config_key(name) {
        Ok(())
    } else {
        Err(GitError::InvalidValue {
            subcommand: SUBCOMMAND,
            option,
            message: format!("'{name}' is not a config key"),
        })
    }
}

fn push_value(args: &mut Vec<String>, flag: &str, value: Option<std::borrow::Cow<'_, str>>) {
    if let Some(value) = value {
        args.push(flag.to_string());
        args.push(value.into_owned());
    }
}
