// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. gitfront.toml (cwd, optional)
//! 3. --ini FILE (repeatable)
//! 4. GITFRONT_* env vars
//! 5. --set section.key=value
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GITFRONT_GLOBAL__OUTPUT_LOG_LEVEL=4  → global.output_log_level = 4
//! GITFRONT_GIT__PROGRAM=/opt/git/bin/git → git.program = "/opt/git/bin/git"
//! GITFRONT_OPTIONS__NO_PAGER=true      → options.no_pager = true
//! GITFRONT_ENV__GIT_AUTHOR_NAME=me     → env.git_author_name = "me"
//! ```
//!
//! Environment sources lowercase their keys, so `[env]` names are
//! uppercased when the `Git` is built.

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::env::overrides::EnvOverrides;
use crate::error::Result;
use crate::git::{Git, GitOpts, ShellRunner};

pub use loader::ConfigLoader;
use types::{EnvTable, GitConfig, GlobalConfig};

/// Default config file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "gitfront.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logging options.
    pub global: GlobalConfig,
    /// Program and process setup.
    pub git: GitConfig,
    /// Main options passed before every subcommand.
    pub options: GitOpts,
    /// Variables set for every invocation.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub env: EnvTable,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gitfront::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("gitfront.toml")
    ///     .with_env_prefix("GITFRONT")
    ///     .build()?;
    /// let version = config.git().version()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// The `[env]` table and `git.unset_env` as an overlay.
    #[must_use]
    pub fn env_overrides(&self) -> EnvOverrides {
        let mut envs = EnvOverrides::new();
        for (name, value) in &self.env {
            envs.set(name.to_ascii_uppercase(), value);
        }
        for name in &self.git.unset_env {
            envs.remove(name.to_ascii_uppercase());
        }
        envs
    }

    /// Rejects main options and environment names git would refuse.
    ///
    /// # Errors
    ///
    /// Returns the first [`GitError`](crate::error::GitError) found.
    pub fn validate(&self) -> Result<()> {
        self.options.validate()?;
        self.env_overrides().validate()?;
        Ok(())
    }

    /// Builds a [`Git`] from the `[git]`, `[options]` and `[env]` sections.
    #[must_use]
    pub fn git(&self) -> Git {
        let mut git = Git::with_runner(ShellRunner::with_program(&self.git.program));
        if let Some(dir) = &self.git.root_dir {
            git = git.root_dir(dir);
        }
        let mut git = git.with_opts(|opts| *opts = self.options.clone());
        // explicit [env] entries override the non-interactive defaults
        if self.git.non_interactive {
            git = git.non_interactive();
        }
        let envs = self.env_overrides();
        git.with_envs(|overlay| {
            overlay.merge(&envs);
        })
    }

    /// Format configuration options for display.
    ///
    /// Output is ordered by key and aligned on `=`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_git_options(&mut options);
        self.format_env_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file".into(), log_file.display().to_string());
        }
    }

    fn format_git_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("git.program".into(), self.git.program.clone());
        if let Some(dir) = &self.git.root_dir {
            options.insert("git.root_dir".into(), dir.display().to_string());
        }
        options.insert(
            "git.non_interactive".into(),
            self.git.non_interactive.to_string(),
        );
        let main_args = self.options.build_main_args();
        if !main_args.is_empty() {
            options.insert("git.main_args".into(), main_args.join(" "));
        }
    }

    fn format_env_options(&self, options: &mut BTreeMap<String, String>) {
        for (name, value) in self.git().envs().iter() {
            let shown = value.as_set().unwrap_or("<removed>");
            options.insert(format!("env.{name}"), shown.to_string());
        }
    }
}
