// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --ini FILE        ← Additional config files (can repeat)
//! --dry             ← Print argv instead of running git
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --set KEY=VAL     ← Direct config override
//! -C/-c/--git-dir.. ← Main git options, layered over [options]
//! --env KEY=VAL     ← Env overlay, layered over [env]
//!
//! Precedence: CLI flags > --set > env vars > --ini > gitfront.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::core::env::overrides::EnvOverrides;
use crate::error::ConfigError;
use crate::git::{ConfigValue, GitOpts};

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'i', long = "ini", value_name = "FILE", action = clap::ArgAction::Append)]
    pub inis: Vec<PathBuf>,

    /// Disables loading gitfront.toml from the current directory.
    #[arg(long = "no-default-inis")]
    pub no_default_inis: bool,

    /// Prints the git command line instead of running it.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Sets a config option, such as 'git.program=/opt/git/bin/git'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "SECTION.KEY=VALUE", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Sets an environment variable for git; a bare NAME removes it.
    #[arg(short = 'e', long = "env", value_name = "NAME[=VALUE]", action = clap::ArgAction::Append)]
    pub env: Vec<String>,

    #[command(flatten)]
    pub git: MainGitOptions,
}

/// Main git options, passed before the subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct MainGitOptions {
    /// Run as if git was started in PATH.
    #[arg(short = 'C', value_name = "PATH", action = clap::ArgAction::Append)]
    pub chdir: Vec<PathBuf>,

    /// Pass a configuration parameter to git.
    #[arg(short = 'c', value_name = "NAME[=VALUE]", action = clap::ArgAction::Append)]
    pub config: Vec<String>,

    #[arg(long, value_name = "PATH")]
    pub git_dir: Option<PathBuf>,

    #[arg(long, value_name = "PATH")]
    pub work_tree: Option<PathBuf>,

    #[arg(long, value_name = "NAME")]
    pub namespace: Option<String>,

    #[arg(long)]
    pub paginate: bool,

    #[arg(long)]
    pub no_pager: bool,

    #[arg(long)]
    pub bare: bool,

    #[arg(long)]
    pub no_optional_locks: bool,

    #[arg(long)]
    pub literal_pathspecs: bool,

    #[arg(long)]
    pub glob_pathspecs: bool,

    #[arg(long)]
    pub noglob_pathspecs: bool,

    #[arg(long)]
    pub icase_pathspecs: bool,
}

impl MainGitOptions {
    /// Converts the flags into [`GitOpts`] to layer over the config file.
    ///
    /// Conflicting flags are kept; the git layer reports them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty `-c` name.
    pub fn to_git_opts(&self) -> Result<GitOpts, ConfigError> {
        let mut opts = GitOpts::new();
        opts.chdir.clone_from(&self.chdir);
        for entry in &self.config {
            let (name, value) = split_config_entry(entry)?;
            opts.config.insert(name.to_string(), value);
        }
        opts.git_dir.clone_from(&self.git_dir);
        opts.work_tree.clone_from(&self.work_tree);
        opts.namespace.clone_from(&self.namespace);
        opts.paginate = self.paginate;
        opts.no_pager = self.no_pager;
        opts.bare = self.bare;
        opts.no_optional_locks = self.no_optional_locks;
        opts.literal_pathspecs = self.literal_pathspecs;
        opts.glob_pathspecs = self.glob_pathspecs;
        opts.noglob_pathspecs = self.noglob_pathspecs;
        opts.icase_pathspecs = self.icase_pathspecs;
        Ok(opts)
    }
}

/// `name=value` is a string, bare `name` is `true`, as git reads `-c`.
fn split_config_entry(entry: &str) -> Result<(&str, ConfigValue), ConfigError> {
    let (name, value) = match entry.split_once('=') {
        Some((name, value)) => (name, ConfigValue::from(value)),
        None => (entry, ConfigValue::Bool(true)),
    };
    if name.is_empty() {
        return Err(ConfigError::InvalidValue {
            section: "-c".to_string(),
            key: entry.to_string(),
            message: "missing config name".to_string(),
        });
    }
    Ok((name, value))
}

impl GlobalOptions {
    /// Converts logging flags to `section.key=value` overrides, after any
    /// `--set` entries so the dedicated flags win.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if let Some(level) = self.log_level {
            overrides.push(format!("global.output_log_level={level}"));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(format!("global.file_log_level={level}"));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(format!("global.log_file={}", path.display()));
        }

        overrides
    }

    /// `--env` entries as an overlay.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an entry with an empty name.
    pub fn env_overrides(&self) -> Result<EnvOverrides, ConfigError> {
        let mut envs = EnvOverrides::new();
        for entry in &self.env {
            let name = entry.split_once('=').map_or(entry.as_str(), |(name, _)| name);
            if name.is_empty() {
                return Err(ConfigError::InvalidValue {
                    section: "--env".to_string(),
                    key: entry.clone(),
                    message: "missing variable name".to_string(),
                });
            }
            match entry.split_once('=') {
                Some((name, value)) => envs.set(name, value),
                None => envs.remove(entry),
            };
        }
        Ok(envs)
    }
}
