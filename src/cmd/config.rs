// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config loading and the config-related commands.

use std::io::Write;

use crate::cli::global::GlobalOptions;
use crate::config::{Config, ConfigLoader, DEFAULT_CONFIG_FILE};
use crate::error::Result;

/// Env prefix for configuration variables.
pub const ENV_PREFIX: &str = "GITFRONT";

/// Builds the loader for the files, env vars and `--set` entries in
/// `global`.
///
/// # Errors
///
/// Returns an error if a `--set` entry is malformed.
pub fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for assignment in global.to_config_overrides() {
        loader = loader.set_assignment(&assignment)?;
    }
    Ok(loader)
}

/// Loads the configuration and layers the main git options and `--env`
/// entries from the command line on top.
///
/// # Errors
///
/// Returns an error if loading fails or a command-line entry is malformed.
pub fn load_config(global: &GlobalOptions) -> Result<Config> {
    let mut config = build_config_loader(global)?.build()?;
    apply_cli_overlay(&mut config, global)?;
    Ok(config)
}

/// Merges `-C`, `-c`, `--git-dir`, ... and `--env` into `config`.
///
/// # Errors
///
/// Returns an error for an entry with an empty name.
pub fn apply_cli_overlay(config: &mut Config, global: &GlobalOptions) -> Result<()> {
    let cli_opts = global.git.to_git_opts()?;
    config.options.merge(&cli_opts);

    for (name, value) in global.env_overrides()?.iter() {
        config.env.retain(|key, _| !key.eq_ignore_ascii_case(name));
        config
            .git
            .unset_env
            .retain(|unset| !unset.eq_ignore_ascii_case(name));
        match value.as_set() {
            Some(value) => {
                config.env.insert(name.to_string(), value.to_string());
            }
            None => config.git.unset_env.push(name.to_string()),
        }
    }
    Ok(())
}

/// Display current configuration options.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn run_options_command(config: &Config, out: &mut impl Write) -> Result<()> {
    for line in config.format_options() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Display loaded configuration files.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn run_inis_command(config_files: &[String], out: &mut impl Write) -> Result<()> {
    if config_files.is_empty() {
        writeln!(out, "No configuration files loaded")?;
    } else {
        for line in config_files {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
