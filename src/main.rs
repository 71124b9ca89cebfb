// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> load_config --> Logging --> Command Dispatch
//!   Options | Inis | version, path, ls-tree, add, hash-object, status, branch
//! ```

use std::process::ExitCode;

use gitfront::cli::{self, Command};
use gitfront::cmd::config::{
    build_config_loader, load_config, run_inis_command, run_options_command,
};
use gitfront::cmd::git::run_git_command;
use gitfront::config::Config;
use gitfront::error::{Result, exit_code_of};
use gitfront::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => return report(&e),
    };

    let _log_guard = match init_logging(&LogConfig::from(&config.global)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch_command(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    match &cli.command {
        Some(Command::Options) => run_options_command(config, &mut stdout),
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global)?;
            run_inis_command(&loader.format_loaded_files(), &mut stdout)
        }
        Some(command) => run_git_command(
            &config.git(),
            command,
            cli.global.dry,
            std::io::stdin().lock(),
            &mut stdout,
        ),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    }
}

fn report(e: &anyhow::Error) -> ExitCode {
    eprintln!("Error: {e:#}");
    ExitCode::from(u8::try_from(exit_code_of(e)).unwrap_or(1))
}
