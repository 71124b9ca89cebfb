// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed git invocation.
//!
//! ```text
//!          Git<R>  (command.rs)
//!      opts: GitOpts   envs: EnvOverrides
//!        |                 |
//!        v                 v
//!   opts.rs            core::env
//!   rules.rs <-- subcmd/{version,ls_tree,add,hash_object,status,branch}
//!        |
//!        v
//!   argv = [main options..] NAME [subcommand args..]
//!        |
//!        v
//!   backend: GitRunner
//!     ShellRunner --> core::process::ProcessBuilder
//! ```
//!
//! Validation always happens before the runner is called, so an invalid
//! request never reaches a process.

pub mod backend;
pub mod command;
pub mod env;
pub mod opts;
pub mod rules;
pub mod subcmd;

pub use backend::{GitRunner, Invocation, ShellRunner};
pub use command::Git;
pub use env::GitEnvVar;
pub use opts::{ConfigValue, GitOpts};

#[cfg(test)]
mod tests;
