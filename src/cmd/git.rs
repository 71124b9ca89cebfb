// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Handlers for the commands that run git.
//!
//! ```text
//! cli args --> typed record --> Git::argv (dry) | Git::run --> out
//! ```

use std::io::{Read, Write};

use tracing::{debug, info};

use crate::cli::branch::{BranchArgs, BranchSubcommand};
use crate::cli::git::PathKind;
use crate::cli::Command;
use crate::error::Result;
use crate::git::subcmd::{
    AddArgs, CopyBranch, CreateBranch, DeleteBranch, EditDescription, HashObjectArgs,
    ListBranches, LsTreeArgs, RenameBranch, SetUpstream, StatusArgs, SubcommandArgs,
    UnsetUpstream, VersionArgs,
};
use crate::git::{Git, GitRunner};

/// Runs one git command, or prints its command line when `dry` is set.
///
/// `stdin` feeds `add --pathspec-from-file=-` and `hash-object --stdin`.
///
/// # Errors
///
/// Returns validation errors before anything runs, git's failure when it
/// exits non-zero, or an I/O error writing `out`.
pub fn run_git_command<R: GitRunner>(
    git: &Git<R>,
    command: &Command,
    dry: bool,
    stdin: impl Read,
    out: &mut impl Write,
) -> Result<()> {
    let session = Session { git, dry };
    match command {
        Command::Version(cmd) => session.emit(&VersionArgs::from(cmd), out),
        Command::Path(cmd) => session.path(cmd.kind, out),
        Command::LsTree(cmd) => session.emit(&LsTreeArgs::from(cmd), out),
        Command::Add(cmd) => {
            let args: AddArgs = cmd.to_args(stdin)?;
            session.emit(&args, out)
        }
        Command::HashObject(cmd) => {
            let args: HashObjectArgs = cmd.to_args(stdin)?;
            session.hash_object(&args, out)
        }
        Command::Status(cmd) => session.emit(&StatusArgs::from(cmd), out),
        Command::Branch(args) => session.branch(args, out),
        Command::Options | Command::Inis => {
            anyhow::bail!("'{command:?}' does not run git")
        }
    }
}

struct Session<'a, R: GitRunner> {
    git: &'a Git<R>,
    dry: bool,
}

impl<R: GitRunner> Session<'_, R> {
    fn emit<A: SubcommandArgs>(&self, args: &A, out: &mut impl Write) -> Result<()> {
        if self.dry {
            let argv = self.git.argv(args)?;
            return self.print_command(&argv, out);
        }
        info!(subcommand = A::NAME, "running git");
        let stdout = self.git.run(args)?;
        print_output(&stdout, out)
    }

    fn path(&self, kind: PathKind, out: &mut impl Write) -> Result<()> {
        if self.dry {
            let argv = self.git.query_argv(path_flag(kind))?;
            return self.print_command(&argv, out);
        }
        let path = match kind {
            PathKind::Exec => self.git.exec_path(),
            PathKind::Html => self.git.html_path(),
            PathKind::Info => self.git.info_path(),
            PathKind::Man => self.git.man_path(),
        }?;
        writeln!(out, "{}", path.display())?;
        Ok(())
    }

    fn hash_object(&self, args: &HashObjectArgs, out: &mut impl Write) -> Result<()> {
        if self.dry {
            return self.emit(args, out);
        }
        for id in self.git.hash_object(args)? {
            writeln!(out, "{id}")?;
        }
        Ok(())
    }

    fn branch(&self, args: &BranchArgs, out: &mut impl Write) -> Result<()> {
        match &args.subcommand {
            BranchSubcommand::List(list) => self.emit(&ListBranches::from(list), out),
            BranchSubcommand::Create(create) => self.emit(&CreateBranch::from(create), out),
            BranchSubcommand::Delete(delete) => self.emit(&DeleteBranch::from(delete), out),
            BranchSubcommand::Rename(names) => self.emit(&RenameBranch::from(names), out),
            BranchSubcommand::Copy(names) => self.emit(&CopyBranch::from(names), out),
            BranchSubcommand::SetUpstream(upstream) => {
                self.emit(&SetUpstream::from(upstream), out)
            }
            BranchSubcommand::UnsetUpstream(branch) => {
                self.emit(&UnsetUpstream::from(branch), out)
            }
            BranchSubcommand::EditDescription(branch) => {
                self.emit(&EditDescription::from(branch), out)
            }
        }
    }

    fn print_command(&self, argv: &[String], out: &mut impl Write) -> Result<()> {
        debug!(argc = argv.len(), "dry run");
        let line = std::iter::once(self.git.runner().program())
            .chain(argv.iter().map(String::as_str))
            .map(shell_quote)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{line}")?;
        Ok(())
    }
}

const fn path_flag(kind: PathKind) -> &'static str {
    match kind {
        PathKind::Exec => "--exec-path",
        PathKind::Html => "--html-path",
        PathKind::Info => "--info-path",
        PathKind::Man => "--man-path",
    }
}

fn print_output(stdout: &str, out: &mut impl Write) -> Result<()> {
    if !stdout.is_empty() {
        writeln!(out, "{stdout}")?;
    }
    Ok(())
}

/// Quotes `arg` for display when a shell would split or expand it.
#[must_use]
pub fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || matches!(c, '-' | '_' | '.' | '/' | '=' | ':' | ',' | '+' | '@')
        });
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
