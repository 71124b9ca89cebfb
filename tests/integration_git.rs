// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for git operations.
//!
//! Runs the real git binary against temporary repositories: a bare
//! `remote.git` and a `local` clone-like repository pushing to it.

use std::fs;
use std::path::Path;
use std::process::Command;

use gitfront::git::Git;
use gitfront::git::subcmd::{
    AddArgs, CopyBranch, CreateBranch, DeleteBranch, HashObjectArgs, ListBranches, LsTreeArgs,
    PorcelainVersion, RenameBranch, SetUpstream, StatusArgs, UnsetUpstream,
};
use tempfile::TempDir;

const A_FILE_BLOB: &str = "7c35e066a9001b24677ae572214d292cebc55979";

/// Helper to run git commands in a directory for setup and checks.
fn run_git(args: &[&str], cwd: &Path) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_CONFIG_GLOBAL", "/dev/null")
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

struct Fixture {
    _dir: TempDir,
    local: std::path::PathBuf,
    git: Git,
}

/// `local` with `origin` pointing at an empty bare repository.
fn fixture() -> Fixture {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let remote = dir.path().join("remote.git");
    let local = dir.path().join("local");
    fs::create_dir_all(&remote).unwrap();
    fs::create_dir_all(&local).unwrap();

    run_git(&["init", "-q", "--bare"], &remote);
    run_git(&["init", "-q"], &local);
    run_git(&["symbolic-ref", "HEAD", "refs/heads/main"], &local);
    run_git(
        &["remote", "add", "origin", remote.to_str().unwrap()],
        &local,
    );

    let git = Git::new().root_dir(&local).with_envs(|envs| {
        envs.set("GIT_CONFIG_NOSYSTEM", "1")
            .set("GIT_CONFIG_GLOBAL", "/dev/null")
            .set("GIT_AUTHOR_NAME", "Test")
            .set("GIT_AUTHOR_EMAIL", "test@example.com")
            .set("GIT_COMMITTER_NAME", "Test")
            .set("GIT_COMMITTER_EMAIL", "test@example.com");
    });

    Fixture {
        _dir: dir,
        local,
        git,
    }
}

/// Adds and commits `a-file` through the front end.
fn commit_a_file(fx: &Fixture) {
    fs::write(fx.local.join("a-file"), "a-file").unwrap();
    fx.git.add(&AddArgs::pathspecs(["a-file"])).unwrap();
    run_git(&["commit", "-q", "-m", "initial"], &fx.local);
}

fn branch_names(git: &Git) -> Vec<String> {
    let list = ListBranches {
        format: Some("%(refname:short)".to_string()),
        ..ListBranches::default()
    };
    git.list_branches(&list)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_version() {
    let git = Git::new();
    assert!(git.version().unwrap().starts_with("git version "));
    assert!(git.exec_path().unwrap().is_absolute());
}

#[test]
fn test_add_then_ls_tree() {
    let fx = fixture();
    commit_a_file(&fx);

    let listing = fx.git.ls_tree(&LsTreeArgs::new("HEAD")).unwrap();
    assert_eq!(listing, format!("100644 blob {A_FILE_BLOB}\ta-file"));

    let names = LsTreeArgs {
        name_only: true,
        ..LsTreeArgs::new("HEAD")
    };
    assert_eq!(fx.git.ls_tree(&names).unwrap(), "a-file");
}

#[test]
fn test_add_dry_run_leaves_index_alone() {
    let fx = fixture();
    fs::write(fx.local.join("a-file"), "a-file").unwrap();

    let args = AddArgs {
        dry_run: true,
        ..AddArgs::pathspecs(["a-file"])
    };
    assert_eq!(fx.git.add(&args).unwrap(), "add 'a-file'");
    assert_eq!(run_git(&["ls-files"], &fx.local), "");
}

#[test]
fn test_add_pathspecs_from_stdin() {
    let fx = fixture();
    fs::write(fx.local.join("one"), "1").unwrap();
    fs::write(fx.local.join("two"), "2").unwrap();

    fx.git.add(&AddArgs::from_stdin("one\ntwo\n")).unwrap();
    assert_eq!(run_git(&["ls-files"], &fx.local), "one\ntwo");
}

#[test]
fn test_hash_object() {
    let fx = fixture();
    let ids = fx
        .git
        .hash_object(&HashObjectArgs::content("a-file"))
        .unwrap();
    assert_eq!(ids, [A_FILE_BLOB]);

    fs::write(fx.local.join("a-file"), "a-file").unwrap();
    let ids = fx
        .git
        .hash_object(&HashObjectArgs::files(["a-file"]))
        .unwrap();
    assert_eq!(ids, [A_FILE_BLOB]);
}

#[test]
fn test_status_porcelain() {
    let fx = fixture();
    commit_a_file(&fx);
    fs::write(fx.local.join("a-file"), "changed").unwrap();
    fs::write(fx.local.join("new-file"), "new").unwrap();

    let status = fx
        .git
        .status(&StatusArgs::porcelain(PorcelainVersion::V1))
        .unwrap();
    assert_eq!(status, " M a-file\n?? new-file");
}

#[test]
fn test_branch_lifecycle() {
    let fx = fixture();
    commit_a_file(&fx);

    fx.git.create_branch(&CreateBranch::new("topic")).unwrap();
    assert_eq!(branch_names(&fx.git), ["main", "topic"]);

    fx.git
        .rename_branch(&RenameBranch::new("feature").old("topic"))
        .unwrap();
    fx.git
        .copy_branch(&CopyBranch::new("backup").old("feature"))
        .unwrap();
    assert_eq!(branch_names(&fx.git), ["backup", "feature", "main"]);

    fx.git
        .delete_branch(&DeleteBranch::new(["backup", "feature"]))
        .unwrap();
    assert_eq!(branch_names(&fx.git), ["main"]);
}

#[test]
fn test_branch_list_patterns() {
    let fx = fixture();
    commit_a_file(&fx);
    fx.git.create_branch(&CreateBranch::new("feat/a")).unwrap();
    fx.git.create_branch(&CreateBranch::new("feat/b")).unwrap();

    let list = ListBranches {
        patterns: vec!["feat/*".to_string()],
        format: Some("%(refname:short)".to_string()),
        ..ListBranches::default()
    };
    assert_eq!(fx.git.list_branches(&list).unwrap(), "feat/a\nfeat/b");
}

#[test]
fn test_set_and_unset_upstream() {
    let fx = fixture();
    commit_a_file(&fx);
    run_git(&["push", "-q", "origin", "main"], &fx.local);

    fx.git
        .set_upstream(&SetUpstream::new("origin/main").branch("main"))
        .unwrap();
    assert_eq!(
        run_git(&["config", "branch.main.remote"], &fx.local),
        "origin"
    );
    assert_eq!(
        run_git(&["config", "branch.main.merge"], &fx.local),
        "refs/heads/main"
    );

    fx.git
        .unset_upstream(&UnsetUpstream {
            branch: Some("main".to_string()),
        })
        .unwrap();
    let remaining = Command::new("git")
        .args(["config", "branch.main.remote"])
        .current_dir(&fx.local)
        .output()
        .unwrap();
    assert!(!remaining.status.success());
}

#[test]
fn test_git_failure_keeps_exit_code() {
    let fx = fixture();
    let err = fx.git.ls_tree(&LsTreeArgs::new("no-such-ref")).unwrap_err();
    let failure = err.command_failure().expect("command failure");
    assert_eq!(failure.exit_code(), 128);
    assert_eq!(failure.argv(), ["git", "ls-tree", "no-such-ref"]);
    assert!(!failure.stderr().is_empty());
    assert_eq!(err.exit_code(), 128);
}

#[test]
fn test_invalid_request_never_runs() {
    let fx = fixture();
    let err = fx.git.ls_tree(&LsTreeArgs::new("")).unwrap_err();
    assert!(err.command_failure().is_none());
    assert_eq!(err.exit_code(), 65);

    let args = AddArgs {
        all: Some(true),
        update: true,
        ..AddArgs::pathspecs(["a-file"])
    };
    let err = fx.git.add(&args).unwrap_err();
    assert_eq!(err.exit_code(), 64);
}

#[test]
fn test_main_options_apply() {
    let fx = fixture();
    commit_a_file(&fx);

    let elsewhere = Git::new()
        .with_opts(|opts| opts.chdir.push(fx.local.clone()))
        .with_envs(|envs| {
            envs.set("GIT_CONFIG_NOSYSTEM", "1");
        });
    let listing = elsewhere.ls_tree(&LsTreeArgs::new("HEAD")).unwrap();
    assert!(listing.ends_with("\ta-file"), "{listing}");
}

#[test]
fn test_option_shaped_branch_name_keeps_branches() {
    let fx = fixture();
    commit_a_file(&fx);
    fx.git.create_branch(&CreateBranch::new("feature")).unwrap();

    let args = CreateBranch::builder()
        .name("-D")
        .start_point("feature")
        .build();
    let err = fx.git.create_branch(&args).unwrap_err();
    assert!(err.command_failure().is_none());
    assert_eq!(err.exit_code(), 65);
    assert_eq!(branch_names(&fx.git), ["feature", "main"]);
}
