// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    CommandFailure, ConfigError, EXIT_DATA_ERR, EXIT_USAGE, FrontError, FrontResult, GitError,
    exit_code_of,
};
use crate::core::env::overrides::EnvOverrides;

fn failure(code: i32, stderr: &str) -> CommandFailure {
    let mut env = EnvOverrides::new();
    env.set("GIT_TRACE", 1);
    CommandFailure::new(
        vec!["git".into(), "ls-tree".into(), "nope".into()],
        env,
        String::new(),
        stderr.into(),
        code,
    )
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "global".to_string(),
        key: "output_log_level".to_string(),
        message: "log level must be 0-6, got 9".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'output_log_level' in section '[global]': log level must be 0-6, got 9"
    );
}

#[test]
fn test_conflict_display() {
    let err = GitError::Conflict {
        subcommand: "hash-object",
        first: "--stdin",
        second: "--stdin-paths",
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"hash-object: --stdin and --stdin-paths are not allowed together"
    );
}

#[test]
fn test_command_failure_display_includes_stderr() {
    let err = GitError::from(failure(128, "fatal: Not a valid object name nope\n"));
    insta::assert_snapshot!(
        err.to_string(),
        @"`git ls-tree nope` exited with code 128: fatal: Not a valid object name nope"
    );
}

#[test]
fn test_command_failure_display_without_stderr() {
    let err = GitError::from(failure(1, "  \n"));
    assert_eq!(err.to_string(), "`git ls-tree nope` exited with code 1");
}

#[test]
fn test_exit_codes() {
    let conflict = GitError::Conflict {
        subcommand: "status",
        first: "--long",
        second: "-z",
    };
    let requires = GitError::Requires {
        subcommand: "add",
        option: "--ignore-missing",
        requires: "--dry-run",
    };
    let invalid = GitError::InvalidValue {
        subcommand: "ls-tree",
        option: "--abbrev",
        message: "must be between 0 and 40".into(),
    };
    let env = GitError::InvalidEnvName { name: "A=B".into() };
    let failed = GitError::from(failure(129, ""));

    assert_eq!(conflict.exit_code(), EXIT_USAGE);
    assert_eq!(requires.exit_code(), EXIT_USAGE);
    assert_eq!(invalid.exit_code(), EXIT_DATA_ERR);
    assert_eq!(env.exit_code(), EXIT_DATA_ERR);
    assert_eq!(failed.exit_code(), 129);
    assert!(conflict.is_validation());
    assert!(!failed.is_validation());
}

#[test]
fn test_command_failure_accessor() {
    let err: FrontError = GitError::from(failure(2, "boom")).into();
    let failure = err.command_failure().expect("should expose the failure");
    assert_eq!(failure.exit_code(), 2);
    assert_eq!(failure.stderr(), "boom");
    assert_eq!(failure.argv()[1], "ls-tree");
    assert_eq!(failure.env().get("GIT_TRACE"), Some("1"));
    assert_eq!(err.exit_code(), 2);

    let other = FrontError::Other("x".into());
    assert!(other.command_failure().is_none());
    assert_eq!(other.exit_code(), 1);
}

#[test]
fn test_exit_code_of_anyhow() {
    let front: anyhow::Error = FrontError::from(GitError::from(failure(128, "fatal"))).into();
    assert_eq!(exit_code_of(&front), 128);

    let git: anyhow::Error = GitError::Requires {
        subcommand: "add",
        option: "--ignore-missing",
        requires: "--dry-run",
    }
    .into();
    assert_eq!(exit_code_of(&git), EXIT_USAGE);

    let wrapped = git.context("while loading config");
    assert_eq!(exit_code_of(&wrapped), EXIT_USAGE);

    assert_eq!(exit_code_of(&anyhow::anyhow!("plain")), 1);
}

#[test]
fn test_front_error_size() {
    // Box<str> (Other) is 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<FrontError>();
    assert!(size <= 24, "FrontError is {size} bytes, expected <= 24");
}

#[test]
fn test_front_result_size() {
    let size = std::mem::size_of::<FrontResult<()>>();
    assert!(size <= 24, "FrontResult<()> is {size} bytes, expected <= 24");
}
