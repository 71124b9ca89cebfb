// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::loader::parse_assignment;
use super::types::{GitConfig, GlobalConfig};
use super::{Config, ConfigLoader};
use crate::git::{ConfigValue, GitOpts, GitRunner};
use crate::logging::LogLevel;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn toml_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(file, "{content}").expect("failed to write temp file");
    file
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global, GlobalConfig::default());
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert_eq!(config.git.program, "git");
    assert!(!config.git.non_interactive);
    assert_eq!(config.options, GitOpts::default());
    assert!(config.env.is_empty());
}

#[test]
fn test_config_parse() {
    let config = Config::parse(
        r#"
[global]
output_log_level = 4
log_file = "logs/gitfront.log"

[git]
program = "/usr/bin/git"
root_dir = "/work/repo"
non_interactive = true

[options]
no_pager = true
namespace = "staging"

[env]
GIT_AUTHOR_NAME = "someone"
"#,
    )
    .expect("config should parse");

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(
        config.global.log_file,
        Some(PathBuf::from("logs/gitfront.log"))
    );
    assert_eq!(config.git.program, "/usr/bin/git");
    assert_eq!(config.git.root_dir, Some(PathBuf::from("/work/repo")));
    assert!(config.git.non_interactive);
    assert!(config.options.no_pager);
    assert_eq!(config.options.namespace.as_deref(), Some("staging"));
    assert_eq!(
        config.env_overrides().get("GIT_AUTHOR_NAME"),
        Some("someone")
    );
}

#[test]
fn test_log_level_out_of_range_rejected() {
    let result = Config::parse("[global]\n output_log_level = 9");
    assert!(result.is_err(), "levels above 6 should be rejected");
}

#[test]
fn test_deny_unknown_fields_top_level() {
    let result = Config::parse("[paths]\n prefix = \"/build\"");
    assert!(result.is_err(), "unknown sections should be rejected");
}

#[test]
fn test_deny_unknown_fields_options() {
    let result = Config::parse("[options]\n no_such_flag = true");
    assert!(result.is_err(), "unknown main options should be rejected");
}

#[test]
fn test_build_validates_main_options() {
    let err = Config::parse("[options]\n paginate = true\n no_pager = true")
        .expect_err("conflicting main options should fail the build");
    insta::assert_snapshot!(
        err.to_string(),
        @"git: --paginate and --no-pager are not allowed together"
    );
}

#[test]
fn test_build_validates_env_names() {
    let err = Config::parse("[env]\n \"NOT-A-NAME\" = \"x\"")
        .expect_err("invalid env names should fail the build");
    assert!(err.to_string().contains("NOT-A-NAME"), "{err}");
}

#[test]
fn test_env_overrides_uppercase_and_unset() {
    let config = Config {
        git: GitConfig {
            unset_env: vec!["git_dir".to_string()],
            ..GitConfig::default()
        },
        env: [("git_author_name".to_string(), "me".to_string())]
            .into_iter()
            .collect(),
        ..Config::default()
    };

    let envs = config.env_overrides();
    assert_eq!(envs.get("GIT_AUTHOR_NAME"), Some("me"));
    assert!(envs.contains("GIT_DIR"));
    assert_eq!(envs.get("GIT_DIR"), None);
    assert_eq!(envs.len(), 2);
}

#[test]
fn test_git_from_config() {
    let mut options = GitOpts::new();
    options.no_pager = true;
    options
        .config
        .insert("core.quotepath".to_string(), ConfigValue::from(false));

    let config = Config {
        git: GitConfig {
            program: "git".to_string(),
            root_dir: Some(PathBuf::from("/work/repo")),
            non_interactive: true,
            unset_env: Vec::new(),
        },
        options,
        env: [("GIT_AUTHOR_NAME".to_string(), "someone".to_string())]
            .into_iter()
            .collect(),
        ..Config::default()
    };

    let git = config.git();
    assert_eq!(git.dir(), Some(std::path::Path::new("/work/repo")));
    assert_eq!(git.runner().program(), "git");
    insta::assert_snapshot!(
        git.build_main_args().join(" "),
        @"-c core.quotepath= --no-pager"
    );
    assert_eq!(git.envs().get("GIT_AUTHOR_NAME"), Some("someone"));
    assert_eq!(git.envs().get("GIT_TERMINAL_PROMPT"), Some("0"));
    assert_eq!(git.envs().get("GCM_INTERACTIVE"), Some("never"));
}

#[test]
fn test_explicit_env_beats_non_interactive_defaults() {
    let config = Config::parse(
        r#"
[git]
non_interactive = true
unset_env = ["gcm_interactive"]

[env]
GIT_TERMINAL_PROMPT = "1"
"#,
    )
    .expect("config should parse");

    let git = config.git();
    assert_eq!(git.envs().get("GIT_TERMINAL_PROMPT"), Some("1"));
    assert_eq!(
        git.envs().value("GCM_INTERACTIVE"),
        Some(&crate::core::env::types::EnvValue::Removed)
    );
}

#[test]
fn test_git_from_default_config_is_plain() {
    let git = Config::default().git();
    assert!(git.dir().is_none());
    assert!(git.build_main_args().is_empty());
    assert!(git.envs().is_empty());
}

#[test]
fn test_format_options_deterministic() {
    let config = Config::parse(
        r#"
[git]
non_interactive = true

[options]
no_pager = true

[env]
GIT_AUTHOR_NAME = "someone"
"#,
    )
    .expect("config should parse");

    assert_eq!(config.format_options(), config.format_options());
    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    env.GCM_INTERACTIVE     = never
    env.GIT_AUTHOR_NAME     = someone
    env.GIT_TERMINAL_PROMPT = 0
    git.main_args           = --no-pager
    git.non_interactive     = true
    git.program             = git
    global.file_log_level   = 5
    global.output_log_level = 3
    ");
}

#[test]
fn test_parse_assignment() {
    assert_eq!(
        parse_assignment("git.program=/opt/git").expect("valid"),
        ("git.program", "/opt/git")
    );
    assert_eq!(
        parse_assignment("env.GIT_TRACE=a=b").expect("valid"),
        ("env.GIT_TRACE", "a=b")
    );
    assert!(parse_assignment("git.program").is_err());
    assert!(parse_assignment("program=git").is_err());
    assert!(parse_assignment(".program=git").is_err());
}

// --- ConfigLoader Tests ---

#[test]
fn test_config_loader_add_toml_file_success() {
    let file = toml_file("[git]\nprogram = \"/opt/git/bin/git\"");

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .build()
        .expect("build should succeed");

    assert_eq!(config.git.program, "/opt/git/bin/git");
}

#[test]
fn test_config_loader_add_toml_file_not_found() {
    let result = ConfigLoader::new()
        .add_toml_file("/nonexistent/path/to/gitfront.toml")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_config_loader_add_toml_file_invalid_toml() {
    let file = toml_file("this is not valid toml {{{{{{");
    let result = ConfigLoader::new().add_toml_file(file.path()).build();
    assert!(result.is_err(), "build should fail with invalid TOML");
}

#[test]
fn test_config_loader_optional_only_tracks_existing() {
    let loader = ConfigLoader::new().add_toml_file_optional("/nonexistent/gitfront.toml");
    assert!(loader.loaded_files().is_empty());
    let config = loader.build().expect("missing optional file is fine");
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_loader_format_loaded_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("[git]\n program = \"git\"")
        .add_toml_str("[options]\n bare = true");

    insta::assert_snapshot!(loader.format_loaded_files().join("\n"), @r"
    1. [string] <string>
    2. [string] <string>
    ");
}

#[test]
fn test_config_loader_with_env_prefix() {
    // SAFETY: the variable name is unique to this test.
    unsafe {
        std::env::set_var("GITFRONTTEST_GIT__NON_INTERACTIVE", "true");
    }

    let result = ConfigLoader::new()
        .add_toml_str("[git]\n non_interactive = false")
        .with_env_prefix("GITFRONTTEST")
        .build();

    // SAFETY: same as above.
    unsafe {
        std::env::remove_var("GITFRONTTEST_GIT__NON_INTERACTIVE");
    }

    let config = result.expect("build should succeed");
    assert!(config.git.non_interactive, "env var should override TOML value");
}

#[test]
fn test_config_loader_set_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[options]\n bare = false")
        .set("options.bare", true)
        .expect("set should succeed")
        .build()
        .expect("build should succeed");

    assert!(config.options.bare, "set override should take effect");
}

#[test]
fn test_config_loader_set_assignment() {
    let config = ConfigLoader::new()
        .set_assignment("global.output_log_level=5")
        .and_then(|loader| loader.set_assignment("git.program=/usr/local/bin/git"))
        .expect("assignments should apply")
        .build()
        .expect("build should succeed");

    assert_eq!(config.global.output_log_level, LogLevel::TRACE);
    assert_eq!(config.git.program, "/usr/local/bin/git");
}

#[test]
fn test_config_loader_layered_sources() {
    let file = toml_file(
        r#"
[git]
program = "/from/file"
non_interactive = true

[options]
namespace = "file"
"#,
    );

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .add_toml_str("[options]\n namespace = \"string\"")
        .build()
        .expect("build should succeed");

    assert_eq!(config.options.namespace.as_deref(), Some("string"));
    assert_eq!(config.git.program, "/from/file", "file value should persist");
    assert!(config.git.non_interactive, "file value should persist");
}

#[test]
fn test_config_loader_build_deserialization_error() {
    let err = ConfigLoader::new()
        .add_toml_str("[git]\n non_interactive = \"not a boolean\"")
        .build()
        .expect_err("build should fail with type mismatch");

    let message = err.to_string();
    assert!(
        message.contains("non_interactive") || message.contains("invalid type"),
        "error should mention the problematic field: {message}"
    );
}
