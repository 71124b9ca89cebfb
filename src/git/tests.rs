// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::backend::{GitRunner, Invocation};
use super::command::Git;
use super::env::GitEnvVar;
use super::opts::{ConfigValue, GitOpts};
use super::rules::{
    FlagSet, Rule, check, flag_set, in_range, is_valid_config_key, non_empty, not_option,
    utf8_path,
};
use super::subcmd::{LsTreeArgs, StatusArgs, VersionArgs};
use crate::core::env::types::EnvValue;
use crate::core::process::builder::ProcessOutput;
use crate::error::{FrontError, GitError};

/// Records every invocation and answers with a canned output.
#[derive(Debug)]
struct RecordingRunner {
    calls: Mutex<Vec<Invocation>>,
    reply: ProcessOutput,
}

impl RecordingRunner {
    fn replying(exit_code: i32, stdout: &str, stderr: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: ProcessOutput::new(exit_code, stdout.to_string(), stderr.to_string()),
        }
    }

    fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

impl GitRunner for RecordingRunner {
    fn program(&self) -> &str {
        "git"
    }

    fn run(&self, invocation: &Invocation) -> crate::error::FrontResult<ProcessOutput> {
        self.calls.lock().unwrap().push(invocation.clone());
        Ok(self.reply.clone())
    }
}

fn recording() -> Git<RecordingRunner> {
    Git::with_runner(RecordingRunner::replying(0, "", ""))
}

fn git_error(err: FrontError) -> GitError {
    match err {
        FrontError::Git(e) => *e,
        other => panic!("expected a git error, got {other:?}"),
    }
}

// --- rules ---

const RULES: &[Rule] = &[
    Rule::Conflicts("--a", "--b"),
    Rule::Exclusive(&["-x", "-y", "-z"]),
    Rule::Requires("--dep", "--base"),
];

#[test]
fn test_rules_empty_set_passes() {
    assert!(check("demo", &FlagSet::new(), RULES).is_ok());
}

#[test]
fn test_rules_conflict_reported() {
    let flags = flag_set([(true, "--a"), (true, "--b")]);
    let err = check("demo", &flags, RULES).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"demo: --a and --b are not allowed together");
}

#[test]
fn test_rules_exclusive_names_first_two_hits() {
    let flags = flag_set([(false, "-x"), (true, "-y"), (true, "-z")]);
    let err = check("demo", &flags, RULES).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"demo: -y and -z are not allowed together");

    let single = flag_set([(true, "-z")]);
    assert!(check("demo", &single, RULES).is_ok());
}

#[test]
fn test_rules_requires() {
    let alone = flag_set([(true, "--dep")]);
    let err = check("demo", &alone, RULES).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"demo: --dep requires --base");

    let both = flag_set([(true, "--dep"), (true, "--base")]);
    assert!(check("demo", &both, RULES).is_ok());
}

#[test]
fn test_rules_value_helpers() {
    assert!(in_range("demo", "--abbrev", 40, 0..=40).is_ok());
    let err = in_range("demo", "--abbrev", 41, 0..=40).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"demo: invalid value for --abbrev: 41 is outside 0..=40");

    assert!(non_empty("demo", "<name>", "x").is_ok());
    let err = non_empty("demo", "<name>", "").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"demo: invalid value for <name>: must not be empty");
    assert!(not_option("demo", "<name>", "topic").is_ok());
    assert!(not_option("demo", "<name>", "a-b").is_ok());
    let err = not_option("demo", "<name>", "-D").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"demo: invalid value for <name>: '-D' would be read as an option");

    assert_eq!(
        utf8_path("demo", "<file>", Path::new("src/lib.rs")).ok(),
        Some("src/lib.rs")
    );
}

#[test]
fn test_config_key_shapes() {
    assert!(is_valid_config_key("core.quotepath"));
    assert!(is_valid_config_key("remote.origin.url"));
    assert!(is_valid_config_key("url.https://example.com/.insteadOf"));
    assert!(!is_valid_config_key("core"));
    assert!(!is_valid_config_key("core."));
    assert!(!is_valid_config_key(".name"));
    assert!(!is_valid_config_key("core.1name"));
    assert!(!is_valid_config_key(""));
    // git splits `-c a.x=y.b` at the first `=`
    assert!(!is_valid_config_key("a.x=y.b"));
    assert!(!is_valid_config_key("url.x=y.insteadOf"));
}

// --- main options ---

#[test]
fn test_main_args_single_flag() {
    let git = recording().with_opts(|o| o.no_replace_objects = true);
    assert_eq!(git.build_main_args(), ["--no-replace-objects"]);
}

#[test]
fn test_main_args_emission_order() {
    let opts = GitOpts {
        chdir: vec![PathBuf::from(".")],
        config_env: BTreeMap::from([
            ("comm.user".to_string(), "SUYOG".to_string()),
            ("auth.user".to_string(), "SUHAS".to_string()),
        ]),
        exec_path: Some(PathBuf::from(".")),
        no_pager: true,
        git_dir: Some(PathBuf::from("repo/.git")),
        work_tree: Some(PathBuf::from("repo")),
        namespace: Some("ns".to_string()),
        no_advice: true,
        list_cmds: vec!["main".to_string(), "others".to_string()],
        attr_source: Some("HEAD".to_string()),
        ..GitOpts::default()
    };
    insta::assert_snapshot!(opts.build_main_args().join(" "), @"-C . --config-env auth.user=SUHAS --config-env comm.user=SUYOG --exec-path=. --no-pager --git-dir repo/.git --work-tree repo --namespace ns --no-advice --list-cmds=main,others --attr-source HEAD");
}

#[test]
fn test_small_c_rendering() {
    let cases: [(&[(&str, ConfigValue)], &[&str]); 5] = [
        (&[("foo.bar", ConfigValue::from("baz"))], &["-c", "foo.bar=baz"]),
        (&[("foo.bar", ConfigValue::from(""))], &["-c", "foo.bar="]),
        (&[("foo.bar", ConfigValue::from(true))], &["-c", "foo.bar"]),
        (&[("foo.bar", ConfigValue::from(false))], &["-c", "foo.bar="]),
        (
            &[
                ("g.h", ConfigValue::from(false)),
                ("a.b", ConfigValue::from("x")),
                ("e.f", ConfigValue::from(true)),
                ("c.d", ConfigValue::from("")),
            ],
            &["-c", "a.b=x", "-c", "c.d=", "-c", "e.f", "-c", "g.h="],
        ),
    ];
    for (input, expected) in cases {
        let opts = GitOpts {
            config: input
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
            ..GitOpts::default()
        };
        assert_eq!(opts.build_main_args(), expected, "input {input:?}");
    }
    assert!(GitOpts::default().build_main_args().is_empty());
}

#[test]
fn test_with_opts_later_wins_and_clearing_drops() {
    let base = recording().with_opts(|o| o.exec_path = Some(PathBuf::from("tmp")));
    let changed = base.with_opts(|o| o.exec_path = Some(PathBuf::from("other")));
    assert_eq!(changed.build_main_args(), ["--exec-path=other"]);

    let cleared = changed.with_opts(|o| o.exec_path = None);
    assert!(cleared.build_main_args().is_empty());

    // receivers are never modified
    assert_eq!(base.build_main_args(), ["--exec-path=tmp"]);
    assert_eq!(changed.build_main_args(), ["--exec-path=other"]);
}

#[test]
fn test_with_opts_accumulates_across_calls() {
    let git = recording()
        .with_opts(|o| o.no_pager = true)
        .with_opts(|o| o.chdir.push(PathBuf::from("a")))
        .with_opts(|o| {
            o.config.insert("core.quotepath".into(), false.into());
        });
    assert_eq!(
        git.build_main_args(),
        ["-C", "a", "-c", "core.quotepath=", "--no-pager"]
    );
}

#[test]
fn test_opts_and_envs_are_independent() {
    let base = recording();
    let with_envs = base.with_envs(|e| {
        e.set(GitEnvVar::GitTrace, true);
    });
    let with_both = with_envs.with_opts(|o| o.no_pager = true);

    assert!(base.envs().is_empty());
    assert!(base.build_main_args().is_empty());
    assert!(with_envs.build_main_args().is_empty());
    assert_eq!(with_both.envs().get("GIT_TRACE"), Some("true"));
    assert_eq!(with_both.build_main_args(), ["--no-pager"]);

    let opts_only = base.with_opts(|o| o.no_advice = true);
    assert!(opts_only.envs().is_empty());
}

#[test]
fn test_with_envs_unset_on_later_call() {
    let git = recording()
        .with_envs(|e| {
            e.set(GitEnvVar::GitDir, "tmp").set(GitEnvVar::GitTrace, 2);
        })
        .with_envs(|e| {
            e.unset(GitEnvVar::GitDir);
        });
    assert_eq!(
        git.envs().build_envs(),
        BTreeMap::from([("GIT_TRACE".to_string(), "2".to_string())])
    );
}

#[test]
fn test_opts_merge() {
    let mut base = GitOpts {
        no_pager: true,
        namespace: Some("one".into()),
        chdir: vec![PathBuf::from("a")],
        ..GitOpts::default()
    };
    let top = GitOpts {
        namespace: Some("two".into()),
        chdir: vec![PathBuf::from("b")],
        bare: true,
        ..GitOpts::default()
    };
    base.merge(&top);
    assert!(base.no_pager);
    assert!(base.bare);
    assert_eq!(base.namespace.as_deref(), Some("two"));
    assert_eq!(base.chdir, [PathBuf::from("a"), PathBuf::from("b")]);
}

#[test]
fn test_main_option_conflicts() {
    let cases: [(fn(&mut GitOpts), &str); 5] = [
        (
            |o| {
                o.paginate = true;
                o.no_pager = true;
            },
            "git: --paginate and --no-pager are not allowed together",
        ),
        (
            |o| {
                o.glob_pathspecs = true;
                o.noglob_pathspecs = true;
            },
            "git: --glob-pathspecs and --noglob-pathspecs are not allowed together",
        ),
        (
            |o| {
                o.literal_pathspecs = true;
                o.glob_pathspecs = true;
            },
            "git: --literal-pathspecs and --glob-pathspecs are not allowed together",
        ),
        (
            |o| {
                o.literal_pathspecs = true;
                o.noglob_pathspecs = true;
            },
            "git: --literal-pathspecs and --noglob-pathspecs are not allowed together",
        ),
        (
            |o| {
                o.literal_pathspecs = true;
                o.icase_pathspecs = true;
            },
            "git: --literal-pathspecs and --icase-pathspecs are not allowed together",
        ),
    ];
    for (edit, message) in cases {
        let mut opts = GitOpts::default();
        edit(&mut opts);
        let err = opts.validate().unwrap_err();
        assert_eq!(err.to_string(), message);
        assert_eq!(err.exit_code(), 64);
    }
}

#[test]
fn test_main_option_values() {
    let mut opts = GitOpts::default();
    opts.config.insert("nodot".into(), true.into());
    insta::assert_snapshot!(opts.validate().unwrap_err().to_string(), @"git: invalid value for -c: 'nodot' is not a config key");

    let mut opts = GitOpts::default();
    opts.config_env.insert("user.name".into(), "NOT-A-VAR".into());
    insta::assert_snapshot!(opts.validate().unwrap_err().to_string(), @"git: invalid value for --config-env: 'NOT-A-VAR' is not an environment variable name");

    let opts = GitOpts {
        list_cmds: vec![String::new()],
        ..GitOpts::default()
    };
    assert_eq!(opts.validate().unwrap_err().exit_code(), 65);

    let mut opts = GitOpts::default();
    opts.config.insert("a.x=y.b".into(), true.into());
    insta::assert_snapshot!(opts.validate().unwrap_err().to_string(), @"git: invalid value for -c: 'a.x=y.b' is not a config key");

    let mut opts = GitOpts::default();
    opts.config_env.insert("a.x=y.b".into(), "GIT_USER".into());
    assert!(matches!(
        opts.validate(),
        Err(GitError::InvalidValue { option: "--config-env", .. })
    ));

    let mut ok = GitOpts {
        glob_pathspecs: true,
        icase_pathspecs: true,
        ..GitOpts::default()
    };
    ok.config_env.insert("user.name".into(), "GIT_USER".into());
    assert!(ok.validate().is_ok());
}

// --- env var names ---

#[test]
fn test_git_env_var_names() {
    assert_eq!(GitEnvVar::GitDir.as_str(), "GIT_DIR");
    assert_eq!(
        GitEnvVar::GitAlternateObjectDirectories.to_string(),
        "GIT_ALTERNATE_OBJECT_DIRECTORIES"
    );
    assert_eq!(GitEnvVar::GcmInteractive.as_ref(), "GCM_INTERACTIVE");
    for var in GitEnvVar::ALL {
        assert!(crate::core::env::overrides::is_valid_env_name(var.as_str()));
    }
}

// --- Git façade ---

#[test]
fn test_argv_is_main_args_then_subcommand() {
    let git = recording().with_opts(|o| o.no_pager = true);
    let argv = git.argv(&LsTreeArgs::new("HEAD")).unwrap();
    assert_eq!(argv, ["--no-pager", "ls-tree", "HEAD"]);
}

#[test]
fn test_run_passes_invocation_to_runner() {
    let git = recording()
        .root_dir("/some/repo")
        .with_envs(|e| {
            e.set(GitEnvVar::GitTrace, 1);
        });
    git.version_with(&VersionArgs::with_build_options()).unwrap();

    let calls = git.runner().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].argv, ["version", "--build-options"]);
    assert_eq!(calls[0].cwd, Some(PathBuf::from("/some/repo")));
    assert_eq!(calls[0].env.get("GIT_TRACE"), Some("1"));
    assert_eq!(calls[0].stdin, None);
}

#[test]
fn test_invalid_input_never_reaches_runner() {
    let git = recording();

    let conflicting = git.with_opts(|o| {
        o.paginate = true;
        o.no_pager = true;
    });
    assert!(conflicting.version().is_err());

    let bad_env = git.with_envs(|e| {
        e.set("NOT VALID", "x");
    });
    assert!(bad_env.version().is_err());

    let bad_args = StatusArgs {
        renames: Some(false),
        find_renames: Some(50),
        ..StatusArgs::default()
    };
    let err = git_error(git.status(&bad_args).unwrap_err());
    assert!(err.is_validation());

    assert!(git.exec_path().is_ok());
    // only the valid exec_path query ran
    assert_eq!(git.runner().calls().len(), 1);
}

#[test]
fn test_stdout_trailing_whitespace_trimmed() {
    let git = Git::with_runner(RecordingRunner::replying(0, " M a-file\n?? b-file\n\n", ""));
    assert_eq!(git.status(&StatusArgs::short()).unwrap(), " M a-file\n?? b-file");
}

#[test]
fn test_nonzero_exit_becomes_command_failed() {
    let git = Git::with_runner(RecordingRunner::replying(
        128,
        "partial\n",
        "fatal: not a tree object\n",
    ))
    .with_envs(|e| {
        e.set(GitEnvVar::GitTrace, 1).remove(GitEnvVar::GitDir);
    });

    let err = git.ls_tree(&LsTreeArgs::new("nope")).unwrap_err();
    let failure = err.command_failure().expect("command failure").clone();
    assert_eq!(failure.argv(), ["git", "ls-tree", "nope"]);
    assert_eq!(failure.exit_code(), 128);
    assert_eq!(failure.stdout(), "partial\n");
    assert_eq!(failure.stderr(), "fatal: not a tree object\n");
    assert_eq!(failure.env().value("GIT_DIR"), Some(&EnvValue::Removed));
    assert_eq!(err.exit_code(), 128);
    insta::assert_snapshot!(err.to_string(), @"git error: `git ls-tree nope` exited with code 128: fatal: not a tree object");
}

#[test]
fn test_path_queries_use_main_flags() {
    let git = Git::with_runner(RecordingRunner::replying(0, "/usr/lib/git-core\n", ""))
        .with_opts(|o| o.no_pager = true);
    assert_eq!(git.exec_path().unwrap(), PathBuf::from("/usr/lib/git-core"));
    git.html_path().unwrap();
    git.info_path().unwrap();
    git.man_path().unwrap();

    let argvs: Vec<Vec<String>> = git.runner().calls().into_iter().map(|c| c.argv).collect();
    assert_eq!(
        argvs,
        [
            ["--no-pager", "--exec-path"],
            ["--no-pager", "--html-path"],
            ["--no-pager", "--info-path"],
            ["--no-pager", "--man-path"],
        ]
    );
}

#[test]
fn test_non_interactive_sets_prompt_vars() {
    let base = recording();
    let git = base.non_interactive();
    assert_eq!(git.envs().get("GIT_TERMINAL_PROMPT"), Some("0"));
    assert_eq!(git.envs().get("GCM_INTERACTIVE"), Some("never"));
    assert!(base.envs().is_empty());
}

#[test]
#[cfg(unix)]
fn test_main_option_non_utf8_paths_rejected() {
    use std::os::unix::ffi::OsStrExt as _;
    let bad = || PathBuf::from(std::ffi::OsStr::from_bytes(b"repo-\xff"));

    let chdir = GitOpts {
        chdir: vec![bad()],
        ..GitOpts::default()
    };
    assert!(matches!(
        chdir.validate(),
        Err(GitError::InvalidValue { option: "-C", .. })
    ));

    let git_dir = GitOpts {
        git_dir: Some(bad()),
        ..GitOpts::default()
    };
    assert!(matches!(
        git_dir.validate(),
        Err(GitError::InvalidValue { option: "--git-dir", .. })
    ));

    let git = recording().with_opts(|o| o.work_tree = Some(bad()));
    assert!(git.version().is_err());
    assert!(git.runner().calls().is_empty());
}
