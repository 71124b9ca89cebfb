// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variables git reads.
//!
//! Any name can go into [`EnvOverrides`](crate::core::env::overrides::EnvOverrides);
//! this enum names the common ones so callers don't misspell them.

use std::fmt;

/// Well-known variables that change how git behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GitEnvVar {
    // repository location
    GitDir,
    GitWorkTree,
    GitIndexFile,
    GitObjectDirectory,
    GitAlternateObjectDirectories,
    GitNamespace,
    GitCeilingDirectories,
    // identity
    GitAuthorName,
    GitAuthorEmail,
    GitAuthorDate,
    GitCommitterName,
    GitCommitterEmail,
    GitCommitterDate,
    // external programs
    GitEditor,
    GitPager,
    GitSsh,
    GitSshCommand,
    GitAskpass,
    GitTerminalPrompt,
    // configuration
    GitConfigNosystem,
    GitConfigGlobal,
    GitNoReplaceObjects,
    GitOptionalLocks,
    GitAdvice,
    // tracing
    GitTrace,
    GitTraceSetup,
    /// Git Credential Manager prompt mode.
    GcmInteractive,
}

impl GitEnvVar {
    /// All variables, in declaration order.
    pub const ALL: [Self; 27] = [
        Self::GitDir,
        Self::GitWorkTree,
        Self::GitIndexFile,
        Self::GitObjectDirectory,
        Self::GitAlternateObjectDirectories,
        Self::GitNamespace,
        Self::GitCeilingDirectories,
        Self::GitAuthorName,
        Self::GitAuthorEmail,
        Self::GitAuthorDate,
        Self::GitCommitterName,
        Self::GitCommitterEmail,
        Self::GitCommitterDate,
        Self::GitEditor,
        Self::GitPager,
        Self::GitSsh,
        Self::GitSshCommand,
        Self::GitAskpass,
        Self::GitTerminalPrompt,
        Self::GitConfigNosystem,
        Self::GitConfigGlobal,
        Self::GitNoReplaceObjects,
        Self::GitOptionalLocks,
        Self::GitAdvice,
        Self::GitTrace,
        Self::GitTraceSetup,
        Self::GcmInteractive,
    ];

    /// The variable name as git reads it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GitDir => "GIT_DIR",
            Self::GitWorkTree => "GIT_WORK_TREE",
            Self::GitIndexFile => "GIT_INDEX_FILE",
            Self::GitObjectDirectory => "GIT_OBJECT_DIRECTORY",
            Self::GitAlternateObjectDirectories => "GIT_ALTERNATE_OBJECT_DIRECTORIES",
            Self::GitNamespace => "GIT_NAMESPACE",
            Self::GitCeilingDirectories => "GIT_CEILING_DIRECTORIES",
            Self::GitAuthorName => "GIT_AUTHOR_NAME",
            Self::GitAuthorEmail => "GIT_AUTHOR_EMAIL",
            Self::GitAuthorDate => "GIT_AUTHOR_DATE",
            Self::GitCommitterName => "GIT_COMMITTER_NAME",
            Self::GitCommitterEmail => "GIT_COMMITTER_EMAIL",
            Self::GitCommitterDate => "GIT_COMMITTER_DATE",
            Self::GitEditor => "GIT_EDITOR",
            Self::GitPager => "GIT_PAGER",
            Self::GitSsh => "GIT_SSH",
            Self::GitSshCommand => "GIT_SSH_COMMAND",
            Self::GitAskpass => "GIT_ASKPASS",
            Self::GitTerminalPrompt => "GIT_TERMINAL_PROMPT",
            Self::GitConfigNosystem => "GIT_CONFIG_NOSYSTEM",
            Self::GitConfigGlobal => "GIT_CONFIG_GLOBAL",
            Self::GitNoReplaceObjects => "GIT_NO_REPLACE_OBJECTS",
            Self::GitOptionalLocks => "GIT_OPTIONAL_LOCKS",
            Self::GitAdvice => "GIT_ADVICE",
            Self::GitTrace => "GIT_TRACE",
            Self::GitTraceSetup => "GIT_TRACE_SETUP",
            Self::GcmInteractive => "GCM_INTERACTIVE",
        }
    }
}

impl AsRef<str> for GitEnvVar {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for GitEnvVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
