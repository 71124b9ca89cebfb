// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git version`.

use super::{SubcommandArgs, push_flag};
use crate::error::GitError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionArgs {
    /// `--build-options`: append how this git was built.
    pub build_options: bool,
}

impl VersionArgs {
    #[must_use]
    pub const fn with_build_options() -> Self {
        Self {
            build_options: true,
        }
    }
}

impl SubcommandArgs for VersionArgs {
    const NAME: &'static str = "version";

    fn validate(&self) -> Result<(), GitError> {
        Ok(())
    }

    fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        push_flag(&mut args, self.build_options, "--build-options");
        args
    }
}
