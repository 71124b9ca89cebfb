// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Static option rule tables.
//!
//! ```text
//! requested flags  {"--long", "-z"}
//!        |
//!        v
//! check("status", &flags, STATUS_RULES)
//!   Conflicts("--long", "-z")          -> GitError::Conflict
//!   Exclusive(&["-l", "--name-only"])  -> GitError::Conflict (first two hit)
//!   Requires("--ignore-missing", "-n") -> GitError::Requires
//! ```
//!
//! Value checks that don't fit a table (ranges, empty names, positionals
//! git would parse as options, non-UTF-8 paths) live next to it as small
//! helpers so every subcommand reports them the same way.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::GitError;

/// The flags one invocation asked for, by their git spelling.
pub type FlagSet = BTreeSet<&'static str>;

/// One constraint between flags of a single subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Both flags may not be present together.
    Conflicts(&'static str, &'static str),
    /// At most one flag of the group may be present.
    Exclusive(&'static [&'static str]),
    /// The first flag is only valid together with the second.
    Requires(&'static str, &'static str),
}

/// Collects the names whose condition holds.
#[must_use]
pub fn flag_set<const N: usize>(flags: [(bool, &'static str); N]) -> FlagSet {
    flags
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect()
}

/// Checks `present` against every rule, reporting the first violation.
///
/// # Errors
///
/// Returns [`GitError::Conflict`] or [`GitError::Requires`].
pub fn check(
    subcommand: &'static str,
    present: &FlagSet,
    rules: &[Rule],
) -> Result<(), GitError> {
    for rule in rules {
        match *rule {
            Rule::Conflicts(first, second) => {
                if present.contains(first) && present.contains(second) {
                    return Err(GitError::Conflict {
                        subcommand,
                        first,
                        second,
                    });
                }
            }
            Rule::Exclusive(group) => {
                let mut hits = group.iter().copied().filter(|flag| present.contains(flag));
                if let (Some(first), Some(second)) = (hits.next(), hits.next()) {
                    return Err(GitError::Conflict {
                        subcommand,
                        first,
                        second,
                    });
                }
            }
            Rule::Requires(option, requires) => {
                if present.contains(option) && !present.contains(requires) {
                    return Err(GitError::Requires {
                        subcommand,
                        option,
                        requires,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Rejects a value outside `range`.
///
/// # Errors
///
/// Returns [`GitError::InvalidValue`].
pub fn in_range(
    subcommand: &'static str,
    option: &'static str,
    value: u32,
    range: RangeInclusive<u32>,
) -> Result<(), GitError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(GitError::InvalidValue {
            subcommand,
            option,
            message: format!(
                "{value} is outside {}..={}",
                range.start(),
                range.end()
            ),
        })
    }
}

/// Rejects an empty name.
///
/// # Errors
///
/// Returns [`GitError::InvalidValue`].
pub fn non_empty(
    subcommand: &'static str,
    option: &'static str,
    value: &str,
) -> Result<(), GitError> {
    if value.is_empty() {
        Err(GitError::InvalidValue {
            subcommand,
            option,
            message: "must not be empty".to_string(),
        })
    } else {
        Ok(())
    }
}

/// Rejects a positional value git would read as an option.
///
/// Only for positionals that cannot follow `--`; joined `--flag=value`
/// forms are safe.
///
/// # Errors
///
/// Returns [`GitError::InvalidValue`].
pub fn not_option(
    subcommand: &'static str,
    option: &'static str,
    value: &str,
) -> Result<(), GitError> {
    if value.starts_with('-') {
        Err(GitError::InvalidValue {
            subcommand,
            option,
            message: format!("'{value}' would be read as an option"),
        })
    } else {
        Ok(())
    }
}

/// Returns `path` as UTF-8, since argv is built from strings.
///
/// # Errors
///
/// Returns [`GitError::InvalidValue`] for a path that is not valid UTF-8.
pub fn utf8_path<'a>(
    subcommand: &'static str,
    option: &'static str,
    path: &'a Path,
) -> Result<&'a str, GitError> {
    path.to_str().ok_or_else(|| GitError::InvalidValue {
        subcommand,
        option,
        message: format!("'{}' is not valid UTF-8", path.display()),
    })
}

fn config_key_regex() -> Option<&'static Regex> {
    static CONFIG_KEY: OnceLock<Option<Regex>> = OnceLock::new();
    // section[.subsection].name; `=` would end the key on git's side
    CONFIG_KEY
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9-]+(\.[^\n=]+)?\.[A-Za-z][A-Za-z0-9-]*$").ok())
        .as_ref()
}

/// Returns true if `key` is shaped like a git configuration key.
#[must_use]
pub fn is_valid_config_key(key: &str) -> bool {
    config_key_regex().is_some_and(|re| re.is_match(key))
}
