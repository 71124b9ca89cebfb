// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment overrides layered on top of an inherited environment.
//!
//! ```text
//! set(k, v)   -> k: Set(v)      child sees k=v
//! remove(k)   -> k: Removed     child never sees k
//! unset(k)    -> k dropped      child inherits k from the parent
//! merge(o)    -> o's entries win key by key
//! ```

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use super::types::EnvValue;
use crate::error::GitError;

/// Pattern for names a child environment can carry.
fn env_name_regex() -> Option<&'static Regex> {
    static ENV_NAME: OnceLock<Option<Regex>> = OnceLock::new();
    ENV_NAME
        .get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").ok())
        .as_ref()
}

/// Returns true if `name` is usable as an environment variable name.
#[must_use]
pub fn is_valid_env_name(name: &str) -> bool {
    env_name_regex().is_some_and(|re| re.is_match(name))
}

/// Requested changes to a child process environment, keyed by name.
///
/// Iteration order is sorted by name, so argv logs and error reports are
/// stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    vars: BTreeMap<String, EnvValue>,
}

impl EnvOverrides {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Sets `key` to `value` in the child environment.
    pub fn set(&mut self, key: impl AsRef<str>, value: impl Into<EnvValue>) -> &mut Self {
        self.vars.insert(key.as_ref().to_string(), value.into());
        self
    }

    /// Strips `key` from the child environment even if the parent has it.
    pub fn remove(&mut self, key: impl AsRef<str>) -> &mut Self {
        self.vars.insert(key.as_ref().to_string(), EnvValue::Removed);
        self
    }

    /// Forgets any override for `key`; the child inherits it unchanged.
    pub fn unset(&mut self, key: impl AsRef<str>) -> &mut Self {
        self.vars.remove(key.as_ref());
        self
    }

    /// Layers `other` on top of `self`; entries in `other` win.
    pub fn merge(&mut self, other: &Self) -> &mut Self {
        for (key, value) in &other.vars {
            self.vars.insert(key.clone(), value.clone());
        }
        self
    }

    /// Returns the value `key` is set to, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).and_then(EnvValue::as_set)
    }

    /// Returns the raw override for `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&EnvValue> {
        self.vars.get(key)
    }

    /// Returns true if `key` is set or removed.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnvValue)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Variables the child will see with a value set by these overrides.
    #[must_use]
    pub fn build_envs(&self) -> BTreeMap<String, String> {
        self.vars
            .iter()
            .filter_map(|(k, v)| v.as_set().map(|v| (k.clone(), v.to_string())))
            .collect()
    }

    /// Names given a value, without the values.
    pub fn set_names(&self) -> impl Iterator<Item = &str> {
        self.vars
            .iter()
            .filter(|(_, v)| v.as_set().is_some())
            .map(|(k, _)| k.as_str())
    }

    /// Names stripped from the child environment.
    pub fn removed(&self) -> impl Iterator<Item = &str> {
        self.vars
            .iter()
            .filter(|(_, v)| matches!(v, EnvValue::Removed))
            .map(|(k, _)| k.as_str())
    }

    /// Checks every name before anything is spawned.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::InvalidEnvName`] for the first name that is empty
    /// or contains characters outside `[A-Za-z0-9_]`, or starts with a digit.
    pub fn validate(&self) -> Result<(), GitError> {
        match self.vars.keys().find(|k| !is_valid_env_name(k)) {
            Some(name) => Err(GitError::InvalidEnvName { name: name.clone() }),
            None => Ok(()),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for EnvOverrides
where
    K: AsRef<str>,
    V: Into<EnvValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        for (key, value) in iter {
            overrides.set(key, value);
        }
        overrides
    }
}
