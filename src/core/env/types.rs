// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! # Architecture
//!
//! ```text
//! EnvValue: Set(String) | Removed
//!   From: &str, String, Path, PathBuf, bool ("true"/"false"), integers
//! ```

use std::path::{Path, PathBuf};

/// One requested change to a child environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvValue {
    /// Set the variable to this value.
    Set(String),
    /// Strip the variable even if the parent environment has it.
    Removed,
}

impl EnvValue {
    /// Returns the value if this is a `Set`.
    #[must_use]
    pub fn as_set(&self) -> Option<&str> {
        match self {
            Self::Set(value) => Some(value),
            Self::Removed => None,
        }
    }
}

impl From<&str> for EnvValue {
    fn from(value: &str) -> Self {
        Self::Set(value.to_string())
    }
}

impl From<String> for EnvValue {
    fn from(value: String) -> Self {
        Self::Set(value)
    }
}

impl From<&String> for EnvValue {
    fn from(value: &String) -> Self {
        Self::Set(value.clone())
    }
}

impl From<&Path> for EnvValue {
    fn from(value: &Path) -> Self {
        Self::Set(value.to_string_lossy().into_owned())
    }
}

impl From<PathBuf> for EnvValue {
    fn from(value: PathBuf) -> Self {
        Self::from(value.as_path())
    }
}

impl From<&PathBuf> for EnvValue {
    fn from(value: &PathBuf) -> Self {
        Self::from(value.as_path())
    }
}

impl From<bool> for EnvValue {
    fn from(value: bool) -> Self {
        Self::Set(value.to_string())
    }
}

/// Macro to generate `From` implementations for integer values.
macro_rules! impl_from_int {
    ($($int:ty),+ $(,)?) => {
        $(
            impl From<$int> for EnvValue {
                fn from(value: $int) -> Self {
                    Self::Set(value.to_string())
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);
