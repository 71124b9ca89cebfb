// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! EnvOverrides (what the caller asked for)
//!   GIT_DIR      -> Set("/repo/.git")
//!   GIT_TRACE    -> Set("1")
//!   GIT_PAGER    -> Removed
//!        |
//!        v   ProcessBuilder::envs()
//! child process environment
//!   inherited from the parent, overlay applied on top
//! ```
//!
//! Names are validated against the POSIX shape before anything is spawned.

pub mod overrides;
pub mod types;
