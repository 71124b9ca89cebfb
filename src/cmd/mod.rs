// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config (load, options, inis), git (everything that runs git)
//! ```

pub mod config;
pub mod git;
