// gitfront: Typed Git Command Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Synchronous process spawning.
//!
//! ```text
//! ProcessBuilder::which("git")?
//!   .args() .cwd() .envs() .stdin() .flag()
//!   .run()
//!       --> std::process::Command
//!           stdin written from a helper thread
//!           stdout/stderr collected by wait_with_output
//!       --> ProcessOutput { exit_code, stdout, stderr }
//! ```

pub mod builder;
mod runner;
