// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod command;
mod directory;
mod notify;
mod process;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use command::Command;
pub use directory::{Directory, DirectoryError, Existence, NewUser};
pub use notify::{Notice, Notifier};
pub use process::{ActionProcessor, ProcessorSettings, messages};
