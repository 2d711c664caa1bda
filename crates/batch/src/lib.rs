// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Batch processing for Dialpad provisioning.
//!
//! Loads run settings, parses a user action document and drives each
//! record through an [`ActionProcessor`](dialpad_provision::ActionProcessor),
//! writing one report row per record.

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

mod config;
mod error;
mod input;
mod runner;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_API_BASE_URL, DEFAULT_SMTP_PORT, NotificationSettings, Settings};
pub use error::{BatchError, ConfigError};
pub use input::{BatchRecord, parse_batch};
pub use runner::{BatchSummary, MALFORMED_RECORD, run_batch, run_batch_files, write_report};
