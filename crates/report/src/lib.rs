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

mod writer;

#[cfg(test)]
mod tests;

pub use writer::{REPORT_HEADER, ReportError, ReportWriter};

/// The outcome of processing one batch record.
///
/// Every record produces exactly one outcome, whatever went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The requested change was applied.
    Success(String),
    /// The requested change was not applied, with a human-readable reason.
    Error(String),
}

impl Outcome {
    /// Creates a success outcome.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    /// Creates an error outcome.
    #[must_use]
    pub fn error(reason: impl Into<String>) -> Self {
        Self::Error(reason.into())
    }

    /// Returns `true` for a success outcome.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the message or reason without its status prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Error(message) => message,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success(message) => write!(f, "SUCCESS: {message}"),
            Self::Error(reason) => write!(f, "ERROR: {reason}"),
        }
    }
}

/// One row of the outcome report.
///
/// `action` and `username` are echoed exactly as they appeared in the
/// input so that an unrecognized action can still be traced back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    /// The action text from the input record.
    pub action: String,
    /// The username from the input record.
    pub username: String,
    /// What happened.
    pub outcome: Outcome,
}

impl ActionResult {
    /// Creates a new `ActionResult`.
    ///
    /// # Arguments
    ///
    /// * `action` - The action text from the input record
    /// * `username` - The username from the input record
    /// * `outcome` - The result of processing the record
    #[must_use]
    pub fn new(action: &str, username: &str, outcome: Outcome) -> Self {
        Self {
            action: action.to_string(),
            username: username.to_string(),
            outcome,
        }
    }
}
