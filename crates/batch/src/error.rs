// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fatal errors for a batch run.
//!
//! Anything in here stops the run. Per-record problems never surface as
//! these errors; they end up in the report instead.

use std::path::PathBuf;

use dialpad_provision_report::ReportError;
use thiserror::Error;

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("Unable to read settings file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid settings JSON.
    #[error("Unable to parse settings: {0}")]
    Invalid(#[from] serde_json::Error),

    /// A required setting is empty.
    #[error("Missing required setting '{field}'")]
    MissingValue { field: &'static str },
}

/// Errors that abort a batch run.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The input file could not be opened or read.
    #[error("Unable to read input file {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not a user action document.
    #[error("Input is not a valid user action document: {0}")]
    InvalidInput(#[from] serde_json::Error),

    /// The output file could not be created.
    #[error("Unable to create output file {}: {source}", path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the report failed part way through.
    #[error("Report writing failed after {rows_written} row(s): {source}")]
    ReportWrite {
        rows_written: usize,
        #[source]
        source: ReportError,
    },
}
