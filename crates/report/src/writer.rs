// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV output for action results.

use std::io::Write;

use crate::ActionResult;

/// Column headers of the outcome report.
pub const REPORT_HEADER: [&str; 3] = ["action", "username", "result"];

/// Errors raised while writing the report.
#[derive(Debug)]
pub enum ReportError {
    /// The underlying writer failed.
    Io(std::io::Error),
    /// The CSV encoder failed.
    Csv(csv::Error),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Report I/O error: {err}"),
            Self::Csv(err) => write!(f, "Report encoding error: {err}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Csv(err) => Some(err),
        }
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Writes action results as `action,username,result` rows.
///
/// The header is written on construction, so even an empty batch yields
/// a well-formed report.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
    rows_written: usize,
}

impl<W: Write> ReportWriter<W> {
    /// Creates a report over `inner` and writes the header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be written.
    pub fn new(inner: W) -> Result<Self, ReportError> {
        let mut writer: csv::Writer<W> = csv::Writer::from_writer(inner);
        writer.write_record(REPORT_HEADER)?;
        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    /// Appends one result row.
    ///
    /// # Errors
    ///
    /// Returns an error if the row cannot be encoded or written.
    pub fn write_result(&mut self, result: &ActionResult) -> Result<(), ReportError> {
        let outcome: String = result.outcome.to_string();
        self.writer
            .write_record([result.action.as_str(), result.username.as_str(), &outcome])?;
        self.rows_written += 1;
        Ok(())
    }

    /// Number of data rows written so far, excluding the header.
    #[must_use]
    pub const fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flushes the report and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if buffered rows cannot be flushed.
    pub fn finish(self) -> Result<W, ReportError> {
        self.writer
            .into_inner()
            .map_err(|err| {
                let cause: &std::io::Error = err.error();
                ReportError::Io(std::io::Error::new(cause.kind(), cause.to_string()))
            })
    }
}
