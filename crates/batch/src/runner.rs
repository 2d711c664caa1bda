// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use dialpad_provision::{ActionProcessor, Directory, Notifier};
use dialpad_provision_report::{ActionResult, Outcome, ReportWriter};
use tracing::{debug, error, info};

use crate::error::BatchError;
use crate::input::{BatchRecord, parse_batch};

/// Report reason for entries that could not be parsed.
pub const MALFORMED_RECORD: &str = "malformed record";

/// Counts for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Records processed, equal to report rows written.
    pub total: usize,
    /// Records whose outcome was a success.
    pub succeeded: usize,
    /// Records whose outcome was an error.
    pub failed: usize,
}

impl BatchSummary {
    fn record(&mut self, outcome: &Outcome) {
        self.total += 1;
        if outcome.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} record(s): {} succeeded, {} failed",
            self.total, self.succeeded, self.failed
        )
    }
}

/// Processes already-parsed records and writes one report row per record.
///
/// Records are handled strictly one after another, in order.
///
/// # Errors
///
/// Returns `BatchError::ReportWrite` if the report cannot be written. The
/// error carries the number of rows written before the failure.
pub async fn write_report<D, N, W>(
    processor: &ActionProcessor<D, N>,
    records: &[BatchRecord],
    output: W,
) -> Result<BatchSummary, BatchError>
where
    D: Directory + Sync,
    N: Notifier + Sync,
    W: Write + Send,
{
    let mut report: ReportWriter<W> =
        ReportWriter::new(output).map_err(|source| BatchError::ReportWrite {
            rows_written: 0,
            source,
        })?;
    let mut summary: BatchSummary = BatchSummary::default();

    for (index, record) in records.iter().enumerate() {
        let result: ActionResult = match record {
            BatchRecord::Request(request) => processor.process(request).await,
            BatchRecord::Malformed {
                action,
                username,
                reason,
            } => {
                error!("skipping malformed record {}: {reason}", index + 1);
                ActionResult::new(action, username, Outcome::error(MALFORMED_RECORD))
            }
        };
        debug!(
            "record {}: {},{} -> {}",
            index + 1,
            result.action,
            result.username,
            result.outcome
        );

        summary.record(&result.outcome);
        report
            .write_result(&result)
            .map_err(|source| BatchError::ReportWrite {
                rows_written: report.rows_written(),
                source,
            })?;
    }

    let rows_written: usize = report.rows_written();
    report
        .finish()
        .map_err(|source| BatchError::ReportWrite {
            rows_written,
            source,
        })?;

    Ok(summary)
}

/// Runs a batch from an in-memory reader to a writer.
///
/// The input is parsed completely before anything is processed.
///
/// # Errors
///
/// Returns an error if the input is not a batch document or the report
/// cannot be written.
pub async fn run_batch<D, N, R, W>(
    processor: &ActionProcessor<D, N>,
    input: R,
    output: W,
) -> Result<BatchSummary, BatchError>
where
    D: Directory + Sync,
    N: Notifier + Sync,
    R: Read + Send,
    W: Write + Send,
{
    let records: Vec<BatchRecord> = parse_batch(input)?;
    write_report(processor, &records, output).await
}

/// Runs a batch from `input_path`, writing the report to `output_path`.
///
/// The input is read and parsed before the output file is created, so a
/// bad input never truncates an existing report. Both files are closed
/// when this function returns, on success or failure.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, the output
/// cannot be created, or the report cannot be written.
pub async fn run_batch_files<D, N>(
    processor: &ActionProcessor<D, N>,
    input_path: &Path,
    output_path: &Path,
) -> Result<BatchSummary, BatchError>
where
    D: Directory + Sync,
    N: Notifier + Sync,
{
    let records: Vec<BatchRecord> = {
        let input: File = File::open(input_path).map_err(|source| BatchError::InputUnreadable {
            path: input_path.to_path_buf(),
            source,
        })?;
        info!("opened input file: {}", input_path.display());
        let records: Vec<BatchRecord> = parse_batch(BufReader::new(input))?;
        info!("closed input file: {}", input_path.display());
        records
    };
    info!("read {} record(s)", records.len());

    let output: File =
        File::create(output_path).map_err(|source| BatchError::OutputUnwritable {
            path: output_path.to_path_buf(),
            source,
        })?;
    info!("opened output file: {}", output_path.display());

    let summary: BatchSummary = write_report(processor, &records, BufWriter::new(output)).await?;
    info!("closed output file: {}", output_path.display());

    Ok(summary)
}
