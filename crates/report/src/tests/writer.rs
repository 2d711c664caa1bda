// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::io::Write;

use crate::{ActionResult, Outcome, ReportError, ReportWriter};

fn finish_to_string(writer: ReportWriter<Vec<u8>>) -> String {
    String::from_utf8(writer.finish().unwrap()).unwrap()
}

#[test]
fn test_empty_report_contains_only_header() {
    let writer: ReportWriter<Vec<u8>> = ReportWriter::new(Vec::new()).unwrap();
    assert_eq!(writer.rows_written(), 0);
    assert_eq!(finish_to_string(writer), "action,username,result\n");
}

#[test]
fn test_rows_are_written_in_order() {
    let mut writer: ReportWriter<Vec<u8>> = ReportWriter::new(Vec::new()).unwrap();
    writer
        .write_result(&ActionResult::new(
            "create",
            "jdoe",
            Outcome::success("user was created in Dialpad."),
        ))
        .unwrap();
    writer
        .write_result(&ActionResult::new(
            "rename",
            "asmith",
            Outcome::error("unrecognized action"),
        ))
        .unwrap();
    assert_eq!(writer.rows_written(), 2);

    assert_eq!(
        finish_to_string(writer),
        "action,username,result\n         create,jdoe,SUCCESS: user was created in Dialpad.\n         rename,asmith,ERROR: unrecognized action\n"
    );
}

#[test]
fn test_fields_with_commas_are_quoted() {
    let mut writer: ReportWriter<Vec<u8>> = ReportWriter::new(Vec::new()).unwrap();
    writer
        .write_result(&ActionResult::new(
            "update",
            "doe, jane",
            Outcome::error("user could not be found in Dialpad"),
        ))
        .unwrap();

    let report: String = finish_to_string(writer);
    assert!(report.ends_with("update,\"doe, jane\",ERROR: user could not be found in Dialpad\n"));
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("disk full"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Err(std::io::Error::other("disk full"))
    }
}

#[test]
fn test_write_failure_is_reported() {
    // The header is buffered, so the failure surfaces on finish.
    let writer: ReportWriter<FailingWriter> = ReportWriter::new(FailingWriter).unwrap();
    let err: ReportError = writer.finish().err().unwrap();
    assert!(err.to_string().contains("disk full"));
}
