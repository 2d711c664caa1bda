// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use dialpad_provision::{Notice, Notifier};
use lettre::Message;

use crate::{NotifyError, SmtpNotifier, build_message};

fn create_test_notice() -> Notice {
    Notice::rename_request(
        "dialpad-sync@server.example.edu",
        "admin@example.edu",
        "jdoe",
        "jane.doe",
    )
}

#[test]
fn test_build_message_carries_headers_and_body() {
    let message: Message = build_message(&create_test_notice()).unwrap();
    let formatted: String = String::from_utf8(message.formatted()).unwrap();

    assert!(formatted.contains("From: dialpad-sync@server.example.edu"));
    assert!(formatted.contains("To: admin@example.edu"));
    assert!(formatted.contains("Subject: Rename Dialpad user: jdoe to jane.doe"));
    assert!(formatted.contains("Please rename Dialpad user account manually."));
}

#[test]
fn test_build_message_rejects_invalid_sender() {
    let mut notice: Notice = create_test_notice();
    notice.from = String::from("not an address");

    let err: NotifyError = build_message(&notice).unwrap_err();

    assert!(matches!(err, NotifyError::InvalidAddress { ref address, .. } if address == "not an address"));
}

#[test]
fn test_build_message_rejects_empty_recipient() {
    let mut notice: Notice = create_test_notice();
    notice.to = String::new();

    assert!(matches!(
        build_message(&notice),
        Err(NotifyError::InvalidAddress { .. })
    ));
}

#[test]
fn test_relay_description() {
    let notifier: SmtpNotifier = SmtpNotifier::new("mail.example.edu", 25);
    assert_eq!(notifier.relay(), "mail.example.edu:25");
}

#[tokio::test]
async fn test_unreachable_relay_reports_delivery_error() {
    // Nothing listens on port 1, so the connection is refused.
    let notifier: SmtpNotifier = SmtpNotifier::new("127.0.0.1", 1);

    let result: Result<(), NotifyError> = notifier.notify(&create_test_notice()).await;

    assert!(matches!(result, Err(NotifyError::Delivery(_))));
}
