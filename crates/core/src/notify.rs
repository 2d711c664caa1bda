// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::future::Future;

/// A plain-text advisory message for an administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Sender address.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
}

impl Notice {
    /// Builds the notice asking an administrator to rename an account by hand.
    #[must_use]
    pub fn rename_request(from: &str, to: &str, username: &str, new_username: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            subject: format!("Rename Dialpad user: {username} to {new_username}"),
            body: String::from("Please rename Dialpad user account manually."),
        }
    }
}

/// Delivers advisory notices.
///
/// Delivery is best effort. Callers log a returned error and carry on.
pub trait Notifier {
    /// The delivery error type.
    type Error: std::fmt::Display;

    /// Attempts to deliver `notice` once.
    fn notify(&self, notice: &Notice) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
