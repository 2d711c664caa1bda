// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Administrator notices over SMTP.
//!
//! Notices are relayed without authentication or TLS through the mail
//! server named in the settings.

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
#![allow(clippy::multiple_crate_versions)]

use dialpad_provision::{Notice, Notifier};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::debug;

#[cfg(test)]
mod tests;

/// Errors raised while building or delivering a notice.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// A sender or recipient address could not be parsed.
    #[error("Invalid mail address '{address}': {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    /// The message could not be assembled.
    #[error("Could not build notice: {0}")]
    Message(#[from] lettre::error::Error),

    /// The relay rejected the message or could not be reached.
    #[error("SMTP delivery failed: {0}")]
    Delivery(#[from] lettre::transport::smtp::Error),
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address
        .parse::<Mailbox>()
        .map_err(|source| NotifyError::InvalidAddress {
            address: address.to_string(),
            source,
        })
}

/// Builds the plain-text mail for a notice.
///
/// # Errors
///
/// Returns an error if either address is invalid or the message cannot
/// be assembled.
pub fn build_message(notice: &Notice) -> Result<Message, NotifyError> {
    let message: Message = Message::builder()
        .from(parse_mailbox(&notice.from)?)
        .to(parse_mailbox(&notice.to)?)
        .subject(notice.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(notice.body.clone())?;
    Ok(message)
}

/// Sends notices through an SMTP relay.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    relay: String,
}

impl std::fmt::Debug for SmtpNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpNotifier")
            .field("relay", &self.relay)
            .finish_non_exhaustive()
    }
}

impl SmtpNotifier {
    /// Creates a notifier relaying through `host:port`.
    ///
    /// No connection is made until the first notice is sent.
    #[must_use]
    pub fn new(host: &str, port: u16) -> Self {
        let transport: AsyncSmtpTransport<Tokio1Executor> =
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
                .port(port)
                .build();
        Self {
            transport,
            relay: format!("{host}:{port}"),
        }
    }

    /// Returns the relay as `host:port`.
    #[must_use]
    pub fn relay(&self) -> &str {
        &self.relay
    }
}

impl Notifier for SmtpNotifier {
    type Error = NotifyError;

    async fn notify(&self, notice: &Notice) -> Result<(), NotifyError> {
        let message: Message = build_message(notice)?;
        debug!("relaying notice '{}' via {}", notice.subject, self.relay);
        self.transport.send(message).await?;
        Ok(())
    }
}
