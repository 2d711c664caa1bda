// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The boundary between the action processor and the remote directory.

use std::future::Future;

use dialpad_provision_domain::{OfficeId, PrincipalName};

/// The answer to "does this principal exist remotely?".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Existence {
    /// The directory returned the user.
    Present,
    /// The directory answered and the user is not there.
    Absent,
    /// The lookup itself failed (transport error or non-2xx answer).
    Unknown(String),
}

impl Existence {
    /// Returns whether callers should act as if the user exists.
    ///
    /// `Unknown` counts as present. A failed lookup therefore turns a
    /// create into "already exists" rather than risking a duplicate, and
    /// lets update/delete proceed to a remote call that reports its own
    /// failure. This can make an outage look like "already exists" in the
    /// report; the lookup failure itself is logged.
    #[must_use]
    pub const fn is_presumed_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }
}

/// Failure of a single directory call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// The directory answered with a non-2xx status.
    Status(u16),
    /// The request never completed (connection, TLS, body read).
    Transport(String),
}

impl std::fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status(code) => write!(f, "Directory returned HTTP status {code}"),
            Self::Transport(msg) => write!(f, "Directory request failed: {msg}"),
        }
    }
}

impl std::error::Error for DirectoryError {}

/// The fields sent when provisioning a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// The principal name to create.
    pub principal: PrincipalName,
    /// The user's first name.
    pub given_name: String,
    /// The user's last name.
    pub surname: String,
    /// The office to assign, if one resolved.
    pub office: Option<OfficeId>,
}

/// Remote user directory operations.
///
/// Each call is a single request with no retry. Implementations report
/// failures as values and never panic.
pub trait Directory {
    /// Checks whether `principal` exists.
    fn lookup(&self, principal: &PrincipalName) -> impl Future<Output = Existence> + Send;

    /// Creates an account.
    fn create_user(&self, user: &NewUser) -> impl Future<Output = Result<(), DirectoryError>> + Send;

    /// Suspends (`true`) or reactivates (`false`) an account.
    fn set_suspended(
        &self,
        principal: &PrincipalName,
        suspended: bool,
    ) -> impl Future<Output = Result<(), DirectoryError>> + Send;

    /// Deletes an account.
    fn delete_user(
        &self,
        principal: &PrincipalName,
    ) -> impl Future<Output = Result<(), DirectoryError>> + Send;
}
