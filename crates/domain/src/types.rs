// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// The action requested by a single batch record.
///
/// Recognized actions are matched exactly against the lowercase names
/// used in batch files. Anything else is kept verbatim as `Unknown` so
/// that it can be echoed back in the report.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// Provision a new account.
    Create,
    /// Suspend or reactivate an existing account.
    Update,
    /// Remove an existing account.
    Delete,
    /// Any unrecognized action text, including an empty one.
    Unknown(String),
}

impl Default for Action {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl Action {
    /// Parses an action from its batch file representation.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "create" => Self::Create,
            "update" => Self::Update,
            "delete" => Self::Delete,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Returns the action text as it appeared in the input.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Unknown(value) => value,
        }
    }

    /// Returns whether this is one of the three supported actions.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        matches!(self, Self::Create | Self::Update | Self::Delete)
    }
}

impl From<String> for Action {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The remote-service identifier of a user: `username@domain`.
///
/// Derived fresh for every action and never cached across records.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrincipalName {
    value: String,
}

impl PrincipalName {
    /// Builds the principal name for `username` within `domain`.
    #[must_use]
    pub fn new(username: &str, domain: &str) -> Self {
        Self {
            value: format!("{username}@{domain}"),
        }
    }

    /// Returns the principal name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for PrincipalName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Desired account state derived from `loginDisabled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginState {
    /// `loginDisabled == "True"`: the account is suspended.
    Suspended,
    /// `loginDisabled == "False"`: the account is reactivated.
    Active,
}

impl LoginState {
    /// Parses a `loginDisabled` value.
    ///
    /// Only the literal strings `True` and `False` are accepted.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLoginDisabled` for any other value.
    pub fn from_login_disabled(value: &str) -> Result<Self, DomainError> {
        match value {
            "True" => Ok(Self::Suspended),
            "False" => Ok(Self::Active),
            other => Err(DomainError::InvalidLoginDisabled(other.to_string())),
        }
    }

    /// Returns `true` when the account should be suspended.
    #[must_use]
    pub const fn is_suspended(self) -> bool {
        matches!(self, Self::Suspended)
    }
}
