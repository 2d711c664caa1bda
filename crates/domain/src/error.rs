// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while validating a user action request.
///
/// These are detected before any remote call is made. The `Display`
/// text is what ends up in the report's `result` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field required by the requested action is missing or empty.
    MissingValue {
        /// The input field name (e.g., `givenName`).
        field: &'static str,
    },
    /// `loginDisabled` is neither `True` nor `False`.
    InvalidLoginDisabled(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingValue { field } => write!(f, "missing value for {field}"),
            Self::InvalidLoginDisabled(value) => {
                write!(
                    f,
                    "invalid value for loginDisabled: expected 'True' or 'False', got '{value}'"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
