// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::request::UserActionRequest;
use crate::types::LoginState;

/// Fails with `MissingValue` if `value` is empty.
///
/// # Errors
///
/// Returns `DomainError::MissingValue` naming `field` if `value` is empty.
pub const fn require_value(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::MissingValue { field });
    }
    Ok(())
}

/// Validates the fields a create request needs.
///
/// Fields are checked in the order `username`, `givenName`, `surname`,
/// `organizationalUnit`; the first empty one is reported.
///
/// # Errors
///
/// Returns `DomainError::MissingValue` for the first empty required field.
pub fn validate_create_fields(request: &UserActionRequest) -> Result<(), DomainError> {
    require_value("username", &request.username)?;
    require_value("givenName", &request.given_name)?;
    require_value("surname", &request.surname)?;
    require_value("organizationalUnit", &request.organizational_unit)?;
    Ok(())
}

/// Validates the fields an update request needs and derives the login state.
///
/// # Errors
///
/// Returns an error if:
/// - `username`, `newUsername` or `loginDisabled` is empty
/// - `loginDisabled` is not exactly `True` or `False`
pub fn validate_update_fields(request: &UserActionRequest) -> Result<LoginState, DomainError> {
    require_value("username", &request.username)?;
    require_value("newUsername", &request.new_username)?;
    require_value("loginDisabled", &request.login_disabled)?;
    LoginState::from_login_disabled(&request.login_disabled)
}

/// Validates the fields a delete request needs.
///
/// # Errors
///
/// Returns `DomainError::MissingValue` if `username` is empty.
pub fn validate_delete_fields(request: &UserActionRequest) -> Result<(), DomainError> {
    require_value("username", &request.username)
}
