// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dialpad_provision_domain::{
    Action, DomainError, LoginState, UserActionRequest, validate_create_fields,
    validate_delete_fields, validate_update_fields,
};

/// A validated user action, ready to be executed against the directory.
///
/// A `Command` can only be built from a request whose required fields are
/// all present, so executing one never needs to re-check input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Provision a new account.
    CreateUser {
        /// The account name.
        username: String,
        /// The user's first name.
        given_name: String,
        /// The user's last name.
        surname: String,
        /// Department label used to pick an office.
        organizational_unit: String,
    },
    /// Change the login state of an account, or request a rename.
    UpdateUser {
        /// The current account name.
        username: String,
        /// The requested account name.
        new_username: String,
        /// Whether the account should end up suspended.
        login_state: LoginState,
    },
    /// Remove an account.
    DeleteUser {
        /// The account name.
        username: String,
    },
    /// The action text did not name a supported action.
    Unrecognized {
        /// The action text as given.
        action: String,
    },
}

impl Command {
    /// Validates a request and turns it into a command.
    ///
    /// Unrecognized actions are not a validation error; they become
    /// `Command::Unrecognized` so that the caller can report them.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if a field required by the action is
    /// missing or malformed.
    pub fn from_request(request: &UserActionRequest) -> Result<Self, DomainError> {
        match &request.action {
            Action::Create => {
                validate_create_fields(request)?;
                Ok(Self::CreateUser {
                    username: request.username.clone(),
                    given_name: request.given_name.clone(),
                    surname: request.surname.clone(),
                    organizational_unit: request.organizational_unit.clone(),
                })
            }
            Action::Update => {
                let login_state: LoginState = validate_update_fields(request)?;
                Ok(Self::UpdateUser {
                    username: request.username.clone(),
                    new_username: request.new_username.clone(),
                    login_state,
                })
            }
            Action::Delete => {
                validate_delete_fields(request)?;
                Ok(Self::DeleteUser {
                    username: request.username.clone(),
                })
            }
            Action::Unknown(action) => Ok(Self::Unrecognized {
                action: action.clone(),
            }),
        }
    }
}
