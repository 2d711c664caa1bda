// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dialpad_provision_domain::{
    DomainError, LoginState, OfficeId, OfficeMapping, PrincipalName, UserActionRequest,
};
use dialpad_provision_report::{ActionResult, Outcome};
use tracing::{error, info, warn};

use crate::command::Command;
use crate::directory::{Directory, DirectoryError, Existence, NewUser};
use crate::notify::{Notice, Notifier};

/// Report text for each processing outcome.
pub mod messages {
    pub const USER_CREATED: &str = "user was created in Dialpad.";
    pub const USER_UPDATED: &str = "user was updated in Dialpad.";
    pub const USER_DELETED: &str = "user was deleted in Dialpad.";
    pub const CREATE_FAILED: &str = "could not create user in Dialpad.";
    pub const UPDATE_FAILED: &str = "could not update user in Dialpad.";
    pub const DELETE_FAILED: &str = "could not delete user in Dialpad.";
    pub const ALREADY_EXISTS: &str = "username already exists in Dialpad";
    pub const NOT_FOUND: &str = "user could not be found in Dialpad";
    pub const RENAME_UNSUPPORTED: &str = "renaming is not supported - administrator notified";
    pub const UNRECOGNIZED_ACTION: &str = "unrecognized action";
}

/// Read-only settings the processor needs for every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorSettings {
    /// Domain appended to usernames to form principal names.
    pub domain: String,
    /// Organizational unit to office mapping.
    pub offices: OfficeMapping,
    /// Sender address for advisory notices.
    pub notify_from: String,
    /// Administrator mailbox for advisory notices.
    pub notify_to: String,
}

/// Turns one user action request into one action result.
///
/// The processor holds no state between records beyond its settings and
/// the two collaborators. Every failure, including remote ones, becomes an
/// `Outcome::Error` in the returned result.
pub struct ActionProcessor<D, N> {
    settings: ProcessorSettings,
    directory: D,
    notifier: N,
}

impl<D: Directory + Sync, N: Notifier + Sync> ActionProcessor<D, N> {
    /// Creates a new processor.
    #[must_use]
    pub const fn new(settings: ProcessorSettings, directory: D, notifier: N) -> Self {
        Self {
            settings,
            directory,
            notifier,
        }
    }

    /// Returns the directory client.
    #[must_use]
    pub const fn directory(&self) -> &D {
        &self.directory
    }

    /// Returns the notifier.
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Processes a single request.
    ///
    /// Validation always precedes any remote call, so an invalid request
    /// never touches the directory.
    pub async fn process(&self, request: &UserActionRequest) -> ActionResult {
        let outcome: Outcome = match Command::from_request(request) {
            Ok(command) => self.execute(command).await,
            Err(err) => Self::rejected(request, &err),
        };
        ActionResult::new(request.action.as_str(), &request.username, outcome)
    }

    fn rejected(request: &UserActionRequest, err: &DomainError) -> Outcome {
        error!(
            "unable to {} user '{}': {err}",
            request.action, request.username
        );
        Outcome::error(err.to_string())
    }

    async fn execute(&self, command: Command) -> Outcome {
        match command {
            Command::CreateUser {
                username,
                given_name,
                surname,
                organizational_unit,
            } => {
                self.create_user(&username, given_name, surname, &organizational_unit)
                    .await
            }
            Command::UpdateUser {
                username,
                new_username,
                login_state,
            } => {
                self.update_user(&username, &new_username, login_state)
                    .await
            }
            Command::DeleteUser { username } => self.delete_user(&username).await,
            Command::Unrecognized { action } => {
                error!("unrecognized action: '{action}'");
                Outcome::error(messages::UNRECOGNIZED_ACTION)
            }
        }
    }

    fn principal(&self, username: &str) -> PrincipalName {
        PrincipalName::new(username, &self.settings.domain)
    }

    async fn exists(&self, principal: &PrincipalName) -> bool {
        let existence: Existence = self.directory.lookup(principal).await;
        if let Existence::Unknown(reason) = &existence {
            warn!("could not determine whether {principal} exists, assuming it does: {reason}");
        }
        existence.is_presumed_present()
    }

    async fn create_user(
        &self,
        username: &str,
        given_name: String,
        surname: String,
        organizational_unit: &str,
    ) -> Outcome {
        let principal: PrincipalName = self.principal(username);

        if self.exists(&principal).await {
            error!("cannot add Dialpad account - user already exists: {username}");
            return Outcome::error(messages::ALREADY_EXISTS);
        }

        let office: Option<OfficeId> = self.settings.offices.resolve(organizational_unit);
        if office.is_none() {
            info!("no office mapped for '{organizational_unit}', creating {principal} without one");
        }

        let user: NewUser = NewUser {
            principal,
            given_name,
            surname,
            office,
        };

        match self.directory.create_user(&user).await {
            Ok(()) => {
                info!("user added to Dialpad: {}", user.principal);
                Outcome::success(messages::USER_CREATED)
            }
            Err(err) => {
                Self::log_remote_failure("create", &user.principal, &err);
                Outcome::error(messages::CREATE_FAILED)
            }
        }
    }

    async fn update_user(
        &self,
        username: &str,
        new_username: &str,
        login_state: LoginState,
    ) -> Outcome {
        let principal: PrincipalName = self.principal(username);

        if !self.exists(&principal).await {
            error!("user does not exist in Dialpad: {username}");
            return Outcome::error(messages::NOT_FOUND);
        }

        if username != new_username {
            let notice: Notice = Notice::rename_request(
                &self.settings.notify_from,
                &self.settings.notify_to,
                username,
                new_username,
            );
            match self.notifier.notify(&notice).await {
                Ok(()) => info!(
                    "emailed {} about Dialpad account renaming: {username} to {new_username}",
                    notice.to
                ),
                Err(err) => error!(
                    "unable to email {} about renaming {username} to {new_username}: {err}",
                    notice.to
                ),
            }
            return Outcome::error(messages::RENAME_UNSUPPORTED);
        }

        let suspended: bool = login_state.is_suspended();
        match self.directory.set_suspended(&principal, suspended).await {
            Ok(()) => {
                info!(
                    "user {} in Dialpad: {principal}",
                    if suspended { "suspended" } else { "reactivated" }
                );
                Outcome::success(messages::USER_UPDATED)
            }
            Err(err) => {
                Self::log_remote_failure("update", &principal, &err);
                Outcome::error(messages::UPDATE_FAILED)
            }
        }
    }

    async fn delete_user(&self, username: &str) -> Outcome {
        let principal: PrincipalName = self.principal(username);

        if !self.exists(&principal).await {
            error!("user does not exist in Dialpad: {username}");
            return Outcome::error(messages::NOT_FOUND);
        }

        match self.directory.delete_user(&principal).await {
            Ok(()) => {
                info!("user deleted in Dialpad: {principal}");
                Outcome::success(messages::USER_DELETED)
            }
            Err(err) => {
                Self::log_remote_failure("delete", &principal, &err);
                Outcome::error(messages::DELETE_FAILED)
            }
        }
    }

    fn log_remote_failure(action: &str, principal: &PrincipalName, err: &DirectoryError) {
        error!("Dialpad {action} failed for user {principal}: {err}");
    }
}
