// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashSet;
use std::sync::Mutex;

use dialpad_provision_domain::{Action, OfficeMapping, PrincipalName, UserActionRequest};

use crate::{
    ActionProcessor, Directory, DirectoryError, Existence, NewUser, Notice, Notifier,
    ProcessorSettings,
};

pub const TEST_DOMAIN: &str = "example.edu";
pub const TEST_FROM: &str = "dialpad-sync@server.example.edu";
pub const TEST_TO: &str = "admin@example.edu";

/// A directory call as observed by `FakeDirectory`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryCall {
    Lookup(String),
    Create(NewUser),
    SetSuspended(String, bool),
    Delete(String),
}

/// In-memory directory that records every call made against it.
#[derive(Default)]
pub struct FakeDirectory {
    users: Mutex<HashSet<String>>,
    lookup_failure: Option<String>,
    mutation_failure: Option<DirectoryError>,
    calls: Mutex<Vec<DirectoryCall>>,
}

impl FakeDirectory {
    pub fn with_users(usernames: &[&str]) -> Self {
        let directory: Self = Self::default();
        {
            let mut users = directory.users.lock().unwrap();
            for username in usernames {
                users.insert(PrincipalName::new(username, TEST_DOMAIN).to_string());
            }
        }
        directory
    }

    pub fn failing_lookups(mut self, reason: &str) -> Self {
        self.lookup_failure = Some(reason.to_string());
        self
    }

    pub fn failing_mutations(mut self, err: DirectoryError) -> Self {
        self.mutation_failure = Some(err);
        self
    }

    pub fn calls(&self) -> Vec<DirectoryCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutation_calls(&self) -> Vec<DirectoryCall> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, DirectoryCall::Lookup(_)))
            .collect()
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users
            .lock()
            .unwrap()
            .contains(PrincipalName::new(username, TEST_DOMAIN).as_str())
    }

    fn record(&self, call: DirectoryCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn mutation_result(&self) -> Result<(), DirectoryError> {
        self.mutation_failure.clone().map_or(Ok(()), Err)
    }
}

impl Directory for FakeDirectory {
    async fn lookup(&self, principal: &PrincipalName) -> Existence {
        self.record(DirectoryCall::Lookup(principal.to_string()));
        if let Some(reason) = &self.lookup_failure {
            return Existence::Unknown(reason.clone());
        }
        if self.users.lock().unwrap().contains(principal.as_str()) {
            Existence::Present
        } else {
            Existence::Absent
        }
    }

    async fn create_user(&self, user: &NewUser) -> Result<(), DirectoryError> {
        self.record(DirectoryCall::Create(user.clone()));
        self.mutation_result()?;
        self.users.lock().unwrap().insert(user.principal.to_string());
        Ok(())
    }

    async fn set_suspended(
        &self,
        principal: &PrincipalName,
        suspended: bool,
    ) -> Result<(), DirectoryError> {
        self.record(DirectoryCall::SetSuspended(principal.to_string(), suspended));
        self.mutation_result()
    }

    async fn delete_user(&self, principal: &PrincipalName) -> Result<(), DirectoryError> {
        self.record(DirectoryCall::Delete(principal.to_string()));
        self.mutation_result()?;
        self.users.lock().unwrap().remove(principal.as_str());
        Ok(())
    }
}

/// Notifier that keeps every notice it is asked to send.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notice>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<Notice> {
        self.sent.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    type Error = String;

    async fn notify(&self, notice: &Notice) -> Result<(), String> {
        self.sent.lock().unwrap().push(notice.clone());
        if self.fail {
            return Err(String::from("relay refused connection"));
        }
        Ok(())
    }
}

pub fn create_test_settings() -> ProcessorSettings {
    ProcessorSettings {
        domain: String::from(TEST_DOMAIN),
        offices: OfficeMapping::new()
            .with_office("Admissions", "gdfsgds546456bdcbbc")
            .with_office("Biology", ""),
        notify_from: String::from(TEST_FROM),
        notify_to: String::from(TEST_TO),
    }
}

pub fn create_test_processor(
    directory: FakeDirectory,
    notifier: RecordingNotifier,
) -> ActionProcessor<FakeDirectory, RecordingNotifier> {
    ActionProcessor::new(create_test_settings(), directory, notifier)
}

pub fn create_request(username: &str, given_name: &str, surname: &str, ou: &str) -> UserActionRequest {
    UserActionRequest::new(Action::Create, username)
        .with_new_username(username)
        .with_login_disabled("False")
        .with_name(given_name, surname)
        .with_organizational_unit(ou)
}

pub fn update_request(username: &str, new_username: &str, login_disabled: &str) -> UserActionRequest {
    UserActionRequest::new(Action::Update, username)
        .with_new_username(new_username)
        .with_login_disabled(login_disabled)
}

pub fn principal(username: &str) -> String {
    PrincipalName::new(username, TEST_DOMAIN).to_string()
}
