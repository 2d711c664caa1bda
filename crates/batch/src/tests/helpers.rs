// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashSet;
use std::sync::Mutex;

use dialpad_provision::{
    ActionProcessor, Directory, DirectoryError, Existence, NewUser, Notice, Notifier,
    ProcessorSettings,
};
use dialpad_provision_domain::{OfficeMapping, PrincipalName};

pub const TEST_DOMAIN: &str = "example.edu";

/// In-memory directory keyed by principal name.
#[derive(Default)]
pub struct MemoryDirectory {
    users: Mutex<HashSet<String>>,
    mutations: Mutex<Vec<String>>,
}

impl MemoryDirectory {
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

    /// Mutations in the order they were made, as `action:principal`.
    pub fn mutations(&self) -> Vec<String> {
        self.mutations.lock().unwrap().clone()
    }

    fn record(&self, action: &str, principal: &PrincipalName) {
        self.mutations
            .lock()
            .unwrap()
            .push(format!("{action}:{principal}"));
    }
}

impl Directory for MemoryDirectory {
    async fn lookup(&self, principal: &PrincipalName) -> Existence {
        if self.users.lock().unwrap().contains(principal.as_str()) {
            Existence::Present
        } else {
            Existence::Absent
        }
    }

    async fn create_user(&self, user: &NewUser) -> Result<(), DirectoryError> {
        self.record("add", &user.principal);
        self.users.lock().unwrap().insert(user.principal.to_string());
        Ok(())
    }

    async fn set_suspended(
        &self,
        principal: &PrincipalName,
        suspended: bool,
    ) -> Result<(), DirectoryError> {
        self.record(if suspended { "suspend" } else { "reactivate" }, principal);
        Ok(())
    }

    async fn delete_user(&self, principal: &PrincipalName) -> Result<(), DirectoryError> {
        self.record("delete", principal);
        self.users.lock().unwrap().remove(principal.as_str());
        Ok(())
    }
}

/// Notifier that only counts notices.
#[derive(Default)]
pub struct CountingNotifier {
    sent: Mutex<usize>,
}

impl CountingNotifier {
    pub fn sent(&self) -> usize {
        *self.sent.lock().unwrap()
    }
}

impl Notifier for CountingNotifier {
    type Error = String;

    async fn notify(&self, _notice: &Notice) -> Result<(), String> {
        *self.sent.lock().unwrap() += 1;
        Ok(())
    }
}

pub fn create_test_processor(
    directory: MemoryDirectory,
) -> ActionProcessor<MemoryDirectory, CountingNotifier> {
    let settings: ProcessorSettings = ProcessorSettings {
        domain: String::from(TEST_DOMAIN),
        offices: OfficeMapping::new().with_office("Admissions", "gdfsgds546456bdcbbc"),
        notify_from: String::from("dialpad-sync@server.example.edu"),
        notify_to: String::from("admin@example.edu"),
    };
    ActionProcessor::new(settings, directory, CountingNotifier::default())
}
