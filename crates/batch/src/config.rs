// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Run settings.
//!
//! Settings are read once at startup into an immutable [`Settings`] value
//! which is then handed to whatever needs it.

use std::path::Path;

use dialpad_provision::ProcessorSettings;
use dialpad_provision_domain::OfficeMapping;
use serde::Deserialize;

use crate::error::ConfigError;

/// Default location of the Dialpad admin API.
pub const DEFAULT_API_BASE_URL: &str = "https://dialpad.com";

/// Default SMTP relay port.
pub const DEFAULT_SMTP_PORT: u16 = 25;

fn default_api_base_url() -> String {
    String::from(DEFAULT_API_BASE_URL)
}

const fn default_smtp_port() -> u16 {
    DEFAULT_SMTP_PORT
}

/// Where and how administrator notices are sent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotificationSettings {
    /// Sender address.
    pub from: String,
    /// Administrator mailbox.
    pub to: String,
    /// SMTP relay host.
    pub mail_server: String,
    /// SMTP relay port.
    #[serde(default = "default_smtp_port")]
    pub port: u16,
}

/// Everything a run needs besides the input and output paths.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// API key of a global admin account.
    pub client_key: String,
    /// Directory domain, e.g. `example.edu`.
    pub domain: String,
    /// Base URL of the admin API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Notice delivery settings.
    pub notification: NotificationSettings,
    /// Organizational unit to office mapping.
    #[serde(default)]
    pub offices: OfficeMapping,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("client_key", &"<redacted>")
            .field("domain", &self.domain)
            .field("api_base_url", &self.api_base_url)
            .field("notification", &self.notification)
            .field("offices", &self.offices)
            .finish()
    }
}

impl Settings {
    /// Parses and validates settings from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a required setting is
    /// missing or empty.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads, parses and validates a settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its content is not
    /// valid settings.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json: String =
            std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json(&json)
    }

    /// Checks that every required setting has a value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingValue` for the first empty setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required: [(&'static str, &str); 6] = [
            ("client_key", self.client_key.as_str()),
            ("domain", self.domain.as_str()),
            ("api_base_url", self.api_base_url.as_str()),
            ("notification.from", self.notification.from.as_str()),
            ("notification.to", self.notification.to.as_str()),
            ("notification.mail_server", self.notification.mail_server.as_str()),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingValue { field });
            }
        }
        Ok(())
    }

    /// Extracts the settings the action processor needs.
    #[must_use]
    pub fn processor_settings(&self) -> ProcessorSettings {
        ProcessorSettings {
            domain: self.domain.clone(),
            offices: self.offices.clone(),
            notify_from: self.notification.from.clone(),
            notify_to: self.notification.to.clone(),
        }
    }
}
