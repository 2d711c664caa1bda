// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The input record of a batch.
//!
//! Batch files are loosely typed: values may be strings, booleans, numbers
//! or missing entirely. Every field is coerced to text on the way in so that
//! a record never fails to parse because of a missing or oddly typed value.
//! Whether a field is actually required is decided later by validation.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::types::Action;

/// One requested user action, as read from the batch file.
///
/// Field names follow the documented camel-case spelling. The legacy
/// spellings (`newusername`, `sn`, `primO`) are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserActionRequest {
    /// The requested action.
    #[serde(default, deserialize_with = "action_field")]
    pub action: Action,
    /// The account name, local to the directory domain.
    #[serde(default, deserialize_with = "text_field")]
    pub username: String,
    /// The desired account name. Differs from `username` for rename requests.
    #[serde(
        rename = "newUsername",
        alias = "newusername",
        default,
        deserialize_with = "text_field"
    )]
    pub new_username: String,
    /// `True` to suspend, `False` to reactivate.
    #[serde(rename = "loginDisabled", default, deserialize_with = "text_field")]
    pub login_disabled: String,
    /// The user's first name.
    #[serde(rename = "givenName", default, deserialize_with = "text_field")]
    pub given_name: String,
    /// The user's last name.
    #[serde(alias = "sn", default, deserialize_with = "text_field")]
    pub surname: String,
    /// Department label used to pick an office.
    #[serde(
        rename = "organizationalUnit",
        alias = "primO",
        default,
        deserialize_with = "text_field"
    )]
    pub organizational_unit: String,
}

impl UserActionRequest {
    /// Creates an empty request for the given action and username.
    ///
    /// Remaining fields can be filled in with the `with_*` builders.
    #[must_use]
    pub fn new(action: Action, username: &str) -> Self {
        Self {
            action,
            username: username.to_string(),
            ..Self::default()
        }
    }

    /// Sets the new username.
    #[must_use]
    pub fn with_new_username(mut self, new_username: &str) -> Self {
        self.new_username = new_username.to_string();
        self
    }

    /// Sets the `loginDisabled` value.
    #[must_use]
    pub fn with_login_disabled(mut self, login_disabled: &str) -> Self {
        self.login_disabled = login_disabled.to_string();
        self
    }

    /// Sets the given name and surname.
    #[must_use]
    pub fn with_name(mut self, given_name: &str, surname: &str) -> Self {
        self.given_name = given_name.to_string();
        self.surname = surname.to_string();
        self
    }

    /// Sets the organizational unit.
    #[must_use]
    pub fn with_organizational_unit(mut self, organizational_unit: &str) -> Self {
        self.organizational_unit = organizational_unit.to_string();
        self
    }
}

/// Converts any JSON value to the text the batch format means by it.
///
/// Booleans become `True`/`False`, matching the spelling used by the
/// directory export that produces batch files.
#[must_use]
pub fn value_to_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Bool(true) => String::from("True"),
        Value::Bool(false) => String::from("False"),
        Value::Number(n) => n.to_string(),
        other @ (Value::Array(_) | Value::Object(_)) => other.to_string(),
    }
}

fn text_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(value_to_text)
}

fn action_field<'de, D>(deserializer: D) -> Result<Action, D::Error>
where
    D: Deserializer<'de>,
{
    text_field(deserializer).map(Action::from)
}
