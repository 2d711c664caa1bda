// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Batch input parsing.
//!
//! A batch is a JSON document with a `useractions` array. Only the
//! document shape is fatal; each entry is parsed on its own so that one
//! bad entry costs one report row, not the run.

use std::io::Read;

use dialpad_provision_domain::{UserActionRequest, value_to_text};
use serde::Deserialize;
use serde_json::Value;

use crate::error::BatchError;

#[derive(Deserialize)]
struct BatchDocument {
    useractions: Vec<Value>,
}

/// One entry of the `useractions` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchRecord {
    /// A parsed request.
    Request(UserActionRequest),
    /// An entry that could not be read as a request.
    Malformed {
        /// The `action` value, if the entry had one.
        action: String,
        /// The `username` value, if the entry had one.
        username: String,
        /// Why the entry was rejected.
        reason: String,
    },
}

impl BatchRecord {
    fn from_value(value: Value) -> Self {
        let field = |name: &str| -> String {
            value
                .get(name)
                .cloned()
                .map(value_to_text)
                .unwrap_or_default()
        };
        let action: String = field("action");
        let username: String = field("username");

        if !value.is_object() {
            return Self::Malformed {
                action,
                username,
                reason: String::from("entry is not an object"),
            };
        }

        match serde_json::from_value::<UserActionRequest>(value) {
            Ok(request) => Self::Request(request),
            Err(err) => Self::Malformed {
                action,
                username,
                reason: err.to_string(),
            },
        }
    }
}

/// Parses a whole batch document.
///
/// # Errors
///
/// Returns `BatchError::InvalidInput` if the input is not JSON or has no
/// `useractions` array. Individual entries never cause an error.
pub fn parse_batch<R: Read>(reader: R) -> Result<Vec<BatchRecord>, BatchError> {
    let document: BatchDocument = serde_json::from_reader(reader)?;
    Ok(document
        .useractions
        .into_iter()
        .map(BatchRecord::from_value)
        .collect())
}
