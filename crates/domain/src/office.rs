// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A remote office identifier (Dialpad `office_key`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OfficeId {
    value: String,
}

impl OfficeId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for OfficeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Static mapping from organizational-unit labels to office identifiers.
///
/// An empty identifier is a valid entry meaning "known unit, no office".
/// It resolves the same way as a label with no entry at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfficeMapping {
    offices: BTreeMap<String, String>,
}

impl OfficeMapping {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offices: BTreeMap::new(),
        }
    }

    /// Adds or replaces the office for an organizational unit.
    #[must_use]
    pub fn with_office(mut self, organizational_unit: &str, office_id: &str) -> Self {
        self.offices
            .insert(organizational_unit.to_string(), office_id.to_string());
        self
    }

    /// Looks up the office for an organizational unit.
    ///
    /// Returns `None` when the unit is unmapped or mapped to an empty id.
    #[must_use]
    pub fn resolve(&self, organizational_unit: &str) -> Option<OfficeId> {
        self.offices
            .get(organizational_unit)
            .filter(|id| !id.is_empty())
            .map(|id| OfficeId { value: id.clone() })
    }

    /// Number of configured organizational units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offices.len()
    }

    /// Returns `true` if no organizational units are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offices.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OfficeMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            offices: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
