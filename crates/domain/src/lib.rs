// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod office;
mod request;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use office::{OfficeId, OfficeMapping};
pub use request::{UserActionRequest, value_to_text};
pub use types::{Action, LoginState, PrincipalName};
pub use validation::{
    require_value, validate_create_fields, validate_delete_fields, validate_update_fields,
};
