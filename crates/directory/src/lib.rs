// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dialpad admin API client.
//!
//! All operations go through a single endpoint, `/api/v1/admin/user`,
//! selected by an `action` query parameter. The API key travels as the
//! `api_key` query parameter on every request.

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
#![allow(clippy::multiple_crate_versions)]

mod client;

#[cfg(test)]
mod tests;

pub use client::{DialpadClient, USER_ENDPOINT};
