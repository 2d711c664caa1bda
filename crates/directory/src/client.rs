// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dialpad_provision::{Directory, DirectoryError, Existence, NewUser};
use dialpad_provision_domain::PrincipalName;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, error};

/// Path of the admin user endpoint, relative to the base URL.
pub const USER_ENDPOINT: &str = "/api/v1/admin/user";

/// Client for the Dialpad admin user API.
///
/// Each method issues exactly one request. Nothing is retried and no
/// timeout is set beyond the transport defaults.
#[derive(Clone)]
pub struct DialpadClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for DialpadClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialpadClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl DialpadClient {
    /// Creates a client for the API hosted at `base_url`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Scheme and host, e.g. `https://dialpad.com`
    /// * `api_key` - Pre-shared admin API key
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Transport` if the HTTP client cannot be
    /// initialized (for example, TLS setup fails).
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, DirectoryError> {
        let http: Client = Client::builder()
            .user_agent(concat!("dialpad-provision/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| {
                DirectoryError::Transport(format!("could not build HTTP client: {err}"))
            })?;

        Ok(Self {
            http,
            endpoint: format!("{}{USER_ENDPOINT}", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
        })
    }

    /// Returns the full URL of the user endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(
        &self,
        principal: &PrincipalName,
        params: &[(&str, &str)],
    ) -> Result<Response, DirectoryError> {
        let mut query: Vec<(&str, &str)> = vec![
            ("api_key", self.api_key.as_str()),
            ("email", principal.as_str()),
        ];
        query.extend_from_slice(params);

        debug!(
            "GET {} email={principal} params={:?}",
            self.endpoint, params
        );

        self.http
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await
            .map_err(|err| DirectoryError::Transport(err.without_url().to_string()))
    }

    async fn mutate(
        &self,
        principal: &PrincipalName,
        params: &[(&str, &str)],
    ) -> Result<(), DirectoryError> {
        let response: Response = self.send(principal, params).await?;
        let status: StatusCode = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(DirectoryError::Status(status.as_u16()))
        }
    }
}

impl Directory for DialpadClient {
    async fn lookup(&self, principal: &PrincipalName) -> Existence {
        let response: Response = match self.send(principal, &[]).await {
            Ok(response) => response,
            Err(err) => {
                error!("problem searching for {principal} in Dialpad: {err}");
                return Existence::Unknown(err.to_string());
            }
        };

        let status: StatusCode = response.status();
        if !status.is_success() {
            error!("Dialpad service returned {status} while searching for {principal}");
            return Existence::Unknown(DirectoryError::Status(status.as_u16()).to_string());
        }

        // A successful search answers with the matching users, if any.
        match response.text().await {
            Ok(body) if body.contains(principal.as_str()) => Existence::Present,
            Ok(_) => Existence::Absent,
            Err(err) => {
                let err: reqwest::Error = err.without_url();
                error!("could not read Dialpad search result for {principal}: {err}");
                Existence::Unknown(err.to_string())
            }
        }
    }

    async fn create_user(&self, user: &NewUser) -> Result<(), DirectoryError> {
        let mut params: Vec<(&str, &str)> = vec![
            ("action", "add"),
            ("first_name", user.given_name.as_str()),
            ("last_name", user.surname.as_str()),
        ];
        if let Some(office) = &user.office {
            params.push(("office_key", office.as_str()));
        }
        self.mutate(&user.principal, &params).await
    }

    async fn set_suspended(
        &self,
        principal: &PrincipalName,
        suspended: bool,
    ) -> Result<(), DirectoryError> {
        let action: &str = if suspended { "suspend" } else { "reactivate" };
        self.mutate(principal, &[("action", action)]).await
    }

    async fn delete_user(&self, principal: &PrincipalName) -> Result<(), DirectoryError> {
        self.mutate(principal, &[("action", "delete")]).await
    }
}
