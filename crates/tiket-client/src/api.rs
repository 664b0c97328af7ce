//! TicketApi - REST client for the ticketing backend.
//!
//! Every authenticated call reads the bearer token from the session store;
//! a missing token fails locally without touching the network, and a
//! rejected token (401/403) surfaces as `FetchOutcome::AuthRequired`.
//! There is no retry policy, request deduplication, or timeout beyond the
//! client default.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use tiket_core::config::ClientConfig;
use tiket_core::customer::Customer;
use tiket_core::error::{Result, TiketError};
use tiket_core::report::DateRange;
use tiket_core::session::{AuthSession, SessionStore};
use tiket_core::ticket::{Ticket, TicketCounts};
use tiket_core::user::{NewUser, ProfileUpdate, User, UserUpdate};

use crate::normalize;
use crate::outcome::FetchOutcome;

/// Client for the remote ticketing REST API.
#[derive(Clone)]
pub struct TicketApi {
    client: Client,
    base_url: String,
    customer_url: String,
    store: Arc<dyn SessionStore>,
}

/// Failure modes shared by the authenticated-call preamble.
enum CheckFail {
    AuthRequired,
    Failed(TiketError),
}

impl<T> From<CheckFail> for FetchOutcome<T> {
    fn from(fail: CheckFail) -> Self {
        match fail {
            CheckFail::AuthRequired => FetchOutcome::AuthRequired,
            CheckFail::Failed(err) => FetchOutcome::Failed(err),
        }
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct PasswordChangeRequest<'a> {
    #[serde(rename = "currentPassword")]
    current_password: &'a str,
    #[serde(rename = "newPassword")]
    new_password: &'a str,
}

impl TicketApi {
    /// Creates a client from configuration and a session store.
    pub fn new(config: &ClientConfig, store: Arc<dyn SessionStore>) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
            customer_url: config.customer_api_url.clone(),
            store,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Authenticates and persists the returned session.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthSession> {
        let response = self
            .client
            .post(self.url("/login"))
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let text = response.text().await.map_err(network_error)?;
        if !status.is_success() {
            return Err(TiketError::api(
                status.as_u16(),
                normalize::error_message(&text),
            ));
        }

        let session: AuthSession = serde_json::from_str(&text)
            .map_err(|_| TiketError::malformed(normalize::error_message(&text)))?;
        self.store.save(&session)?;
        tracing::info!(username = %session.user.username, "logged in");
        Ok(session)
    }

    /// Clears the stored session. Local only; the API keeps no server-side
    /// session state to invalidate.
    pub fn logout(&self) -> Result<()> {
        self.store.clear()?;
        tracing::info!("logged out");
        Ok(())
    }

    /// Returns the stored session, if logged in.
    pub fn current_session(&self) -> Option<AuthSession> {
        self.store.load()
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub async fn list_users(&self) -> FetchOutcome<Vec<User>> {
        match self.send_authed(|c| c.get(self.url("/users"))).await {
            Ok(response) => Self::outcome_list(response).await,
            Err(fail) => fail.into(),
        }
    }

    /// Creates a user via the register endpoint (unauthenticated).
    pub async fn register_user(&self, user: &NewUser) -> Result<()> {
        user.validate()?;

        let response = self
            .client
            .post(self.url("/register"))
            .json(user)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let json = is_json(&response);
        let text = response.text().await.map_err(network_error)?;
        let message = if json {
            normalize::error_message(&text)
        } else {
            normalize::snippet(&text)
        };
        Err(TiketError::api(status.as_u16(), message))
    }

    pub async fn update_user(&self, id: i64, update: &UserUpdate) -> FetchOutcome<()> {
        if let Err(err) = update.validate() {
            return FetchOutcome::Failed(err);
        }
        match self
            .send_authed(|c| c.put(self.url(&format!("/users/{id}"))).json(update))
            .await
        {
            Ok(response) => Self::outcome_unit(response).await,
            Err(fail) => fail.into(),
        }
    }

    pub async fn delete_user(&self, id: i64) -> FetchOutcome<()> {
        match self
            .send_authed(|c| c.delete(self.url(&format!("/users/{id}"))))
            .await
        {
            Ok(response) => Self::outcome_unit(response).await,
            Err(fail) => fail.into(),
        }
    }

    // ========================================================================
    // Profile (self-service)
    // ========================================================================

    /// Updates the logged-in user's profile and merges the returned record
    /// into the stored session.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> FetchOutcome<User> {
        let outcome = match self
            .send_authed(|c| c.put(self.url("/users/me")).json(update))
            .await
        {
            Ok(response) => Self::outcome_item::<User>(response).await,
            Err(fail) => fail.into(),
        };

        if let FetchOutcome::Success(user) = &outcome {
            if let Some(mut session) = self.store.load() {
                session.user = user.clone();
                if let Err(err) = self.store.save(&session) {
                    tracing::warn!(error = %err, "failed to persist updated profile");
                }
            }
        }
        outcome
    }

    pub async fn update_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> FetchOutcome<()> {
        let body = PasswordChangeRequest {
            current_password,
            new_password,
        };
        match self
            .send_authed(|c| c.put(self.url("/users/me/password")).json(&body))
            .await
        {
            Ok(response) => Self::outcome_unit(response).await,
            Err(fail) => fail.into(),
        }
    }

    // ========================================================================
    // Tickets
    // ========================================================================

    pub async fn ticket(&self, id: i64) -> FetchOutcome<Ticket> {
        match self
            .send_authed(|c| c.get(self.url(&format!("/ticket/{id}"))))
            .await
        {
            Ok(response) => Self::outcome_item(response).await,
            Err(fail) => fail.into(),
        }
    }

    pub async fn tickets_for_customer(&self, customer: &str) -> FetchOutcome<Vec<Ticket>> {
        match self
            .send_authed(|c| c.get(self.url(&format!("/ticket/customer/{customer}"))))
            .await
        {
            Ok(response) => Self::outcome_list(response).await,
            Err(fail) => fail.into(),
        }
    }

    pub async fn ticket_counts(&self, bank: &str) -> FetchOutcome<TicketCounts> {
        match self
            .send_authed(|c| c.get(self.url(&format!("/tickets/{bank}/count"))))
            .await
        {
            Ok(response) => Self::outcome_item(response).await,
            Err(fail) => fail.into(),
        }
    }

    /// Fetches report data for a customer within a date range.
    pub async fn export_tickets(
        &self,
        customer_id: &str,
        range: &DateRange,
    ) -> FetchOutcome<Vec<Ticket>> {
        let query = [
            ("startDate", range.start_param()),
            ("endDate", range.end_param()),
        ];
        match self
            .send_authed(|c| {
                c.get(self.url(&format!("/tickets/export/{customer_id}")))
                    .query(&query)
            })
            .await
        {
            Ok(response) => Self::outcome_list(response).await,
            Err(fail) => fail.into(),
        }
    }

    // ========================================================================
    // Customers (separate unauthenticated reference endpoint)
    // ========================================================================

    pub async fn customers(&self) -> Result<Vec<Customer>> {
        let response = self
            .client
            .get(&self.customer_url)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let text = response.text().await.map_err(network_error)?;
        if !status.is_success() {
            return Err(TiketError::api(
                status.as_u16(),
                normalize::error_message(&text),
            ));
        }
        normalize::decode_list(&text)
    }

    // ========================================================================
    // Plumbing
    // ========================================================================

    /// Builds and sends a request with the stored bearer token attached.
    /// Fails locally with `Unauthenticated` when no token is stored.
    async fn send_authed(
        &self,
        build: impl FnOnce(&Client) -> RequestBuilder,
    ) -> std::result::Result<Response, CheckFail> {
        let token = self
            .store
            .token()
            .ok_or(CheckFail::Failed(TiketError::Unauthenticated))?;

        build(&self.client)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|err| CheckFail::Failed(network_error(err)))
    }

    /// Shared preamble for authenticated responses: 401/403 become
    /// `AuthRequired`, other non-2xx become `Api` errors with the message
    /// extracted from the body, and non-JSON success bodies are malformed.
    async fn check(response: Response) -> std::result::Result<String, CheckFail> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(CheckFail::AuthRequired);
        }

        let json = is_json(&response);
        let text = response
            .text()
            .await
            .map_err(|err| CheckFail::Failed(network_error(err)))?;

        if !status.is_success() {
            let message = if json {
                normalize::error_message(&text)
            } else {
                normalize::snippet(&text)
            };
            return Err(CheckFail::Failed(TiketError::api(status.as_u16(), message)));
        }

        if !json {
            return Err(CheckFail::Failed(TiketError::malformed(format!(
                "Unexpected response (not JSON): {}",
                normalize::snippet(&text)
            ))));
        }

        Ok(text)
    }

    async fn outcome_list<T: DeserializeOwned>(response: Response) -> FetchOutcome<Vec<T>> {
        match Self::check(response).await {
            Ok(body) => match normalize::decode_list(&body) {
                Ok(items) => FetchOutcome::Success(items),
                Err(err) => FetchOutcome::Failed(err),
            },
            Err(fail) => fail.into(),
        }
    }

    async fn outcome_item<T: DeserializeOwned>(response: Response) -> FetchOutcome<T> {
        match Self::check(response).await {
            Ok(body) => match normalize::decode_item(&body) {
                Ok(item) => FetchOutcome::Success(item),
                Err(err) => FetchOutcome::Failed(err),
            },
            Err(fail) => fail.into(),
        }
    }

    /// For mutations where the caller only needs success/failure.
    async fn outcome_unit(response: Response) -> FetchOutcome<()> {
        match Self::check(response).await {
            Ok(_) => FetchOutcome::Success(()),
            Err(fail) => fail.into(),
        }
    }
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("application/json"))
        .unwrap_or(false)
}

fn network_error(err: reqwest::Error) -> TiketError {
    TiketError::network(err.to_string())
}
