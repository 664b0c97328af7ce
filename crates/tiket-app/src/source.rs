//! Trait seams over the API client.
//!
//! Use cases depend on these narrow traits rather than on `TicketApi`
//! directly, so tests can substitute scripted fakes without a server.

use async_trait::async_trait;

use tiket_client::{FetchOutcome, TicketApi};
use tiket_core::error::Result;
use tiket_core::report::DateRange;
use tiket_core::ticket::Ticket;
use tiket_core::user::{NewUser, User, UserUpdate};

/// Read access to ticket collections.
#[async_trait]
pub trait TicketSource: Send + Sync {
    /// Per-customer ticket list.
    async fn tickets_for_customer(&self, customer: &str) -> FetchOutcome<Vec<Ticket>>;

    /// Report data for a customer within a date range.
    async fn export_tickets(
        &self,
        customer_id: &str,
        range: &DateRange,
    ) -> FetchOutcome<Vec<Ticket>>;
}

/// User CRUD against the API.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn list_users(&self) -> FetchOutcome<Vec<User>>;
    async fn register_user(&self, user: &NewUser) -> Result<()>;
    async fn update_user(&self, id: i64, update: &UserUpdate) -> FetchOutcome<()>;
    async fn delete_user(&self, id: i64) -> FetchOutcome<()>;
}

#[async_trait]
impl TicketSource for TicketApi {
    async fn tickets_for_customer(&self, customer: &str) -> FetchOutcome<Vec<Ticket>> {
        TicketApi::tickets_for_customer(self, customer).await
    }

    async fn export_tickets(
        &self,
        customer_id: &str,
        range: &DateRange,
    ) -> FetchOutcome<Vec<Ticket>> {
        TicketApi::export_tickets(self, customer_id, range).await
    }
}

#[async_trait]
impl UserDirectory for TicketApi {
    async fn list_users(&self) -> FetchOutcome<Vec<User>> {
        TicketApi::list_users(self).await
    }

    async fn register_user(&self, user: &NewUser) -> Result<()> {
        TicketApi::register_user(self, user).await
    }

    async fn update_user(&self, id: i64, update: &UserUpdate) -> FetchOutcome<()> {
        TicketApi::update_user(self, id, update).await
    }

    async fn delete_user(&self, id: i64) -> FetchOutcome<()> {
        TicketApi::delete_user(self, id).await
    }
}
