//! Ticket browser: fetch once, then filter and page in memory.

use std::sync::Arc;

use tiket_client::FetchOutcome;
use tiket_core::listing::Listing;
use tiket_core::ticket::Ticket;

use crate::source::TicketSource;

/// A per-customer ticket table: one fetch, then client-side search,
/// status filtering, and pagination. No network is involved after the
/// initial load.
pub struct TicketBrowser {
    source: Arc<dyn TicketSource>,
    listing: Listing<Ticket>,
}

impl TicketBrowser {
    pub fn new(source: Arc<dyn TicketSource>) -> Self {
        Self {
            source,
            listing: Listing::new(Vec::new()),
        }
    }

    /// Fetches the customer's tickets and replaces the view. Returns the
    /// number of tickets fetched.
    pub async fn load(&mut self, customer: &str) -> FetchOutcome<usize> {
        match self.source.tickets_for_customer(customer).await {
            FetchOutcome::Success(tickets) => {
                let count = tickets.len();
                self.listing.replace_items(tickets);
                FetchOutcome::Success(count)
            }
            FetchOutcome::AuthRequired => FetchOutcome::AuthRequired,
            FetchOutcome::Failed(err) => FetchOutcome::Failed(err),
        }
    }

    /// The filtered, paginated view over the fetched tickets.
    pub fn listing(&self) -> &Listing<Ticket> {
        &self.listing
    }

    pub fn listing_mut(&mut self) -> &mut Listing<Ticket> {
        &mut self.listing
    }
}
