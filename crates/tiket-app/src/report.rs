//! Report generator.
//!
//! Drives the export endpoint from a (customer, date range) pair: any
//! change to either re-enters the loading state and refetches. Fetches
//! are stamped with a generation number; a completion whose generation is
//! no longer current is discarded, so the view always reflects the last
//! request issued rather than the last response to resolve.

use std::sync::Arc;

use tiket_client::FetchOutcome;
use tiket_core::customer::Bank;
use tiket_core::error::{Result, TiketError};
use tiket_core::report::{DateRange, MONTH_PRESETS, RangeSelection};
use tiket_core::ticket::Ticket;

use crate::source::TicketSource;

/// Where the report view currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportState {
    /// No customer selected yet; nothing to fetch.
    NoCustomer,
    /// A fetch is in flight for the current (customer, range).
    Loading,
    /// Report data for the current selection.
    Loaded(Vec<Ticket>),
    /// The stored token was rejected; the user must log in again.
    /// Deliberately not an error state: no error banner is shown.
    AuthRequired,
    /// The fetch failed; recoverable by reselecting a customer or range.
    Failed(String),
}

/// Report generator over a [`TicketSource`].
pub struct ReportGenerator {
    source: Arc<dyn TicketSource>,
    customer: Option<Bank>,
    range: DateRange,
    selection: RangeSelection,
    state: ReportState,
    generation: u64,
}

impl ReportGenerator {
    /// Creates a generator with the default one-month range and no
    /// customer selected.
    pub fn new(source: Arc<dyn TicketSource>) -> Self {
        Self {
            source,
            customer: None,
            range: DateRange::last_months(1),
            selection: RangeSelection::LastMonths(1),
            state: ReportState::NoCustomer,
            generation: 0,
        }
    }

    pub fn state(&self) -> &ReportState {
        &self.state
    }

    pub fn customer(&self) -> Option<Bank> {
        self.customer
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn selection(&self) -> RangeSelection {
        self.selection
    }

    /// Selects a customer and fetches its report.
    pub async fn select_customer(&mut self, bank: Bank) {
        self.customer = Some(bank);
        self.refresh().await;
    }

    /// Clears the selection, returning to the customer picker.
    pub fn clear_customer(&mut self) {
        self.customer = None;
        self.generation += 1; // invalidate any in-flight fetch
        self.state = ReportState::NoCustomer;
    }

    /// Selects a preset month bucket (`[today - months, today]`) and
    /// refetches if a customer is selected.
    pub async fn select_preset(&mut self, months: u32) -> Result<()> {
        if !MONTH_PRESETS.contains(&months) {
            return Err(TiketError::validation(format!(
                "Unknown month preset: {months}"
            )));
        }
        self.selection = RangeSelection::LastMonths(months);
        self.range = DateRange::last_months(months);
        self.refresh().await;
        Ok(())
    }

    /// Applies a custom date range and refetches if a customer is
    /// selected. Unlike presets, custom ranges only take effect when
    /// applied explicitly.
    pub async fn apply_custom_range(&mut self, range: DateRange) {
        self.selection = RangeSelection::Custom;
        self.range = range;
        self.refresh().await;
    }

    async fn refresh(&mut self) {
        let Some((generation, customer_id, range)) = self.begin() else {
            return;
        };
        let outcome = self.source.export_tickets(customer_id, &range).await;
        self.apply(generation, outcome);
    }

    /// Starts a fetch: bumps the generation, enters Loading, and returns
    /// what to fetch. `None` when no customer is selected.
    fn begin(&mut self) -> Option<(u64, &'static str, DateRange)> {
        let bank = self.customer?;
        self.generation += 1;
        self.state = ReportState::Loading;
        Some((self.generation, bank.id, self.range))
    }

    /// Applies a fetch completion. Returns false when the completion was
    /// stale (a newer fetch has been issued since) and was discarded.
    fn apply(&mut self, generation: u64, outcome: FetchOutcome<Vec<Ticket>>) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "discarding stale report fetch");
            return false;
        }
        self.state = match outcome {
            FetchOutcome::Success(tickets) => ReportState::Loaded(tickets),
            FetchOutcome::AuthRequired => ReportState::AuthRequired,
            FetchOutcome::Failed(err) => ReportState::Failed(err.to_string()),
        };
        true
    }
}
