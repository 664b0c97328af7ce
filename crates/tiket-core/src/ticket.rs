//! Ticket domain model.
//!
//! Tickets are fetched from the remote ticketing API and are immutable on
//! the client side: they are displayed, filtered, and exported, never
//! mutated locally.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::listing::Filterable;

/// Lifecycle status of a support ticket.
///
/// Serialized exactly as the API spells it ("In Progress", not
/// "in_progress"), so the values round-trip through both the wire format
/// and the status filter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum TicketStatus {
    #[serde(rename = "Opened")]
    #[strum(serialize = "Opened")]
    Opened,
    #[serde(rename = "In Progress")]
    #[strum(serialize = "In Progress")]
    InProgress,
    #[serde(rename = "Waiting For Reply")]
    #[strum(serialize = "Waiting For Reply")]
    WaitingForReply,
    #[serde(rename = "Closed Confirmed")]
    #[strum(serialize = "Closed Confirmed")]
    ClosedConfirmed,
    #[serde(rename = "Closed Unconfirmed")]
    #[strum(serialize = "Closed Unconfirmed")]
    ClosedUnconfirmed,
}

impl TicketStatus {
    /// Whether the ticket has reached a terminal state.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::ClosedConfirmed | Self::ClosedUnconfirmed)
    }
}

/// A customer support case record.
///
/// Timestamps are kept as the ISO 8601 strings the API sends; formatting
/// for display happens at the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique ticket identifier
    pub id: i64,
    /// Human-facing case number (e.g., "GS-2024-0131")
    pub case_number: String,
    /// Ticket subject line
    pub subject: String,
    /// Customer display name (foreign key by value, not a join)
    #[serde(default)]
    pub customer: String,
    /// Current lifecycle status
    pub status: TicketStatus,
    /// Timestamp when the ticket was opened (ISO 8601 format)
    pub opened: String,
    /// Timestamp when the ticket was closed, if it has been
    #[serde(default)]
    pub closed: Option<String>,
    /// Free-text summary
    #[serde(default)]
    pub summary: String,
    /// Computed duration in days, as reported by the API
    #[serde(default)]
    pub duration_days: String,
    /// Timestamp of the last reply on the ticket
    #[serde(default)]
    pub last_reply: String,
}

impl Filterable for Ticket {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.case_number,
            &self.subject,
            &self.customer,
            &self.summary,
        ]
    }

    fn filter_key(&self) -> Option<String> {
        Some(self.status.to_string())
    }
}

/// Aggregate ticket counts for one customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketCounts {
    pub total: u64,
    pub open: u64,
    pub closed: u64,
}
