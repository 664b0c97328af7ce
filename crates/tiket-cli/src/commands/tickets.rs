use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use tiket_app::TicketBrowser;
use tiket_client::TicketApi;
use tiket_core::customer::bank_by_id;

use crate::render;

#[derive(Subcommand)]
pub enum TicketAction {
    /// List a customer's tickets with search, filter, and paging
    List {
        /// Customer name as known to the ticketing API
        customer: String,
        /// Case-insensitive search over case number, subject, customer, and summary
        #[arg(long)]
        query: Option<String>,
        /// Exact status filter, e.g. "Opened" or "In Progress"
        #[arg(long)]
        status: Option<String>,
        /// Page to show
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show a single ticket in full
    Show { id: i64 },
    /// Open/closed counts for a bank (mandiri, bni, bsi)
    Counts { bank: String },
}

pub async fn run(api: &Arc<TicketApi>, action: TicketAction) -> Result<()> {
    match action {
        TicketAction::List {
            customer,
            query,
            status,
            page,
        } => list(api, &customer, query, status, page).await,
        TicketAction::Show { id } => show(api, id).await,
        TicketAction::Counts { bank } => counts(api, &bank).await,
    }
}

async fn list(
    api: &Arc<TicketApi>,
    customer: &str,
    query: Option<String>,
    status: Option<String>,
    page: usize,
) -> Result<()> {
    let mut browser = TicketBrowser::new(api.clone());
    render::unwrap_outcome(browser.load(customer).await)?;

    let listing = browser.listing_mut();
    if let Some(query) = query {
        listing.set_query(&query);
    }
    listing.set_status_filter(status);
    listing.go_to_page(page);

    render::print_ticket_page(browser.listing());
    Ok(())
}

async fn show(api: &Arc<TicketApi>, id: i64) -> Result<()> {
    let ticket = render::unwrap_outcome(api.ticket(id).await)?;

    println!("{}  {}", ticket.case_number.bold(), ticket.subject);
    println!("Customer: {}", ticket.customer);
    println!("Status:   {}", render::status_badge(ticket.status));
    println!("Opened:   {}", ticket.opened);
    if let Some(closed) = &ticket.closed {
        println!("Closed:   {closed}");
    }
    if !ticket.duration_days.is_empty() {
        println!("Duration: {} days", ticket.duration_days);
    }
    if !ticket.last_reply.is_empty() {
        println!("Last reply: {}", ticket.last_reply);
    }
    if !ticket.summary.is_empty() {
        println!("\n{}", ticket.summary);
    }
    Ok(())
}

async fn counts(api: &Arc<TicketApi>, bank: &str) -> Result<()> {
    let bank = bank_by_id(bank)
        .ok_or_else(|| anyhow::anyhow!("Unknown bank: {bank} (expected mandiri, bni, or bsi)"))?;
    let counts = render::unwrap_outcome(api.ticket_counts(bank.id).await)?;

    println!("{}", bank.name.bold());
    println!("  Total:  {}", counts.total);
    println!("  Open:   {}", counts.open.to_string().green());
    println!("  Closed: {}", counts.closed.to_string().dimmed());
    Ok(())
}
