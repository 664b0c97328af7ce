use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;

use tiket_app::{ReportGenerator, ReportState};
use tiket_client::TicketApi;
use tiket_core::customer::{Bank, bank_by_id};
use tiket_core::report::DateRange;
use tiket_core::ticket::Ticket;
use tiket_infrastructure::TiketPaths;

#[derive(Args)]
pub struct ReportArgs {
    /// Bank slug (mandiri, bni, bsi)
    pub customer: String,

    /// Preset range: tickets from the last N months (1, 2, 3, 6, or 12)
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub months: Option<u32>,

    /// Custom range start (YYYY-MM-DD), used with --to
    #[arg(long, requires = "to")]
    pub from: Option<NaiveDate>,

    /// Custom range end (YYYY-MM-DD), used with --from
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,

    /// Write the report to this file instead of the reports directory
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Print only; do not write a report file
    #[arg(long)]
    pub no_save: bool,
}

pub async fn run(api: Arc<TicketApi>, args: ReportArgs) -> Result<()> {
    let bank = bank_by_id(&args.customer).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown bank: {} (expected mandiri, bni, or bsi)",
            args.customer
        )
    })?;

    let mut report = ReportGenerator::new(api);
    match (args.months, args.from, args.to) {
        (_, Some(from), Some(to)) => {
            report.apply_custom_range(DateRange::custom(from, to)?).await;
        }
        (Some(months), ..) => {
            report.select_preset(months).await?;
        }
        _ => {} // one-month default
    }
    report.select_customer(bank).await;

    let tickets = match report.state() {
        ReportState::Loaded(tickets) => tickets.clone(),
        ReportState::AuthRequired => {
            eprintln!(
                "{}",
                "Session expired. Run `tiket login` to continue.".yellow()
            );
            std::process::exit(1);
        }
        ReportState::Failed(message) => anyhow::bail!("Report failed: {message}"),
        other => anyhow::bail!("Report did not complete (state: {other:?})"),
    };

    let range = report.range();
    let text = render_report(bank, &range, &tickets);
    print!("{text}");

    if !args.no_save {
        let path = match args.out {
            Some(path) => path,
            None => {
                let dir = TiketPaths::reports_dir()?;
                std::fs::create_dir_all(&dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
                dir.join(format!(
                    "tiket-report-{}-{}-{}.txt",
                    bank.id,
                    range.start_param(),
                    range.end_param()
                ))
            }
        };
        std::fs::write(&path, &text)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\n📄 Report written to {}", path.display());
    }
    Ok(())
}

/// Plain-text report: header, counts, then one line per ticket. The same
/// text is printed and saved.
fn render_report(bank: Bank, range: &DateRange, tickets: &[Ticket]) -> String {
    let open = tickets.iter().filter(|t| !t.status.is_closed()).count();
    let mut out = String::new();
    out.push_str(&format!(
        "Ticket report: {} ({} to {})\n",
        bank.name,
        range.start_param(),
        range.end_param()
    ));
    out.push_str(&format!(
        "{} tickets ({} open, {} closed)\n\n",
        tickets.len(),
        open,
        tickets.len() - open
    ));
    for ticket in tickets {
        out.push_str(&format!(
            "{}  [{}]  {}  (opened {})\n",
            ticket.case_number, ticket.status, ticket.subject, ticket.opened
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiket_core::ticket::TicketStatus;

    #[test]
    fn test_render_report_counts_open_and_closed() {
        let bank = bank_by_id("bni").unwrap();
        let range = DateRange::custom(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        )
        .unwrap();
        let open = Ticket {
            id: 1,
            case_number: "GS-0001".to_string(),
            subject: "Crash".to_string(),
            customer: "Bank BNI".to_string(),
            status: TicketStatus::Opened,
            opened: "2025-01-05".to_string(),
            closed: None,
            summary: String::new(),
            duration_days: String::new(),
            last_reply: String::new(),
        };
        let mut closed = open.clone();
        closed.id = 2;
        closed.case_number = "GS-0002".to_string();
        closed.status = TicketStatus::ClosedConfirmed;

        let text = render_report(bank, &range, &[open, closed]);
        assert!(text.contains("Bank BNI"));
        assert!(text.contains("2 tickets (1 open, 1 closed)"));
        assert!(text.contains("GS-0001"));
        assert!(text.contains("[Closed Confirmed]"));
    }
}
