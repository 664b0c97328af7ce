//! Terminal rendering: tables, status badges, and outcome handling.

use anyhow::Result;
use colored::Colorize;

use tiket_client::FetchOutcome;
use tiket_core::listing::Listing;
use tiket_core::ticket::{Ticket, TicketStatus};
use tiket_core::user::User;

/// Unwraps a fetch outcome for display.
///
/// A rejected token is not an error: it prints a login notice and exits
/// nonzero without an error banner. Everything else surfaces through the
/// anyhow chain.
pub fn unwrap_outcome<T>(outcome: FetchOutcome<T>) -> Result<T> {
    match outcome {
        FetchOutcome::Success(value) => Ok(value),
        FetchOutcome::AuthRequired => {
            eprintln!(
                "{}",
                "Session expired. Run `tiket login` to continue.".yellow()
            );
            std::process::exit(1);
        }
        FetchOutcome::Failed(err) => Err(err.into()),
    }
}

pub fn status_badge(status: TicketStatus) -> String {
    let label = status.to_string();
    match status {
        TicketStatus::Opened => label.green().to_string(),
        TicketStatus::InProgress => label.yellow().to_string(),
        TicketStatus::WaitingForReply => label.cyan().to_string(),
        TicketStatus::ClosedConfirmed | TicketStatus::ClosedUnconfirmed => {
            label.dimmed().to_string()
        }
    }
}

/// Renders a fixed-width table: a header row, a separator, then one row
/// per record. Cells wider than their column are truncated.
pub fn table(headers: &[&str], widths: &[usize], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push_str(&row_line(
        &headers.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
        widths,
    ));
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    out.push('\n');
    for row in rows {
        out.push_str(&row_line(row, widths));
        out.push('\n');
    }
    out
}

fn row_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let cell = truncate(cell, *width);
            let pad = width.saturating_sub(visible_width(&cell));
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn truncate(text: &str, width: usize) -> String {
    if visible_width(text) <= width {
        return text.to_string();
    }
    if text.contains('\u{1b}') {
        // Never slice an escape sequence; drop the styling instead
        return truncate(&strip_ansi(text), width);
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Width as rendered in the terminal: SGR escape sequences occupy no
/// columns.
fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        width += 1;
    }
    width
}

fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

/// Prints one page of a ticket listing with its pagination footer.
pub fn print_ticket_page(listing: &Listing<Ticket>) {
    let rows: Vec<Vec<String>> = listing
        .page_items()
        .iter()
        .map(|t| {
            vec![
                t.case_number.clone(),
                t.subject.clone(),
                t.customer.clone(),
                status_badge(t.status),
                t.opened.clone(),
            ]
        })
        .collect();
    print!(
        "{}",
        table(
            &["CASE", "SUBJECT", "CUSTOMER", "STATUS", "OPENED"],
            &[12, 36, 20, 20, 20],
            &rows,
        )
    );
    print_page_footer(listing.current_page(), listing.total_pages(), listing.filtered_len());
}

pub fn print_user_table(users: &[User]) {
    let rows: Vec<Vec<String>> = users
        .iter()
        .map(|u| {
            vec![
                u.id.to_string(),
                u.username.clone(),
                u.name.clone(),
                u.role.to_string(),
                u.created_at.clone(),
            ]
        })
        .collect();
    print!(
        "{}",
        table(
            &["ID", "USERNAME", "NAME", "ROLE", "CREATED"],
            &[6, 16, 24, 8, 20],
            &rows,
        )
    );
}

pub fn print_page_footer(page: usize, total_pages: usize, total_items: usize) {
    if total_items == 0 {
        println!("{}", "No matching records.".dimmed());
    } else {
        println!("Page {page} of {total_pages} ({total_items} records)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_pads_and_truncates() {
        let rows = vec![vec!["GS-0001".to_string(), "A very long subject line".to_string()]];
        let rendered = table(&["CASE", "SUBJECT"], &[10, 10], &rows);
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with("CASE      "));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].contains("A very lo…"));
    }

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly_10", 10), "exactly_10");
    }

    #[test]
    fn test_styled_cells_pad_by_visible_width() {
        // Force styling even without a tty
        colored::control::set_override(true);
        let badge = status_badge(TicketStatus::ClosedUnconfirmed);
        colored::control::unset_override();

        // 18 visible chars fit a 20-wide column; the escape bytes must not
        // count against the width or push the next column out of place
        assert_eq!(visible_width(&badge), 18);
        let line = row_line(&[badge, "next".to_string()], &[20, 10]);
        let plain = strip_ansi(&line);
        assert_eq!(&plain[..20], "Closed Unconfirmed  ");
        assert!(plain.starts_with("Closed Unconfirmed    next"));
    }

    #[test]
    fn test_truncating_styled_text_never_slices_an_escape() {
        colored::control::set_override(true);
        let styled = "A very long subject line".dimmed().to_string();
        colored::control::unset_override();

        let out = truncate(&styled, 10);
        assert!(!out.contains('\u{1b}'));
        assert_eq!(out, "A very lo…");
    }
}
