//! Report date ranges.
//!
//! The report generator filters exported tickets by a date range chosen
//! either from preset "last N months" buckets or a custom range applied
//! explicitly by the user.

use chrono::{Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TiketError};

/// The preset month buckets offered by the report filter.
pub const MONTH_PRESETS: [u32; 5] = [1, 2, 3, 6, 12];

/// How the report range was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeSelection {
    /// `[today - N months, today]`
    LastMonths(u32),
    /// An explicit range applied by the user
    Custom,
}

/// An inclusive date range sent to the export endpoint as
/// `startDate`/`endDate` query parameters (YYYY-MM-DD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Builds `[today - months, today]` using the local calendar date.
    pub fn last_months(months: u32) -> Self {
        Self::last_months_from(Local::now().date_naive(), months)
    }

    /// Same as [`last_months`](Self::last_months) with an explicit "today",
    /// so range arithmetic is testable.
    pub fn last_months_from(today: NaiveDate, months: u32) -> Self {
        let start = today
            .checked_sub_months(Months::new(months))
            .unwrap_or(today);
        Self { start, end: today }
    }

    /// Builds a custom range, rejecting an inverted one.
    pub fn custom(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(TiketError::validation(
                "Start date must not be after end date",
            ));
        }
        Ok(Self { start, end })
    }

    /// `startDate` query value.
    pub fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// `endDate` query value.
    pub fn end_param(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}
