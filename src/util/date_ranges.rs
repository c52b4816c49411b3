//! Date range presets for time entry filtering.
//!
//! The `list-entries` tool accepts a `period` argument that expands into
//! concrete `from`/`to` dates before the request leaves this server; the
//! Noko API itself only understands explicit dates.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// An inclusive date range, formatted as the API expects (YYYY-MM-DD).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

impl DateRange {
    fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: from.format("%Y-%m-%d").to_string(),
            to: to.format("%Y-%m-%d").to_string(),
        }
    }

    /// Resolve a named preset to a concrete range, `None` for unknown names.
    pub fn for_period(period: &str) -> Option<Self> {
        let today = Local::now().date_naive();
        match period {
            "past_week" => Some(Self::past_days(today, 7)),
            "past_month" => Some(Self::past_days(today, 30)),
            "current_week" => Some(Self::current_week(today)),
            "current_month" => Some(Self::current_month(today)),
            _ => None,
        }
    }

    /// The past `days` days, including today.
    fn past_days(today: NaiveDate, days: i64) -> Self {
        Self::new(today - Duration::days(days - 1), today)
    }

    /// Monday through Sunday of the week containing `today`.
    fn current_week(today: NaiveDate) -> Self {
        let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
        Self::new(monday, monday + Duration::days(6))
    }

    /// First through last day of the month containing `today`.
    fn current_month(today: NaiveDate) -> Self {
        let first = today - Duration::days(today.day() as i64 - 1);
        let next_month = if today.month() == 12 {
            NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
        };
        let last = next_month
            .and_then(|d| d.pred_opt())
            .unwrap_or(today);
        Self::new(first, last)
    }
}
