pub mod create;
pub mod list;
pub mod record;
pub mod show;
pub mod totals;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

/// Parse an optional mm/dd/yyyy date, defaulting to today.
pub fn parse_date(date: Option<String>) -> Result<NaiveDate> {
    if let Some(date_str) = date {
        NaiveDate::parse_from_str(&date_str, "%m/%d/%Y")
            .with_context(|| format!("Invalid date '{}'. Use mm/dd/yyyy", date_str))
    } else {
        Ok(Local::now().date_naive())
    }
}
