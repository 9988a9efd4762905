//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use easystore_ai_core::{format_amount, parse_amount};

/// Formats a decimal amount string as a currency value.
///
/// Usage in templates: `{{ order.total_price|money }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn money(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_money(&amount.to_string()))
}

/// Formats an RFC 3339 timestamp as a short date, e.g. "Nov 10".
///
/// Usage in templates: `{{ order.created_at|short_date }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn short_date(timestamp: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_short_date(&timestamp.to_string()))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

fn format_money(amount: &str) -> String {
    format_amount(parse_amount(amount))
}

fn format_short_date(timestamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(timestamp).map_or_else(
        |_| timestamp.to_string(),
        |dt| {
            // %-d is not portable; trim the leading zero by hand
            let day = dt.format("%d").to_string();
            let day = day.trim_start_matches('0');
            format!("{} {day}", dt.format("%b"))
        },
    )
}
