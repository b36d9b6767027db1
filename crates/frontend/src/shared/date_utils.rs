//! Utilities for date and time formatting
//!
//! Order timestamps arrive as RFC 3339 strings and are shown in the
//! browser's local time zone.

use chrono::{DateTime, Local, TimeZone};

/// Medium date plus time, e.g. "Mar 15, 2024, 02:02 PM"
const ORDER_DATE_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Format an order timestamp in local time.
/// Unparsable input is returned unchanged.
pub fn format_order_date(datetime_str: &str) -> String {
    format_order_date_in(datetime_str, &Local)
}

pub fn format_order_date_in<Tz>(datetime_str: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(datetime_str.trim()) {
        Ok(dt) => dt.with_timezone(tz).format(ORDER_DATE_FORMAT).to_string(),
        Err(_) => datetime_str.to_string(),
    }
}
