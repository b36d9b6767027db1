//! Money formatting for order cards

const CURRENCY_SIGN: &str = "₹";

/// Amount with at most two decimals and no trailing zeros
///
/// ```
/// use frontend::shared::number_format::format_amount;
/// assert_eq!(format_amount(500.0), "500");
/// assert_eq!(format_amount(99.5), "99.5");
/// ```
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Amount prefixed with the rupee sign
pub fn format_money(value: f64) -> String {
    format!("{}{}", CURRENCY_SIGN, format_amount(value))
}
