//! Milliunit and currency display helpers.
//!
//! YNAB expresses all amounts in milliunits: 1000 milliunits equal one major
//! currency unit (one dollar, one euro). Display conversion rounds to two
//! decimals; the inverse is lossy below one cent.

use chrono::{DateTime, NaiveDate};

/// Milliunits per major currency unit.
pub const MILLIUNITS_PER_UNIT: i64 = 1000;

/// Converts milliunits to a decimal currency amount, rounded to two decimals.
///
/// `milliunits_to_amount(1234567)` is `1234.57`.
pub fn milliunits_to_amount(milliunits: i64) -> f64 {
    cents(milliunits) as f64 / 100.0
}

/// Converts a decimal currency amount to milliunits.
///
/// Rounds half away from zero, matching the API's own rounding. Together
/// with [`milliunits_to_amount`] this forms a round trip that is exact at
/// cent granularity and lossy below it.
#[allow(clippy::cast_possible_truncation)]
pub fn to_milliunits(amount: f64) -> i64 {
    (amount * MILLIUNITS_PER_UNIT as f64).round() as i64
}

/// Formats a milliunit amount for display, e.g. `$1,234.57` or `-$12.00`.
///
/// The sign precedes the symbol; thousands are grouped with commas.
pub fn format_currency(milliunits: i64, symbol: &str) -> String {
    let cents = cents(milliunits);
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!(
        "{sign}{symbol}{}.{:02}",
        group_thousands(abs / 100),
        abs % 100
    )
}

/// Returns the display symbol for an ISO 4217 currency code.
///
/// Unknown codes fall back to `"CODE "` so amounts stay readable.
pub fn symbol_for(iso_code: &str) -> String {
    match iso_code {
        "USD" | "CAD" | "AUD" | "NZD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" => "¥".to_string(),
        "CHF" => "CHF ".to_string(),
        other => format!("{other} "),
    }
}

/// Formats an API timestamp or date for display, e.g. `Jan 5, 2026`.
///
/// Accepts RFC 3339 timestamps (`last_modified_on`) and plain dates
/// (`first_month`). Unparseable input is returned unchanged.
pub fn format_date(value: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format("%b %-d, %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    value.to_string()
}

/// Rounds milliunits to cents, half away from zero. 10 milliunits = 1 cent.
fn cents(milliunits: i64) -> i64 {
    if milliunits >= 0 {
        (milliunits + 5) / 10
    } else {
        -((-milliunits + 5) / 10)
    }
}

fn group_thousands(mut units: i64) -> String {
    debug_assert!(units >= 0);
    let mut groups = Vec::new();
    loop {
        if units < 1000 {
            groups.push(units.to_string());
            break;
        }
        groups.push(format!("{:03}", units % 1000));
        units /= 1000;
    }
    groups.reverse();
    groups.join(",")
}
