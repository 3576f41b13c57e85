//! Number rendering helpers shared by the money formatters.
//!
//! Money strings keep a fixed number of fraction digits, so nothing here
//! trims trailing zeros. Grouping is the en-US convention (comma thousands,
//! dot decimal).

use rust_decimal::Decimal;

/// Inserts comma thousands separators into an already-rendered number.
///
/// The fraction part, if any, is left exactly as rendered.
pub fn group_thousands(formatted: String) -> String {
    let parts = formatted.split('.').collect::<Vec<_>>();

    let (sign, digits) = match parts[0].strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", parts[0]),
    };

    let grouped = digits
        .chars()
        .rev()
        .collect::<String>()
        .as_bytes()
        .chunks(3)
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
        .chars()
        .rev()
        .collect::<String>();

    if parts.len() > 1 {
        format!("{}{}.{}", sign, grouped, parts[1])
    } else {
        format!("{}{}", sign, grouped)
    }
}

/// Render a `Decimal` with exactly `digits` fraction digits.
pub fn display_fixed(value: &Decimal, digits: u32) -> String {
    let rounded = value.round_dp(digits);
    format!("{:.prec$}", rounded, prec = digits as usize)
}
