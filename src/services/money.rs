//! Parsing and formatting of Vietnamese đồng amounts.

use rust_decimal::Decimal;

/// Parse a store-formatted amount like "1.040.000đ" into its numeric value.
/// Every non-digit character is dropped, so "520.000", "520000đ" and
/// "520,000 VND" all parse the same way. A string with no digits parses to
/// zero.
pub fn parse_amount(raw: &str) -> Decimal {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Decimal::ZERO;
    }
    digits.parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

/// Format an amount with dot thousands separators and the đồng suffix:
/// `100000` becomes `"100.000đ"`.
pub fn format_vnd(amount: Decimal) -> String {
    let rounded = amount.round();
    let negative = rounded.is_sign_negative();
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{grouped}đ")
    } else {
        format!("{grouped}đ")
    }
}
