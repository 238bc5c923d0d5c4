//! Currency formatting
//!
//! Renders dollar amounts the way an `en-US` browser locale does:
//! `$12,345.68`, `-$600.00`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a dollar amount with a `$` sign, thousands separators and cents
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };

    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// Per-month amount for an installment row, e.g. `$1,000.00/mo`
pub fn format_per_month(amount: Decimal) -> String {
    format!("{}/mo", format_usd(amount))
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
