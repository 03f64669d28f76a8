//! Display formatting for metric values.

use planner_core::Difficulty;
use rust_decimal::{Decimal, RoundingStrategy};

fn round(value: Decimal, dp: u32) -> Decimal {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole dollars with thousands separators, e.g. `$16,146` or `$-1,234`.
pub fn whole_dollars(value: Decimal) -> String {
    let rounded = round(value, 0);
    let digits = rounded.abs().trunc().to_string();
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    format!("${sign}{}", group_thousands(&digits))
}

/// Dollars and cents without grouping, e.g. `$351.00`.
pub fn dollars_and_cents(value: Decimal) -> String {
    format!("${:.2}", round(value, 2))
}

/// Hours with one decimal, e.g. `46.0`.
pub fn hours(value: Decimal) -> String {
    format!("{:.1}", round(value, 1))
}

/// Stars with their label, e.g. `3 (Medium)`.
pub fn difficulty(value: Difficulty) -> String {
    format!("{} ({})", value.stars(), value.label())
}
