//! pt-BR value formatting for KPI tiles, chart labels and table cells.
//!
//! Both formatters are total: an absent value (or `NaN`) prints as zero.

use rust_decimal::{Decimal, RoundingStrategy};

const CURRENCY_SYMBOL: &str = "R$";
const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';
const CURRENCY_FRACTION_DIGITS: u32 = 2;
const NUMBER_MAX_FRACTION_DIGITS: u32 = 3;

/// Format as Brazilian real, e.g. `R$ 1.234,50`
pub fn format_currency(value: Option<f64>) -> String {
    let value = coerce(value);
    let sign = sign_of(value);
    if value.is_infinite() {
        return format!("{sign}{CURRENCY_SYMBOL} ∞");
    }

    let (int_part, fraction) = split_rounded(value.abs(), CURRENCY_FRACTION_DIGITS, true);
    format!(
        "{sign}{CURRENCY_SYMBOL} {}{DECIMAL_SEPARATOR}{fraction}",
        group_thousands(&int_part)
    )
}

/// Format with pt-BR grouping and up to three fraction digits, e.g. `1.234,568`
pub fn format_number(value: Option<f64>) -> String {
    let value = coerce(value);
    let sign = sign_of(value);
    if value.is_infinite() {
        return format!("{sign}∞");
    }

    let (int_part, fraction) = split_rounded(value.abs(), NUMBER_MAX_FRACTION_DIGITS, false);
    if fraction.is_empty() {
        format!("{sign}{}", group_thousands(&int_part))
    } else {
        format!("{sign}{}{DECIMAL_SEPARATOR}{fraction}", group_thousands(&int_part))
    }
}

fn coerce(value: Option<f64>) -> f64 {
    value.filter(|v| !v.is_nan()).unwrap_or(0.0)
}

fn sign_of(value: f64) -> &'static str {
    // -0.0 compares equal to zero and prints unsigned
    if value < 0.0 {
        "-"
    } else {
        ""
    }
}

/// Round half away from zero at `scale` and split into integer and fraction digits.
/// `fixed` keeps trailing zeros; otherwise they are dropped.
///
/// Rounding starts from the shortest decimal that round-trips the float, so `1.005`
/// rounds up rather than following its binary expansion down.
fn split_rounded(magnitude: f64, scale: u32, fixed: bool) -> (String, String) {
    let digits = match magnitude.to_string().parse::<Decimal>().ok() {
        Some(d) => {
            let mut rounded =
                d.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
            if fixed {
                rounded.rescale(scale);
            } else {
                rounded = rounded.normalize();
            }
            rounded.to_string()
        }
        // Outside Decimal's range; plain float formatting is exact enough there
        None => {
            let s = format!("{:.*}", scale as usize, magnitude);
            if fixed {
                s
            } else {
                s.trim_end_matches('0').trim_end_matches('.').to_string()
            }
        }
    };

    match digits.split_once('.') {
        Some((int_part, fraction)) => (int_part.to_string(), fraction.to_string()),
        None => (digits, String::new()),
    }
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_three_from_the_right() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1.000");
        assert_eq!(group_thousands("1234567"), "1.234.567");
    }

    #[test]
    fn split_keeps_or_drops_trailing_zeros() {
        assert_eq!(split_rounded(5.0, 2, true), ("5".into(), "00".into()));
        assert_eq!(split_rounded(5.0, 3, false), ("5".into(), String::new()));
        assert_eq!(split_rounded(1.5, 3, false), ("1".into(), "5".into()));
    }
}
