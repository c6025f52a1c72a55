//! Formatter tests: pt-BR currency and number text

use causa_core::{format_currency, format_number};

#[test]
fn absent_values_format_as_zero() {
    let zero = format_currency(Some(0.0));
    assert_eq!(zero, "R$ 0,00");
    assert_eq!(format_currency(None), zero);
    assert_eq!(format_currency(Some(f64::NAN)), zero);
    assert_eq!(format_currency(Some(-0.0)), zero);

    assert_eq!(format_number(None), "0");
    assert_eq!(format_number(Some(0.0)), "0");
}

#[test]
fn currency_uses_brazilian_grouping() {
    assert_eq!(format_currency(Some(1234.5)), "R$ 1.234,50");
    assert_eq!(format_currency(Some(1000.0)), "R$ 1.000,00");
    assert_eq!(format_currency(Some(200.0)), "R$ 200,00");
    assert_eq!(format_currency(Some(1_234_567.891)), "R$ 1.234.567,89");
    assert_eq!(format_currency(Some(0.5)), "R$ 0,50");
}

#[test]
fn currency_rounds_half_away_from_zero() {
    assert_eq!(format_currency(Some(1.005)), "R$ 1,01");
    assert_eq!(format_currency(Some(2.994)), "R$ 2,99");
    assert_eq!(format_currency(Some(999.995)), "R$ 1.000,00");
}

#[test]
fn negative_currency_puts_sign_first() {
    assert_eq!(format_currency(Some(-1234.5)), "-R$ 1.234,50");
}

#[test]
fn infinite_currency_prints_infinity_sign() {
    assert_eq!(format_currency(Some(f64::INFINITY)), "R$ ∞");
    assert_eq!(format_currency(Some(f64::NEG_INFINITY)), "-R$ ∞");
}

#[test]
fn numbers_group_without_symbol() {
    assert_eq!(format_number(Some(5.0)), "5");
    assert_eq!(format_number(Some(1234.0)), "1.234");
    assert_eq!(format_number(Some(1_000_000.0)), "1.000.000");
}

#[test]
fn numbers_keep_up_to_three_fraction_digits() {
    assert_eq!(format_number(Some(1234.5678)), "1.234,568");
    assert_eq!(format_number(Some(2.5)), "2,5");
    assert_eq!(format_number(Some(0.1 + 0.2)), "0,3");
    assert_eq!(format_number(Some(-42.25)), "-42,25");
}

#[test]
fn huge_values_still_format() {
    let text = format_currency(Some(1e30));
    assert!(text.starts_with("R$ 1.000.000"), "got {}", text);
    assert!(text.ends_with(",00"), "got {}", text);
}
