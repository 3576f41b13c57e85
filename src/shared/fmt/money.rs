//! Money display: fiat amounts with currency glyphs, crypto amounts with
//! magnitude-scaled precision.
//!
//! Unrecognized codes must never fail to format: anything without a registered
//! glyph falls back to `"<number> <CODE>"` concatenation.

use lazy_static::lazy_static;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::OnceLock;

use super::num;
use crate::shared::Symbol;

static MICRO: OnceLock<Decimal> = OnceLock::new();
static CENT: OnceLock<Decimal> = OnceLock::new();

fn get_micro() -> &'static Decimal {
    MICRO.get_or_init(|| Decimal::new(1, 6))
}

fn get_cent() -> &'static Decimal {
    CENT.get_or_init(|| Decimal::new(1, 2))
}

lazy_static! {
    /// Prefix glyphs for the fiat currencies that display with one.
    ///
    /// USDT deliberately has no entry: it renders through the suffix
    /// fallback, as does IDR.
    static ref CURRENCY_GLYPHS: HashMap<&'static str, &'static str> = {
        let mut glyphs = HashMap::new();
        glyphs.insert("USD", "$");
        glyphs.insert("EUR", "€");
        glyphs.insert("GBP", "£");
        glyphs.insert("JPY", "¥");
        glyphs
    };
}

fn is_fiat(code: &str) -> bool {
    matches!(code, "USD" | "EUR" | "GBP" | "JPY" | "IDR")
}

/// Fraction digits for a fiat currency. IDR has no minor unit in this
/// system's convention.
fn fiat_digits(code: &str) -> u32 {
    if code == "IDR" {
        0
    } else {
        2
    }
}

/// Fraction digits for a crypto amount, scaled inversely with magnitude.
pub fn crypto_digits(value: &Decimal) -> u32 {
    let abs = value.abs();
    if abs.is_zero() {
        2
    } else if abs < *get_micro() {
        8
    } else if abs < *get_cent() {
        6
    } else if abs < Decimal::ONE {
        4
    } else {
        2
    }
}

/// Format a fiat amount: fixed fraction digits, thousands grouping, and a
/// glyph prefix where one is registered, otherwise a `"<number> <CODE>"`
/// suffix (e.g. `"1,500.00 USDT"`, `"16,500 IDR"`).
pub fn fiat(value: &Decimal, currency: &Symbol) -> String {
    let digits = fiat_digits(currency.as_str());
    let number = num::group_thousands(num::display_fixed(value, digits));
    match CURRENCY_GLYPHS.get(currency.as_str()) {
        Some(glyph) => format!("{}{}", glyph, number),
        None => format!("{} {}", number, currency),
    }
}

/// Format a crypto amount: tier precision from [`crypto_digits`], thousands
/// grouping, symbol suffix (e.g. `"0.050000 BTC"`).
pub fn crypto(value: &Decimal, symbol: &Symbol) -> String {
    let number = num::group_thousands(num::display_fixed(value, crypto_digits(value)));
    format!("{} {}", number, symbol)
}

/// Format an amount in an arbitrary unit, dispatching on whether the unit is
/// a known fiat.
pub fn auto(value: &Decimal, unit: &Symbol) -> String {
    if is_fiat(unit.as_str()) {
        fiat(value, unit)
    } else {
        crypto(value, unit)
    }
}
