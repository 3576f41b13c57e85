//! Pricing domain — the USD reference rate table and the converter that
//! routes every cross-unit amount through USD.
//!
//! Prices that cannot be resolved are `None` (or the documented zero
//! sentinel on the infallible surface); they are never a panic and never
//! NaN, which `Decimal` cannot represent anyway.

use crate::domain::catalog::{Asset, Catalog};
use crate::shared::Symbol;
use lazy_static::lazy_static;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;

// ─── Rate Table ──────────────────────────────────────────────────────────────

/// Static mapping of uppercased symbol → USD units per 1 unit.
///
/// A simulation fixture, not a live feed. Construction rejects non-positive
/// rates and any table where USD is not exactly 1; a missing USD entry is
/// inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: BTreeMap<Symbol, Decimal>,
}

impl RateTable {
    pub fn new<S, I>(pairs: I) -> Result<Self, RateError>
    where
        S: Into<Symbol>,
        I: IntoIterator<Item = (S, Decimal)>,
    {
        let mut rates: BTreeMap<Symbol, Decimal> = BTreeMap::new();
        for (symbol, rate) in pairs {
            let symbol = symbol.into();
            if rate <= Decimal::ZERO {
                return Err(RateError::NonPositiveRate { symbol, rate });
            }
            rates.insert(symbol, rate);
        }
        let usd = Symbol::new("USD");
        match rates.get(&usd) {
            Some(rate) if *rate != Decimal::ONE => return Err(RateError::UsdNotUnit(*rate)),
            Some(_) => {}
            None => {
                rates.insert(usd, Decimal::ONE);
            }
        }
        Ok(Self { rates })
    }

    /// USD units per 1 unit of `symbol`.
    pub fn usd_rate(&self, symbol: &Symbol) -> Option<Decimal> {
        self.rates.get(symbol).copied()
    }
}

lazy_static! {
    /// The hard-coded simulation rates: USD and USDT at par, EUR and GBP
    /// above it, JPY and IDR fractional.
    pub static ref REFERENCE_RATES: RateTable = RateTable::new([
        ("USD", Decimal::ONE),
        ("USDT", Decimal::ONE),
        ("EUR", Decimal::new(108, 2)),
        ("GBP", Decimal::new(125, 2)),
        ("JPY", Decimal::new(64, 4)),
        ("IDR", Decimal::new(625, 7)),
    ])
    .expect("reference rate table is valid");
}

// ─── Converter ───────────────────────────────────────────────────────────────

/// Resolves USD prices and converts amounts between units, against an
/// injected rate table and catalog — never hidden globals.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    rates: &'a RateTable,
    catalog: &'a Catalog,
}

impl<'a> Converter<'a> {
    pub fn new(rates: &'a RateTable, catalog: &'a Catalog) -> Self {
        Self { rates, catalog }
    }

    pub fn rates(&self) -> &'a RateTable {
        self.rates
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// USD price of one unit of this listing, brought over from its native
    /// quote currency. `None` when the listing is unpriced or its quote
    /// currency has no USD rate.
    pub fn asset_usd_price(&self, asset: &Asset) -> Option<Decimal> {
        if asset.price <= Decimal::ZERO {
            return None;
        }
        if asset.currency.as_str() == "USD" {
            return Some(asset.price);
        }
        self.rates
            .usd_rate(&asset.currency)
            .map(|rate| asset.price * rate)
    }

    /// Resolve a free-form identifier to a USD unit price.
    ///
    /// The rate table wins for fiat and stable-asset shortcuts; otherwise
    /// the catalog resolves the identifier (exact id/symbol/name, then name
    /// prefix) and the listing's native price is routed through its quote
    /// currency. `None` means "unavailable", never a zero-value asset.
    pub fn usd_price(&self, identifier: &str) -> Option<Decimal> {
        let symbol = Symbol::new(identifier);
        if symbol.as_str().is_empty() {
            return None;
        }
        if let Some(rate) = self.rates.usd_rate(&symbol) {
            return Some(rate);
        }
        self.catalog
            .resolve(identifier)
            .and_then(|asset| self.asset_usd_price(asset))
    }

    /// The zero-sentinel flavor of [`Converter::usd_price`]. Callers must
    /// treat 0 as "cannot price", never as a real price.
    pub fn usd_price_or_zero(&self, identifier: &str) -> Decimal {
        self.usd_price(identifier).unwrap_or(Decimal::ZERO)
    }

    /// Convert an amount between units via USD. Zero when either leg is
    /// unpriced; callers surface "rate unavailable" instead of rendering it.
    pub fn convert(&self, amount: Decimal, from: &str, to: &str) -> Decimal {
        self.try_convert(amount, from, to).unwrap_or(Decimal::ZERO)
    }

    /// Convert with the failure mode explicit.
    ///
    /// Identity holds exactly: once both legs resolve, equal units return
    /// the amount untouched rather than multiplying and dividing it.
    pub fn try_convert(
        &self,
        amount: Decimal,
        from: &str,
        to: &str,
    ) -> Result<Decimal, ConvertError> {
        let from_price = self
            .usd_price(from)
            .ok_or_else(|| self.unresolved(from))?;
        let to_price = self.usd_price(to).ok_or_else(|| self.unresolved(to))?;
        if Symbol::new(from) == Symbol::new(to) {
            return Ok(amount);
        }
        let usd_value = amount
            .checked_mul(from_price)
            .ok_or_else(|| ConvertError::Overflow(format!("{} {} to USD", amount, from)))?;
        usd_value
            .checked_div(to_price)
            .ok_or_else(|| ConvertError::Overflow(format!("{} USD to {}", usd_value, to)))
    }

    fn unresolved(&self, identifier: &str) -> ConvertError {
        let symbol = Symbol::new(identifier);
        if self.catalog.resolve(identifier).is_some() {
            ConvertError::RateUnavailable(symbol)
        } else {
            ConvertError::UnknownAsset(symbol)
        }
    }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    NonPositiveRate { symbol: Symbol, rate: Decimal },
    UsdNotUnit(Decimal),
}

impl fmt::Display for RateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateError::NonPositiveRate { symbol, rate } => {
                write!(f, "Rate for {} must be positive, got {}", symbol, rate)
            }
            RateError::UsdNotUnit(rate) => write!(f, "USD must map to 1, got {}", rate),
        }
    }
}

impl std::error::Error for RateError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    UnknownAsset(Symbol),
    RateUnavailable(Symbol),
    Overflow(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnknownAsset(symbol) => write!(f, "Unknown asset: {}", symbol),
            ConvertError::RateUnavailable(symbol) => {
                write!(f, "Rate unavailable for {}", symbol)
            }
            ConvertError::Overflow(context) => write!(f, "Conversion overflow: {}", context),
        }
    }
}

impl std::error::Error for ConvertError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::fixture;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn converter() -> Converter<'static> {
        Converter::new(&REFERENCE_RATES, fixture::catalog())
    }

    #[test]
    fn test_rate_table_rejects_bad_entries() {
        let err = RateTable::new([("EUR", Decimal::ZERO)]).unwrap_err();
        assert!(matches!(err, RateError::NonPositiveRate { .. }));
        let err = RateTable::new([("USD", dec("1.01"))]).unwrap_err();
        assert_eq!(err, RateError::UsdNotUnit(dec("1.01")));
    }

    #[test]
    fn test_rate_table_inserts_usd_when_absent() {
        let table = RateTable::new([("EUR", dec("1.08"))]).unwrap();
        assert_eq!(table.usd_rate(&Symbol::new("USD")), Some(Decimal::ONE));
        assert_eq!(table.usd_rate(&Symbol::new("usd")), Some(Decimal::ONE));
    }

    #[test]
    fn test_usd_price_rate_table_wins() {
        let cv = converter();
        assert_eq!(cv.usd_price("USDT"), Some(Decimal::ONE));
        assert_eq!(cv.usd_price("eur"), Some(dec("1.08")));
    }

    #[test]
    fn test_usd_price_routes_native_currency() {
        let cv = converter();
        // BTC is quoted in USDT at 60000; USDT is at par.
        assert_eq!(cv.usd_price("BTC"), Some(dec("60000")));
        // SOL is quoted directly in USD.
        assert_eq!(cv.usd_price("SOL"), Some(dec("150")));
        // The EU listing is quoted in EUR.
        assert_eq!(
            cv.usd_price("Bitcoin (EU Seller)"),
            Some(dec("52000") * dec("1.08"))
        );
    }

    #[test]
    fn test_usd_price_resolves_by_id_and_name_prefix() {
        let cv = converter();
        assert_eq!(cv.usd_price("1"), Some(dec("60000")));
        assert_eq!(cv.usd_price("ethe"), Some(dec("3000")));
    }

    #[test]
    fn test_usd_price_unknown_is_none_and_zero() {
        let cv = converter();
        assert_eq!(cv.usd_price("NOT_A_REAL_SYMBOL"), None);
        assert_eq!(cv.usd_price_or_zero("NOT_A_REAL_SYMBOL"), Decimal::ZERO);
        assert_eq!(cv.usd_price(""), None);
    }

    #[test]
    fn test_convert_routes_through_usd() {
        let cv = converter();
        assert_eq!(cv.convert(dec("2"), "BTC", "USDT"), dec("120000"));
        assert_eq!(cv.convert(dec("120000"), "USDT", "BTC"), dec("2"));
        assert_eq!(cv.convert(dec("150"), "USD", "SOL"), Decimal::ONE);
    }

    #[test]
    fn test_convert_identity_is_exact() {
        let cv = converter();
        let odd = dec("0.123456789");
        assert_eq!(cv.convert(odd, "BTC", "btc"), odd);
        assert_eq!(cv.convert(odd, "EUR", "EUR"), odd);
    }

    #[test]
    fn test_convert_unknown_is_zero_never_a_panic() {
        let cv = converter();
        assert_eq!(cv.convert(dec("5"), "NOT_A_REAL_SYMBOL", "BTC"), Decimal::ZERO);
        assert_eq!(cv.convert(dec("5"), "BTC", "NOT_A_REAL_SYMBOL"), Decimal::ZERO);
        assert_eq!(
            cv.try_convert(dec("5"), "NOT_A_REAL_SYMBOL", "BTC"),
            Err(ConvertError::UnknownAsset(Symbol::new("NOT_A_REAL_SYMBOL")))
        );
    }

    #[test]
    fn test_convert_is_linear_in_amount() {
        let cv = converter();
        let one = cv.convert(Decimal::ONE, "ETH", "USDT");
        let seven = cv.convert(dec("7"), "ETH", "USDT");
        assert_eq!(seven, one * dec("7"));
    }
}
