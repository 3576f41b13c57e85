//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the fixture data carries, so they can be used directly in wire
//! types without conversion overhead.

pub mod fmt;
pub mod serde_util;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// A currency or asset symbol, stored uppercased (e.g. `"BTC"`, `"IDR"`).
///
/// Every lookup in the engine is case-insensitive; normalizing at construction
/// means two symbols compare equal whenever the source strings differ only in
/// case. Can be used as a map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Symbol::new(s))
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Symbol::new(s))
    }
}

// ─── AssetId ─────────────────────────────────────────────────────────────────

/// Newtype for catalog asset identifiers (e.g. `"1"`, `"btc"`).
///
/// Opaque to the engine; compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for AssetId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AssetId(s.to_string()))
    }
}

impl Serialize for AssetId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AssetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(AssetId(s))
    }
}

// ─── TradeSide ───────────────────────────────────────────────────────────────

/// Direction of a trade from the user's perspective: Buy or Sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "buy" => Some(TradeSide::Buy),
            "sell" => Some(TradeSide::Sell),
            _ => None,
        }
    }
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TradeSide::Buy => write!(f, "Buy"),
            TradeSide::Sell => write!(f, "Sell"),
        }
    }
}

// ─── Utilities ───────────────────────────────────────────────────────────────

/// Parse user-typed amount text into a `Decimal`.
///
/// Empty, whitespace-only, or non-numeric input yields `None`; callers treat
/// that as "no amount entered".
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_normalizes_case() {
        assert_eq!(Symbol::new("btc"), Symbol::new("BTC"));
        assert_eq!(Symbol::new(" usdt "), Symbol::new("USDT"));
        assert_eq!(Symbol::new("idr").as_str(), "IDR");
    }

    #[test]
    fn test_symbol_serde() {
        let sym = Symbol::from("eth");
        let json = serde_json::to_string(&sym).unwrap();
        assert_eq!(json, "\"ETH\"");
        let back: Symbol = serde_json::from_str("\"eth\"").unwrap();
        assert_eq!(sym, back);
    }

    #[test]
    fn test_asset_id_serde() {
        let id = AssetId::from("1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1\"");
        let back: AssetId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_trade_side_serde() {
        let buy: TradeSide = serde_json::from_str("\"buy\"").unwrap();
        assert_eq!(buy, TradeSide::Buy);
        let sell: TradeSide = serde_json::from_str("\"sell\"").unwrap();
        assert_eq!(sell, TradeSide::Sell);
        assert_eq!(TradeSide::from_str("hold"), None);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100"), Some(Decimal::from(100)));
        assert_eq!(
            parse_amount(" 0.0005 "),
            Some(Decimal::from_str("0.0005").unwrap())
        );
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("1.2.3"), None);
    }
}
