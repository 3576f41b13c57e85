//! Asset catalog domain — validated reference data and lookup rules.
//!
//! Everything the engine resolves against lives here: regions, settlement
//! networks, fiat currencies, payment methods, the listed assets of the
//! market board, seller profiles, and the depositable balances of the
//! wallet. Records enter as raw wire data and are validated once, up front,
//! with every problem reported together.

pub mod convert;
pub mod fixture;
pub mod wire;

use crate::domain::limits::{LimitsError, TradeLimits};
use crate::shared::{AssetId, Symbol};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Reference Records ───────────────────────────────────────────────────────

/// A geographic market region listings are segmented by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
}

/// A settlement network an asset moves on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
}

/// A fiat currency the app can display totals in. `symbol` is the display
/// glyph or code ("$", "€", "USDT").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiatCurrency {
    pub id: String,
    pub name: String,
    pub symbol: String,
}

/// A payment rail offers can settle over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
}

// ─── Assets ──────────────────────────────────────────────────────────────────

/// A listing on the market board.
///
/// `price` is per unit, denominated in `currency` — the listing's native
/// quote currency, which is not necessarily USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    pub symbol: Symbol,
    pub price: Decimal,
    pub currency: Symbol,
    pub region: String,
    pub network: String,
    /// Opaque visual token resolved by the presentation layer.
    pub icon: Option<String>,
    pub volume: Decimal,
    pub change_24h: Decimal,
    /// Display name of the seller who posted the listing.
    pub seller: String,
}

impl Asset {
    /// Whether this listing was posted by the given seller, as the
    /// find-seller screen badges it.
    pub fn is_listed_by(&self, seller: &Seller) -> bool {
        self.seller == seller.name
    }
}

/// A counterparty profile shown in the find-seller flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub name: String,
    /// Reputation percent, 0–100.
    pub reputation: Option<u8>,
    pub avg_trade_time: Option<String>,
    /// Accepted order band, denominated in USD.
    pub limits_usd: TradeLimits,
    /// The seller's own asking price per asset unit in USD, when quoted.
    pub asking_price_usd: Option<Decimal>,
}

impl Seller {
    /// The seller's USD band expressed in asset units at the given USD unit
    /// price. `None` when the price is not positive.
    pub fn band_in_asset(&self, asset_price_usd: Decimal) -> Option<(Decimal, Decimal)> {
        if asset_price_usd <= Decimal::ZERO {
            return None;
        }
        Some((
            self.limits_usd.min() / asset_price_usd,
            self.limits_usd.max() / asset_price_usd,
        ))
    }
}

/// A balance-holdable asset: what the wallet can deposit, withdraw, and
/// convert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositAsset {
    pub id: String,
    pub name: String,
    pub symbol: Symbol,
    pub icon: Option<String>,
    /// Network ids deposits are accepted on.
    pub supported_networks: Vec<String>,
    /// Per-conversion band, denominated in this asset.
    pub convert_limits: TradeLimits,
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// The validated reference registry, passed by reference into the pricing
/// and form layers — never a hidden global.
///
/// Collections keep their source order; lookup rules that depend on order
/// (name-prefix resolution) are documented on the lookup itself.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    regions: Vec<Region>,
    networks: Vec<Network>,
    currencies: Vec<FiatCurrency>,
    payment_methods: Vec<PaymentMethod>,
    assets: Vec<Asset>,
    sellers: Vec<Seller>,
    deposit_assets: Vec<DepositAsset>,
}

impl Catalog {
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    pub fn currencies(&self) -> &[FiatCurrency] {
        &self.currencies
    }

    pub fn payment_methods(&self) -> &[PaymentMethod] {
        &self.payment_methods
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// The full seller roster, in source order — the list the find-seller
    /// screen renders for every asset, badging the original lister.
    pub fn sellers(&self) -> &[Seller] {
        &self.sellers
    }

    /// The roster the find-seller screen shows for one listing: the
    /// original lister first, then the rest of the roster in source order,
    /// deduplicated by id. A lister with no profile on file gets a
    /// synthesized entry — no reputation, no quote, an unbounded band. A
    /// listing without a seller name yields the plain roster.
    pub fn sellers_for(&self, asset: &Asset) -> Vec<Seller> {
        let mut roster: Vec<Seller> = Vec::with_capacity(self.sellers.len() + 1);
        if !asset.seller.is_empty() {
            let lister = self
                .sellers
                .iter()
                .find(|s| s.name == asset.seller)
                .cloned()
                .unwrap_or_else(|| Seller {
                    id: "original_lister".to_string(),
                    name: asset.seller.clone(),
                    reputation: None,
                    avg_trade_time: None,
                    limits_usd: TradeLimits::unbounded(),
                    asking_price_usd: None,
                });
            roster.push(lister);
        }
        for seller in &self.sellers {
            if roster.iter().all(|r| r.id != seller.id) {
                roster.push(seller.clone());
            }
        }
        roster
    }

    pub fn deposit_assets(&self) -> &[DepositAsset] {
        &self.deposit_assets
    }

    /// Resolve a free-form identifier to a listing.
    ///
    /// Tries, in order: exact id, exact symbol, exact name, then a name
    /// prefix match, all case-insensitive past the id step. Exact matches
    /// always win over prefix matches; among prefix matches the first
    /// listing in source order wins.
    pub fn resolve(&self, identifier: &str) -> Option<&Asset> {
        let trimmed = identifier.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Some(asset) = self.assets.iter().find(|a| a.id.as_str() == trimmed) {
            return Some(asset);
        }
        let upper = trimmed.to_uppercase();
        if let Some(asset) = self.assets.iter().find(|a| a.symbol.as_str() == upper) {
            return Some(asset);
        }
        let lower = trimmed.to_lowercase();
        if let Some(asset) = self.assets.iter().find(|a| a.name.to_lowercase() == lower) {
            return Some(asset);
        }
        self.assets
            .iter()
            .find(|a| a.name.to_lowercase().starts_with(&lower))
    }

    pub fn asset_by_id(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id.as_str() == id)
    }

    pub fn assets_in_region(&self, region_id: &str) -> Vec<&Asset> {
        self.assets.iter().filter(|a| a.region == region_id).collect()
    }

    pub fn assets_on_network(&self, network_id: &str) -> Vec<&Asset> {
        self.assets.iter().filter(|a| a.network == network_id).collect()
    }

    /// Look up a fiat currency by its lowercase id or its display symbol.
    pub fn fiat(&self, code: &str) -> Option<&FiatCurrency> {
        let trimmed = code.trim();
        let lower = trimmed.to_lowercase();
        self.currencies
            .iter()
            .find(|c| c.id == lower || c.symbol == trimmed)
    }

    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn network(&self, id: &str) -> Option<&Network> {
        self.networks.iter().find(|n| n.id == id)
    }

    pub fn payment_method(&self, id: &str) -> Option<&PaymentMethod> {
        self.payment_methods.iter().find(|p| p.id == id)
    }

    pub fn seller(&self, id: &str) -> Option<&Seller> {
        self.sellers.iter().find(|s| s.id == id)
    }

    pub fn seller_named(&self, name: &str) -> Option<&Seller> {
        self.sellers.iter().find(|s| s.name == name)
    }

    pub fn deposit_asset(&self, symbol: &Symbol) -> Option<&DepositAsset> {
        self.deposit_assets.iter().find(|d| &d.symbol == symbol)
    }
}

// ─── Deposit Addresses ───────────────────────────────────────────────────────

/// Static address book for the deposit screen. `None` means no address is
/// configured for the pair.
pub fn deposit_address(symbol: &Symbol, network_id: &str) -> Option<&'static str> {
    match (symbol.as_str(), network_id) {
        ("BTC", "bitcoin") => Some("1Lbcfr7sAHTD9CgdQo3HTk9fgMdtN6fXw4"),
        ("ETH", "ethereum") => Some("0x742d35Cc6634C0532925a3b844Bc454e4438f44e"),
        ("USDT", "ethereum") => Some("0xdAC17F958D2ee523a2206206994597C13D831ec7"),
        ("USDT", "bsc") => Some("0x55d398326f99059fF775485246999027B3197955"),
        ("USDT", "tron") => Some("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t"),
        ("USDT", "solana") => Some("Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB"),
        ("SOL", "solana") => Some("SoL1Uo7i1P3r1V9Xm5f5Y9Zz3q6a8b2c7D4eF6gHj9K"),
        ("BNB", "bsc") => Some("0xb8c77482e45F1F44dE1745F52C74426C631bDD52"),
        _ => None,
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(Vec<ValidationError>),
    AssetIdMissing,
    AssetNameMissing(String),
    AssetSymbolMissing(String),
    NonPositivePrice { id: String, price: Decimal },
    UnknownRegion { id: String, region: String },
    UnknownNetwork { id: String, network: String },
    DuplicateAssetId(String),
    DuplicateCurrency(String),
    ReputationOutOfRange { id: String, reputation: u8 },
    NonPositiveAskingPrice { id: String, price: Decimal },
    SellerBandIncomplete(String),
    SellerLimits(String, LimitsError),
    ConvertLimits(String, LimitsError),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(errors) => {
                writeln!(f, "Catalog validation errors:")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::AssetIdMissing => write!(f, "Asset with missing id"),
            ValidationError::AssetNameMissing(id) => write!(f, "Asset {}: missing name", id),
            ValidationError::AssetSymbolMissing(id) => write!(f, "Asset {}: missing symbol", id),
            ValidationError::NonPositivePrice { id, price } => {
                write!(f, "Asset {}: non-positive price {}", id, price)
            }
            ValidationError::UnknownRegion { id, region } => {
                write!(f, "Asset {}: unknown region {}", id, region)
            }
            ValidationError::UnknownNetwork { id, network } => {
                write!(f, "Record {}: unknown network {}", id, network)
            }
            ValidationError::DuplicateAssetId(id) => write!(f, "Duplicate asset id {}", id),
            ValidationError::DuplicateCurrency(id) => write!(f, "Duplicate currency {}", id),
            ValidationError::ReputationOutOfRange { id, reputation } => {
                write!(f, "Seller {}: reputation {} out of range", id, reputation)
            }
            ValidationError::NonPositiveAskingPrice { id, price } => {
                write!(f, "Seller {}: non-positive asking price {}", id, price)
            }
            ValidationError::SellerBandIncomplete(id) => {
                write!(f, "Seller {}: band has only one bound", id)
            }
            ValidationError::SellerLimits(id, err) => write!(f, "Seller {}: {}", id, err),
            ValidationError::ConvertLimits(id, err) => {
                write!(f, "Deposit asset {}: {}", id, err)
            }
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValidationError::SellerLimits(_, e) => Some(e),
            ValidationError::ConvertLimits(_, e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_matches_beat_prefix() {
        let catalog = fixture::catalog();
        // "Bitcoin" is an exact name even though "Bitcoin (EU Seller)"
        // shares the prefix.
        let btc = catalog.resolve("bitcoin").unwrap();
        assert_eq!(btc.id.as_str(), "1");
        // Symbol and id hit the same listing.
        assert_eq!(catalog.resolve("BTC").unwrap().id.as_str(), "1");
        assert_eq!(catalog.resolve("1").unwrap().name, "Bitcoin");
    }

    #[test]
    fn test_resolve_prefix_takes_first_in_source_order() {
        let catalog = fixture::catalog();
        let hit = catalog.resolve("bitco").unwrap();
        assert_eq!(hit.id.as_str(), "1");
    }

    #[test]
    fn test_resolve_misses() {
        let catalog = fixture::catalog();
        assert!(catalog.resolve("NOT_A_REAL_SYMBOL").is_none());
        assert!(catalog.resolve("").is_none());
        assert!(catalog.resolve("   ").is_none());
    }

    #[test]
    fn test_fiat_lookup_by_id_or_symbol() {
        let catalog = fixture::catalog();
        assert_eq!(catalog.fiat("usd").unwrap().name, "US Dollar");
        assert_eq!(catalog.fiat("USD").unwrap().id, "usd");
        assert_eq!(catalog.fiat("$").unwrap().id, "usd");
        assert!(catalog.fiat("idr").is_none());
    }

    #[test]
    fn test_region_and_network_filters() {
        let catalog = fixture::catalog();
        let europe: Vec<_> = catalog
            .assets_in_region("europe")
            .iter()
            .map(|a| a.id.as_str().to_string())
            .collect();
        assert_eq!(europe, vec!["2", "6"]);
        assert_eq!(catalog.assets_on_network("bitcoin").len(), 2);
    }

    #[test]
    fn test_original_lister_badge() {
        let catalog = fixture::catalog();
        let btc = catalog.resolve("BTC").unwrap();
        let crypto_king = catalog.seller_named("CryptoKing").unwrap();
        let eth_whale = catalog.seller_named("ETHWhale").unwrap();
        assert!(btc.is_listed_by(crypto_king));
        assert!(!btc.is_listed_by(eth_whale));
    }

    #[test]
    fn test_sellers_for_puts_lister_first() {
        let catalog = fixture::catalog();
        let btc = catalog.resolve("BTC").unwrap();
        let roster = catalog.sellers_for(btc);
        // CryptoKing is on file, so the roster stays at five profiles.
        assert_eq!(roster.len(), catalog.sellers().len());
        assert_eq!(roster[0].name, "CryptoKing");
        assert_eq!(roster[0].id, "seller1");
        // No duplicate: CryptoKing appears only at the head.
        assert_eq!(roster.iter().filter(|s| s.id == "seller1").count(), 1);
    }

    #[test]
    fn test_sellers_for_synthesizes_missing_lister() {
        let catalog = fixture::catalog();
        let eu_btc = catalog.asset_by_id("6").unwrap();
        // EuroBitcoinMax has no seller profile on file.
        let roster = catalog.sellers_for(eu_btc);
        assert_eq!(roster.len(), catalog.sellers().len() + 1);
        assert_eq!(roster[0].name, "EuroBitcoinMax");
        assert_eq!(roster[0].reputation, None);
        assert_eq!(roster[0].asking_price_usd, None);
        assert_eq!(roster[0].limits_usd.max(), Decimal::MAX);
    }

    #[test]
    fn test_seller_band_in_asset_units() {
        let catalog = fixture::catalog();
        let seller = catalog.seller_named("CryptoKing").unwrap();
        let (min, max) = seller.band_in_asset(Decimal::from(60500)).unwrap();
        assert_eq!(min, Decimal::from(50) / Decimal::from(60500));
        assert_eq!(max, Decimal::from(10000) / Decimal::from(60500));
        assert!(seller.band_in_asset(Decimal::ZERO).is_none());
    }

    #[test]
    fn test_deposit_address_book() {
        assert_eq!(
            deposit_address(&Symbol::new("USDT"), "tron"),
            Some("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t")
        );
        assert_eq!(deposit_address(&Symbol::new("BTC"), "solana"), None);
    }
}
