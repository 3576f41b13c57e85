//! Wire types for catalog records (fixture JSON and host-supplied data).
//!
//! Field names mirror the camelCase JSON the app ships; decimals travel as
//! strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Reference records ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionRecord {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkRecord {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyRecord {
    pub id: String,
    pub name: String,
    pub symbol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentMethodRecord {
    pub id: String,
    pub name: String,
}

// ─── Listings ────────────────────────────────────────────────────────────────

/// Raw market-board listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub price: Decimal,
    pub currency: String,
    pub region: String,
    pub network: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub volume: Decimal,
    pub change_24h: Decimal,
    pub seller: String,
}

/// Raw seller profile. The USD band is all-or-nothing: records with only
/// one bound are rejected in conversion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SellerRecord {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reputation: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_trade_time: Option<String>,
    #[serde(rename = "minSellUSD", skip_serializing_if = "Option::is_none")]
    pub min_sell_usd: Option<Decimal>,
    #[serde(rename = "maxSellUSD", skip_serializing_if = "Option::is_none")]
    pub max_sell_usd: Option<Decimal>,
    #[serde(rename = "desiredPricePerAssetUSD", skip_serializing_if = "Option::is_none")]
    pub desired_price_per_asset_usd: Option<Decimal>,
}

/// Raw depositable-asset record with its conversion band.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepositAssetRecord {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub supported_networks: Vec<String>,
    pub min_convert: Decimal,
    pub max_convert: Decimal,
}

/// The full catalog payload. Every section defaults to empty so partial
/// files parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    #[serde(default)]
    pub regions: Vec<RegionRecord>,
    #[serde(default)]
    pub networks: Vec<NetworkRecord>,
    #[serde(default)]
    pub currencies: Vec<CurrencyRecord>,
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethodRecord>,
    #[serde(default)]
    pub assets: Vec<AssetRecord>,
    #[serde(default)]
    pub sellers: Vec<SellerRecord>,
    #[serde(default)]
    pub deposit_assets: Vec<DepositAssetRecord>,
}
