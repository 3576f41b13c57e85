//! Wire types for P2P offer records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw advertiser listing, camelCase like the app's JSON.
///
/// `side` is optional on the wire; records without one are treated as Sell
/// offers, the dominant case on the board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OfferRecord {
    pub id: String,
    pub seller_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_avatar_initial: Option<String>,
    pub is_seller_verified: bool,
    pub trade_count: u32,
    pub completion_rate: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive_feedback_rate: Option<Decimal>,
    pub price_per_crypto: Decimal,
    pub fiat_currency: String,
    pub crypto_asset_symbol: String,
    pub min_limit_fiat: Decimal,
    pub max_limit_fiat: Decimal,
    pub available_crypto: Decimal,
    #[serde(default)]
    pub payment_methods: Vec<String>,
    pub avg_completion_time_minutes: u32,
    #[serde(default)]
    pub is_promoted: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertiser_requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
}
