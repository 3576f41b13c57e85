//! Order ticket — the record an accepted submission hands to navigation,
//! round-tripped through URL query parameters to the order-created screen.
//!
//! The query codec is the crate's only string-format boundary: urlencoded
//! camelCase `key=value` pairs joined with `&`, absent fields skipped.

use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::shared::{AssetId, Symbol, TradeSide};

/// Characters order-id suffixes are drawn from.
const ID_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A fresh order id: `ord_<epoch-millis>_<5 random base-36 characters>`.
pub fn new_order_id(rng: &mut impl Rng) -> String {
    let suffix: String = (0..5)
        .map(|_| ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char)
        .collect();
    format!("ord_{}_{}", Utc::now().timestamp_millis(), suffix)
}

/// The id the order-created screen falls back to when a query arrives
/// without one.
pub fn fallback_order_id() -> String {
    format!("err_ord_{}", Utc::now().timestamp_millis())
}

// ─── Ticket ──────────────────────────────────────────────────────────────────

/// Everything the order-created screen renders.
///
/// The screen stamps its own display time, so no timestamp travels in the
/// query. Sellers from the offer board carry no catalog id, so `asset_id`
/// and `seller_id` are optional.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTicket {
    pub order_id: String,
    pub trade_type: TradeSide,
    pub asset_id: Option<AssetId>,
    pub crypto_asset_symbol: Symbol,
    pub seller_id: Option<String>,
    pub seller_name: Option<String>,
    pub seller_avatar_initial: Option<String>,
    pub fiat_currency: Symbol,
    pub fiat_amount: Decimal,
    pub crypto_amount: Decimal,
    pub price_per_crypto: Decimal,
    pub payment_method: Option<String>,
    pub advertiser_requirements: Option<String>,
}

impl OrderTicket {
    /// Serialize to a query string. Key order is fixed; values are
    /// urlencoded; absent optional fields are skipped.
    pub fn to_query(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::with_capacity(13);
        pairs.push(("orderId", self.order_id.clone()));
        pairs.push(("tradeType", self.trade_type.as_str().to_string()));
        if let Some(asset_id) = &self.asset_id {
            pairs.push(("assetId", asset_id.as_str().to_string()));
        }
        pairs.push(("cryptoAssetSymbol", self.crypto_asset_symbol.to_string()));
        if let Some(seller_id) = &self.seller_id {
            pairs.push(("sellerId", seller_id.clone()));
        }
        if let Some(seller_name) = &self.seller_name {
            pairs.push(("sellerName", seller_name.clone()));
        }
        if let Some(initial) = &self.seller_avatar_initial {
            pairs.push(("sellerAvatarInitial", initial.clone()));
        }
        pairs.push(("fiatCurrency", self.fiat_currency.to_string()));
        pairs.push(("fiatAmount", self.fiat_amount.normalize().to_string()));
        pairs.push(("cryptoAmount", self.crypto_amount.normalize().to_string()));
        pairs.push((
            "pricePerCrypto",
            self.price_per_crypto.normalize().to_string(),
        ));
        if let Some(method) = &self.payment_method {
            pairs.push(("paymentMethod", method.clone()));
        }
        if let Some(requirements) = &self.advertiser_requirements {
            pairs.push(("advertiserRequirements", requirements.clone()));
        }

        pairs
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Parse a ticket back out of a query string.
    ///
    /// A fiat amount and a crypto asset symbol are the minimum the screen
    /// can render; everything else defaults. A missing order id yields a
    /// generated `err_ord_` fallback, a missing trade type reads as Buy, and
    /// missing numeric fields read as zero, matching the screen's `0.00`
    /// fallback rendering.
    pub fn from_query(query: &str) -> Result<Self, TicketError> {
        let mut fields: HashMap<String, String> = HashMap::new();
        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let decoded = urlencoding::decode(value)
                .map_err(|_| TicketError::UndecodableValue(key.to_string()))?;
            fields.insert(key.to_string(), decoded.into_owned());
        }

        let fiat_amount_raw = fields
            .get("fiatAmount")
            .ok_or(TicketError::MissingField("fiatAmount"))?;
        let crypto_symbol = fields
            .get("cryptoAssetSymbol")
            .ok_or(TicketError::MissingField("cryptoAssetSymbol"))?;

        let parse = |field: &'static str, raw: &str| {
            Decimal::from_str(raw).map_err(|_| {
                tracing::warn!("Ticket query field {} is not a number: {}", field, raw);
                TicketError::InvalidField {
                    field,
                    value: raw.to_string(),
                }
            })
        };

        let fiat_amount = parse("fiatAmount", fiat_amount_raw)?;
        let crypto_amount = match fields.get("cryptoAmount") {
            Some(raw) => parse("cryptoAmount", raw)?,
            None => Decimal::ZERO,
        };
        let price_per_crypto = match fields.get("pricePerCrypto") {
            Some(raw) => parse("pricePerCrypto", raw)?,
            None => Decimal::ZERO,
        };

        let trade_type = match fields.get("tradeType") {
            None => TradeSide::Buy,
            Some(raw) => TradeSide::from_str(raw).ok_or_else(|| {
                tracing::warn!("Ticket query carries unknown trade type: {}", raw);
                TicketError::InvalidField {
                    field: "tradeType",
                    value: raw.clone(),
                }
            })?,
        };

        let order_id = match fields.get("orderId") {
            Some(id) if !id.is_empty() => id.clone(),
            _ => fallback_order_id(),
        };

        Ok(Self {
            order_id,
            trade_type,
            asset_id: fields.get("assetId").map(|id| AssetId::from(id.as_str())),
            crypto_asset_symbol: Symbol::new(crypto_symbol),
            seller_id: fields.get("sellerId").cloned(),
            seller_name: fields.get("sellerName").cloned(),
            seller_avatar_initial: fields.get("sellerAvatarInitial").cloned(),
            fiat_currency: fields
                .get("fiatCurrency")
                .map(Symbol::new)
                .unwrap_or_else(|| Symbol::new("USD")),
            fiat_amount,
            crypto_amount,
            price_per_crypto,
            payment_method: fields.get("paymentMethod").cloned(),
            advertiser_requirements: fields.get("advertiserRequirements").cloned(),
        })
    }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketError {
    MissingField(&'static str),
    InvalidField { field: &'static str, value: String },
    UndecodableValue(String),
}

impl fmt::Display for TicketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketError::MissingField(field) => write!(f, "Missing query field {}", field),
            TicketError::InvalidField { field, value } => {
                write!(f, "Invalid query field {}: {:?}", field, value)
            }
            TicketError::UndecodableValue(key) => {
                write!(f, "Undecodable value for query field {}", key)
            }
        }
    }
}

impl std::error::Error for TicketError {}
