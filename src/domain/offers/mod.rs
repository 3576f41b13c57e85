//! P2P offer domain — advertiser listings and the offer book behind the
//! market screen.

pub mod convert;
pub mod fixture;
pub mod state;
pub mod wire;

use crate::domain::limits::{LimitsError, TradeLimits};
use crate::shared::{Symbol, TradeSide};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Offer ───────────────────────────────────────────────────────────────────

/// A validated advertiser listing of crypto-for-fiat terms.
///
/// Serde routes through [`wire::OfferRecord`] in both directions, so a
/// deserialized offer has passed the same validation as the fixture data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "wire::OfferRecord", into = "wire::OfferRecord")]
pub struct Offer {
    pub id: String,
    pub seller_name: String,
    pub seller_avatar_initial: String,
    pub is_seller_verified: bool,
    pub trade_count: u32,
    /// Completion rate percent, e.g. 99.9.
    pub completion_rate: Decimal,
    pub positive_feedback_rate: Option<Decimal>,
    /// Unit price: fiat per 1 unit of the crypto asset.
    pub price_per_crypto: Decimal,
    pub fiat_currency: Symbol,
    pub crypto_asset_symbol: Symbol,
    /// Order band, denominated in the offer's fiat.
    pub limits: TradeLimits,
    pub available_crypto: Decimal,
    /// Payment method ids from the catalog registry.
    pub payment_methods: Vec<String>,
    pub avg_completion_time_minutes: u32,
    pub is_promoted: bool,
    pub tags: Vec<String>,
    pub advertiser_requirements: Option<String>,
    /// What the advertiser does: a Sell offer sells crypto to the taker.
    pub side: TradeSide,
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum OfferValidationError {
    Multiple(String, Vec<OfferValidationError>),
    MissingSellerName,
    NonPositivePrice(Decimal),
    NegativeAvailable(Decimal),
    Limits(LimitsError),
    UnknownSide(String),
}

impl fmt::Display for OfferValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OfferValidationError::Multiple(id, errors) => {
                writeln!(f, "Offer validation errors ({id}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            OfferValidationError::MissingSellerName => write!(f, "Missing seller name"),
            OfferValidationError::NonPositivePrice(price) => {
                write!(f, "Non-positive price {}", price)
            }
            OfferValidationError::NegativeAvailable(available) => {
                write!(f, "Negative available amount {}", available)
            }
            OfferValidationError::Limits(err) => write!(f, "Limits: {}", err),
            OfferValidationError::UnknownSide(side) => write!(f, "Unknown side {:?}", side),
        }
    }
}

impl std::error::Error for OfferValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OfferValidationError::Limits(e) => Some(e),
            _ => None,
        }
    }
}
