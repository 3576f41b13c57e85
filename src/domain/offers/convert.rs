//! Conversion: OfferRecord → Offer (TryFrom + validation).

use super::wire;
use super::{Offer, OfferValidationError};
use crate::domain::limits::TradeLimits;
use crate::shared::{Symbol, TradeSide};
use rust_decimal::Decimal;

impl TryFrom<wire::OfferRecord> for Offer {
    type Error = OfferValidationError;

    fn try_from(source: wire::OfferRecord) -> Result<Self, Self::Error> {
        let mut errors: Vec<OfferValidationError> = Vec::new();
        let offer_id = source.id.clone();

        if source.seller_name.trim().is_empty() {
            errors.push(OfferValidationError::MissingSellerName);
        }
        if source.price_per_crypto <= Decimal::ZERO {
            errors.push(OfferValidationError::NonPositivePrice(
                source.price_per_crypto,
            ));
        }
        if source.available_crypto < Decimal::ZERO {
            errors.push(OfferValidationError::NegativeAvailable(
                source.available_crypto,
            ));
        }

        let limits = TradeLimits::new(source.min_limit_fiat, source.max_limit_fiat)
            .unwrap_or_else(|err| {
                errors.push(OfferValidationError::Limits(err));
                TradeLimits::unbounded()
            });

        let side = match source.side.as_deref() {
            None => TradeSide::Sell,
            Some(raw) => TradeSide::from_str(raw).unwrap_or_else(|| {
                errors.push(OfferValidationError::UnknownSide(raw.to_string()));
                TradeSide::Sell
            }),
        };

        let seller_avatar_initial = source.seller_avatar_initial.unwrap_or_else(|| {
            source
                .seller_name
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default()
        });

        if !errors.is_empty() {
            return Err(OfferValidationError::Multiple(offer_id, errors));
        }

        Ok(Offer {
            id: source.id,
            seller_name: source.seller_name,
            seller_avatar_initial,
            is_seller_verified: source.is_seller_verified,
            trade_count: source.trade_count,
            completion_rate: source.completion_rate,
            positive_feedback_rate: source.positive_feedback_rate,
            price_per_crypto: source.price_per_crypto,
            fiat_currency: Symbol::new(source.fiat_currency),
            crypto_asset_symbol: Symbol::new(source.crypto_asset_symbol),
            limits,
            available_crypto: source.available_crypto,
            payment_methods: source.payment_methods,
            avg_completion_time_minutes: source.avg_completion_time_minutes,
            is_promoted: source.is_promoted,
            tags: source.tags,
            advertiser_requirements: source.advertiser_requirements,
            side,
        })
    }
}

impl From<Offer> for wire::OfferRecord {
    fn from(offer: Offer) -> Self {
        wire::OfferRecord {
            id: offer.id,
            seller_name: offer.seller_name,
            seller_avatar_initial: Some(offer.seller_avatar_initial),
            is_seller_verified: offer.is_seller_verified,
            trade_count: offer.trade_count,
            completion_rate: offer.completion_rate,
            positive_feedback_rate: offer.positive_feedback_rate,
            price_per_crypto: offer.price_per_crypto,
            fiat_currency: offer.fiat_currency.to_string(),
            crypto_asset_symbol: offer.crypto_asset_symbol.to_string(),
            min_limit_fiat: offer.limits.min(),
            max_limit_fiat: offer.limits.max(),
            available_crypto: offer.available_crypto,
            payment_methods: offer.payment_methods,
            avg_completion_time_minutes: offer.avg_completion_time_minutes,
            is_promoted: offer.is_promoted,
            tags: offer.tags,
            advertiser_requirements: offer.advertiser_requirements,
            side: Some(offer.side.as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn minimal_offer_record() -> wire::OfferRecord {
        wire::OfferRecord {
            id: "p2p1".to_string(),
            seller_name: "STONE_EXCHANGER".to_string(),
            seller_avatar_initial: None,
            is_seller_verified: true,
            trade_count: 1280,
            completion_rate: dec("99.9"),
            positive_feedback_rate: Some(dec("99.23")),
            price_per_crypto: dec("16500"),
            fiat_currency: "IDR".to_string(),
            crypto_asset_symbol: "USDT".to_string(),
            min_limit_fiat: dec("10000"),
            max_limit_fiat: dec("5000000"),
            available_crypto: dec("648.62"),
            payment_methods: vec!["bank_transfer".to_string()],
            avg_completion_time_minutes: 15,
            is_promoted: false,
            tags: vec![],
            advertiser_requirements: None,
            side: Some("sell".to_string()),
        }
    }

    #[test]
    fn test_minimal_offer_converts() {
        let offer = Offer::try_from(minimal_offer_record()).unwrap();
        assert_eq!(offer.fiat_currency, Symbol::new("IDR"));
        assert_eq!(offer.side, TradeSide::Sell);
        // Avatar initial derived from the seller name when absent.
        assert_eq!(offer.seller_avatar_initial, "S");
        assert_eq!(offer.limits.min(), dec("10000"));
    }

    #[test]
    fn test_missing_side_defaults_to_sell() {
        let mut record = minimal_offer_record();
        record.side = None;
        let offer = Offer::try_from(record).unwrap();
        assert_eq!(offer.side, TradeSide::Sell);
    }

    #[test]
    fn test_unknown_side_fails() {
        let mut record = minimal_offer_record();
        record.side = Some("short".to_string());
        let err = Offer::try_from(record).unwrap_err();
        assert!(format!("{err}").contains("Unknown side"));
    }

    #[test]
    fn test_non_positive_price_fails() {
        let mut record = minimal_offer_record();
        record.price_per_crypto = Decimal::ZERO;
        assert!(Offer::try_from(record).is_err());
    }

    #[test]
    fn test_offer_serde_round_trips_through_wire_shape() {
        let offer = Offer::try_from(minimal_offer_record()).unwrap();
        let json = serde_json::to_string(&offer).unwrap();
        assert!(json.contains("\"sellerName\""));
        let back: Offer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, offer);
    }

    #[test]
    fn test_offer_deserialization_is_validated() {
        let mut record = minimal_offer_record();
        record.price_per_crypto = Decimal::ZERO;
        let json = serde_json::to_string(&record).unwrap();
        assert!(serde_json::from_str::<Offer>(&json).is_err());
    }

    #[test]
    fn test_inverted_limits_fail_with_offer_id() {
        let mut record = minimal_offer_record();
        record.min_limit_fiat = dec("5000000");
        record.max_limit_fiat = dec("10000");
        let err = Offer::try_from(record).unwrap_err();
        match err {
            OfferValidationError::Multiple(id, errors) => {
                assert_eq!(id, "p2p1");
                assert_eq!(errors.len(), 1);
            }
            other => panic!("expected Multiple, got {other:?}"),
        }
    }
}
