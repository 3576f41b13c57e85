//! Built-in offer board fixture — the simulated P2P listings the app ships
//! with.
//!
//! Six advertiser listings: four on the IDR/USDT board (three sell-side, one
//! buy-side), one IDR/BTC, one USD/BTC. Payment method ids reference the
//! catalog registry.

use super::Offer;
use crate::error::CoreError;
use lazy_static::lazy_static;

const OFFERS_JSON: &str = r#"[
  {
    "id": "p2p1",
    "sellerName": "STONE_EXCHANGER",
    "sellerAvatarInitial": "S",
    "isSellerVerified": true,
    "tradeCount": 1280,
    "completionRate": "99.9",
    "positiveFeedbackRate": "99.23",
    "pricePerCrypto": "16500",
    "fiatCurrency": "IDR",
    "cryptoAssetSymbol": "USDT",
    "minLimitFiat": "10000",
    "maxLimitFiat": "5000000",
    "availableCrypto": "648.62",
    "paymentMethods": ["bank_transfer", "gopay"],
    "avgCompletionTimeMinutes": 15,
    "tags": ["Verification"],
    "side": "sell"
  },
  {
    "id": "p2p2",
    "sellerName": "CryptoMamba",
    "sellerAvatarInitial": "C",
    "isSellerVerified": true,
    "tradeCount": 3420,
    "completionRate": "99.5",
    "positiveFeedbackRate": "98.75",
    "pricePerCrypto": "16480",
    "fiatCurrency": "IDR",
    "cryptoAssetSymbol": "USDT",
    "minLimitFiat": "50000",
    "maxLimitFiat": "25000000",
    "availableCrypto": "12500.5",
    "paymentMethods": ["bank_transfer", "ovo", "dana"],
    "avgCompletionTimeMinutes": 10,
    "isPromoted": true,
    "tags": ["Fast Trader"],
    "advertiserRequirements": "Payment within 15 minutes.",
    "side": "sell"
  },
  {
    "id": "p2p3",
    "sellerName": "RupiahDesk",
    "isSellerVerified": false,
    "tradeCount": 356,
    "completionRate": "97.8",
    "pricePerCrypto": "16525",
    "fiatCurrency": "IDR",
    "cryptoAssetSymbol": "USDT",
    "minLimitFiat": "100000",
    "maxLimitFiat": "10000000",
    "availableCrypto": "2340",
    "paymentMethods": ["bank_transfer"],
    "avgCompletionTimeMinutes": 30,
    "side": "sell"
  },
  {
    "id": "p2p4",
    "sellerName": "HodlHouse",
    "sellerAvatarInitial": "H",
    "isSellerVerified": true,
    "tradeCount": 975,
    "completionRate": "99.2",
    "positiveFeedbackRate": "99.01",
    "pricePerCrypto": "16450",
    "fiatCurrency": "IDR",
    "cryptoAssetSymbol": "USDT",
    "minLimitFiat": "20000",
    "maxLimitFiat": "3000000",
    "availableCrypto": "5000",
    "paymentMethods": ["gopay", "dana"],
    "avgCompletionTimeMinutes": 18,
    "side": "buy"
  },
  {
    "id": "p2p5",
    "sellerName": "BTC_Sultan",
    "sellerAvatarInitial": "B",
    "isSellerVerified": true,
    "tradeCount": 890,
    "completionRate": "99.1",
    "positiveFeedbackRate": "99.0",
    "pricePerCrypto": "965000000",
    "fiatCurrency": "IDR",
    "cryptoAssetSymbol": "BTC",
    "minLimitFiat": "500000",
    "maxLimitFiat": "150000000",
    "availableCrypto": "0.85",
    "paymentMethods": ["bank_transfer", "wise"],
    "avgCompletionTimeMinutes": 20,
    "tags": ["Verification"],
    "advertiserRequirements": "No third-party payments.",
    "side": "sell"
  },
  {
    "id": "p2p6",
    "sellerName": "GreenLight Trading",
    "sellerAvatarInitial": "G",
    "isSellerVerified": true,
    "tradeCount": 2150,
    "completionRate": "99.7",
    "positiveFeedbackRate": "99.5",
    "pricePerCrypto": "60450",
    "fiatCurrency": "USD",
    "cryptoAssetSymbol": "BTC",
    "minLimitFiat": "100",
    "maxLimitFiat": "50000",
    "availableCrypto": "1.2",
    "paymentMethods": ["wise", "bank_transfer"],
    "avgCompletionTimeMinutes": 12,
    "side": "sell"
  }
]"#;

/// Parse and validate the built-in board. Unlike [`super::state::OfferBook::replace`],
/// a single invalid record fails the whole load: fixture data has no excuse.
pub fn load() -> Result<Vec<Offer>, CoreError> {
    let records: Vec<super::wire::OfferRecord> = serde_json::from_str(OFFERS_JSON)?;
    records
        .into_iter()
        .map(|record| Ok(Offer::try_from(record)?))
        .collect()
}

lazy_static! {
    static ref OFFERS: Vec<Offer> = load().expect("built-in offer fixture is valid");
}

/// The validated built-in board, parsed once on first touch.
pub fn offers() -> &'static [Offer] {
    &OFFERS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::offers::state::OfferBook;
    use crate::shared::{Symbol, TradeSide};

    #[test]
    fn test_fixture_loads() {
        let offers = offers();
        assert_eq!(offers.len(), 6);
        assert_eq!(offers[0].seller_name, "STONE_EXCHANGER");
        assert_eq!(offers[0].seller_avatar_initial, "S");
    }

    #[test]
    fn test_fixture_board_filters() {
        let mut book = OfferBook::new();
        for offer in offers() {
            book.push(offer.clone());
        }
        let idr = Symbol::new("IDR");
        let usdt = Symbol::new("USDT");
        assert_eq!(book.filter(&idr, &usdt, Some(TradeSide::Sell)).len(), 3);
        assert_eq!(book.filter(&idr, &usdt, Some(TradeSide::Buy)).len(), 1);
        assert_eq!(
            book.filter(&Symbol::new("USD"), &Symbol::new("BTC"), None).len(),
            1
        );
    }

    #[test]
    fn test_fixture_avatar_derived_when_absent() {
        // RupiahDesk ships without an explicit avatar initial.
        let rupiah = offers().iter().find(|o| o.id == "p2p3").unwrap();
        assert_eq!(rupiah.seller_avatar_initial, "R");
    }
}
