//! Built-in catalog fixture — the simulated dataset the app ships with.
//!
//! Seven regions, five settlement networks, five display currencies, six
//! market-board listings, five seller profiles, and five depositable assets
//! with their conversion bands. Decimals are strings, like all wire data.

use super::Catalog;
use crate::error::CoreError;
use lazy_static::lazy_static;

const CATALOG_JSON: &str = r#"{
  "regions": [
    { "id": "global", "name": "Global" },
    { "id": "north_america", "name": "North America" },
    { "id": "europe", "name": "Europe" },
    { "id": "asia", "name": "Asia" },
    { "id": "south_america", "name": "South America" },
    { "id": "africa", "name": "Africa" },
    { "id": "oceania", "name": "Oceania" }
  ],
  "networks": [
    { "id": "bitcoin", "name": "Bitcoin" },
    { "id": "ethereum", "name": "Ethereum (ERC20)" },
    { "id": "solana", "name": "Solana" },
    { "id": "bsc", "name": "BNB Smart Chain (BEP20)" },
    { "id": "tron", "name": "TRON (TRC20)" }
  ],
  "currencies": [
    { "id": "usd", "name": "US Dollar", "symbol": "$" },
    { "id": "eur", "name": "Euro", "symbol": "€" },
    { "id": "gbp", "name": "British Pound", "symbol": "£" },
    { "id": "jpy", "name": "Japanese Yen", "symbol": "¥" },
    { "id": "usdt", "name": "Tether", "symbol": "USDT" }
  ],
  "paymentMethods": [
    { "id": "bank_transfer", "name": "Bank Transfer" },
    { "id": "gopay", "name": "GoPay" },
    { "id": "ovo", "name": "OVO" },
    { "id": "dana", "name": "DANA" },
    { "id": "wise", "name": "Wise" }
  ],
  "assets": [
    {
      "id": "1", "name": "Bitcoin", "symbol": "BTC",
      "price": "60000", "currency": "USDT",
      "region": "global", "network": "bitcoin", "icon": "bitcoin",
      "volume": "1.5", "change24h": "2.5", "seller": "CryptoKing"
    },
    {
      "id": "2", "name": "Ethereum", "symbol": "ETH",
      "price": "3000", "currency": "USDT",
      "region": "europe", "network": "ethereum", "icon": "gem",
      "volume": "10", "change24h": "-1.2", "seller": "ETHWhale"
    },
    {
      "id": "3", "name": "Solana", "symbol": "SOL",
      "price": "150", "currency": "USD",
      "region": "asia", "network": "solana", "icon": "sun",
      "volume": "100", "change24h": "5.1", "seller": "SolTraderPro"
    },
    {
      "id": "4", "name": "USDC", "symbol": "USDC",
      "price": "1", "currency": "USD",
      "region": "north_america", "network": "ethereum", "icon": "dollar-sign",
      "volume": "50000", "change24h": "0.01", "seller": "StableCoinGuru"
    },
    {
      "id": "5", "name": "BNB", "symbol": "BNB",
      "price": "580", "currency": "USDT",
      "region": "global", "network": "bsc", "icon": "coins",
      "volume": "50", "change24h": "1.8", "seller": "BNBFan"
    },
    {
      "id": "6", "name": "Bitcoin (EU Seller)", "symbol": "BTC",
      "price": "52000", "currency": "EUR",
      "region": "europe", "network": "bitcoin", "icon": "bitcoin",
      "volume": "0.5", "change24h": "2.1", "seller": "EuroBitcoinMax"
    }
  ],
  "sellers": [
    {
      "id": "seller1", "name": "CryptoKing", "reputation": 99,
      "avgTradeTime": "3 mins",
      "minSellUSD": "50", "maxSellUSD": "10000",
      "desiredPricePerAssetUSD": "60500"
    },
    {
      "id": "seller2", "name": "ETHWhale", "reputation": 97,
      "avgTradeTime": "5 mins",
      "minSellUSD": "100", "maxSellUSD": "50000"
    },
    {
      "id": "seller3", "name": "SolTraderPro", "reputation": 95,
      "avgTradeTime": "8 mins",
      "minSellUSD": "20", "maxSellUSD": "5000"
    },
    {
      "id": "seller4", "name": "QuickCoins", "reputation": 92,
      "avgTradeTime": "2 mins"
    },
    {
      "id": "seller5", "name": "TrustedTradex", "reputation": 98,
      "avgTradeTime": "10 mins",
      "minSellUSD": "10", "maxSellUSD": "2500"
    }
  ],
  "depositAssets": [
    {
      "id": "btc", "name": "Bitcoin", "symbol": "BTC", "icon": "bitcoin",
      "supportedNetworks": ["bitcoin"],
      "minConvert": "0.00001", "maxConvert": "10"
    },
    {
      "id": "eth", "name": "Ethereum", "symbol": "ETH", "icon": "gem",
      "supportedNetworks": ["ethereum"],
      "minConvert": "0.0001", "maxConvert": "100"
    },
    {
      "id": "usdt", "name": "Tether", "symbol": "USDT", "icon": "dollar-sign",
      "supportedNetworks": ["ethereum", "bsc", "tron", "solana"],
      "minConvert": "0.01", "maxConvert": "4500000"
    },
    {
      "id": "sol", "name": "Solana", "symbol": "SOL", "icon": "sun",
      "supportedNetworks": ["solana"],
      "minConvert": "0.01", "maxConvert": "1000"
    },
    {
      "id": "bnb", "name": "BNB", "symbol": "BNB", "icon": "coins",
      "supportedNetworks": ["bsc"],
      "minConvert": "0.000015", "maxConvert": "7200"
    }
  ]
}"#;

/// Parse and validate the built-in dataset.
pub fn load() -> Result<Catalog, CoreError> {
    let file: super::wire::CatalogFile = serde_json::from_str(CATALOG_JSON)?;
    Ok(Catalog::try_from(file)?)
}

lazy_static! {
    static ref CATALOG: Catalog = load().expect("built-in catalog fixture is valid");
}

/// The validated built-in catalog, parsed once on first touch.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_fixture_loads_and_counts_match() {
        let catalog = catalog();
        assert_eq!(catalog.regions().len(), 7);
        assert_eq!(catalog.networks().len(), 5);
        assert_eq!(catalog.currencies().len(), 5);
        assert_eq!(catalog.payment_methods().len(), 5);
        assert_eq!(catalog.assets().len(), 6);
        assert_eq!(catalog.sellers().len(), 5);
        assert_eq!(catalog.deposit_assets().len(), 5);
    }

    #[test]
    fn test_fixture_listing_values() {
        let catalog = catalog();
        let btc = catalog.asset_by_id("1").unwrap();
        assert_eq!(btc.price, Decimal::from(60000));
        assert_eq!(btc.currency.as_str(), "USDT");
        let eu_btc = catalog.asset_by_id("6").unwrap();
        assert_eq!(eu_btc.currency.as_str(), "EUR");
        assert_eq!(eu_btc.symbol.as_str(), "BTC");
    }

    #[test]
    fn test_fixture_seller_bands() {
        let catalog = catalog();
        let crypto_king = catalog.seller("seller1").unwrap();
        assert_eq!(crypto_king.limits_usd.min(), Decimal::from(50));
        assert_eq!(crypto_king.limits_usd.max(), Decimal::from(10000));
        assert_eq!(crypto_king.asking_price_usd, Some(Decimal::from(60500)));
        // QuickCoins ships without a band and accepts any positive amount.
        let quick_coins = catalog.seller("seller4").unwrap();
        assert_eq!(quick_coins.limits_usd.max(), Decimal::MAX);
    }

    #[test]
    fn test_fixture_convert_bands() {
        let catalog = catalog();
        let usdt = catalog.deposit_asset(&crate::shared::Symbol::new("USDT")).unwrap();
        assert_eq!(usdt.convert_limits.min(), Decimal::from_str("0.01").unwrap());
        assert_eq!(usdt.convert_limits.max(), Decimal::from(4_500_000));
        assert_eq!(usdt.supported_networks.len(), 4);
    }
}
