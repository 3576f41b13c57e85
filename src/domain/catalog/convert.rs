//! Conversion: CatalogFile → Catalog (TryFrom + validation).

use super::wire;
use super::{
    Asset, Catalog, DepositAsset, FiatCurrency, Network, PaymentMethod, Region, Seller,
    ValidationError,
};
use crate::domain::limits::TradeLimits;
use crate::shared::{AssetId, Symbol};
use rust_decimal::Decimal;
use std::collections::HashSet;

impl TryFrom<wire::CatalogFile> for Catalog {
    type Error = ValidationError;

    fn try_from(source: wire::CatalogFile) -> Result<Self, Self::Error> {
        let mut errors: Vec<ValidationError> = Vec::new();

        let regions: Vec<Region> = source
            .regions
            .into_iter()
            .map(|r| Region {
                id: r.id,
                name: r.name,
            })
            .collect();
        let networks: Vec<Network> = source
            .networks
            .into_iter()
            .map(|n| Network {
                id: n.id,
                name: n.name,
                icon: n.icon,
            })
            .collect();

        // Validate currencies
        let mut currencies: Vec<FiatCurrency> = Vec::new();
        let mut currency_ids: HashSet<String> = HashSet::new();
        for record in source.currencies {
            let id = record.id.to_lowercase();
            if !currency_ids.insert(id.clone()) {
                errors.push(ValidationError::DuplicateCurrency(record.id));
                continue;
            }
            currencies.push(FiatCurrency {
                id,
                name: record.name,
                symbol: record.symbol,
            });
        }

        let payment_methods: Vec<PaymentMethod> = source
            .payment_methods
            .into_iter()
            .map(|p| PaymentMethod {
                id: p.id,
                name: p.name,
            })
            .collect();

        // Validate assets
        let mut assets: Vec<Asset> = Vec::new();
        let mut asset_ids: HashSet<String> = HashSet::new();
        for record in source.assets {
            let id = record
                .id
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| {
                    errors.push(ValidationError::AssetIdMissing);
                    String::new()
                });
            if !id.is_empty() && !asset_ids.insert(id.clone()) {
                errors.push(ValidationError::DuplicateAssetId(id));
                continue;
            }
            let name = record
                .name
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| {
                    errors.push(ValidationError::AssetNameMissing(id.clone()));
                    String::new()
                });
            let symbol = record
                .symbol
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| {
                    errors.push(ValidationError::AssetSymbolMissing(id.clone()));
                    String::new()
                });
            if record.price <= Decimal::ZERO {
                errors.push(ValidationError::NonPositivePrice {
                    id: id.clone(),
                    price: record.price,
                });
            }
            if !regions.iter().any(|r| r.id == record.region) {
                errors.push(ValidationError::UnknownRegion {
                    id: id.clone(),
                    region: record.region.clone(),
                });
            }
            if !networks.iter().any(|n| n.id == record.network) {
                errors.push(ValidationError::UnknownNetwork {
                    id: id.clone(),
                    network: record.network.clone(),
                });
            }
            assets.push(Asset {
                id: AssetId::new(id),
                name,
                symbol: Symbol::new(symbol),
                price: record.price,
                currency: Symbol::new(record.currency),
                region: record.region,
                network: record.network,
                icon: record.icon,
                volume: record.volume,
                change_24h: record.change_24h,
                seller: record.seller,
            });
        }

        // Validate sellers
        let mut sellers: Vec<Seller> = Vec::new();
        for record in source.sellers {
            if let Some(reputation) = record.reputation {
                if reputation > 100 {
                    errors.push(ValidationError::ReputationOutOfRange {
                        id: record.id.clone(),
                        reputation,
                    });
                }
            }
            if let Some(price) = record.desired_price_per_asset_usd {
                if price <= Decimal::ZERO {
                    errors.push(ValidationError::NonPositiveAskingPrice {
                        id: record.id.clone(),
                        price,
                    });
                }
            }
            let limits_usd = match (record.min_sell_usd, record.max_sell_usd) {
                (Some(min), Some(max)) => match TradeLimits::new(min, max) {
                    Ok(limits) => limits,
                    Err(err) => {
                        errors.push(ValidationError::SellerLimits(record.id.clone(), err));
                        TradeLimits::unbounded()
                    }
                },
                (None, None) => TradeLimits::unbounded(),
                _ => {
                    errors.push(ValidationError::SellerBandIncomplete(record.id.clone()));
                    TradeLimits::unbounded()
                }
            };
            sellers.push(Seller {
                id: record.id,
                name: record.name,
                reputation: record.reputation,
                avg_trade_time: record.avg_trade_time,
                limits_usd,
                asking_price_usd: record.desired_price_per_asset_usd,
            });
        }

        // Validate deposit assets
        let mut deposit_assets: Vec<DepositAsset> = Vec::new();
        for record in source.deposit_assets {
            for network in &record.supported_networks {
                if !networks.iter().any(|n| &n.id == network) {
                    errors.push(ValidationError::UnknownNetwork {
                        id: record.id.clone(),
                        network: network.clone(),
                    });
                }
            }
            let convert_limits = match TradeLimits::new(record.min_convert, record.max_convert) {
                Ok(limits) => limits,
                Err(err) => {
                    errors.push(ValidationError::ConvertLimits(record.id.clone(), err));
                    TradeLimits::unbounded()
                }
            };
            deposit_assets.push(DepositAsset {
                id: record.id,
                name: record.name,
                symbol: Symbol::new(record.symbol),
                icon: record.icon,
                supported_networks: record.supported_networks,
                convert_limits,
            });
        }

        if !errors.is_empty() {
            return Err(ValidationError::Multiple(errors));
        }

        tracing::debug!(
            "Catalog validated: {} assets, {} currencies, {} sellers, {} deposit assets",
            assets.len(),
            currencies.len(),
            sellers.len(),
            deposit_assets.len()
        );

        Ok(Catalog {
            regions,
            networks,
            currencies,
            payment_methods,
            assets,
            sellers,
            deposit_assets,
        })
    }
}
