//! Offer book — app-owned container, engine-provided update logic.

use super::wire;
use super::{Offer, OfferValidationError};
use crate::shared::{Symbol, TradeSide};

/// The offers currently on the market board, in source order.
///
/// The app owns instances of this type and binds its filtered views to the
/// screen.
pub struct OfferBook {
    pub offers: Vec<Offer>,
}

impl OfferBook {
    pub fn new() -> Self {
        Self { offers: Vec::new() }
    }

    /// Replace the book from raw records, keeping the valid ones. Invalid
    /// records are discarded with a warning and their errors returned.
    pub fn replace(&mut self, records: Vec<wire::OfferRecord>) -> Vec<OfferValidationError> {
        self.offers.clear();
        let mut errors = Vec::new();
        for record in records {
            match Offer::try_from(record) {
                Ok(offer) => self.offers.push(offer),
                Err(err) => {
                    tracing::warn!("Discarding invalid offer: {}", err);
                    errors.push(err);
                }
            }
        }
        errors
    }

    pub fn push(&mut self, offer: Offer) {
        self.offers.push(offer);
    }

    pub fn clear(&mut self) {
        self.offers.clear();
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    /// The market screen's view: exact fiat and asset, optionally one side.
    pub fn filter(
        &self,
        fiat: &Symbol,
        asset: &Symbol,
        side: Option<TradeSide>,
    ) -> Vec<&Offer> {
        self.offers
            .iter()
            .filter(|offer| {
                &offer.fiat_currency == fiat
                    && &offer.crypto_asset_symbol == asset
                    && side.map_or(true, |s| offer.side == s)
            })
            .collect()
    }
}

impl Default for OfferBook {
    fn default() -> Self {
        Self::new()
    }
}
