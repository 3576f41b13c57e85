//! Trade form state — app-owned, engine-provided update logic.
//!
//! Each form owns its raw input string and derived amount for the lifetime
//! of one interaction and resets to `Idle` defaults on close. Every update
//! runs synchronously inside the caller's event tick.

use rand::Rng;
use rust_decimal::Decimal;

use super::ticket::{new_order_id, OrderTicket};
use super::{FormPhase, InputMode, RejectReason};
use crate::domain::catalog::{Asset, Catalog, Seller};
use crate::domain::limits::{LimitCheck, TradeLimits};
use crate::domain::offers::Offer;
use crate::domain::pricing::{Converter, RateTable};
use crate::shared::fmt::{money, num};
use crate::shared::{parse_amount, Symbol, TradeSide};

// ─── Convert Form ────────────────────────────────────────────────────────────

/// The convert screen: amount in one wallet asset, derived amount in
/// another, band check against the source asset's conversion limits.
#[derive(Debug, Clone)]
pub struct ConvertForm {
    from: Symbol,
    to: Symbol,
    input: String,
    derived: Option<Decimal>,
    phase: FormPhase,
}

/// What an accepted conversion reports back to the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertReceipt {
    pub from_amount: Decimal,
    pub from_unit: Symbol,
    pub to_amount: Decimal,
    pub to_unit: Symbol,
}

impl ConvertReceipt {
    /// Confirmation line, worded like the screen's notification.
    pub fn summary(&self) -> String {
        format!(
            "Converting {} {} to approx. {} {}.",
            self.from_amount.normalize(),
            self.from_unit,
            convert_display(self.to_amount, &self.to_unit),
            self.to_unit
        )
    }
}

/// The convert screen's own precision rule for the derived field, which
/// predates the shared crypto tiers: BTC and dust at 8 digits, small
/// amounts at 6, USDT at 2, everything else at 4.
fn convert_display(value: Decimal, to_unit: &Symbol) -> String {
    let digits = if to_unit.as_str() == "USDT" {
        2
    } else if to_unit.as_str() == "BTC" || value.abs() < Decimal::new(1, 6) {
        8
    } else if value.abs() < Decimal::new(1, 2) {
        6
    } else {
        4
    };
    num::display_fixed(&value, digits)
}

impl ConvertForm {
    pub fn new(from: impl Into<Symbol>, to: impl Into<Symbol>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            input: String::new(),
            derived: None,
            phase: FormPhase::Idle,
        }
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn from_unit(&self) -> &Symbol {
        &self.from
    }

    pub fn to_unit(&self) -> &Symbol {
        &self.to
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn derived(&self) -> Option<Decimal> {
        self.derived
    }

    /// The derived field as the screen renders it; blank when no valid
    /// conversion exists.
    pub fn derived_display(&self) -> String {
        self.derived
            .map(|amount| convert_display(amount, &self.to))
            .unwrap_or_default()
    }

    /// A keystroke in the source field.
    pub fn set_input(&mut self, raw: &str, converter: &Converter) {
        self.input = raw.to_string();
        self.phase = FormPhase::Editing;
        self.recompute(converter);
    }

    pub fn set_from_unit(&mut self, unit: impl Into<Symbol>, converter: &Converter) {
        self.from = unit.into();
        self.phase = FormPhase::Editing;
        self.recompute(converter);
    }

    pub fn set_to_unit(&mut self, unit: impl Into<Symbol>, converter: &Converter) {
        self.to = unit.into();
        self.phase = FormPhase::Editing;
        self.recompute(converter);
    }

    /// Swap the from/to units, re-seeding the input from the previously
    /// derived value. Without a valid conversion the input clears instead.
    pub fn swap(&mut self, converter: &Converter) {
        std::mem::swap(&mut self.from, &mut self.to);
        self.input = self
            .derived
            // The to-unit just became the from-unit, so the old rendering
            // rule still names the right asset.
            .map(|amount| convert_display(amount, &self.from))
            .unwrap_or_default();
        self.phase = FormPhase::Editing;
        self.recompute(converter);
    }

    /// "Max" seeds the input with the full available balance.
    pub fn set_max(&mut self, available: Decimal, converter: &Converter) {
        self.input = available.normalize().to_string();
        self.phase = FormPhase::Editing;
        self.recompute(converter);
    }

    fn recompute(&mut self, converter: &Converter) {
        self.derived = match parse_amount(&self.input) {
            Some(amount) if amount > Decimal::ZERO => converter
                .try_convert(amount, self.from.as_str(), self.to.as_str())
                .ok(),
            _ => None,
        };
    }

    /// Submit the conversion: amount check, band check against the source
    /// asset's conversion limits, then the rate check.
    pub fn submit(
        &mut self,
        catalog: &Catalog,
        converter: &Converter,
    ) -> Result<ConvertReceipt, RejectReason> {
        self.phase = FormPhase::Validating;
        let result = self.validate(catalog, converter);
        match &result {
            Ok(receipt) => {
                tracing::debug!(
                    "Convert accepted: {} {} -> {} {}",
                    receipt.from_amount,
                    receipt.from_unit,
                    receipt.to_amount,
                    receipt.to_unit
                );
                self.phase = FormPhase::Accepted;
            }
            Err(reason) => {
                tracing::debug!("Convert rejected: {}", reason.user_message());
                self.phase = FormPhase::Rejected(reason.clone());
            }
        }
        result
    }

    fn validate(
        &self,
        catalog: &Catalog,
        converter: &Converter,
    ) -> Result<ConvertReceipt, RejectReason> {
        let amount = match parse_amount(&self.input) {
            Some(a) if a > Decimal::ZERO => a,
            _ => return Err(RejectReason::InvalidAmount { unit: None }),
        };

        // Assets without a configured band accept any positive amount.
        let limits = catalog
            .deposit_asset(&self.from)
            .map(|asset| asset.convert_limits)
            .unwrap_or_else(TradeLimits::unbounded);
        match limits.validate(Some(amount)) {
            LimitCheck::Valid => {}
            LimitCheck::InvalidAmount => {
                return Err(RejectReason::InvalidAmount { unit: None })
            }
            LimitCheck::BelowMinimum { min } => {
                return Err(RejectReason::BelowMinimum {
                    bound: min,
                    unit: self.from.clone(),
                })
            }
            LimitCheck::AboveMaximum { max } => {
                return Err(RejectReason::AboveMaximum {
                    bound: max,
                    unit: self.from.clone(),
                })
            }
        }

        let to_amount = converter
            .try_convert(amount, self.from.as_str(), self.to.as_str())
            .map_err(|_| RejectReason::RateUnavailable {
                unit: self.to.clone(),
            })?;

        Ok(ConvertReceipt {
            from_amount: amount,
            from_unit: self.from.clone(),
            to_amount,
            to_unit: self.to.clone(),
        })
    }

    /// Close the screen: all fields return to `Idle` defaults.
    pub fn reset(&mut self) {
        self.input.clear();
        self.derived = None;
        self.phase = FormPhase::Idle;
    }
}

// ─── Offer Trade Form ────────────────────────────────────────────────────────

/// The P2P offer modal: one input field in fiat or crypto mode, the other
/// derived through the offer's unit price.
#[derive(Debug, Clone)]
pub struct OfferTradeForm {
    offer: Offer,
    /// What the taker does against the offer.
    side: TradeSide,
    mode: InputMode,
    input: String,
    derived: Option<Decimal>,
    payment_method: Option<String>,
    phase: FormPhase,
}

impl OfferTradeForm {
    pub fn new(offer: Offer, side: TradeSide) -> Self {
        Self {
            offer,
            side,
            mode: InputMode::Fiat,
            input: String::new(),
            derived: None,
            payment_method: None,
            phase: FormPhase::Idle,
        }
    }

    pub fn offer(&self) -> &Offer {
        &self.offer
    }

    pub fn side(&self) -> TradeSide {
        self.side
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn derived(&self) -> Option<Decimal> {
        self.derived
    }

    /// The paired field as the modal renders it ("You Receive (approx.)"),
    /// blank without a valid amount.
    pub fn derived_display(&self) -> String {
        let Some(derived) = self.derived else {
            return String::new();
        };
        match self.mode {
            InputMode::Fiat => money::crypto(&derived, &self.offer.crypto_asset_symbol),
            InputMode::Crypto => money::fiat(&derived, &self.offer.fiat_currency),
        }
    }

    pub fn set_payment_method(&mut self, method: impl Into<String>) {
        self.payment_method = Some(method.into());
    }

    /// A keystroke in the active field.
    pub fn set_input(&mut self, raw: &str) {
        self.input = raw.to_string();
        self.phase = FormPhase::Editing;
        self.recompute();
    }

    /// Switch fiat/crypto mode, re-seeding the input with the best-known
    /// converted value of the other field rather than clearing it. Without
    /// a valid conversion the input clears.
    pub fn set_mode(&mut self, mode: InputMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.input = self
            .derived
            .map(|amount| match self.mode {
                // The derived value is already in the new mode's unit.
                InputMode::Fiat => {
                    num::display_fixed(&amount, fiat_input_digits(&self.offer.fiat_currency))
                }
                InputMode::Crypto => num::display_fixed(&amount, 8),
            })
            .unwrap_or_default();
        self.phase = FormPhase::Editing;
        self.recompute();
    }

    /// "Max": fiat mode takes the offer's max fiat limit; crypto mode takes
    /// its crypto equivalent, capped by the offer's available inventory when
    /// buying from it. Rendered at 8 fraction digits like the screen.
    pub fn set_max(&mut self) {
        self.input = match self.mode {
            InputMode::Fiat => self.offer.limits.max().normalize().to_string(),
            InputMode::Crypto => {
                let max_crypto = self
                    .offer
                    .limits
                    .max()
                    .checked_div(self.offer.price_per_crypto)
                    .unwrap_or(Decimal::ZERO);
                let capped = if self.side == TradeSide::Buy {
                    max_crypto.min(self.offer.available_crypto)
                } else {
                    max_crypto
                };
                num::display_fixed(&capped, 8)
            }
        };
        self.phase = FormPhase::Editing;
        self.recompute();
    }

    fn recompute(&mut self) {
        // Checked arithmetic: a zero-price offer or an absurdly large
        // keystroke yields "no derived value", not a panic.
        self.derived = match parse_amount(&self.input) {
            Some(amount) if amount > Decimal::ZERO => match self.mode {
                InputMode::Fiat => amount.checked_div(self.offer.price_per_crypto),
                InputMode::Crypto => amount.checked_mul(self.offer.price_per_crypto),
            },
            _ => None,
        };
    }

    fn input_unit(&self) -> &Symbol {
        match self.mode {
            InputMode::Fiat => &self.offer.fiat_currency,
            InputMode::Crypto => &self.offer.crypto_asset_symbol,
        }
    }

    /// Submit the order: amount check, then the offer's fiat band, then the
    /// ticket the order-created screen renders.
    pub fn submit(&mut self, rng: &mut impl Rng) -> Result<OrderTicket, RejectReason> {
        self.phase = FormPhase::Validating;
        let result = self.validate(rng);
        match &result {
            Ok(ticket) => {
                tracing::debug!(
                    "Order accepted: {} {} {} for {} {}",
                    ticket.order_id,
                    ticket.trade_type,
                    ticket.crypto_asset_symbol,
                    ticket.fiat_amount,
                    ticket.fiat_currency
                );
                self.phase = FormPhase::Accepted;
            }
            Err(reason) => {
                tracing::debug!("Order rejected: {}", reason.user_message());
                self.phase = FormPhase::Rejected(reason.clone());
            }
        }
        result
    }

    fn validate(&self, rng: &mut impl Rng) -> Result<OrderTicket, RejectReason> {
        let amount = match parse_amount(&self.input) {
            Some(a) if a > Decimal::ZERO => a,
            _ => {
                return Err(RejectReason::InvalidAmount {
                    unit: Some(self.input_unit().clone()),
                })
            }
        };

        let paired = match self.mode {
            InputMode::Fiat => amount.checked_div(self.offer.price_per_crypto),
            InputMode::Crypto => amount.checked_mul(self.offer.price_per_crypto),
        };
        let (fiat_amount, crypto_amount) = match (self.mode, paired) {
            (InputMode::Fiat, Some(crypto)) => (amount, crypto),
            (InputMode::Crypto, Some(fiat)) => (fiat, amount),
            (_, None) => {
                return Err(RejectReason::InvalidAmount {
                    unit: Some(self.input_unit().clone()),
                })
            }
        };

        match self.offer.limits.validate(Some(fiat_amount)) {
            LimitCheck::Valid => {}
            LimitCheck::InvalidAmount => {
                return Err(RejectReason::InvalidAmount {
                    unit: Some(self.input_unit().clone()),
                })
            }
            LimitCheck::BelowMinimum { min } => {
                return Err(RejectReason::BelowMinimum {
                    bound: min,
                    unit: self.offer.fiat_currency.clone(),
                })
            }
            LimitCheck::AboveMaximum { max } => {
                return Err(RejectReason::AboveMaximum {
                    bound: max,
                    unit: self.offer.fiat_currency.clone(),
                })
            }
        }

        Ok(OrderTicket {
            order_id: new_order_id(rng),
            trade_type: self.side,
            asset_id: None,
            crypto_asset_symbol: self.offer.crypto_asset_symbol.clone(),
            seller_id: None,
            seller_name: Some(self.offer.seller_name.clone()),
            seller_avatar_initial: Some(self.offer.seller_avatar_initial.clone()),
            fiat_currency: self.offer.fiat_currency.clone(),
            fiat_amount,
            crypto_amount,
            price_per_crypto: self.offer.price_per_crypto,
            payment_method: self.payment_method.clone(),
            advertiser_requirements: self.offer.advertiser_requirements.clone(),
        })
    }

    /// Close the modal: mode, fields, and phase return to `Idle` defaults.
    pub fn reset(&mut self) {
        self.mode = InputMode::Fiat;
        self.input.clear();
        self.derived = None;
        self.payment_method = None;
        self.phase = FormPhase::Idle;
    }
}

/// Fraction digits for re-seeding a fiat input field.
fn fiat_input_digits(currency: &Symbol) -> u32 {
    if currency.as_str() == "IDR" {
        0
    } else {
        2
    }
}

// ─── Proposal Form ───────────────────────────────────────────────────────────

/// The trade-proposal modal: an asset amount proposed to a specific seller,
/// validated against the seller's USD band at the asking price.
#[derive(Debug, Clone)]
pub struct ProposalForm {
    asset: Asset,
    seller: Seller,
    input: String,
    phase: FormPhase,
}

impl ProposalForm {
    pub fn new(asset: Asset, seller: Seller) -> Self {
        Self {
            asset,
            seller,
            input: String::new(),
            phase: FormPhase::Idle,
        }
    }

    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    pub fn seller(&self) -> &Seller {
        &self.seller
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, raw: &str) {
        self.input = raw.to_string();
        self.phase = FormPhase::Editing;
    }

    /// The USD price the proposal trades at: the seller's desired price when
    /// quoted, else the asset's resolved market price.
    pub fn asking_price_usd(&self, converter: &Converter) -> Option<Decimal> {
        match self.seller.asking_price_usd {
            Some(price) => Some(price),
            None => converter.asset_usd_price(&self.asset),
        }
    }

    /// Estimated cost of the typed amount, in USD at the asking price.
    /// `None` when the amount is absent, the price unresolvable, or the
    /// product does not fit a `Decimal`.
    pub fn estimated_cost_usd(&self, converter: &Converter) -> Option<Decimal> {
        let amount = parse_amount(&self.input).filter(|a| *a > Decimal::ZERO)?;
        amount.checked_mul(self.asking_price_usd(converter)?)
    }

    /// Estimated cost in the display currency; `None` when USD is already
    /// displayed or the currency has no rate.
    pub fn estimated_cost_in(
        &self,
        currency: &Symbol,
        converter: &Converter,
        rates: &RateTable,
    ) -> Option<Decimal> {
        if currency.as_str() == "USD" {
            return None;
        }
        Some(self.estimated_cost_usd(converter)? / rates.usd_rate(currency)?)
    }

    /// Submit the proposal and produce the ticket the chat screen opens
    /// with.
    pub fn submit(
        &mut self,
        converter: &Converter,
        rng: &mut impl Rng,
    ) -> Result<OrderTicket, RejectReason> {
        self.phase = FormPhase::Validating;
        let result = self.validate(converter, rng);
        match &result {
            Ok(ticket) => {
                tracing::debug!(
                    "Proposal accepted: {} for {} USD with {}",
                    ticket.order_id,
                    ticket.fiat_amount,
                    self.seller.name
                );
                self.phase = FormPhase::Accepted;
            }
            Err(reason) => {
                tracing::debug!("Proposal rejected: {}", reason.user_message());
                self.phase = FormPhase::Rejected(reason.clone());
            }
        }
        result
    }

    fn validate(
        &self,
        converter: &Converter,
        rng: &mut impl Rng,
    ) -> Result<OrderTicket, RejectReason> {
        let amount = match parse_amount(&self.input) {
            Some(a) if a > Decimal::ZERO => a,
            _ => {
                return Err(RejectReason::InvalidAmount {
                    unit: Some(self.asset.symbol.clone()),
                })
            }
        };

        let asking_price =
            self.asking_price_usd(converter)
                .ok_or_else(|| RejectReason::RateUnavailable {
                    unit: self.asset.symbol.clone(),
                })?;

        let amount_usd =
            amount
                .checked_mul(asking_price)
                .ok_or_else(|| RejectReason::InvalidAmount {
                    unit: Some(self.asset.symbol.clone()),
                })?;
        match self.seller.limits_usd.validate(Some(amount_usd)) {
            LimitCheck::Valid => {}
            LimitCheck::InvalidAmount => {
                return Err(RejectReason::InvalidAmount {
                    unit: Some(self.asset.symbol.clone()),
                })
            }
            LimitCheck::BelowMinimum { min } => {
                return Err(RejectReason::BelowMinimumUsd {
                    bound: min,
                    equivalent: min / asking_price,
                    asset: self.asset.symbol.clone(),
                })
            }
            LimitCheck::AboveMaximum { max } => {
                return Err(RejectReason::AboveMaximumUsd {
                    bound: max,
                    equivalent: max / asking_price,
                    asset: self.asset.symbol.clone(),
                })
            }
        }

        Ok(OrderTicket {
            order_id: new_order_id(rng),
            trade_type: TradeSide::Buy,
            asset_id: Some(self.asset.id.clone()),
            crypto_asset_symbol: self.asset.symbol.clone(),
            seller_id: Some(self.seller.id.clone()),
            seller_name: Some(self.seller.name.clone()),
            seller_avatar_initial: self
                .seller
                .name
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string()),
            fiat_currency: Symbol::new("USD"),
            fiat_amount: amount_usd,
            crypto_amount: amount,
            price_per_crypto: asking_price,
            payment_method: None,
            advertiser_requirements: None,
        })
    }

    /// Close the modal.
    pub fn reset(&mut self) {
        self.input.clear();
        self.phase = FormPhase::Idle;
    }
}
