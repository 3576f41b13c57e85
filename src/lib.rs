//! # AnonTrade Core
//!
//! The currency and limit conversion engine behind the AnonTrade P2P
//! front-end: a deterministic, UI-free core that prices assets in USD,
//! converts amounts between any two units, validates trade bands, formats
//! money for display, and drives the trade-form state machines.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Shared** — Newtypes (`Symbol`, `AssetId`, `TradeSide`), amount
//!    parsing, display formatting
//! 2. **Reference data** — The asset/seller catalog and fiat rate table,
//!    each with a built-in fixture
//! 3. **Engine** — `Converter` (USD-routed pricing), `TradeLimits`
//!    (inclusive band checks)
//! 4. **Flows** — Form state machines (`ConvertForm`, `OfferTradeForm`,
//!    `ProposalForm`), the `OrderTicket` query codec, and the derived
//!    `Portfolio`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use anontrade_core::prelude::*;
//!
//! let catalog = catalog::fixture::catalog();
//! let converter = Converter::new(&REFERENCE_RATES, catalog);
//!
//! let mut form = ProposalForm::new(
//!     catalog.resolve("BTC").unwrap().clone(),
//!     catalog.seller("seller1").unwrap().clone(),
//! );
//! form.set_input("0.005");
//! let ticket = form.submit(&converter, &mut rand::thread_rng())?;
//! ```

// ── Shared ───────────────────────────────────────────────────────────────────

/// Shared newtypes, amount parsing, serde helpers, display formatting.
pub mod shared;

// ── Domain ───────────────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions, state,
/// fixtures.
pub mod domain;

/// Unified crate error type.
pub mod error;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{parse_amount, AssetId, Symbol, TradeSide};

    // Formatting
    pub use crate::shared::fmt;

    // Reference data — catalog
    pub use crate::domain::catalog::{
        self, Asset, Catalog, DepositAsset, FiatCurrency, Network, PaymentMethod, Region, Seller,
    };

    // Reference data — rates
    pub use crate::domain::pricing::{ConvertError, Converter, RateTable, REFERENCE_RATES};

    // Limits
    pub use crate::domain::limits::{LimitCheck, TradeLimits};

    // Offer board
    pub use crate::domain::offers::{self, Offer};
    pub use crate::domain::offers::state::OfferBook;

    // Trade flows
    pub use crate::domain::trade::{
        ConvertForm, ConvertReceipt, FormPhase, InputMode, OfferTradeForm, OrderTicket,
        ProposalForm, RejectReason, PROCESSING_DELAY,
    };

    // Portfolio
    pub use crate::domain::portfolio::{
        self, Holding, Portfolio, TxKind, TxStatus, WalletTransaction,
    };

    // Errors
    pub use crate::error::CoreError;
}
