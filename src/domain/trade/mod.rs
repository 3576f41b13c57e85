//! Trade domain — the form state machines behind the order screens and the
//! ticket they hand to navigation.
//!
//! Three flows share one machine: the P2P offer modal, the convert screen,
//! and the seller proposal modal. Each is an app-owned form that moves
//! `Idle → Editing → Validating → Accepted | Rejected`; validation runs
//! synchronously inside `submit`, and a rejected form keeps its input so the
//! user can correct it in place.

pub mod state;
pub mod ticket;

use std::time::Duration;

use rust_decimal::Decimal;

use crate::shared::fmt::{money, num};
use crate::shared::Symbol;

pub use state::{ConvertForm, ConvertReceipt, OfferTradeForm, ProposalForm};
pub use ticket::OrderTicket;

/// Delay the app simulates between a validated submit and navigation. The
/// engine never sleeps; hosts honor this however their runtime spells it.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(750);

// ─── Input Mode ──────────────────────────────────────────────────────────────

/// Which field of an offer form the user is typing into. The other field is
/// derived through the offer's unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Fiat,
    Crypto,
}

// ─── Phase ───────────────────────────────────────────────────────────────────

/// Lifecycle of a trade form.
///
/// `Validating` only exists inside `submit`; callers observe it solely if
/// they inspect the form mid-call, which the synchronous API makes
/// impossible. It is kept so the machine reads the way it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Editing,
    Validating,
    Accepted,
    Rejected(RejectReason),
}

// ─── Reject Reasons ──────────────────────────────────────────────────────────

/// Why a submit was refused, with everything the notification needs.
///
/// The USD variants belong to the proposal flow, whose band is denominated
/// in USD and whose message carries the asset equivalent at the asking
/// price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Missing, unparseable, or non-positive amount. `unit` is the asset
    /// being traded when the flow names one in its message.
    InvalidAmount { unit: Option<Symbol> },
    /// Below the band minimum; `bound` is in the band's own unit.
    BelowMinimum { bound: Decimal, unit: Symbol },
    /// Above the band maximum.
    AboveMaximum { bound: Decimal, unit: Symbol },
    /// Below a USD band minimum, with the asset equivalent at the asking
    /// price.
    BelowMinimumUsd {
        bound: Decimal,
        equivalent: Decimal,
        asset: Symbol,
    },
    /// Above a USD band maximum.
    AboveMaximumUsd {
        bound: Decimal,
        equivalent: Decimal,
        asset: Symbol,
    },
    /// A conversion leg resolved no USD price.
    RateUnavailable { unit: Symbol },
}

impl RejectReason {
    /// Notification title.
    pub fn title(&self) -> &'static str {
        match self {
            RejectReason::InvalidAmount { .. } => "Invalid Amount",
            RejectReason::BelowMinimum { .. } | RejectReason::BelowMinimumUsd { .. } => {
                "Amount Too Low"
            }
            RejectReason::AboveMaximum { .. } | RejectReason::AboveMaximumUsd { .. } => {
                "Amount Too High"
            }
            RejectReason::RateUnavailable { .. } => "Rate Unavailable",
        }
    }

    /// Notification body, worded per flow.
    pub fn user_message(&self) -> String {
        match self {
            RejectReason::InvalidAmount { unit: None } => {
                "Please enter a valid amount to convert.".to_string()
            }
            RejectReason::InvalidAmount { unit: Some(unit) } => {
                format!("Please enter a valid amount of {} to trade.", unit)
            }
            RejectReason::BelowMinimum { bound, unit } => {
                format!("Minimum amount for {} is {}.", unit, bound.normalize())
            }
            RejectReason::AboveMaximum { bound, unit } => {
                format!("Maximum amount for {} is {}.", unit, bound.normalize())
            }
            RejectReason::BelowMinimumUsd {
                bound,
                equivalent,
                asset,
            } => format!(
                "The minimum trade amount is {} ({} {}).",
                money::fiat(bound, &Symbol::new("USD")),
                num::display_fixed(equivalent, 6),
                asset
            ),
            RejectReason::AboveMaximumUsd {
                bound,
                equivalent,
                asset,
            } => format!(
                "The maximum trade amount is {} ({} {}).",
                money::fiat(bound, &Symbol::new("USD")),
                num::display_fixed(equivalent, 6),
                asset
            ),
            RejectReason::RateUnavailable { unit } => {
                format!("Rate unavailable for {}.", unit)
            }
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

    #[test]
    fn test_band_messages_render_plain_bounds() {
        let below = RejectReason::BelowMinimum {
            bound: dec("0.00001"),
            unit: Symbol::new("BTC"),
        };
        assert_eq!(below.user_message(), "Minimum amount for BTC is 0.00001.");
        assert_eq!(below.title(), "Amount Too Low");

        let above = RejectReason::AboveMaximum {
            bound: dec("5000000"),
            unit: Symbol::new("IDR"),
        };
        assert_eq!(above.user_message(), "Maximum amount for IDR is 5000000.");
    }

    #[test]
    fn test_usd_band_message_names_equivalent() {
        let reason = RejectReason::BelowMinimumUsd {
            bound: dec("50"),
            equivalent: dec("50") / dec("60500"),
            asset: Symbol::new("BTC"),
        };
        assert_eq!(
            reason.user_message(),
            "The minimum trade amount is $50.00 (0.000826 BTC)."
        );
    }

    #[test]
    fn test_invalid_amount_message_per_flow() {
        let convert = RejectReason::InvalidAmount { unit: None };
        assert_eq!(
            convert.user_message(),
            "Please enter a valid amount to convert."
        );
        let proposal = RejectReason::InvalidAmount {
            unit: Some(Symbol::new("BTC")),
        };
        assert_eq!(
            proposal.user_message(),
            "Please enter a valid amount of BTC to trade."
        );
        assert_eq!(proposal.title(), "Invalid Amount");
    }

    #[test]
    fn test_processing_delay_is_750ms() {
        assert_eq!(PROCESSING_DELAY, Duration::from_millis(750));
    }
}
