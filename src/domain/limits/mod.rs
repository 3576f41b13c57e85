//! Order size limits and the checks run against them before an order is
//! accepted.
//!
//! A [`TradeLimits`] pair is always expressed in a single unit (the offer's
//! fiat, a seller's USD band, or the source asset of a conversion); callers
//! convert the typed amount into that unit before validating.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Limits ──────────────────────────────────────────────────────────────────

/// Inclusive `[min, max]` bounds on a trade amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LimitsWire")]
pub struct TradeLimits {
    min: Decimal,
    max: Decimal,
}

impl TradeLimits {
    /// Build a validated pair. The minimum must be non-negative and must not
    /// exceed the maximum.
    pub fn new(min: Decimal, max: Decimal) -> Result<Self, LimitsError> {
        if min < Decimal::ZERO {
            return Err(LimitsError::NegativeMin(min));
        }
        if min > max {
            return Err(LimitsError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Limits that accept any positive amount. Used for listings whose
    /// source data carries no band.
    pub fn unbounded() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::MAX,
        }
    }

    pub fn min(&self) -> Decimal {
        self.min
    }

    pub fn max(&self) -> Decimal {
        self.max
    }

    /// Check an amount against the band. A missing or non-positive amount is
    /// reported as [`LimitCheck::InvalidAmount`] before any bound is
    /// consulted; both bounds are inclusive.
    pub fn validate(&self, amount: Option<Decimal>) -> LimitCheck {
        let amount = match amount {
            Some(a) if a > Decimal::ZERO => a,
            _ => return LimitCheck::InvalidAmount,
        };
        if amount < self.min {
            return LimitCheck::BelowMinimum { min: self.min };
        }
        if amount > self.max {
            return LimitCheck::AboveMaximum { max: self.max };
        }
        LimitCheck::Valid
    }
}

#[derive(Deserialize)]
struct LimitsWire {
    min: Decimal,
    max: Decimal,
}

impl TryFrom<LimitsWire> for TradeLimits {
    type Error = LimitsError;

    fn try_from(wire: LimitsWire) -> Result<Self, Self::Error> {
        TradeLimits::new(wire.min, wire.max)
    }
}

// ─── Check Result ────────────────────────────────────────────────────────────

/// Outcome of [`TradeLimits::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitCheck {
    Valid,
    InvalidAmount,
    BelowMinimum { min: Decimal },
    AboveMaximum { max: Decimal },
}

impl LimitCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, LimitCheck::Valid)
    }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LimitsError {
    NegativeMin(Decimal),
    Inverted { min: Decimal, max: Decimal },
}

impl fmt::Display for LimitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitsError::NegativeMin(min) => {
                write!(f, "Minimum limit cannot be negative: {}", min)
            }
            LimitsError::Inverted { min, max } => {
                write!(f, "Minimum limit {} exceeds maximum {}", min, max)
            }
        }
    }
}

impl std::error::Error for LimitsError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_new_rejects_negative_min() {
        let err = TradeLimits::new(dec("-1"), dec("10")).unwrap_err();
        assert_eq!(err, LimitsError::NegativeMin(dec("-1")));
    }

    #[test]
    fn test_new_rejects_inverted_band() {
        let err = TradeLimits::new(dec("10"), dec("5")).unwrap_err();
        assert_eq!(
            err,
            LimitsError::Inverted {
                min: dec("10"),
                max: dec("5"),
            }
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let limits = TradeLimits::new(dec("50"), dec("10000")).unwrap();
        assert!(limits.validate(Some(dec("50"))).is_valid());
        assert!(limits.validate(Some(dec("10000"))).is_valid());
        assert_eq!(
            limits.validate(Some(dec("49.99"))),
            LimitCheck::BelowMinimum { min: dec("50") }
        );
        assert_eq!(
            limits.validate(Some(dec("10000.01"))),
            LimitCheck::AboveMaximum { max: dec("10000") }
        );
    }

    #[test]
    fn test_invalid_amount_checked_before_bounds() {
        let limits = TradeLimits::new(dec("50"), dec("10000")).unwrap();
        assert_eq!(limits.validate(None), LimitCheck::InvalidAmount);
        assert_eq!(limits.validate(Some(Decimal::ZERO)), LimitCheck::InvalidAmount);
        // A negative amount is below the minimum too, but the amount check
        // has priority.
        assert_eq!(limits.validate(Some(dec("-5"))), LimitCheck::InvalidAmount);
    }

    #[test]
    fn test_unbounded_accepts_any_positive_amount() {
        let limits = TradeLimits::unbounded();
        assert!(limits.validate(Some(dec("0.00000001"))).is_valid());
        assert!(limits.validate(Some(dec("99999999999"))).is_valid());
        assert_eq!(limits.validate(Some(Decimal::ZERO)), LimitCheck::InvalidAmount);
    }

    #[test]
    fn test_deserialize_validates_band() {
        let ok: TradeLimits = serde_json::from_str(r#"{"min":"0.01","max":"4500000"}"#).unwrap();
        assert_eq!(ok.min(), dec("0.01"));
        assert_eq!(ok.max(), dec("4500000"));

        let bad = serde_json::from_str::<TradeLimits>(r#"{"min":"10","max":"5"}"#);
        assert!(bad.is_err());
    }
}
