//! Portfolio domain — wallet balances derived from the transaction ledger,
//! valued through the price resolver.
//!
//! Balances are never stored: they are recomputed from the Completed
//! entries of the ledger every time the wallet screen builds its view. The
//! 24h figures are simulated, like everything else in this app's data.

pub mod fixture;

use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::pricing::{Converter, RateTable};
use crate::shared::serde_util::timestamp_ms;
use crate::shared::Symbol;

// ─── Ledger ──────────────────────────────────────────────────────────────────

/// Direction of a wallet ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxKind {
    Deposit,
    Withdrawal,
}

/// Settlement status. Only `Completed` entries move balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxStatus {
    Completed,
    Pending,
    Failed,
    Cancelled,
}

/// One wallet ledger entry, camelCase on the wire with an epoch-millis
/// `date` like the app's fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub asset_name: String,
    pub asset_symbol: Symbol,
    pub amount: Decimal,
    #[serde(with = "timestamp_ms")]
    pub date: DateTime<Utc>,
    pub status: TxStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

/// Net balance per asset symbol: Completed deposits add, Completed
/// withdrawals subtract, everything else is ignored.
pub fn balances(transactions: &[WalletTransaction]) -> BTreeMap<Symbol, Decimal> {
    let mut totals: BTreeMap<Symbol, Decimal> = BTreeMap::new();
    for tx in transactions {
        if tx.status != TxStatus::Completed {
            continue;
        }
        let entry = totals.entry(tx.asset_symbol.clone()).or_insert(Decimal::ZERO);
        match tx.kind {
            TxKind::Deposit => *entry += tx.amount,
            TxKind::Withdrawal => *entry -= tx.amount,
        }
    }
    totals
}

/// Validate ledger entries before they are trusted: positive amounts,
/// non-empty symbols. Problems are accumulated and reported together.
pub fn validate_ledger(transactions: &[WalletTransaction]) -> Result<(), LedgerValidationError> {
    let mut errors = Vec::new();
    for tx in transactions {
        if tx.asset_symbol.as_str().is_empty() {
            errors.push(LedgerValidationError::MissingSymbol { id: tx.id.clone() });
        }
        if tx.amount <= Decimal::ZERO {
            errors.push(LedgerValidationError::NonPositiveAmount {
                id: tx.id.clone(),
                amount: tx.amount,
            });
        }
    }
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(LedgerValidationError::Multiple(errors)),
    }
}

// ─── Holdings ────────────────────────────────────────────────────────────────

/// One row of the wallet screen.
///
/// `usd_value` is the documented zero sentinel when the symbol resolves no
/// price; the holding stays listed so the host can still render the balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: Symbol,
    pub balance: Decimal,
    pub usd_value: Decimal,
}

/// The valued wallet: every nonzero balance, largest USD value first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub holdings: Vec<Holding>,
    pub total_usd: Decimal,
}

impl Portfolio {
    /// Derive and value balances from the ledger.
    pub fn build(
        transactions: &[WalletTransaction],
        converter: &Converter,
    ) -> Result<Self, LedgerValidationError> {
        validate_ledger(transactions)?;

        let mut holdings: Vec<Holding> = balances(transactions)
            .into_iter()
            .filter(|(_, balance)| !balance.is_zero())
            .map(|(symbol, balance)| {
                let price = converter.usd_price_or_zero(symbol.as_str());
                if price.is_zero() {
                    tracing::debug!("No USD price for holding {}; valuing at zero", symbol);
                }
                Holding {
                    symbol,
                    balance,
                    usd_value: balance * price,
                }
            })
            .collect();
        holdings.sort_by(|a, b| b.usd_value.cmp(&a.usd_value));

        let total_usd = holdings.iter().map(|h| h.usd_value).sum();
        Ok(Self { holdings, total_usd })
    }

    /// The total in a display currency, or `None` when the currency has no
    /// USD rate.
    pub fn total_in(&self, currency: &Symbol, rates: &RateTable) -> Option<Decimal> {
        Some(self.total_usd / rates.usd_rate(currency)?)
    }
}

// ─── Simulated P&L ───────────────────────────────────────────────────────────

/// The cosmetic 24h figures the wallet screen decorates holdings with.
#[derive(Debug, Clone, PartialEq)]
pub struct PnlSimulation {
    /// Yesterday's pretend unit price in USD.
    pub previous_price_usd: Decimal,
    /// Pretend 24h P&L percent.
    pub pnl_percent: Decimal,
}

/// Jitter a price into yesterday's pretend value and a P&L percent.
///
/// Price jitter is uniform in [-5%, 5%), P&L percent uniform in [-5, 5).
/// Takes the generator by argument so tests can seed it.
pub fn simulate_pnl(price_usd: Decimal, rng: &mut impl Rng) -> PnlSimulation {
    let jitter = Decimal::new(rng.gen_range(-500..500), 4);
    let pnl_percent = Decimal::new(rng.gen_range(-500..500), 2);
    PnlSimulation {
        previous_price_usd: price_usd * (Decimal::ONE - jitter),
        pnl_percent,
    }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum LedgerValidationError {
    Multiple(Vec<LedgerValidationError>),
    MissingSymbol { id: String },
    NonPositiveAmount { id: String, amount: Decimal },
}

impl fmt::Display for LedgerValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerValidationError::Multiple(errors) => {
                writeln!(f, "Ledger validation errors:")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            LedgerValidationError::MissingSymbol { id } => {
                write!(f, "Transaction {}: missing asset symbol", id)
            }
            LedgerValidationError::NonPositiveAmount { id, amount } => {
                write!(f, "Transaction {}: non-positive amount {}", id, amount)
            }
        }
    }
}

impl std::error::Error for LedgerValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;
    use crate::domain::pricing::REFERENCE_RATES;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tx(id: &str, kind: TxKind, symbol: &str, amount: &str, status: TxStatus) -> WalletTransaction {
        WalletTransaction {
            id: id.to_string(),
            kind,
            asset_name: symbol.to_string(),
            asset_symbol: Symbol::new(symbol),
            amount: dec(amount),
            date: DateTime::<Utc>::from_timestamp_millis(1_721_044_800_000).unwrap(),
            status,
            network: None,
            transaction_id: None,
        }
    }

    fn converter() -> Converter<'static> {
        Converter::new(&REFERENCE_RATES, catalog::fixture::catalog())
    }

    #[test]
    fn test_only_completed_transactions_move_balances() {
        let ledger = vec![
            tx("wt1", TxKind::Deposit, "USD", "500", TxStatus::Completed),
            tx("wt2", TxKind::Withdrawal, "BTC", "0.01", TxStatus::Completed),
            tx("wt3", TxKind::Deposit, "ETH", "0.5", TxStatus::Pending),
            tx("wt4", TxKind::Withdrawal, "EUR", "200", TxStatus::Failed),
            tx("wt5", TxKind::Deposit, "SOL", "10", TxStatus::Cancelled),
        ];
        let totals = balances(&ledger);
        assert_eq!(totals.get(&Symbol::new("USD")), Some(&dec("500")));
        assert_eq!(totals.get(&Symbol::new("BTC")), Some(&dec("-0.01")));
        assert!(totals.get(&Symbol::new("ETH")).is_none());
        assert!(totals.get(&Symbol::new("EUR")).is_none());
        assert!(totals.get(&Symbol::new("SOL")).is_none());
    }

    #[test]
    fn test_deposits_and_withdrawals_net_per_symbol() {
        let ledger = vec![
            tx("a", TxKind::Deposit, "usdt", "100", TxStatus::Completed),
            tx("b", TxKind::Deposit, "USDT", "50", TxStatus::Completed),
            tx("c", TxKind::Withdrawal, "USDT", "30", TxStatus::Completed),
        ];
        let totals = balances(&ledger);
        assert_eq!(totals.get(&Symbol::new("USDT")), Some(&dec("120")));
    }

    #[test]
    fn test_portfolio_values_holdings_and_sorts() {
        let ledger = vec![
            tx("a", TxKind::Deposit, "USD", "500", TxStatus::Completed),
            tx("b", TxKind::Deposit, "BTC", "0.01", TxStatus::Completed),
        ];
        let portfolio = Portfolio::build(&ledger, &converter()).unwrap();
        assert_eq!(portfolio.holdings.len(), 2);
        // 0.01 BTC at 60000 outranks 500 USD.
        assert_eq!(portfolio.holdings[0].symbol, Symbol::new("BTC"));
        assert_eq!(portfolio.holdings[0].usd_value, dec("600"));
        assert_eq!(portfolio.holdings[1].usd_value, dec("500"));
        assert_eq!(portfolio.total_usd, dec("1100"));
    }

    #[test]
    fn test_unpriced_holdings_stay_listed_at_zero() {
        let ledger = vec![
            tx("a", TxKind::Deposit, "XYZ", "42", TxStatus::Completed),
            tx("b", TxKind::Deposit, "USD", "10", TxStatus::Completed),
        ];
        let portfolio = Portfolio::build(&ledger, &converter()).unwrap();
        let xyz = portfolio
            .holdings
            .iter()
            .find(|h| h.symbol == Symbol::new("XYZ"))
            .unwrap();
        assert_eq!(xyz.balance, dec("42"));
        assert_eq!(xyz.usd_value, Decimal::ZERO);
        assert_eq!(portfolio.total_usd, dec("10"));
    }

    #[test]
    fn test_total_in_display_currency() {
        let ledger = vec![tx("a", TxKind::Deposit, "USD", "1080", TxStatus::Completed)];
        let portfolio = Portfolio::build(&ledger, &converter()).unwrap();
        assert_eq!(
            portfolio.total_in(&Symbol::new("EUR"), &REFERENCE_RATES),
            Some(dec("1000"))
        );
        assert_eq!(portfolio.total_in(&Symbol::new("XYZ"), &REFERENCE_RATES), None);
    }

    #[test]
    fn test_validate_ledger_accumulates() {
        let ledger = vec![
            tx("a", TxKind::Deposit, "", "10", TxStatus::Completed),
            tx("b", TxKind::Deposit, "BTC", "0", TxStatus::Completed),
        ];
        let err = validate_ledger(&ledger).unwrap_err();
        match err {
            LedgerValidationError::Multiple(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected Multiple, got {other:?}"),
        }
    }

    #[test]
    fn test_simulate_pnl_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let sim = simulate_pnl(dec("60000"), &mut rng);
            // Jitter is at most 5%, so the previous price stays within it.
            assert!(sim.previous_price_usd > dec("57000"));
            assert!(sim.previous_price_usd <= dec("63000"));
            assert!(sim.pnl_percent >= dec("-5"));
            assert!(sim.pnl_percent < dec("5"));
        }
    }

    #[test]
    fn test_wallet_transaction_serde() {
        let json = r#"{
            "id": "wt1",
            "type": "Deposit",
            "assetName": "US Dollar",
            "assetSymbol": "USD",
            "amount": "500",
            "date": 1721044800000,
            "status": "Completed",
            "transactionId": "DEPO_USD_12345"
        }"#;
        let tx: WalletTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, TxKind::Deposit);
        assert_eq!(tx.status, TxStatus::Completed);
        assert_eq!(tx.amount, dec("500"));
        assert_eq!(tx.date.timestamp_millis(), 1_721_044_800_000);
        assert!(tx.network.is_none());
    }
}
