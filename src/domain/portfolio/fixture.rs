//! Built-in wallet ledger fixture.
//!
//! Five transactions covering every status, so the derived balances only
//! reflect the two Completed entries.

use super::WalletTransaction;
use crate::error::CoreError;
use lazy_static::lazy_static;

const TRANSACTIONS_JSON: &str = r#"[
  {
    "id": "wt1",
    "type": "Deposit",
    "assetName": "US Dollar",
    "assetSymbol": "USD",
    "amount": "500",
    "date": 1720958400000,
    "status": "Completed",
    "transactionId": "DEPO_USD_12345"
  },
  {
    "id": "wt2",
    "type": "Withdrawal",
    "assetName": "Bitcoin",
    "assetSymbol": "BTC",
    "amount": "0.01",
    "date": 1720785600000,
    "status": "Completed",
    "network": "Bitcoin",
    "transactionId": "WITH_BTC_67890"
  },
  {
    "id": "wt3",
    "type": "Deposit",
    "assetName": "Ethereum",
    "assetSymbol": "ETH",
    "amount": "0.5",
    "date": 1721044500000,
    "status": "Pending",
    "network": "Ethereum (ERC20)",
    "transactionId": "DEPO_ETH_ABCDE"
  },
  {
    "id": "wt4",
    "type": "Withdrawal",
    "assetName": "Euro",
    "assetSymbol": "EUR",
    "amount": "200",
    "date": 1720872000000,
    "status": "Failed",
    "transactionId": "WITH_EUR_FGHIJ"
  },
  {
    "id": "wt5",
    "type": "Deposit",
    "assetName": "Solana",
    "assetSymbol": "SOL",
    "amount": "10",
    "date": 1720699200000,
    "status": "Cancelled",
    "network": "Solana",
    "transactionId": "DEPO_SOL_KLMNO"
  }
]"#;

/// Parse and validate the built-in ledger.
pub fn load() -> Result<Vec<WalletTransaction>, CoreError> {
    let transactions: Vec<WalletTransaction> = serde_json::from_str(TRANSACTIONS_JSON)?;
    super::validate_ledger(&transactions)?;
    Ok(transactions)
}

lazy_static! {
    static ref TRANSACTIONS: Vec<WalletTransaction> = load().expect("built-in ledger fixture is valid");
}

/// The validated built-in ledger, parsed once on first touch.
pub fn transactions() -> &'static [WalletTransaction] {
    &TRANSACTIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::portfolio::{balances, TxStatus};
    use crate::shared::Symbol;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_fixture_loads() {
        let ledger = transactions();
        assert_eq!(ledger.len(), 5);
        assert_eq!(ledger[0].id, "wt1");
        assert_eq!(ledger[2].status, TxStatus::Pending);
        assert_eq!(ledger[1].network.as_deref(), Some("Bitcoin"));
    }

    #[test]
    fn test_fixture_balances() {
        let totals = balances(transactions());
        assert_eq!(totals.len(), 2);
        assert_eq!(
            totals.get(&Symbol::new("USD")),
            Some(&Decimal::from_str("500").unwrap())
        );
        assert_eq!(
            totals.get(&Symbol::new("BTC")),
            Some(&Decimal::from_str("-0.01").unwrap())
        );
    }
}
