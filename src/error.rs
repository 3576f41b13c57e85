//! Unified engine error types.

use thiserror::Error;

use crate::domain::catalog::ValidationError;
use crate::domain::offers::OfferValidationError;
use crate::domain::portfolio::LedgerValidationError;
use crate::domain::trade::ticket::TicketError;

/// Top-level engine error.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] ValidationError),

    #[error("Offer error: {0}")]
    Offer(#[from] OfferValidationError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerValidationError),

    #[error("Ticket error: {0}")]
    Ticket(#[from] TicketError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
