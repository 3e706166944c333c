use crate::models::TransactionKind;
use crate::types::Amount;
use thiserror::Error;

/// Rejections produced by the ledger. Every variant leaves balance and history untouched,
/// and its `Display` output is the message shown to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Please enter a valid positive amount for {}.", .kind.noun())]
    InvalidAmount {
        kind: TransactionKind,
        input: String
    },
    #[error("Insufficient funds. Your current balance is ${balance}.")]
    InsufficientFunds {
        requested: Amount,
        balance: Amount
    },
    #[error("Amount is too large to {}. Your current balance is ${balance}.", .kind.verb())]
    Overflow {
        kind: TransactionKind,
        requested: Amount,
        balance: Amount
    }
}

impl LedgerError {
    pub fn invalid_amount(kind: TransactionKind, input: &str) -> Self {
        Self::InvalidAmount {
            kind,
            input: input.to_string()
        }
    }

    pub fn insufficient_funds(requested: Amount, balance: Amount) -> Self {
        Self::InsufficientFunds { requested, balance }
    }

    pub fn overflow(kind: TransactionKind, requested: Amount, balance: Amount) -> Self {
        Self::Overflow { kind, requested, balance }
    }
}
