mod errors;
mod ledger;
mod receipt;
mod transaction;

use serde::Serialize;

pub use errors::LedgerError;
pub use ledger::AccountLedger;
pub use receipt::{BalanceReport, Receipt};
pub use transaction::Transaction;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum TransactionKind {
    Deposit,
    Withdraw
}

impl TransactionKind {
    /// Noun used when talking about the operation in user-facing messages.
    pub fn noun(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdraw => "withdrawal"
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdraw => "withdraw"
        }
    }
}
