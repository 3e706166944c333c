use std::fmt;
use std::fmt::{Display, Formatter};

use crate::models::{Transaction, TransactionKind};
use crate::types::Amount;

/// Outcome of an accepted deposit or withdrawal.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub transaction: Transaction,
    /// Balance right after the transaction was applied.
    pub balance: Amount
}

impl Display for Receipt {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let verb = match self.transaction.kind {
            TransactionKind::Deposit => "deposited",
            TransactionKind::Withdraw => "withdrew"
        };

        write!(formatter, "Successfully {verb} ${}. Your new balance is ${}.", self.transaction.amount, self.balance)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BalanceReport {
    pub balance: Amount
}

impl Display for BalanceReport {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "Your current balance is ${}.", self.balance)
    }
}
