use std::str::FromStr;

use chrono::Local;

use crate::models::errors::LedgerError;
use crate::models::{BalanceReport, Receipt, Transaction, TransactionKind};
use crate::types::{Amount, OPENING_BALANCE, TransactionId};

/// Balance and transaction history of one session.
///
/// The ledger only changes through [`deposit`](Self::deposit) and [`withdraw`](Self::withdraw).
/// Both either apply fully and append exactly one transaction, or fail and leave
/// everything as it was.
#[derive(Debug, Clone)]
pub struct AccountLedger {
    /// Never negative.
    balance: Amount,
    /// Append-only, in insertion order.
    transactions: Vec<Transaction>,
    next_transaction_id: TransactionId
}

impl AccountLedger {
    /// Creates a ledger holding the standard opening balance.
    pub fn new() -> Self {
        Self::with_opening_balance(OPENING_BALANCE)
    }

    pub fn with_opening_balance(balance: Amount) -> Self {
        Self {
            balance,
            transactions: Vec::new(),
            next_transaction_id: 1
        }
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// All recorded transactions, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All recorded transactions, most recent first.
    pub fn history(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().rev()
    }

    /// Adds the amount typed in `input` to the balance.
    ///
    /// # Errors
    /// - `InvalidAmount` if `input` is not a number or not strictly positive.
    /// - `Overflow` if the amount or the new balance cannot be represented with two decimal places.
    pub fn deposit(&mut self, input: &str) -> Result<Receipt, LedgerError> {
        let kind = TransactionKind::Deposit;
        let amount = self.parse_amount(kind, input)?;

        let balance = self.balance.checked_add(amount)
            .filter(Amount::is_displayable)
            .ok_or_else(|| LedgerError::overflow(kind, amount, self.balance))?;

        Ok(self.record(kind, amount, balance))
    }

    /// Removes the amount typed in `input` from the balance.
    ///
    /// # Errors
    /// - `InvalidAmount` if `input` is not a number or not strictly positive.
    /// - `Overflow` if the amount cannot be represented with two decimal places.
    /// - `InsufficientFunds` if the amount is larger than the current balance.
    pub fn withdraw(&mut self, input: &str) -> Result<Receipt, LedgerError> {
        let kind = TransactionKind::Withdraw;
        let amount = self.parse_amount(kind, input)?;

        if amount > self.balance {
            return Err(LedgerError::insufficient_funds(amount, self.balance))
        }

        let balance = self.balance.checked_sub(amount)
            .ok_or_else(|| LedgerError::overflow(kind, amount, self.balance))?;

        Ok(self.record(kind, amount, balance))
    }

    pub fn check_balance(&self) -> BalanceReport {
        BalanceReport { balance: self.balance }
    }

    fn parse_amount(&self, kind: TransactionKind, input: &str) -> Result<Amount, LedgerError> {
        match Amount::from_str(input) {
            Ok(amount) if !amount.is_positive() => Err(LedgerError::invalid_amount(kind, input)),
            Ok(amount) if !amount.is_displayable() => Err(LedgerError::overflow(kind, amount, self.balance)),
            Ok(amount) => Ok(amount),
            Err(_) => Err(LedgerError::invalid_amount(kind, input))
        }
    }

    fn record(&mut self, kind: TransactionKind, amount: Amount, balance: Amount) -> Receipt {
        let transaction = Transaction {
            transaction_id: self.next_transaction_id,
            kind,
            amount,
            timestamp: Local::now()
        };

        self.next_transaction_id += 1;
        self.balance = balance;
        self.transactions.push(transaction.clone());

        Receipt { transaction, balance }
    }
}

impl Default for AccountLedger {
    fn default() -> Self {
        Self::new()
    }
}
