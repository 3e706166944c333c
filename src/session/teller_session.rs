use tracing::{debug, warn};

use crate::models::{AccountLedger, LedgerError, Receipt};
use crate::session::StatusMessage;

/// One running instance of the teller.
///
/// Owns the ledger together with the transient, display-only state: the amount the user
/// is typing and the last message. Clearing the transient state never touches the ledger.
#[derive(Debug, Default)]
pub struct Session {
    ledger: AccountLedger,
    input: String,
    message: Option<StatusMessage>
}

impl Session {
    pub fn new() -> Self {
        Self::with_ledger(AccountLedger::new())
    }

    pub fn with_ledger(ledger: AccountLedger) -> Self {
        Self {
            ledger,
            input: String::new(),
            message: None
        }
    }

    pub fn ledger(&self) -> &AccountLedger {
        &self.ledger
    }

    /// The pending amount text.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Deposits the pending amount. The input is cleared only when the deposit went through.
    pub fn deposit(&mut self) -> &StatusMessage {
        let result = self.ledger.deposit(&self.input);
        self.settle(result)
    }

    /// Withdraws the pending amount. The input is cleared only when the withdrawal went through.
    pub fn withdraw(&mut self) -> &StatusMessage {
        let result = self.ledger.withdraw(&self.input);
        self.settle(result)
    }

    pub fn check_balance(&mut self) -> &StatusMessage {
        let report = self.ledger.check_balance();
        debug!("Balance checked: {}", report.balance);

        self.message.insert(StatusMessage::success(report.to_string()))
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.input.clear();
    }

    fn settle(&mut self, result: Result<Receipt, LedgerError>) -> &StatusMessage {
        let message = match result {
            Ok(receipt) => {
                debug!("Transaction [{}]:[{:?}] of {} applied, balance {}", receipt.transaction.transaction_id, receipt.transaction.kind, receipt.transaction.amount, receipt.balance);
                self.input.clear();
                StatusMessage::success(receipt.to_string())
            }
            Err(error) => {
                warn!("Rejected input {:?}: {error:?}", self.input);
                StatusMessage::failure(error.to_string())
            }
        };

        self.message.insert(message)
    }
}
