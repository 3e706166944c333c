use chrono::{DateTime, Local};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::models::TransactionKind;
use crate::types::{Amount, TransactionId};

/// Locale style used for display, e.g. `6/3/2025, 4:07:12 PM`.
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// A single accepted deposit or withdrawal.
///
/// Transactions are only ever created by the ledger after validation succeeded and are
/// never modified afterwards. Serializes as an `id,kind,amount,timestamp` history row.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// Unique within the session, assigned in insertion order.
    pub transaction_id: TransactionId,
    pub kind: TransactionKind,
    /// Always strictly positive.
    pub amount: Amount,
    pub timestamp: DateTime<Local>
}

impl Transaction {
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl Serialize for Transaction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut row = serializer.serialize_struct("Transaction", 4)?;
        row.serialize_field("id", &self.transaction_id)?;
        row.serialize_field("kind", &self.kind)?;
        row.serialize_field("amount", &self.amount)?;
        row.serialize_field("timestamp", &self.formatted_timestamp())?;
        row.end()
    }
}
