mod amount;
mod errors;

pub use amount::{Amount, OPENING_BALANCE};

pub type TransactionId = u32;
