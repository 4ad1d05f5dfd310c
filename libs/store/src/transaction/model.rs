use serde::{Deserialize, Serialize};

/// One row of the transaction export, columns in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub tx_hash: String,
    pub nonce: u64,
    pub sender: String,
    /// `None` for contract creation; written as an empty field.
    pub receiver: Option<String>,
    pub block_number: u64,
    pub timestamp: u64,
}
