use serde::{Deserialize, Serialize};

/// One row of the token transfer export, columns in schema order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRow {
    pub token: String,
    pub symbol: String,
    pub from: String,
    pub to: String,
    // raw uint256 amount in base 10
    pub value: String,
    pub normalized_value: f64,
    pub tx_hash: String,
    pub block_number: u64,
    pub event_id: u64,
}
