use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TokenInfo {
    pub address: Address,
    pub symbol: String,
    /// 10^decimals
    pub multiplier: u128,
}
