use alloy::consensus::TxEnvelope;
use alloy::primitives::{Address, BlockNumber};
use alloy::rpc::types::{Filter, Log};
use eyre::Result;

/// A mined block reduced to what the collector reads from it.
#[derive(Debug, Clone)]
pub struct LedgerBlock {
    pub number: BlockNumber,
    pub timestamp: u64,
    pub transactions: Vec<TxEnvelope>,
}

/// Read access to the chain: head height, full blocks and log filtering.
#[async_trait::async_trait]
pub trait Ledger: Send + Sync {
    async fn latest_block_number(&self) -> Result<BlockNumber>;

    async fn block_with_transactions(&self, number: BlockNumber) -> Result<Option<LedgerBlock>>;

    async fn logs(&self, filter: &Filter) -> Result<Vec<Log>>;
}

/// On-chain token metadata reads.
#[async_trait::async_trait]
pub trait TokenReader: Send + Sync {
    async fn symbol(&self, token: Address) -> Result<String>;

    async fn decimals(&self, token: Address) -> Result<u8>;
}
