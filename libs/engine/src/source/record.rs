use alloy::consensus::{Transaction, TxEnvelope};
use alloy::primitives::{Address, BlockNumber};
use alloy::rpc::types::Log;

use crate::source::handle::SourceInput;

/// A transaction touching the target, with the context of its block.
#[derive(Debug, Clone)]
pub struct TransactionRecord {
    pub tx: TxEnvelope,
    /// Recovered signer; zero address when recovery failed.
    pub sender: Address,
    pub block_number: BlockNumber,
    pub timestamp: u64,
}

impl TransactionRecord {
    pub fn receiver(&self) -> Option<Address> {
        self.tx.to()
    }
}

/// What flows through the pipeline channel.
#[derive(Debug, Clone)]
pub enum RawRecord {
    Transaction(Box<TransactionRecord>),
    Transfer(Box<Log>),
}

impl SourceInput for RawRecord {
    fn block_number(&self) -> Option<BlockNumber> {
        match self {
            RawRecord::Transaction(record) => Some(record.block_number),
            RawRecord::Transfer(log) => log.block_number,
        }
    }
}
