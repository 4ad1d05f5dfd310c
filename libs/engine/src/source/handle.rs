use alloy::primitives::{Address, BlockNumber};
use eyre::Result;
use sync::producer::Producer;
use tokio_util::sync::CancellationToken;

use crate::range::BlockRange;
use crate::source::record::RawRecord;

pub trait SourceInput {
    fn block_number(&self) -> Option<BlockNumber>;
}

/// How a scan that did not fail came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    Completed,
    Cancelled,
}

#[async_trait::async_trait]
pub trait Source: Send + Sync {
    /// Walks `range` and emits every record involving `target`.
    ///
    /// Returns `Cancelled` once `cancel` is observed at a checkpoint; RPC
    /// failures abort the scan with an error.
    async fn scan(
        &self,
        range: &BlockRange,
        target: Address,
        producer: &Producer<RawRecord>,
        cancel: &CancellationToken,
    ) -> Result<ScanOutcome>;
}
