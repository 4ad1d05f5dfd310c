use alloy::primitives::Address;
use alloy::rpc::types::Log;
use chain::ledger::Ledger;
use eyre::{Result, WrapErr};
use std::sync::Arc;
use sync::producer::Producer;
use tokio_util::sync::CancellationToken;

use crate::range::{BlockRange, ScanWindow, WINDOW_SIZE};
use crate::source::filter::{TransferSide, transfer_filter};
use crate::source::handle::{ScanOutcome, Source};
use crate::source::record::RawRecord;

/// Pages through Transfer logs window by window.
pub struct TransferSource {
    pub ledger: Arc<dyn Ledger>,
    pub window_size: u64,
}

impl TransferSource {
    pub fn new(ledger: Arc<dyn Ledger>) -> Self {
        Self { ledger, window_size: WINDOW_SIZE }
    }

    async fn window_logs(
        &self,
        window: &ScanWindow,
        target: Address,
        side: TransferSide,
    ) -> Result<Vec<Log>> {
        let filter = transfer_filter(window, target, side);
        self.ledger.logs(&filter).await.wrap_err_with(|| {
            format!("filter {} logs from {} to {}", side.as_str(), window.from, window.to)
        })
    }
}

#[async_trait::async_trait]
impl Source for TransferSource {
    async fn scan(
        &self,
        range: &BlockRange,
        target: Address,
        producer: &Producer<RawRecord>,
        cancel: &CancellationToken,
    ) -> Result<ScanOutcome> {
        if range.is_single_block() {
            tracing::info!("Transfer scan skipped: range {} to {} is empty", range.from, range.to);
            return Ok(ScanOutcome::Completed);
        }

        tracing::info!("Transfer scan started at block number: {}", range.from);

        for window in range.windows(self.window_size) {
            if cancel.is_cancelled() {
                tracing::info!("Transfer scan cancelled before block number: {}", window.from);
                return Ok(ScanOutcome::Cancelled);
            }

            let mut logs = self.window_logs(&window, target, TransferSide::Sender).await?;
            logs.extend(self.window_logs(&window, target, TransferSide::Receiver).await?);

            // keep chain order across both queries
            logs.sort_by_key(|log| (log.block_number, log.log_index));

            tracing::debug!(
                "Window {} to {}: {} transfer log(s)",
                window.from,
                window.to,
                logs.len()
            );

            for log in logs {
                producer.emit(RawRecord::Transfer(Box::new(log))).await?;
            }
        }

        tracing::info!("Transfer scan finished at block number: {}", range.to);
        Ok(ScanOutcome::Completed)
    }
}
