use alloy::consensus::transaction::SignerRecoverable;
use alloy::consensus::{Transaction, TxEnvelope};
use alloy::primitives::Address;
use chain::ledger::Ledger;
use eyre::{Result, WrapErr, eyre};
use std::sync::Arc;
use sync::producer::Producer;
use tokio_util::sync::CancellationToken;

use crate::range::BlockRange;
use crate::source::handle::{ScanOutcome, Source};
use crate::source::record::{RawRecord, TransactionRecord};

/// Fetches every block of the range, one height at a time.
pub struct TransactionSource {
    pub ledger: Arc<dyn Ledger>,
}

impl TransactionSource {
    pub fn new(ledger: Arc<dyn Ledger>) -> Self {
        Self { ledger }
    }
}

/// Recovers the signer under the transaction's own chain id rules.
pub fn tx_sender(tx: &TxEnvelope) -> Address {
    match tx.recover_signer() {
        Ok(sender) => sender,
        Err(e) => {
            tracing::error!(tx_hash = %tx.tx_hash(), "failed to get tx sender: {e}");
            Address::ZERO
        }
    }
}

#[async_trait::async_trait]
impl Source for TransactionSource {
    async fn scan(
        &self,
        range: &BlockRange,
        target: Address,
        producer: &Producer<RawRecord>,
        cancel: &CancellationToken,
    ) -> Result<ScanOutcome> {
        tracing::info!("Transaction scan started at block number: {}", range.from);

        for number in range.from..=range.to {
            // Checkpoint between heights; an in-flight fetch is not interrupted
            if cancel.is_cancelled() {
                tracing::info!("Transaction scan cancelled before block number: {number}");
                return Ok(ScanOutcome::Cancelled);
            }

            let block = self
                .ledger
                .block_with_transactions(number)
                .await
                .wrap_err_with(|| format!("get block {number}"))?
                .ok_or_else(|| eyre!("get block {number}: block not found"))?;

            for tx in block.transactions {
                let sender = tx_sender(&tx);
                if sender != target && tx.to() != Some(target) {
                    continue;
                }

                let record = TransactionRecord {
                    tx,
                    sender,
                    block_number: block.number,
                    timestamp: block.timestamp,
                };
                producer.emit(RawRecord::Transaction(Box::new(record))).await?;
            }
        }

        tracing::info!("Transaction scan finished at block number: {}", range.to);
        Ok(ScanOutcome::Completed)
    }
}
