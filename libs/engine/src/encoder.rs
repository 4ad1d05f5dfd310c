use alloy::consensus::Transaction;
use alloy::primitives::{Address, U256};
use alloy::rpc::types::Log;
use chain::erc20::IERC20;
use std::sync::Arc;
use store::{transaction::model::TransactionRow, transfer::model::TransferRow};
use thiserror::Error;

use crate::metadata::MetadataCache;
use crate::source::record::{RawRecord, TransactionRecord};

/// A row ready for the destination, one variant per export schema.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputRow {
    Transaction(TransactionRow),
    Transfer(TransferRow),
}

/// Why a record never became a row.
#[derive(Debug, Error)]
pub enum DropReason {
    #[error("decode transfer log: {0}")]
    Decode(String),

    #[error("token metadata {token}: {reason}")]
    Metadata { token: Address, reason: String },
}

pub struct Encoder {
    cache: Arc<MetadataCache>,
}

impl Encoder {
    pub fn new(cache: Arc<MetadataCache>) -> Self {
        Self { cache }
    }

    pub async fn encode(&self, record: RawRecord) -> Result<OutputRow, DropReason> {
        match record {
            RawRecord::Transaction(record) => Ok(OutputRow::Transaction(transaction_row(&record))),
            RawRecord::Transfer(log) => self.transfer_row(&log).await.map(OutputRow::Transfer),
        }
    }

    async fn transfer_row(&self, log: &Log) -> Result<TransferRow, DropReason> {
        let decoded = log
            .log_decode::<IERC20::Transfer>()
            .map_err(|e| DropReason::Decode(e.to_string()))?;
        let IERC20::Transfer { from, to, value } = decoded.inner.data;

        let tx_hash = log
            .transaction_hash
            .ok_or_else(|| DropReason::Decode("missing transaction_hash".to_string()))?;
        let block_number =
            log.block_number.ok_or_else(|| DropReason::Decode("missing block_number".to_string()))?;
        let log_index =
            log.log_index.ok_or_else(|| DropReason::Decode("missing log_index".to_string()))?;

        let token = log.address();
        let info = self
            .cache
            .lookup(token)
            .await
            .map_err(|e| DropReason::Metadata { token, reason: format!("{e:#}") })?;

        Ok(TransferRow {
            token: token.to_string(),
            symbol: info.symbol,
            from: from.to_string(),
            to: to.to_string(),
            value: value.to_string(),
            normalized_value: normalize(value, info.multiplier),
            tx_hash: tx_hash.to_string(),
            block_number,
            event_id: log_index,
        })
    }
}

/// Field by field mapping; contract creation keeps an empty receiver.
pub fn transaction_row(record: &TransactionRecord) -> TransactionRow {
    TransactionRow {
        tx_hash: record.tx.tx_hash().to_string(),
        nonce: record.tx.nonce(),
        sender: record.sender.to_string(),
        receiver: record.receiver().map(|to| to.to_string()),
        block_number: record.block_number,
        timestamp: record.timestamp,
    }
}

/// `value / multiplier` as a float. Exact up to f64 precision only.
pub fn normalize(value: U256, multiplier: u128) -> f64 {
    f64::from(value) / multiplier as f64
}
