#![allow(dead_code)]

use alloy::consensus::{SignableTransaction, TxEnvelope, TxLegacy};
use alloy::primitives::{Address, B256, BlockNumber, Bytes, LogData, TxKind, U256};
use alloy::rpc::types::{Filter, Log};
use alloy::signers::SignerSync;
use alloy::signers::local::PrivateKeySigner;
use alloy::sol_types::SolEvent;
use chain::erc20::IERC20;
use chain::ledger::{Ledger, LedgerBlock, TokenReader};
use engine::encoder::OutputRow;
use engine::sink::handle::Sink;
use eyre::{Result, eyre};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

/// In-memory chain. Heights up to `head` without an entry are empty blocks.
#[derive(Default)]
pub struct FakeLedger {
    pub head: BlockNumber,
    pub blocks: HashMap<BlockNumber, LedgerBlock>,
    pub logs: Vec<Log>,
    /// Block fetches at this height fail.
    pub fail_block: Option<BlockNumber>,
    /// Log queries for a window starting at this height fail.
    pub fail_logs_from: Option<BlockNumber>,
    /// Cancels the token once this many log queries were served.
    pub cancel_after: Option<(usize, CancellationToken)>,
    queries: Mutex<Vec<(BlockNumber, BlockNumber)>>,
    head_calls: AtomicUsize,
}

impl FakeLedger {
    pub fn new(head: BlockNumber) -> Self {
        Self { head, ..Default::default() }
    }

    pub fn with_block(mut self, number: BlockNumber, timestamp: u64, txs: Vec<TxEnvelope>) -> Self {
        self.blocks.insert(number, LedgerBlock { number, timestamp, transactions: txs });
        self
    }

    pub fn with_log(mut self, log: Log) -> Self {
        self.logs.push(log);
        self
    }

    pub fn failing_block(mut self, number: BlockNumber) -> Self {
        self.fail_block = Some(number);
        self
    }

    pub fn failing_logs_from(mut self, from: BlockNumber) -> Self {
        self.fail_logs_from = Some(from);
        self
    }

    pub fn cancelling_after(mut self, queries: usize, token: CancellationToken) -> Self {
        self.cancel_after = Some((queries, token));
        self
    }

    /// `(from, to)` of every log query, in call order.
    pub fn log_queries(&self) -> Vec<(BlockNumber, BlockNumber)> {
        self.queries.lock().unwrap().clone()
    }

    pub fn head_calls(&self) -> usize {
        self.head_calls.load(Ordering::SeqCst)
    }

    fn matches(filter: &Filter, log: &Log, from: BlockNumber, to: BlockNumber) -> bool {
        let Some(number) = log.block_number else {
            return false;
        };
        if number < from || number > to {
            return false;
        }

        let topics = log.topics();
        filter.topics.iter().enumerate().all(|(i, set)| match topics.get(i) {
            Some(topic) => set.matches(topic),
            None => set.is_empty(),
        })
    }
}

#[async_trait::async_trait]
impl Ledger for FakeLedger {
    async fn latest_block_number(&self) -> Result<BlockNumber> {
        self.head_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.head)
    }

    async fn block_with_transactions(&self, number: BlockNumber) -> Result<Option<LedgerBlock>> {
        if self.fail_block == Some(number) {
            return Err(eyre!("connection reset"));
        }
        if number > self.head {
            return Ok(None);
        }
        let block = self.blocks.get(&number).cloned().unwrap_or(LedgerBlock {
            number,
            timestamp: 1_700_000_000 + number,
            transactions: vec![],
        });
        Ok(Some(block))
    }

    async fn logs(&self, filter: &Filter) -> Result<Vec<Log>> {
        let from = filter.get_from_block().unwrap_or(0);
        let to = filter.get_to_block().unwrap_or(u64::MAX);

        let served = {
            let mut queries = self.queries.lock().unwrap();
            queries.push((from, to));
            queries.len()
        };
        if let Some((after, token)) = &self.cancel_after {
            if served >= *after {
                token.cancel();
            }
        }

        if self.fail_logs_from == Some(from) {
            return Err(eyre!("query timeout"));
        }

        Ok(self.logs.iter().filter(|log| Self::matches(filter, log, from, to)).cloned().collect())
    }
}

/// Token metadata by address; anything missing fails the call.
#[derive(Default)]
pub struct FakeTokens {
    pub symbols: HashMap<Address, String>,
    pub decimals: HashMap<Address, u8>,
    symbol_calls: AtomicUsize,
}

impl FakeTokens {
    pub fn with_token(mut self, token: Address, symbol: &str, decimals: Option<u8>) -> Self {
        self.symbols.insert(token, symbol.to_string());
        if let Some(decimals) = decimals {
            self.decimals.insert(token, decimals);
        }
        self
    }

    pub fn symbol_calls(&self) -> usize {
        self.symbol_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TokenReader for FakeTokens {
    async fn symbol(&self, token: Address) -> Result<String> {
        self.symbol_calls.fetch_add(1, Ordering::SeqCst);
        self.symbols.get(&token).cloned().ok_or_else(|| eyre!("execution reverted"))
    }

    async fn decimals(&self, token: Address) -> Result<u8> {
        self.decimals.get(&token).copied().ok_or_else(|| eyre!("execution reverted"))
    }
}

/// Keeps written rows in memory; the handles stay readable after the sink is moved.
#[derive(Clone, Default)]
pub struct MemorySink {
    pub rows: Arc<Mutex<Vec<OutputRow>>>,
    pub flushes: Arc<AtomicUsize>,
    pub closes: Arc<AtomicUsize>,
}

impl MemorySink {
    pub fn rows(&self) -> Vec<OutputRow> {
        self.rows.lock().unwrap().clone()
    }
}

impl Sink for MemorySink {
    fn write(&mut self, row: &OutputRow) -> Result<()> {
        self.rows.lock().unwrap().push(row.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn close(self: Box<Self>) -> Result<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// A legacy transaction signed by `signer`; `to: None` creates a contract.
pub fn signed_tx(signer: &PrivateKeySigner, nonce: u64, to: Option<Address>) -> TxEnvelope {
    let tx = TxLegacy {
        chain_id: Some(1),
        nonce,
        gas_price: 1_000_000_000,
        gas_limit: 100_000,
        to: to.map_or(TxKind::Create, TxKind::Call),
        value: U256::from(1u64),
        input: Bytes::new(),
    };
    let signature = signer.sign_hash_sync(&tx.signature_hash()).unwrap();
    tx.into_signed(signature).into()
}

/// A Transfer log as a node returns it from `eth_getLogs`.
pub fn transfer_log(
    token: Address,
    from: Address,
    to: Address,
    value: U256,
    block_number: BlockNumber,
    log_index: u64,
) -> Log {
    let data = IERC20::Transfer { from, to, value }.encode_log_data();
    raw_log(token, data, block_number, log_index)
}

/// A Transfer-shaped log with a fourth indexed topic, as ERC-721 emits it.
pub fn nft_transfer_log(
    token: Address,
    from: Address,
    to: Address,
    block_number: BlockNumber,
    log_index: u64,
) -> Log {
    let topics = vec![
        IERC20::Transfer::SIGNATURE_HASH,
        from.into_word(),
        to.into_word(),
        B256::with_last_byte(7),
    ];
    raw_log(token, LogData::new_unchecked(topics, Bytes::new()), block_number, log_index)
}

fn raw_log(token: Address, data: LogData, block_number: BlockNumber, log_index: u64) -> Log {
    Log {
        inner: alloy::primitives::Log { address: token, data },
        block_number: Some(block_number),
        transaction_hash: Some(B256::with_last_byte(log_index as u8)),
        log_index: Some(log_index),
        ..Default::default()
    }
}
