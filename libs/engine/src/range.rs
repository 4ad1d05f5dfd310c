use alloy::primitives::BlockNumber;
use chain::ledger::Ledger;
use eyre::{Result, WrapErr, eyre};

/// Heights covered by one pair of log queries.
pub const WINDOW_SIZE: u64 = 1000;

/// Inclusive block range, `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    pub from: BlockNumber,
    pub to: BlockNumber,
}

impl BlockRange {
    pub fn new(from: BlockNumber, to: BlockNumber) -> Result<Self> {
        if from > to {
            return Err(eyre!("invalid block range: from {from} is above to {to}"));
        }
        Ok(Self { from, to })
    }

    pub fn is_single_block(&self) -> bool {
        self.from == self.to
    }

    /// Contiguous, non-overlapping windows of at most `size` heights; the last one ends at `to`.
    pub fn windows(&self, size: u64) -> Windows {
        Windows { next_from: Some(self.from), to: self.to, size: size.max(1) }
    }
}

/// One batch of heights, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanWindow {
    pub from: BlockNumber,
    pub to: BlockNumber,
}

#[derive(Debug, Clone)]
pub struct Windows {
    next_from: Option<BlockNumber>,
    to: BlockNumber,
    size: u64,
}

impl Iterator for Windows {
    type Item = ScanWindow;

    fn next(&mut self) -> Option<Self::Item> {
        let from = self.next_from?;
        // saturating: `to` may sit at u64::MAX
        let to = from.saturating_add(self.size - 1).min(self.to);
        self.next_from = if to >= self.to { None } else { Some(to + 1) };
        Some(ScanWindow { from, to })
    }
}

/// Turns the configured bounds into a concrete range.
///
/// A negative `from_raw` starts at genesis; a negative `to_raw` asks the
/// ledger for its head, once. A failing head query is returned as is.
pub async fn resolve(ledger: &dyn Ledger, from_raw: i64, to_raw: i64) -> Result<BlockRange> {
    let from = u64::try_from(from_raw).unwrap_or(0);

    let to = match u64::try_from(to_raw) {
        Ok(to) => to,
        Err(_) => ledger.latest_block_number().await.wrap_err("get last block")?,
    };

    BlockRange::new(from, to)
}
