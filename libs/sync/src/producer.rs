use eyre::{Result, eyre};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;

/// Opens a bounded channel and wraps its sending half.
pub fn channel<T>(capacity: usize) -> (Producer<T>, mpsc::Receiver<T>) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (Producer::new(tx), rx)
}

/// Sending half of the pipeline channel.
///
/// Owns the only sender, so the channel closes exactly once: when the
/// producer is closed (or dropped).
pub struct Producer<T> {
    tx: mpsc::Sender<T>,
    emitted: AtomicU64,
}

impl<T> Producer<T> {
    pub fn new(tx: mpsc::Sender<T>) -> Self {
        Self { tx, emitted: AtomicU64::new(0) }
    }

    /// Pushes one item, waiting while the channel is full.
    pub async fn emit(&self, item: T) -> Result<()> {
        if self.tx.send(item).await.is_err() {
            // The receiver dropped
            return Err(eyre!("consumer is gone, channel closed"));
        }
        self.emitted.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    pub fn emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    /// Closes the channel and returns how many items went through it.
    pub fn close(self) -> u64 {
        self.emitted()
    }
}
