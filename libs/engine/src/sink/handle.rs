use eyre::Result;

use crate::encoder::OutputRow;

/// Destination of encoded rows.
pub trait Sink: Send {
    fn write(&mut self, row: &OutputRow) -> Result<()>;

    fn flush(&mut self) -> Result<()>;

    fn close(self: Box<Self>) -> Result<()>;
}

/// What the sink task did with the records it received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinkReport {
    pub received: u64,
    pub written: u64,
    /// Rejected by the encoder.
    pub dropped: u64,
    /// Encoded but the write failed.
    pub failed: u64,
}
