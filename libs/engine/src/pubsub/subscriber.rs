use crate::encoder::Encoder;
use crate::sink::handle::{Sink, SinkReport};
use crate::source::handle::SourceInput;
use crate::source::record::RawRecord;
use sync::consumer::{Consumer, Handler};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Encodes and writes records as they arrive, flushing after every row.
pub struct RecordConsumer {
    encoder: Encoder,
    sink: Box<dyn Sink>,
    report: SinkReport,
}

impl RecordConsumer {
    pub fn new(encoder: Encoder, sink: Box<dyn Sink>) -> Self {
        Self { encoder, sink, report: SinkReport::default() }
    }
}

#[async_trait::async_trait]
impl Handler<RawRecord> for RecordConsumer {
    type Output = SinkReport;

    async fn handle(&mut self, record: RawRecord) {
        self.report.received += 1;
        let block_number = record.block_number();

        let row = match self.encoder.encode(record).await {
            Ok(row) => row,
            Err(reason) => {
                tracing::warn!("Skip: record at block {block_number:?} dropped - reason {reason}");
                self.report.dropped += 1;
                return;
            }
        };

        if let Err(e) = self.sink.write(&row) {
            tracing::error!("Consumer failed on [write]: {e:#}");
            self.report.failed += 1;
            return;
        }
        self.report.written += 1;

        if let Err(e) = self.sink.flush() {
            tracing::error!("Consumer failed on [flush]: {e:#}");
        }
    }

    async fn finish(mut self) -> SinkReport {
        if let Err(e) = self.sink.flush() {
            tracing::error!("Consumer failed on [flush]: {e:#}");
        }
        if let Err(e) = self.sink.close() {
            tracing::error!("Consumer failed on [close]: {e:#}");
        }

        tracing::info!("Consumer drained: {:?}", self.report);
        self.report
    }
}

/// Spawns the sink task; its handle resolves once the channel is closed and drained.
pub fn spawn_record_consumer(
    rx: mpsc::Receiver<RawRecord>,
    encoder: Encoder,
    sink: Box<dyn Sink>,
) -> JoinHandle<SinkReport> {
    Consumer::spawn(rx, RecordConsumer::new(encoder, sink))
}
