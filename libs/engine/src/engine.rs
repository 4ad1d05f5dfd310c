use crate::args::{Args, Mode};
use crate::encoder::Encoder;
use crate::metadata::MetadataCache;
use crate::pubsub::subscriber;
use crate::range::{self, BlockRange};
use crate::sink::handle::{Sink, SinkReport};
use crate::source::handle::{ScanOutcome, Source};
use crate::source::record::RawRecord;
use crate::source::transaction::TransactionSource;
use crate::source::transfer::TransferSource;
use chain::ledger::{Ledger, TokenReader};
use eyre::{Result, WrapErr};
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Lifecycle of one collection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    Connected,
    Scanning,
    Draining,
    Stopped,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Init => "init",
            Stage::Connected => "connected",
            Stage::Scanning => "scanning",
            Stage::Draining => "draining",
            Stage::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// Summary of a run that reached `Stopped`.
#[derive(Debug, Clone)]
pub struct Report {
    pub range: BlockRange,
    pub outcome: ScanOutcome,
    pub emitted: u64,
    pub sink: SinkReport,
    /// Entries in the token cache when it was persisted.
    pub tokens: usize,
    pub stage: Stage,
}

/// Wires a source to the sink through the bounded channel and owns the shutdown order.
pub struct Engine {
    args: Args,
    ledger: Arc<dyn Ledger>,
    cache: Arc<MetadataCache>,
    stage: Stage,
}

impl Engine {
    /// Takes an already dialed ledger; dialing is the `Init -> Connected` step.
    pub fn connected(args: Args, ledger: Arc<dyn Ledger>, tokens: Arc<dyn TokenReader>) -> Self {
        let mut engine =
            Self { args, ledger, cache: Arc::new(MetadataCache::new(tokens)), stage: Stage::Init };
        engine.enter(Stage::Connected);
        engine
    }

    fn enter(&mut self, stage: Stage) {
        tracing::info!("Engine stage: {} -> {}", self.stage, stage);
        self.stage = stage;
    }

    fn source(&self) -> Box<dyn Source> {
        match self.args.mode {
            Mode::Transactions => Box::new(TransactionSource::new(Arc::clone(&self.ledger))),
            Mode::Transfers => Box::new(TransferSource::new(Arc::clone(&self.ledger))),
        }
    }

    /// Runs the whole pipeline.
    ///
    /// Startup failures (range, token file, destination) return before any
    /// scanning. Once scanning started, the channel is drained and the cache
    /// persisted even if the scan fails; the scan error is returned after that.
    pub async fn run<F>(mut self, open_sink: F, cancel: CancellationToken) -> Result<Report>
    where
        F: FnOnce(&Args) -> Result<Box<dyn Sink>>,
    {
        let range = range::resolve(self.ledger.as_ref(), self.args.from_block, self.args.to_block)
            .await
            .wrap_err("init block range")?;
        tracing::info!("Block range resolved: {} to {}", range.from, range.to);

        self.cache.load(&self.args.tokens_file).await.wrap_err("init token cache")?;

        let sink = open_sink(&self.args).wrap_err("init sink")?;

        let (producer, rx) = sync::producer::channel::<RawRecord>(self.args.channel_size);
        let consumer_handle =
            subscriber::spawn_record_consumer(rx, Encoder::new(Arc::clone(&self.cache)), sink);

        self.enter(Stage::Scanning);
        let scanned = self.source().scan(&range, self.args.address, &producer, &cancel).await;
        if let Err(e) = &scanned {
            tracing::error!("Scan failed: {e:#}");
        }

        self.enter(Stage::Draining);
        let emitted = producer.close();
        let sink_report = match consumer_handle.await {
            Ok(report) => report,
            Err(e) => {
                tracing::error!("Consumer task failed: {e}");
                SinkReport::default()
            }
        };

        let tokens = match self.cache.save(&self.args.tokens_file).await {
            Ok(saved) => {
                tracing::info!("Saved {saved} token(s) to {}", self.args.tokens_file.display());
                saved
            }
            Err(e) => {
                tracing::error!("Failed to save token cache: {e:#}");
                self.cache.len().await
            }
        };

        self.enter(Stage::Stopped);
        tokio::time::sleep(self.args.exit_grace).await;

        let status = match &scanned {
            Ok(ScanOutcome::Completed) => "completed",
            Ok(ScanOutcome::Cancelled) => "cancelled",
            Err(_) => "failed",
        };
        tracing::info!(
            "Run {status}: emitted {emitted}, written {}, dropped {}, failed {}",
            sink_report.written,
            sink_report.dropped,
            sink_report.failed
        );

        let outcome = scanned?;

        Ok(Report { range, outcome, emitted, sink: sink_report, tokens, stage: self.stage })
    }
}
