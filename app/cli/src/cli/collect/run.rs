use alloy::transports::http::reqwest::Url;
use chain::rpc::NodeClient;
use engine::{
    args::Args,
    engine::Engine,
    sink::{csv::CsvSink, handle::Sink},
};
use eyre::{Result, WrapErr};
use std::future::Future;
use std::io;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub async fn start(rpc_url: &str, engine_args: Args) -> Result<()> {
    let rpc_url = Url::parse(rpc_url).wrap_err_with(|| format!("invalid rpc url `{rpc_url}`"))?;
    let node_client = Arc::new(NodeClient::connect(rpc_url).await?);
    tracing::info!("Connected to chain id {}", node_client.chain_id());

    // First SIGINT cancels the scan and the engine still drains and persists.
    // A second one exits without waiting, e.g. on a hung RPC call.
    let cancel = CancellationToken::new();
    let signal_handle = tokio::spawn(watch_interrupts(tokio::signal::ctrl_c, cancel.clone()));

    tracing::info!("Starting the engine {engine_args:?}");

    let engine = Engine::connected(engine_args, node_client.clone(), node_client);
    let report = engine
        .run(|args| Ok(Box::new(CsvSink::create(&args.output)?) as Box<dyn Sink>), cancel)
        .await;

    signal_handle.abort();

    let report = report?;
    tracing::info!(
        "Collected blocks {} to {} into {} row(s)",
        report.range.from,
        report.range.to,
        report.sink.written
    );

    Ok(())
}

/// Cancels `cancel` on the first interrupt and exits the process on the second.
async fn watch_interrupts<S, F>(signal: S, cancel: CancellationToken)
where
    S: FnMut() -> F,
    F: Future<Output = io::Result<()>>,
{
    if await_second_interrupt(signal, cancel).await {
        tracing::warn!("Second interrupt received, exiting without draining");
        std::process::exit(130);
    }
}

/// Returns `true` once a second interrupt arrived after the cancellation.
async fn await_second_interrupt<S, F>(mut signal: S, cancel: CancellationToken) -> bool
where
    S: FnMut() -> F,
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = signal().await {
        tracing::error!("Failed to listen for interrupts: {e}");
        return false;
    }
    tracing::info!("Interrupt received, stopping the scan...");
    cancel.cancel();

    signal().await.is_ok()
}
