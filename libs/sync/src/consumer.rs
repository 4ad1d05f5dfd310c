use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Per-item callback of a [`Consumer`], plus the step run once the channel is closed.
#[async_trait::async_trait]
pub trait Handler<T: Send + 'static>: Send + 'static {
    type Output: Send + 'static;

    async fn handle(&mut self, item: T);

    async fn finish(self) -> Self::Output;
}

pub struct Consumer<T, H> {
    rx: mpsc::Receiver<T>,
    handler: H,
}

impl<T, H> Consumer<T, H>
where
    T: Send + 'static,
    H: Handler<T>,
{
    pub fn new(rx: mpsc::Receiver<T>, handler: H) -> Self {
        Self { rx, handler }
    }

    /// Spawns the drain loop; the handle resolves once, after `finish` ran.
    pub fn spawn(rx: mpsc::Receiver<T>, handler: H) -> JoinHandle<H::Output> {
        let consumer = Consumer::new(rx, handler);
        tokio::spawn(consumer.run())
    }

    /// Handles every item until all senders are gone, then finishes.
    ///
    /// There is no shutdown branch: whatever was pushed before the channel
    /// closed is still handled.
    pub async fn run(self) -> H::Output {
        let Consumer { mut rx, mut handler } = self;

        while let Some(item) = rx.recv().await {
            handler.handle(item).await;
        }

        // Channel closed
        handler.finish().await
    }
}
