//! Consumer loop that drains an [`EventStream`] into an [`EventHandler`].

use async_trait::async_trait;
use events::Event;

use crate::{EventStream, HandlerError};

/// Processes events taken off the ingestion queue.
///
/// Implementations are called sequentially, one event at a time, in queue
/// order.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: Event) -> Result<(), HandlerError>;
}

/// Totals from one [`run_consumer`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsumerReport {
    pub handled: usize,
    pub failed: usize,
}

/// Drains `stream` until it ends (queue shut down or dropped).
///
/// A handler error is logged and the loop moves on to the next event; the
/// failed event is not retried.
pub async fn run_consumer<H>(mut stream: EventStream, handler: H) -> ConsumerReport
where
    H: EventHandler,
{
    let mut report = ConsumerReport::default();

    while let Some(event) = stream.next().await {
        let event_type = event.event_type();
        match handler.handle(event).await {
            Ok(()) => report.handled += 1,
            Err(err) => {
                report.failed += 1;
                tracing::warn!(event_type, error = %err, "event handler failed");
            }
        }
    }

    tracing::info!(
        handled = report.handled,
        failed = report.failed,
        "event consumer stopped"
    );
    report
}

#[cfg(test)]
#[path = "consumer_tests.rs"]
mod tests;
