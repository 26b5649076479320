//! Bounded ingestion queue for decoded webhook events.
//!
//! [`EventQueue`] owns a bounded `tokio::sync::mpsc` channel and hands out two
//! kinds of explicit handle:
//!
//! - [`EventProducer`]: cloneable, one per inbound request context. Enqueueing
//!   never waits; a full queue reports [`QueueError::Overloaded`] at once and
//!   the event is dropped.
//! - [`EventStream`]: the single consumer side, taken once via
//!   [`EventQueue::drain`]. Yields events in exactly the order they were
//!   accepted and suspends only the consumer while the queue is empty.
//!
//! ## Shutdown
//!
//! [`EventQueue::shutdown`] (or a cloned [`ShutdownHandle`]) refuses further
//! enqueues with [`QueueError::Closed`] and wakes a blocked consumer. Events
//! accepted before shutdown are still delivered; after them the stream ends.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};

use events::Event;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::sync::watch;

use crate::QueueError;

// ---------------------------------------------------------------------------
// Shutdown signal
// ---------------------------------------------------------------------------

/// Cloneable trigger for [`EventQueue`] shutdown.
#[derive(Debug, Clone)]
pub struct ShutdownHandle(Arc<watch::Sender<bool>>);

impl ShutdownHandle {
    /// Signals shutdown. Idempotent.
    pub fn trigger(&self) {
        if !self.0.send_replace(true) {
            tracing::info!("event queue shutting down");
        }
    }

    pub fn is_triggered(&self) -> bool {
        *self.0.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<bool> {
        self.0.subscribe()
    }
}

// ---------------------------------------------------------------------------
// Queue
// ---------------------------------------------------------------------------

/// A bounded FIFO of [`Event`] values with a fixed capacity.
#[derive(Debug)]
pub struct EventQueue {
    producer: EventProducer,
    receiver: Mutex<Option<mpsc::Receiver<Event>>>,
    shutdown: ShutdownHandle,
    capacity: NonZeroUsize,
}

impl EventQueue {
    /// Creates a queue that buffers at most `capacity` events.
    pub fn new(capacity: NonZeroUsize) -> Self {
        let (sender, receiver) = mpsc::channel(capacity.get());
        let (shutdown, stopped) = watch::channel(false);

        Self {
            producer: EventProducer { sender, stopped },
            receiver: Mutex::new(Some(receiver)),
            shutdown: ShutdownHandle(Arc::new(shutdown)),
            capacity,
        }
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Returns a new producer handle.
    pub fn producer(&self) -> EventProducer {
        self.producer.clone()
    }

    /// Enqueues through the queue's own producer handle.
    ///
    /// See [`EventProducer::enqueue`].
    pub fn enqueue(&self, event: Event) -> Result<(), QueueError> {
        self.producer.enqueue(event)
    }

    /// Takes the consumer side of the queue.
    ///
    /// Succeeds once. Later calls return [`QueueError::AlreadyDraining`].
    pub fn drain(&self) -> Result<EventStream, QueueError> {
        let receiver = self
            .receiver
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .ok_or(QueueError::AlreadyDraining)?;

        Ok(EventStream {
            receiver,
            stopped: self.shutdown.subscribe(),
            closing: false,
        })
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    /// Shuts the queue down; see the module docs.
    pub fn shutdown(&self) {
        self.shutdown.trigger();
    }
}

// ---------------------------------------------------------------------------
// Producer
// ---------------------------------------------------------------------------

/// Producer handle for an [`EventQueue`].
#[derive(Debug, Clone)]
pub struct EventProducer {
    sender: mpsc::Sender<Event>,
    stopped: watch::Receiver<bool>,
}

impl EventProducer {
    /// Appends `event` without waiting.
    ///
    /// Returns [`QueueError::Overloaded`] if the queue is full and
    /// [`QueueError::Closed`] after shutdown. In both cases the event is
    /// dropped.
    pub fn enqueue(&self, event: Event) -> Result<(), QueueError> {
        if *self.stopped.borrow() {
            return Err(QueueError::Closed);
        }

        match self.sender.try_send(event) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(QueueError::Overloaded),
            Err(TrySendError::Closed(_)) => Err(QueueError::Closed),
        }
    }

    /// Number of events currently buffered.
    pub fn len(&self) -> usize {
        self.sender.max_capacity() - self.sender.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Consumer
// ---------------------------------------------------------------------------

/// Consumer side of an [`EventQueue`].
#[derive(Debug)]
pub struct EventStream {
    receiver: mpsc::Receiver<Event>,
    stopped: watch::Receiver<bool>,
    closing: bool,
}

impl EventStream {
    /// Waits for the next event.
    ///
    /// Returns `None` once the queue has been shut down (or dropped) and every
    /// previously accepted event has been yielded.
    pub async fn next(&mut self) -> Option<Event> {
        if !self.closing {
            tokio::select! {
                biased;
                event = self.receiver.recv() => return event,
                // An error means the queue itself is gone; treat as shutdown.
                _ = self.stopped.wait_for(|stopped| *stopped) => {}
            }
            self.receiver.close();
            self.closing = true;
        }

        self.receiver.recv().await
    }

    /// Returns the next event if one is already buffered.
    pub fn try_next(&mut self) -> Option<Event> {
        self.receiver.try_recv().ok()
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
