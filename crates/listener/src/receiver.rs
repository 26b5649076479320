//! Inbound webhook boundary, independent of the HTTP transport.
//!
//! [`WebhookReceiver::receive`] takes one raw request body and runs it through
//! the journey `received → decoding → {decoded | rejected}` and then
//! `decoded → enqueued | overloaded-dropped`. Nothing is retried here; the
//! transport layer turns each [`ReceiveError`] into a response.

use events::Event;
use uuid::Uuid;

use crate::{EventProducer, ReceiveError, SignatureVerifier};

/// Identifies one inbound webhook delivery.
///
/// Generated fresh for every request; recorded on the delivery's tracing span
/// so accept/reject logs can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeliveryId(Uuid);

impl DeliveryId {
    /// Generates a new random delivery identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying [`Uuid`].
    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for DeliveryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Verifies, decodes and enqueues webhook bodies.
#[derive(Debug, Clone)]
pub struct WebhookReceiver {
    producer: EventProducer,
    verifier: Option<SignatureVerifier>,
}

impl WebhookReceiver {
    /// Creates a receiver feeding `producer`. With `verifier` set, every body
    /// must carry a valid signature.
    pub fn new(producer: EventProducer, verifier: Option<SignatureVerifier>) -> Self {
        Self { producer, verifier }
    }

    pub fn requires_signature(&self) -> bool {
        self.verifier.is_some()
    }

    /// Handles one delivery. On success returns a copy of the event that was
    /// enqueued.
    pub fn receive(&self, body: &[u8], signature: Option<&str>) -> Result<Event, ReceiveError> {
        let delivery_id = DeliveryId::new_random();
        let span = tracing::info_span!("webhook_delivery", delivery_id = %delivery_id);
        let _guard = span.enter();

        let result = self.process(body, signature);
        match &result {
            Ok(event) => tracing::debug!(
                event_type = event.event_type(),
                owner = %event.owner(),
                repo = %event.repo(),
                branch = %event.branch(),
                "event enqueued"
            ),
            Err(err) => tracing::warn!(error = %err, "webhook delivery rejected"),
        }
        result
    }

    fn process(&self, body: &[u8], signature: Option<&str>) -> Result<Event, ReceiveError> {
        if let Some(verifier) = &self.verifier {
            verifier.verify(body, signature)?;
        }

        let event = events::decode_bytes(body)?;
        self.producer.enqueue(event.clone())?;
        Ok(event)
    }
}

#[cfg(test)]
#[path = "receiver_tests.rs"]
mod tests;
