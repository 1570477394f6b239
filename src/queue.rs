use std::time::Duration;

use actix_web::{http::StatusCode, ResponseError};
use tokio::sync::mpsc;

use crate::event::Event;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EnqueueError {
    #[error("500 Internal Server Error - Event consumer is gone")]
    Closed,
    #[error("503 Service Unavailable - Event queue is full")]
    Timeout,
}

impl ResponseError for EnqueueError {
    fn status_code(&self) -> StatusCode {
        match self {
            EnqueueError::Closed => StatusCode::INTERNAL_SERVER_ERROR,
            EnqueueError::Timeout => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// Producer end of the delivery queue.
///
/// Pushing waits for free capacity; with a timeout set, a push that cannot be
/// placed in time fails with [`EnqueueError::Timeout`] and the event is dropped.
#[derive(Debug, Clone)]
pub struct Queue {
    tx: mpsc::Sender<Event>,
    timeout: Option<Duration>,
}

impl Queue {
    /// Creates a queue holding at most `capacity` undelivered events (at least one).
    pub fn bounded(capacity: usize, timeout: Option<Duration>) -> (Self, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx, timeout }, rx)
    }

    pub async fn push(&self, event: Event) -> Result<(), EnqueueError> {
        match self.timeout {
            Some(timeout) => self
                .tx
                .send_timeout(event, timeout)
                .await
                .map_err(|err| match err {
                    mpsc::error::SendTimeoutError::Timeout(_) => EnqueueError::Timeout,
                    mpsc::error::SendTimeoutError::Closed(_) => EnqueueError::Closed,
                }),
            None => self.tx.send(event).await.map_err(|_| EnqueueError::Closed),
        }
    }

    pub fn capacity(&self) -> usize {
        self.tx.max_capacity()
    }
}
