//! # Push Bus
//!
//! Fans outbound server pushes out to every connected client. Publishing
//! is fire-and-forget: a push with no connected clients is dropped with a
//! debug log, and a slow connection that lags behind loses messages rather
//! than blocking the publisher.

use crate::message::ServerMessage;
use crate::DEFAULT_CHANNEL_CAPACITY;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::debug;

/// Errors from push subscriptions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// The bus was dropped.
    #[error("push bus closed")]
    Closed,
}

/// Multi-producer fan-out bus for server→client pushes.
///
/// Cheap to clone; all clones publish into the same channel. State
/// containers hold a clone and publish on mutation, the WebSocket bridge
/// subscribes once per connection.
#[derive(Clone)]
pub struct PushBus {
    /// Broadcast sender for pushes.
    sender: broadcast::Sender<ServerMessage>,

    /// Total messages published across all clones.
    published: Arc<AtomicU64>,

    /// Channel capacity.
    capacity: usize,
}

impl PushBus {
    /// Create a bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a bus with the given per-subscriber buffer capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            published: Arc::new(AtomicU64::new(0)),
            capacity,
        }
    }

    /// Publish a push message to all current subscribers.
    ///
    /// Returns the number of subscribers that received the message. Zero
    /// receivers is not an error: pushes are best-effort and a server with
    /// no connected clients simply drops them.
    pub fn publish(&self, message: ServerMessage) -> usize {
        self.published.fetch_add(1, Ordering::Relaxed);

        match self.sender.send(message) {
            Ok(receiver_count) => receiver_count,
            Err(_) => {
                debug!("Push dropped (no connected clients)");
                0
            }
        }
    }

    /// Subscribe to pushes. One subscription per connection.
    #[must_use]
    pub fn subscribe(&self) -> PushSubscription {
        PushSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// Number of active subscriptions (connected clients).
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Total messages published.
    #[must_use]
    pub fn published(&self) -> u64 {
        self.published.load(Ordering::Relaxed)
    }

    /// Per-subscriber buffer capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for PushBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A subscription handle for receiving pushes.
pub struct PushSubscription {
    receiver: broadcast::Receiver<ServerMessage>,
}

impl PushSubscription {
    /// Receive the next push.
    ///
    /// # Returns
    ///
    /// - `Some(message)` - the next push
    /// - `None` - the bus was dropped
    ///
    /// A lagged subscriber skips the dropped messages and keeps receiving.
    pub async fn recv(&mut self) -> Option<ServerMessage> {
        loop {
            match self.receiver.recv().await {
                Ok(m) => return Some(m),
                Err(broadcast::error::RecvError::Closed) => return None,
                Err(broadcast::error::RecvError::Lagged(count)) => {
                    debug!(lagged = count, "Push subscriber lagged, messages dropped");
                }
            }
        }
    }

    /// Try to receive the next push without blocking.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(message))` - a push was buffered
    /// - `Ok(None)` - nothing buffered (would block)
    /// - `Err(SubscriptionError::Closed)` - the bus was dropped
    pub fn try_recv(&mut self) -> Result<Option<ServerMessage>, SubscriptionError> {
        loop {
            match self.receiver.try_recv() {
                Ok(m) => return Ok(Some(m)),
                Err(broadcast::error::TryRecvError::Empty) => return Ok(None),
                Err(broadcast::error::TryRecvError::Closed) => {
                    return Err(SubscriptionError::Closed)
                }
                Err(broadcast::error::TryRecvError::Lagged(_)) => continue,
            }
        }
    }
}
