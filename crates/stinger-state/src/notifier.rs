//! # State Notifier
//!
//! Observable value container with subscribe/notify semantics.
//!
//! Values are `serde_json::Value`: states are heterogeneous within one
//! registry and travel to clients as JSON, so the wire representation is
//! also the canonical in-memory one.
//!
//! Concurrency discipline: a per-notifier mutation mutex serializes every
//! `set`/`update` end to end, so an `update`'s read-compute-store cannot
//! interleave with a racing mutation and no increment is ever lost. A
//! second mutex guards the value and subscriber list with short critical
//! sections; notification iterates an immutable snapshot taken at store
//! time, after both locks are released, so subscribing or unsubscribing
//! during a pass never affects that pass and callbacks are free to touch
//! the notifier again.

use crate::error::StateError;
use parking_lot::Mutex;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, ThreadId};
use tracing::error;
use uuid::Uuid;

/// State values are arbitrary JSON.
pub type StateValue = serde_json::Value;

/// Callback invoked with the new value after a change.
pub type SubscriberCallback = Arc<dyn Fn(&StateValue) + Send + Sync>;

/// Unique identity of a notifier instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotifierId(Uuid);

impl NotifierId {
    /// Generate a fresh id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NotifierId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotifierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Unique identity of one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(Uuid);

impl SubscriberId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// A registered subscriber.
struct Subscriber {
    id: SubscriberId,
    callback: SubscriberCallback,
}

/// Mutable notifier internals, guarded by one mutex.
struct Inner {
    value: StateValue,
    subscribers: Vec<Subscriber>,
}

/// Observable value holder.
///
/// Setting a value equal to the current one is a no-op and fires no
/// subscribers. A panicking subscriber is isolated: it is logged and the
/// remaining subscribers are still notified.
pub struct StateNotifier {
    id: NotifierId,
    inner: Mutex<Inner>,
    /// Serializes `set`/`update` end to end. Never held during
    /// notification, so callbacks may mutate again.
    mutation: Mutex<()>,
    /// Thread currently inside an `update` closure, if any. Kept outside
    /// `mutation` so a reentrant call is rejected instead of deadlocking.
    updating: Mutex<Option<ThreadId>>,
}

impl StateNotifier {
    /// Create a notifier with an initial value.
    #[must_use]
    pub fn new(initial: impl Into<StateValue>) -> Self {
        Self {
            id: NotifierId::new(),
            inner: Mutex::new(Inner {
                value: initial.into(),
                subscribers: Vec::new(),
            }),
            mutation: Mutex::new(()),
            updating: Mutex::new(None),
        }
    }

    /// This notifier's identity.
    #[must_use]
    pub fn id(&self) -> NotifierId {
        self.id
    }

    /// Clone of the current value.
    #[must_use]
    pub fn value(&self) -> StateValue {
        self.inner.lock().value.clone()
    }

    /// Store a new value and notify subscribers.
    ///
    /// Returns `Ok(false)` when the value compared equal and nothing
    /// happened, `Ok(true)` when subscribers were notified.
    ///
    /// # Errors
    ///
    /// `StateError::ReentrantUpdate` when called from inside an `update`
    /// closure on the same notifier.
    pub fn set(&self, new_value: impl Into<StateValue>) -> Result<bool, StateError> {
        self.check_reentrancy()?;

        let snapshot = {
            let _serial = self.mutation.lock();
            self.commit(new_value.into())
        };

        match snapshot {
            Some((value, subscribers)) => {
                self.notify(&subscribers, &value);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Read the current value, compute a new one, and store it — as one
    /// atomic step. Racing mutations serialize on this notifier, so no
    /// update is ever based on a stale read.
    ///
    /// The closure must not call `set` or `update` on this notifier; doing
    /// so returns `StateError::ReentrantUpdate` from the nested call.
    pub fn update<F>(&self, updater: F) -> Result<bool, StateError>
    where
        F: FnOnce(&StateValue) -> StateValue,
    {
        self.check_reentrancy()?;

        let snapshot = {
            let _serial = self.mutation.lock();
            *self.updating.lock() = Some(thread::current().id());

            // Guard clears the flag even if the updater panics.
            let new_value = {
                let _guard = UpdateGuard { notifier: self };
                let current = self.inner.lock().value.clone();
                updater(&current)
            };

            self.commit(new_value)
        };

        match snapshot {
            Some((value, subscribers)) => {
                self.notify(&subscribers, &value);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn check_reentrancy(&self) -> Result<(), StateError> {
        if *self.updating.lock() == Some(thread::current().id()) {
            return Err(StateError::ReentrantUpdate(self.id));
        }
        Ok(())
    }

    /// Compare-then-store under the value lock. Returns the committed
    /// value and the subscriber snapshot, or `None` for an equal value.
    #[allow(clippy::type_complexity)]
    fn commit(
        &self,
        new_value: StateValue,
    ) -> Option<(StateValue, Vec<(SubscriberId, SubscriberCallback)>)> {
        let mut inner = self.inner.lock();
        if inner.value == new_value {
            return None;
        }
        inner.value = new_value.clone();
        let subscribers = inner
            .subscribers
            .iter()
            .map(|s| (s.id, Arc::clone(&s.callback)))
            .collect();
        Some((new_value, subscribers))
    }

    /// Subscribe to changes. The callback fires only on subsequent changes,
    /// never at subscribe time.
    pub fn subscribe(&self, callback: SubscriberCallback) -> SubscriberId {
        let id = SubscriberId::new();
        self.inner.lock().subscribers.push(Subscriber { id, callback });
        id
    }

    /// Remove a subscription. Unknown ids are a silent no-op.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.inner.lock().subscribers.retain(|s| s.id != id);
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }

    fn notify(&self, subscribers: &[(SubscriberId, SubscriberCallback)], value: &StateValue) {
        for (id, callback) in subscribers {
            let result = catch_unwind(AssertUnwindSafe(|| callback(value)));
            if result.is_err() {
                error!(
                    notifier = %self.id,
                    subscriber = %id,
                    "Subscriber callback panicked during notification"
                );
            }
        }
    }
}

impl fmt::Debug for StateNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateNotifier")
            .field("id", &self.id)
            .field("value", &self.value())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

struct UpdateGuard<'a> {
    notifier: &'a StateNotifier,
}

impl Drop for UpdateGuard<'_> {
    fn drop(&mut self) {
        *self.notifier.updating.lock() = None;
    }
}
