//! # Component State
//!
//! A [`StateNotifier`] bound to a component/channel identifier. Every
//! change that notified local subscribers additionally publishes a
//! `state_change` push for connected clients.
//!
//! The push is fire-and-forget relative to the mutator: delivery failure
//! (no connected clients, lagging connections) is the bus's concern and
//! never surfaces from `set`/`update`.

use crate::error::StateError;
use crate::notifier::{StateNotifier, StateValue, SubscriberCallback, SubscriberId};
use std::sync::Arc;
use stinger_protocol::{PushBus, ServerMessage};
use tracing::debug;

/// State container for a UI component with client push integration.
pub struct ComponentState {
    /// Routing key for `state_change` messages.
    component_id: String,
    notifier: Arc<StateNotifier>,
    bus: PushBus,
}

impl ComponentState {
    /// Create a component state publishing on the given bus.
    #[must_use]
    pub fn new(component_id: impl Into<String>, initial: impl Into<StateValue>, bus: PushBus) -> Self {
        Self {
            component_id: component_id.into(),
            notifier: Arc::new(StateNotifier::new(initial)),
            bus,
        }
    }

    /// The routing key clients use to locate bound elements.
    #[must_use]
    pub fn component_id(&self) -> &str {
        &self.component_id
    }

    /// The underlying notifier.
    #[must_use]
    pub fn notifier(&self) -> &StateNotifier {
        &self.notifier
    }

    /// Shared handle to the notifier, e.g. for registry insertion.
    #[must_use]
    pub fn notifier_handle(&self) -> Arc<StateNotifier> {
        Arc::clone(&self.notifier)
    }

    /// Clone of the current value.
    #[must_use]
    pub fn value(&self) -> StateValue {
        self.notifier.value()
    }

    /// Store a new value; on change, notify subscribers and push to clients.
    ///
    /// # Errors
    ///
    /// `StateError::ReentrantUpdate` from inside an `update` closure.
    pub fn set(&self, new_value: impl Into<StateValue>) -> Result<bool, StateError> {
        let value = new_value.into();
        let changed = self.notifier.set(value.clone())?;
        if changed {
            self.push(value);
        }
        Ok(changed)
    }

    /// Compute a new value from the current one; on change, notify and push.
    ///
    /// # Errors
    ///
    /// `StateError::ReentrantUpdate` on nested mutation from the closure.
    pub fn update<F>(&self, updater: F) -> Result<bool, StateError>
    where
        F: FnOnce(&StateValue) -> StateValue,
    {
        // The push must carry the value this call committed, not whatever
        // the notifier holds by the time the push is built.
        let mut produced = None;
        let changed = self.notifier.update(|current| {
            let next = updater(current);
            produced = Some(next.clone());
            next
        })?;
        match produced {
            Some(value) if changed => self.push(value),
            _ => {}
        }
        Ok(changed)
    }

    /// Subscribe to changes (local, server-side).
    pub fn subscribe(&self, callback: SubscriberCallback) -> SubscriberId {
        self.notifier.subscribe(callback)
    }

    /// Remove a subscription. Unknown ids are a silent no-op.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.notifier.unsubscribe(id)
    }

    fn push(&self, value: StateValue) {
        let receivers = self
            .bus
            .publish(ServerMessage::state_change(&self.component_id, value));
        debug!(
            component_id = %self.component_id,
            receivers,
            "Pushed state change"
        );
    }
}
