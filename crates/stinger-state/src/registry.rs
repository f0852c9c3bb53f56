//! # State Registry
//!
//! Keyed lifecycle manager for [`StateNotifier`] instances. The registry is
//! an explicitly owned object: the app constructs one and passes it by
//! `Arc` to whatever needs it, so tests get a fresh registry each and
//! nothing hides in module-level globals.
//!
//! Contract: keys are unique, registration of an existing key is an error,
//! lookup and removal of a missing key are errors. No creation-on-get, no
//! eviction.

use crate::error::StateError;
use crate::notifier::{StateNotifier, StateValue};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// Process-wide registry mapping string keys to notifiers.
#[derive(Default)]
pub struct StateRegistry {
    states: DashMap<String, Arc<StateNotifier>>,
}

impl StateRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new notifier under `key` with an initial value.
    ///
    /// # Errors
    ///
    /// `StateError::DuplicateKey` if the key is taken.
    pub fn register(
        &self,
        key: impl Into<String>,
        initial: impl Into<StateValue>,
    ) -> Result<Arc<StateNotifier>, StateError> {
        let key = key.into();
        match self.states.entry(key.clone()) {
            Entry::Occupied(_) => Err(StateError::DuplicateKey(key)),
            Entry::Vacant(slot) => {
                let notifier = Arc::new(StateNotifier::new(initial));
                slot.insert(Arc::clone(&notifier));
                debug!(key = %key, "State registered");
                Ok(notifier)
            }
        }
    }

    /// Register an existing notifier under `key`.
    ///
    /// Used when the notifier is owned elsewhere, e.g. by a
    /// `ComponentState`.
    ///
    /// # Errors
    ///
    /// `StateError::DuplicateKey` if the key is taken.
    pub fn insert(
        &self,
        key: impl Into<String>,
        notifier: Arc<StateNotifier>,
    ) -> Result<(), StateError> {
        let key = key.into();
        match self.states.entry(key.clone()) {
            Entry::Occupied(_) => Err(StateError::DuplicateKey(key)),
            Entry::Vacant(slot) => {
                slot.insert(notifier);
                debug!(key = %key, "State registered");
                Ok(())
            }
        }
    }

    /// Look up a notifier by key.
    ///
    /// # Errors
    ///
    /// `StateError::KeyNotFound` if absent.
    pub fn get(&self, key: &str) -> Result<Arc<StateNotifier>, StateError> {
        self.states
            .get(key)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| StateError::KeyNotFound(key.to_string()))
    }

    /// Remove a notifier by key.
    ///
    /// # Errors
    ///
    /// `StateError::KeyNotFound` if absent.
    pub fn remove(&self, key: &str) -> Result<(), StateError> {
        self.states
            .remove(key)
            .map(|_| debug!(key = %key, "State removed"))
            .ok_or_else(|| StateError::KeyNotFound(key.to_string()))
    }

    /// Whether a key is registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.states.contains_key(key)
    }

    /// Number of registered states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
