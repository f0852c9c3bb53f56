//! State-layer error types.
//!
//! Registry misuse is a programmer error and propagates to the caller;
//! nothing here is swallowed by the state layer itself.

use thiserror::Error;

/// Errors from state containers and the state registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// A state with this key is already registered.
    #[error("state with key '{0}' already exists")]
    DuplicateKey(String),

    /// No state registered under this key.
    #[error("no state found with key '{0}'")]
    KeyNotFound(String),

    /// `set` or `update` was called from inside an `update` closure on the
    /// same notifier. Nested notification is rejected rather than silently
    /// producing inconsistent ordering.
    #[error("reentrant update on notifier {0}")]
    ReentrantUpdate(crate::notifier::NotifierId),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::NotifierId;

    #[test]
    fn test_error_display() {
        let err = StateError::DuplicateKey("counter".into());
        assert_eq!(err.to_string(), "state with key 'counter' already exists");

        let err = StateError::KeyNotFound("missing".into());
        assert!(err.to_string().contains("missing"));

        let err = StateError::ReentrantUpdate(NotifierId::new());
        assert!(err.to_string().starts_with("reentrant update"));
    }
}
