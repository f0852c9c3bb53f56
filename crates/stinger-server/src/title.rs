//! Document title state.
//!
//! The browser tab title is server-owned: the base title comes from the
//! application, pages may set a page-specific prefix, and every change is
//! pushed to connected clients as a `title_update` frame.

use parking_lot::RwLock;
use stinger_protocol::{PushBus, ServerMessage};
use tracing::debug;

/// Default separator between page title and base title.
pub const DEFAULT_SEPARATOR: &str = " | ";

#[derive(Debug, Clone)]
struct TitleInner {
    base_title: String,
    page_title: Option<String>,
    separator: String,
}

/// Shared document title, pushed to clients on change.
pub struct TitleState {
    inner: RwLock<TitleInner>,
    bus: PushBus,
}

impl TitleState {
    /// Create title state with the given application base title.
    pub fn new(base_title: impl Into<String>, bus: PushBus) -> Self {
        Self {
            inner: RwLock::new(TitleInner {
                base_title: base_title.into(),
                page_title: None,
                separator: DEFAULT_SEPARATOR.to_string(),
            }),
            bus,
        }
    }

    /// The application base title.
    pub fn base_title(&self) -> String {
        self.inner.read().base_title.clone()
    }

    /// The page-specific title, if one is set.
    pub fn page_title(&self) -> Option<String> {
        self.inner.read().page_title.clone()
    }

    /// Full title as the browser tab shows it:
    /// `"{page}{separator}{base}"`, or just the base title when no page
    /// title is set.
    pub fn full_title(&self) -> String {
        let inner = self.inner.read();
        match &inner.page_title {
            Some(page) => format!("{}{}{}", page, inner.separator, inner.base_title),
            None => inner.base_title.clone(),
        }
    }

    /// Set or clear the page title and push the change to clients.
    pub fn set_page_title(&self, page_title: Option<String>) {
        {
            let mut inner = self.inner.write();
            if inner.page_title == page_title {
                return;
            }
            inner.page_title = page_title;
        }
        self.publish();
    }

    /// Change the base title and push the change to clients.
    pub fn set_base_title(&self, base_title: impl Into<String>) {
        let base_title = base_title.into();
        {
            let mut inner = self.inner.write();
            if inner.base_title == base_title {
                return;
            }
            inner.base_title = base_title;
        }
        self.publish();
    }

    /// Change the separator and push the change to clients.
    pub fn set_separator(&self, separator: impl Into<String>) {
        let separator = separator.into();
        {
            let mut inner = self.inner.write();
            if inner.separator == separator {
                return;
            }
            inner.separator = separator;
        }
        self.publish();
    }

    fn publish(&self) {
        let message = self.to_message();
        let receivers = self.bus.publish(message);
        debug!(receivers, title = %self.full_title(), "Pushed title update");
    }

    /// The current title as a wire frame.
    pub fn to_message(&self) -> ServerMessage {
        let inner = self.inner.read();
        ServerMessage::TitleUpdate {
            page_title: inner.page_title.clone(),
            base_title: inner.base_title.clone(),
            separator: inner.separator.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_title_without_page() {
        let title = TitleState::new("Stinger App", PushBus::new());
        assert_eq!(title.full_title(), "Stinger App");
    }

    #[test]
    fn test_full_title_with_page() {
        let title = TitleState::new("Stinger App", PushBus::new());
        title.set_page_title(Some("Counter".to_string()));
        assert_eq!(title.full_title(), "Counter | Stinger App");
    }

    #[test]
    fn test_clearing_page_title() {
        let title = TitleState::new("Stinger App", PushBus::new());
        title.set_page_title(Some("Counter".to_string()));
        title.set_page_title(None);
        assert_eq!(title.full_title(), "Stinger App");
    }

    #[tokio::test]
    async fn test_title_change_pushes_frame() {
        let bus = PushBus::new();
        let mut sub = bus.subscribe();
        let title = TitleState::new("Stinger App", bus);

        title.set_page_title(Some("Counter".to_string()));

        let frame = sub.recv().await.unwrap();
        match frame {
            ServerMessage::TitleUpdate {
                page_title,
                base_title,
                separator,
            } => {
                assert_eq!(page_title.as_deref(), Some("Counter"));
                assert_eq!(base_title, "Stinger App");
                assert_eq!(separator, " | ");
            }
            other => panic!("expected title_update, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unchanged_title_does_not_push() {
        let bus = PushBus::new();
        let mut sub = bus.subscribe();
        let title = TitleState::new("Stinger App", bus);

        title.set_page_title(None);
        title.set_base_title("Stinger App");

        assert!(matches!(sub.try_recv(), Ok(None)));
    }
}
