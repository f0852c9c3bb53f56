//! Application entry point: wires state, events, and the HTTP server.

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::page::Page;
use crate::router::{build_router, AppContext};
use crate::title::TitleState;
use std::sync::Arc;
use stinger_events::{EventDispatcher, EventRegistry};
use stinger_protocol::PushBus;
use stinger_state::{ComponentState, StateError, StateRegistry, StateValue};
use tokio::sync::oneshot;
use tracing::info;

/// A Stinger application.
///
/// Owns the state registry, event registry, push bus, and document title.
/// Build components against `events()` and `component_state()`, assemble a
/// [`Page`], then call [`App::run`].
pub struct App {
    config: ServerConfig,
    states: Arc<StateRegistry>,
    events: EventRegistry,
    bus: PushBus,
    title: Arc<TitleState>,
    page: Page,
    shutdown_rx: Option<oneshot::Receiver<()>>,
}

impl App {
    /// Create an application with the given base title.
    pub fn new(base_title: impl Into<String>, config: ServerConfig) -> Self {
        let bus = PushBus::new();
        let title = Arc::new(TitleState::new(base_title, bus.clone()));
        Self {
            config,
            states: Arc::new(StateRegistry::new()),
            events: EventRegistry::new(),
            bus,
            title,
            page: Page::new(),
            shutdown_rx: None,
        }
    }

    /// The event registry, for `on_click`/`on_change` wiring.
    pub fn events(&self) -> &EventRegistry {
        &self.events
    }

    /// The state registry.
    pub fn states(&self) -> &Arc<StateRegistry> {
        &self.states
    }

    /// The push bus.
    pub fn bus(&self) -> &PushBus {
        &self.bus
    }

    /// The document title.
    pub fn title(&self) -> &Arc<TitleState> {
        &self.title
    }

    /// Create a [`ComponentState`] registered under its component id.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::DuplicateKey`] if a state with this id already
    /// exists.
    pub fn component_state(
        &self,
        component_id: impl Into<String>,
        initial: impl Into<StateValue>,
    ) -> Result<ComponentState, StateError> {
        let state = ComponentState::new(component_id, initial, self.bus.clone());
        self.states
            .insert(state.component_id(), state.notifier_handle())?;
        Ok(state)
    }

    /// Set the page served at `/`.
    pub fn set_page(&mut self, page: Page) {
        self.page = page;
    }

    /// Build the route table without binding a listener.
    ///
    /// Used by tests driving the router directly.
    pub fn router(&self) -> axum::Router {
        build_router(self.context())
    }

    /// Obtain a handle that stops [`App::run`] when triggered.
    ///
    /// Only the most recent handle is honored.
    pub fn shutdown_handle(&mut self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.shutdown_rx = Some(rx);
        tx
    }

    fn context(&self) -> AppContext {
        AppContext {
            states: Arc::clone(&self.states),
            events: self.events.clone(),
            dispatcher: EventDispatcher::new(self.events.clone()),
            bus: self.bus.clone(),
            title: Arc::clone(&self.title),
            page: Arc::new(self.page.clone()),
            ws_config: self.config.websocket.clone(),
        }
    }

    /// Bind the configured address and serve until shutdown.
    pub async fn run(mut self) -> Result<(), ServerError> {
        self.config.validate()?;

        let router = build_router(self.context());
        let addr = self.config.addr();
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(ServerError::Bind)?;
        info!(addr = %addr, title = %self.title.full_title(), "Stinger server listening");

        let shutdown_rx = self.shutdown_rx.take();
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                match shutdown_rx {
                    Some(rx) => {
                        let _ = rx.await;
                    }
                    // No handle was taken; serve until the process exits.
                    None => std::future::pending::<()>().await,
                }
            })
            .await
            .map_err(ServerError::Serve)?;

        info!("Stinger server stopped");
        Ok(())
    }
}
