//! Route table and shared application state.

use crate::config::WebSocketConfig;
use crate::page::Page;
use crate::title::TitleState;
use crate::ws::WsHandler;
use axum::{
    extract::{ws::WebSocketUpgrade, State},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use stinger_events::{EventDispatcher, EventRegistry};
use stinger_protocol::PushBus;
use stinger_state::StateRegistry;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Shared state reachable from every route handler.
#[derive(Clone)]
pub struct AppContext {
    /// Registered component states.
    pub states: Arc<StateRegistry>,
    /// Registered event handlers.
    pub events: EventRegistry,
    /// Dispatcher over `events`.
    pub dispatcher: EventDispatcher,
    /// Broadcast channel for outbound pushes.
    pub bus: PushBus,
    /// Document title.
    pub title: Arc<TitleState>,
    /// The page served at `/`.
    pub page: Arc<Page>,
    /// WebSocket bridge settings.
    pub ws_config: WebSocketConfig,
}

/// Build the route table: page, WebSocket bridge, health probe.
pub fn build_router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(render_page))
        .route("/ws", get(ws_upgrade))
        .route("/health", get(health_check))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(ctx)
}

async fn render_page(State(ctx): State<AppContext>) -> Html<String> {
    Html(ctx.page.render_document(&ctx.title.full_title()))
}

async fn ws_upgrade(State(ctx): State<AppContext>, ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(move |socket| async move {
        let handler = WsHandler::new(ctx.dispatcher.clone(), ctx.bus.clone(), ctx.ws_config);
        handler.handle(socket).await;
    })
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "stinger",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
