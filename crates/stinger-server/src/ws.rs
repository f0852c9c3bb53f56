//! WebSocket bridge between browser runtimes and the event dispatcher.
//!
//! Each connection:
//! - receives a `connection_response` frame immediately after the upgrade
//! - forwards every push published on the [`PushBus`] (state changes,
//!   title updates)
//! - parses inbound text frames as `component_event`, dispatches them, and
//!   answers with `event_response` on this connection only
//!
//! Application-level failures (malformed frames, failing handlers) produce
//! a single `error` frame; the connection is never torn down for them.

use crate::config::WebSocketConfig;
use axum::extract::ws::{Message, WebSocket};
use futures::StreamExt;
use serde_json::error::Category;
use serde_json::Value;
use std::time::Duration;
use stinger_events::{EventDispatcher, EventError};
use stinger_protocol::{ClientMessage, PushBus, ServerMessage};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Per-connection WebSocket handler.
pub struct WsHandler {
    dispatcher: EventDispatcher,
    bus: PushBus,
    config: WebSocketConfig,
    connection_id: Uuid,
}

impl WsHandler {
    pub fn new(dispatcher: EventDispatcher, bus: PushBus, config: WebSocketConfig) -> Self {
        Self {
            dispatcher,
            bus,
            config,
            connection_id: Uuid::new_v4(),
        }
    }

    /// Check message size, returns the error frame to send if too large.
    fn check_message_size(&self, size: usize) -> Option<ServerMessage> {
        if size > self.config.max_message_size {
            warn!(
                connection_id = %self.connection_id,
                size,
                max = self.config.max_message_size,
                "Message exceeds size limit"
            );
            Some(ServerMessage::error(format!(
                "message too large: {} bytes (max: {})",
                size, self.config.max_message_size
            )))
        } else {
            None
        }
    }

    /// Drive the connection until the client disconnects or the socket
    /// errors.
    pub async fn handle(self, mut socket: WebSocket) {
        info!(connection_id = %self.connection_id, "New WebSocket connection");

        if let Err(e) = socket
            .send(Message::Text(ServerMessage::connected().to_frame()))
            .await
        {
            warn!(connection_id = %self.connection_id, error = %e, "Failed to send connection response");
            return;
        }

        let mut pushes = self.bus.subscribe();

        loop {
            tokio::select! {
                inbound = socket.next() => {
                    match inbound {
                        Some(Ok(Message::Text(text))) => {
                            let reply = match self.check_message_size(text.len()) {
                                Some(err) => Some(err),
                                None => {
                                    process_frame(
                                        &self.dispatcher,
                                        self.config.handler_timeout,
                                        &text,
                                    )
                                    .await
                                }
                            };
                            if let Some(message) = reply {
                                if let Err(e) = socket.send(Message::Text(message.to_frame())).await {
                                    error!(connection_id = %self.connection_id, error = %e, "Failed to send response frame");
                                    break;
                                }
                            }
                        }
                        Some(Ok(Message::Binary(_))) => {
                            // The runtime only sends text frames.
                            let err = ServerMessage::error("binary frames are not supported");
                            if socket.send(Message::Text(err.to_frame())).await.is_err() {
                                break;
                            }
                        }
                        Some(Ok(Message::Ping(data))) => {
                            if socket.send(Message::Pong(data)).await.is_err() {
                                break;
                            }
                        }
                        Some(Ok(Message::Pong(_))) => {}
                        Some(Ok(Message::Close(_))) => {
                            debug!(connection_id = %self.connection_id, "WebSocket close received");
                            break;
                        }
                        Some(Err(e)) => {
                            warn!(connection_id = %self.connection_id, error = %e, "WebSocket error");
                            break;
                        }
                        None => break,
                    }
                }
                push = pushes.recv() => {
                    match push {
                        Some(message) => {
                            if let Err(e) = socket.send(Message::Text(message.to_frame())).await {
                                error!(connection_id = %self.connection_id, error = %e, "Failed to forward push");
                                break;
                            }
                        }
                        // Bus dropped; no more pushes will ever arrive.
                        None => break,
                    }
                }
            }
        }

        info!(connection_id = %self.connection_id, "WebSocket connection closed");
    }
}

/// Process one inbound text frame, returning the frame to send back, if
/// any.
///
/// Handlers run on the blocking pool under a wall-clock budget so a stuck
/// handler cannot wedge the connection. Per the dispatch boundary policy,
/// an unknown event key produces no outbound frame.
pub async fn process_frame(
    dispatcher: &EventDispatcher,
    handler_timeout: Duration,
    text: &str,
) -> Option<ServerMessage> {
    let message: ClientMessage = match serde_json::from_str(text) {
        Ok(m) => m,
        Err(e) => {
            warn!(error = %e, "Unparseable frame");
            let reply = match e.classify() {
                Category::Syntax | Category::Eof => format!("invalid JSON: {}", e),
                _ => format!("invalid frame: {}", e),
            };
            return Some(ServerMessage::error(reply));
        }
    };

    let ClientMessage::ComponentEvent { event_id, data } = message;
    let payload = data.unwrap_or(Value::Null);

    let dispatcher = dispatcher.clone();
    let dispatch_id = event_id.clone();
    let task = tokio::task::spawn_blocking(move || dispatcher.dispatch(&dispatch_id, &payload));

    let outcome = match tokio::time::timeout(handler_timeout, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_err)) => {
            error!(event_id = %event_id, error = %join_err, "Dispatch task failed");
            return Some(ServerMessage::error("internal dispatch failure"));
        }
        Err(_) => {
            error!(event_id = %event_id, timeout = ?handler_timeout, "Handler timed out");
            return Some(ServerMessage::error(format!(
                "handler for event '{}' timed out",
                event_id
            )));
        }
    };

    match outcome {
        Ok(response) => Some(ServerMessage::EventResponse { event_id, response }),
        // Already logged at warn by the dispatcher; stale markup after a
        // handler was removed is not a client fault.
        Err(EventError::HandlerNotFound(_)) => None,
        Err(err @ EventError::MalformedEvent(_)) => Some(ServerMessage::error(err.to_string())),
        Err(err @ EventError::HandlerExecution { .. }) => {
            Some(ServerMessage::error(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stinger_events::EventRegistry;

    const TIMEOUT: Duration = Duration::from_secs(2);

    fn dispatcher_with_increment() -> EventDispatcher {
        let registry = EventRegistry::new();
        registry.register_fn("counter_click", |payload| {
            let amount = payload
                .value
                .as_ref()
                .and_then(Value::as_i64)
                .unwrap_or(1);
            Ok(json!(amount + 1))
        });
        EventDispatcher::new(registry)
    }

    #[tokio::test]
    async fn test_valid_event_produces_event_response() {
        let dispatcher = dispatcher_with_increment();
        let frame = serde_json::to_string(&ClientMessage::component_event(
            "counter_click",
            Some(json!({"type": "click", "value": 41})),
        ))
        .unwrap();

        let reply = process_frame(&dispatcher, TIMEOUT, &frame).await;
        match reply {
            Some(ServerMessage::EventResponse { event_id, response }) => {
                assert_eq!(event_id, "counter_click");
                assert_eq!(response, json!(42));
            }
            other => panic!("expected event_response, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_data_dispatches_defaults() {
        let dispatcher = dispatcher_with_increment();
        let frame = json!({
            "event": "component_event",
            "event_id": "counter_click"
        })
        .to_string();

        let reply = process_frame(&dispatcher, TIMEOUT, &frame).await;
        assert!(matches!(
            reply,
            Some(ServerMessage::EventResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_json_yields_error_frame() {
        let dispatcher = dispatcher_with_increment();
        let reply = process_frame(&dispatcher, TIMEOUT, "{not json").await;
        match reply {
            Some(ServerMessage::Error { message }) => {
                assert!(message.contains("invalid JSON"));
            }
            other => panic!("expected error frame, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_object_frame_rejected() {
        let dispatcher = dispatcher_with_increment();
        let reply = process_frame(&dispatcher, TIMEOUT, "[1, 2]").await;
        assert!(matches!(reply, Some(ServerMessage::Error { .. })));
    }

    #[tokio::test]
    async fn test_missing_event_id_rejected() {
        let dispatcher = dispatcher_with_increment();
        let frame = json!({"event": "component_event"}).to_string();
        let reply = process_frame(&dispatcher, TIMEOUT, &frame).await;
        match reply {
            Some(ServerMessage::Error { message }) => {
                assert!(message.contains("invalid frame"));
            }
            other => panic!("expected error frame, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_event_tag_rejected() {
        let dispatcher = dispatcher_with_increment();
        let frame = json!({"event": "page_load", "event_id": "x"}).to_string();
        let reply = process_frame(&dispatcher, TIMEOUT, &frame).await;
        match reply {
            Some(ServerMessage::Error { message }) => {
                assert!(message.contains("invalid frame"));
            }
            other => panic!("expected error frame, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_event_key_is_silent() {
        let dispatcher = dispatcher_with_increment();
        let frame = json!({
            "event": "component_event",
            "event_id": "gone_click"
        })
        .to_string();

        let reply = process_frame(&dispatcher, TIMEOUT, &frame).await;
        assert!(reply.is_none());
    }

    #[tokio::test]
    async fn test_failing_handler_yields_error_frame() {
        let registry = EventRegistry::new();
        registry.register_fn("boom_click", |_| Err(anyhow::anyhow!("boom")));
        let dispatcher = EventDispatcher::new(registry);

        let frame = json!({
            "event": "component_event",
            "event_id": "boom_click"
        })
        .to_string();

        let reply = process_frame(&dispatcher, TIMEOUT, &frame).await;
        match reply {
            Some(ServerMessage::Error { message }) => {
                assert!(message.contains("boom_click"));
                assert!(message.contains("boom"));
            }
            other => panic!("expected error frame, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_slow_handler_times_out() {
        let registry = EventRegistry::new();
        registry.register_fn("slow_click", |_| {
            std::thread::sleep(Duration::from_millis(500));
            Ok(Value::Null)
        });
        let dispatcher = EventDispatcher::new(registry);

        let frame = json!({
            "event": "component_event",
            "event_id": "slow_click"
        })
        .to_string();

        let reply = process_frame(&dispatcher, Duration::from_millis(50), &frame).await;
        match reply {
            Some(ServerMessage::Error { message }) => {
                assert!(message.contains("timed out"));
            }
            other => panic!("expected timeout error frame, got {:?}", other),
        }
    }
}
