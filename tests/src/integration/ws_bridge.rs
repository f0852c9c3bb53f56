//! Frame handling at the WebSocket boundary.
//!
//! Exercises the boundary policy end to end: malformed frames and handler
//! failures answer with a single `error` frame, unknown event keys stay
//! silent, and nothing tears the connection down.

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use std::time::Duration;
    use stinger_events::{EventDispatcher, EventRegistry};
    use stinger_protocol::ServerMessage;
    use stinger_server::ws::process_frame;

    const TIMEOUT: Duration = Duration::from_secs(2);

    fn echo_dispatcher() -> EventDispatcher {
        let events = EventRegistry::new();
        events.register_fn("echo_click", |payload| {
            Ok(payload.value.unwrap_or(Value::Null))
        });
        EventDispatcher::new(events)
    }

    #[tokio::test]
    async fn frames_round_trip_through_wire_format() {
        let dispatcher = echo_dispatcher();
        let frame = json!({
            "event": "component_event",
            "event_id": "echo_click",
            "data": {"type": "click", "value": "hello"}
        })
        .to_string();

        let reply = process_frame(&dispatcher, TIMEOUT, &frame)
            .await
            .expect("reply");

        // The outbound frame is tagged JSON a browser runtime can switch on.
        let wire: Value = serde_json::from_str(&reply.to_frame()).unwrap();
        assert_eq!(wire["event"], "event_response");
        assert_eq!(wire["event_id"], "echo_click");
        assert_eq!(wire["response"], "hello");
    }

    #[tokio::test]
    async fn malformed_payload_answers_with_error_frame() {
        let dispatcher = echo_dispatcher();
        // type must be a string
        let frame = json!({
            "event": "component_event",
            "event_id": "echo_click",
            "data": {"type": 12}
        })
        .to_string();

        let reply = process_frame(&dispatcher, TIMEOUT, &frame).await;
        match reply {
            Some(ServerMessage::Error { message }) => {
                assert!(message.contains("malformed"));
            }
            other => panic!("expected error frame, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unknown_event_key_sends_nothing() {
        let dispatcher = echo_dispatcher();
        let frame = json!({
            "event": "component_event",
            "event_id": "nobody_home"
        })
        .to_string();

        assert!(process_frame(&dispatcher, TIMEOUT, &frame).await.is_none());
    }

    #[tokio::test]
    async fn panicking_handler_answers_with_error_frame() {
        let events = EventRegistry::new();
        events.register_fn("panic_click", |_| panic!("handler bug"));
        let dispatcher = EventDispatcher::new(events);

        let frame = json!({
            "event": "component_event",
            "event_id": "panic_click"
        })
        .to_string();

        let reply = process_frame(&dispatcher, TIMEOUT, &frame).await;
        match reply {
            Some(ServerMessage::Error { message }) => {
                assert!(message.contains("panic_click"));
            }
            other => panic!("expected error frame, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn non_component_event_frames_rejected() {
        let dispatcher = echo_dispatcher();

        for frame in [
            json!({"event": "state_change", "component_id": "x", "state": 1}).to_string(),
            json!({"event_id": "echo_click"}).to_string(),
            "42".to_string(),
        ] {
            let reply = process_frame(&dispatcher, TIMEOUT, &frame).await;
            assert!(
                matches!(reply, Some(ServerMessage::Error { .. })),
                "frame should be rejected: {}",
                frame
            );
        }
    }
}
