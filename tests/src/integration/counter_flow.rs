//! End-to-end counter flow: a browser click frame dispatches a handler
//! that mutates component state, which pushes a `state_change` to every
//! connection while the `event_response` goes back on the originating one.

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::time::Duration;
    use stinger_events::{EventDispatcher, EventRegistry};
    use stinger_protocol::{PushBus, ServerMessage};
    use stinger_server::ws::process_frame;
    use stinger_state::ComponentState;
    use tokio::time::timeout;

    const TIMEOUT: Duration = Duration::from_secs(2);

    struct Fixture {
        bus: PushBus,
        counter: Arc<ComponentState>,
        dispatcher: EventDispatcher,
    }

    /// Counter wired the way the demo app wires it: a `counter` state and
    /// an increment handler registered under `increment-btn_click`.
    fn counter_fixture() -> Fixture {
        let bus = PushBus::new();
        let counter = Arc::new(ComponentState::new("counter", json!(0), bus.clone()));
        let events = EventRegistry::new();

        let handler_counter = Arc::clone(&counter);
        events.register_fn(
            EventRegistry::event_key("increment-btn", "click"),
            move |_| {
                handler_counter.update(|v| json!(v.as_i64().unwrap_or(0) + 1))?;
                Ok(handler_counter.value())
            },
        );

        Fixture {
            bus,
            counter,
            dispatcher: EventDispatcher::new(events),
        }
    }

    fn click_frame(event_id: &str) -> String {
        json!({
            "event": "component_event",
            "event_id": event_id,
            "data": {"type": "click"}
        })
        .to_string()
    }

    #[tokio::test]
    async fn click_produces_event_response_and_state_change_push() {
        let fixture = counter_fixture();
        let mut pushes = fixture.bus.subscribe();

        let reply = process_frame(
            &fixture.dispatcher,
            TIMEOUT,
            &click_frame("increment-btn_click"),
        )
        .await;

        // Response to the originating connection carries the handler result.
        match reply {
            Some(ServerMessage::EventResponse { event_id, response }) => {
                assert_eq!(event_id, "increment-btn_click");
                assert_eq!(response, json!(1));
            }
            other => panic!("expected event_response, got {:?}", other),
        }

        // The state change is a separate broadcast frame.
        let push = timeout(TIMEOUT, pushes.recv())
            .await
            .expect("push within timeout")
            .expect("bus open");
        assert_eq!(push, ServerMessage::state_change("counter", json!(1)));

        assert_eq!(fixture.counter.value(), json!(1));
    }

    #[tokio::test]
    async fn repeated_clicks_accumulate() {
        let fixture = counter_fixture();
        let frame = click_frame("increment-btn_click");

        for _ in 0..3 {
            process_frame(&fixture.dispatcher, TIMEOUT, &frame).await;
        }

        assert_eq!(fixture.counter.value(), json!(3));
    }

    #[tokio::test]
    async fn scalar_payload_reaches_handler_as_value() {
        let events = EventRegistry::new();
        events.register_fn("amount-input_change", |payload| {
            // Scalar data normalizes into the payload's value field.
            Ok(payload.value.unwrap_or(Value::Null))
        });
        let dispatcher = EventDispatcher::new(events);

        let frame = json!({
            "event": "component_event",
            "event_id": "amount-input_change",
            "data": 5
        })
        .to_string();

        let reply = process_frame(&dispatcher, TIMEOUT, &frame).await;
        match reply {
            Some(ServerMessage::EventResponse { response, .. }) => {
                assert_eq!(response, json!(5));
            }
            other => panic!("expected event_response, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn handler_failure_never_poisons_later_dispatch() {
        let fixture = counter_fixture();
        fixture
            .dispatcher
            .registry()
            .register_fn("broken-btn_click", |_| Err(anyhow::anyhow!("boom")));

        let failure = process_frame(
            &fixture.dispatcher,
            TIMEOUT,
            &click_frame("broken-btn_click"),
        )
        .await;
        assert!(matches!(failure, Some(ServerMessage::Error { .. })));

        // The same dispatcher still serves healthy handlers.
        let reply = process_frame(
            &fixture.dispatcher,
            TIMEOUT,
            &click_frame("increment-btn_click"),
        )
        .await;
        assert!(matches!(reply, Some(ServerMessage::EventResponse { .. })));
        assert_eq!(fixture.counter.value(), json!(1));
    }
}
