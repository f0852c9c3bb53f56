//! Counter demo.
//!
//! Demonstrates:
//! 1. Creating and registering component state
//! 2. Updating state from event handlers, with changes pushed to the UI
//! 3. Sharing one state between several handlers
//! 4. Declarative text bindings
//! 5. Container layout and custom styling

use anyhow::Result;
use serde_json::{json, Value};
use std::sync::Arc;
use stinger_components::{Button, Container, TextInput};
use stinger_server::{App, Page, ServerConfig};
use stinger_state::{BindingSet, ComponentState};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn counter_delta(counter: &ComponentState, increment: &ComponentState, sign: i64) -> Result<Value> {
    let amount = increment.value().as_i64().unwrap_or(1);
    counter.update(|v| json!(v.as_i64().unwrap_or(0) + sign * amount))?;
    Ok(counter.value())
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut app = App::new("Stinger Counter Example", ServerConfig::default());

    // Shared states
    let counter = Arc::new(app.component_state("counter", json!(0))?);
    let increment = Arc::new(app.component_state("increment", json!(1))?);

    // Bind the counter value into the header span
    let mut bindings = BindingSet::new();
    bindings.bind_text("counter", "counter-value");

    let increment_button = Button::new("increment-btn", "Increment")
        .style("background-color", "#4CAF50")
        .style("color", "#ffffff")
        .style("border-radius", "8px")
        .style("font-weight", "bold")
        .bindings(&bindings)
        .on_click(app.events(), {
            let counter = Arc::clone(&counter);
            let increment = Arc::clone(&increment);
            move |_| counter_delta(&counter, &increment, 1)
        });

    let decrement_button = Button::new("decrement-btn", "Decrement")
        .style("background-color", "#f44336")
        .style("color", "#ffffff")
        .style("border-radius", "8px")
        .style("font-weight", "bold")
        .on_click(app.events(), {
            let counter = Arc::clone(&counter);
            let increment = Arc::clone(&increment);
            move |_| counter_delta(&counter, &increment, -1)
        });

    let reset_button = Button::new("reset-btn", "Reset")
        .style("background-color", "#9e9e9e")
        .style("color", "#ffffff")
        .style("border-radius", "8px")
        .style("font-weight", "bold")
        .on_click(app.events(), {
            let counter = Arc::clone(&counter);
            move |_| {
                counter.set(json!(0))?;
                Ok(counter.value())
            }
        });

    let increment_input = TextInput::new("increment-input")
        .placeholder("Increment amount")
        .value("1")
        .style("text-align", "center")
        .style("border-radius", "8px")
        .style("border", "2px solid #4CAF50")
        .on_change(app.events(), {
            let increment = Arc::clone(&increment);
            move |payload| {
                let amount = payload
                    .value
                    .as_ref()
                    .and_then(Value::as_str)
                    .and_then(|s| s.parse::<i64>().ok())
                    .unwrap_or(1);
                increment.set(json!(amount))?;
                Ok(increment.value())
            }
        });

    let header = Container::new("header")
        .child_html("<h1>Stinger Counter Example</h1>")
        .child_html(format!(
            "<h2>Counter: <span id=\"counter-value\">{}</span></h2>",
            counter.value()
        ))
        .flex_direction("column")
        .align_items("center")
        .margin("0 0 2rem 0");

    let input_section = Container::new("input-section")
        .child(&increment_input)
        .justify_content("center")
        .margin("0 0 1rem 0");

    let buttons_section = Container::new("buttons-section")
        .child(&increment_button)
        .child(&decrement_button)
        .child(&reset_button)
        .justify_content("center")
        .gap("1rem");

    let main_section = Container::new("main")
        .child(&header)
        .child(&input_section)
        .child(&buttons_section)
        .flex_direction("column")
        .max_width("800px")
        .margin("0 auto")
        .padding("2rem")
        .background_color("#f5f5f5")
        .border_radius("12px")
        .style("box-shadow", "0 4px 6px rgba(0, 0, 0, 0.1)");

    app.set_page(Page::new().component(&main_section));
    app.title().set_page_title(Some("Counter".to_string()));

    info!("Counter demo on http://127.0.0.1:8000");
    app.run().await?;
    Ok(())
}
