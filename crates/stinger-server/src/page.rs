//! Server-rendered page shell and the embedded client runtime.

use stinger_components::Component;

/// The browser-side runtime, embedded into every rendered page.
///
/// Exposes two globals used by generated component markup:
/// - `Stinger.emit(eventId, data)` sends a `component_event` frame
/// - `Stinger.onStateChange(key, fn)` registers a state listener keyed by
///   `component_id`
///
/// Frames sent before the socket opens are queued and flushed on open, and
/// the socket reconnects with a fixed backoff after close.
pub const CLIENT_RUNTIME: &str = r#"const Stinger = (function () {
    const stateListeners = {};
    const pending = [];
    let socket = null;

    function handleFrame(msg) {
        switch (msg.event) {
            case 'connection_response':
                console.log('[stinger] connected:', msg.status);
                break;
            case 'state_change':
                (stateListeners[msg.component_id] || []).forEach(function (fn) {
                    fn(msg.state);
                });
                break;
            case 'event_response':
                console.debug('[stinger] event response:', msg.event_id, msg.response);
                break;
            case 'title_update':
                document.title = msg.page_title
                    ? msg.page_title + msg.separator + msg.base_title
                    : msg.base_title;
                break;
            case 'error':
                console.error('[stinger]', msg.message);
                break;
        }
    }

    function connect() {
        const proto = location.protocol === 'https:' ? 'wss:' : 'ws:';
        socket = new WebSocket(proto + '//' + location.host + '/ws');
        socket.onopen = function () {
            while (pending.length > 0) {
                socket.send(pending.shift());
            }
        };
        socket.onmessage = function (evt) {
            handleFrame(JSON.parse(evt.data));
        };
        socket.onclose = function () {
            setTimeout(connect, 1000);
        };
    }
    connect();

    return {
        emit: function (eventId, data) {
            const frame = JSON.stringify({
                event: 'component_event',
                event_id: eventId,
                data: data
            });
            if (socket && socket.readyState === WebSocket.OPEN) {
                socket.send(frame);
            } else {
                pending.push(frame);
            }
        },
        onStateChange: function (key, fn) {
            (stateListeners[key] = stateListeners[key] || []).push(fn);
        }
    };
})();
"#;

/// A page assembled from rendered components.
///
/// Components render once, at assembly time. Later state changes reach the
/// browser through `state_change` frames, not re-rendering.
#[derive(Debug, Clone, Default)]
pub struct Page {
    fragments: Vec<String>,
}

impl Page {
    /// An empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component, rendering it immediately.
    #[must_use]
    pub fn component(mut self, component: &impl Component) -> Self {
        self.fragments.push(component.render());
        self
    }

    /// Append raw HTML.
    #[must_use]
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.fragments.push(html.into());
        self
    }

    /// The page body: fragments joined in insertion order.
    pub fn body(&self) -> String {
        self.fragments.join("\n")
    }

    /// Render the complete HTML document with the client runtime embedded.
    pub fn render_document(&self, title: &str) -> String {
        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{title}</title>\n\
             <script>\n{runtime}</script>\n\
             </head>\n\
             <body>\n{body}\n</body>\n\
             </html>\n",
            title = title,
            runtime = CLIENT_RUNTIME,
            body = self.body(),
        )
    }
}
