//! HTTP routes driven through the router without a listener.

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use stinger_components::{Button, Container};
    use stinger_server::{App, Page, ServerConfig};
    use tower::ServiceExt;

    fn demo_app() -> App {
        let mut app = App::new("Stinger App", ServerConfig::default());
        app.component_state("counter", json!(0)).unwrap();

        let button = Button::new("increment-btn", "Increment").on_click(app.events(), |_| {
            Ok(Value::Null)
        });
        let main = Container::new("main").child(&button);
        app.set_page(Page::new().component(&main));
        app
    }

    #[tokio::test]
    async fn page_route_serves_rendered_components() {
        let router = demo_app().router();

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();

        assert!(html.contains("<title>Stinger App</title>"));
        assert!(html.contains("id=\"increment-btn\""));
        assert!(html.contains("Stinger.emit('increment-btn_click'"));
        // The client runtime ships inline with every page.
        assert!(html.contains("const Stinger"));
        assert!(html.contains("onStateChange: function"));
    }

    #[tokio::test]
    async fn page_title_includes_page_prefix() {
        let app = demo_app();
        app.title().set_page_title(Some("Counter".to_string()));
        let router = app.router();

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();

        assert!(html.contains("<title>Counter | Stinger App</title>"));
    }

    #[tokio::test]
    async fn health_route_reports_healthy() {
        let router = demo_app().router();

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let health: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(health["status"], "healthy");
        assert_eq!(health["service"], "stinger");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let router = demo_app().router();

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
