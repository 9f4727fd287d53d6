// ABOUTME: Route definitions for the greeter HTTP API.
// ABOUTME: Assembles the enabled routes into a single Axum Router with shared state.

use axum::Router;
use axum::routing::{any, get};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::SharedState;
use crate::config::ServiceOptions;

/// Build the router for the given variant. /healthz is only registered when enabled.
pub fn create_router(state: SharedState, options: ServiceOptions) -> Router {
    let mut router = Router::new().route("/hello", get(api::hello::hello));
    if options.healthz {
        router = router.route("/healthz", any(api::health::healthz));
    }
    router.layer(TraceLayer::new_for_http()).with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::AppState;
    use axum::body::Body;
    use greeter_core::CharReverser;
    use greeter_core::testing::FailingReverser;
    use http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn plain_router() -> Router {
        create_router(Arc::new(AppState::default()), ServiceOptions::default())
    }

    fn reversing_router() -> Router {
        let state = AppState::new(Some(Arc::new(CharReverser)));
        create_router(
            Arc::new(state),
            ServiceOptions {
                reverse: true,
                healthz: true,
            },
        )
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, String) {
        let resp = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn hello_greets_name() {
        let (status, body) = fetch(plain_router(), "/hello?name=Alice").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hello Alice!\n");
    }

    #[tokio::test]
    async fn hello_without_name_uses_default() {
        let (status, body) = fetch(plain_router(), "/hello").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hello World!!\n");
    }

    #[tokio::test]
    async fn hello_with_empty_name_uses_default() {
        let (status, body) = fetch(plain_router(), "/hello?name=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hello World!!\n");
    }

    #[tokio::test]
    async fn hello_decodes_percent_escapes() {
        let (_, body) = fetch(plain_router(), "/hello?name=J%C3%BCrgen+K").await;
        assert_eq!(body, "Hello Jürgen K!\n");
    }

    #[tokio::test]
    async fn hello_is_plain_text() {
        let resp = plain_router()
            .oneshot(Request::get("/hello?name=x").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let content_type = resp.headers()[http::header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"), "{}", content_type);
    }

    #[tokio::test]
    async fn healthz_returns_literal_body() {
        let (status, body) = fetch(plain_router(), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"status": "OK"}"#);
    }

    #[tokio::test]
    async fn healthz_ignores_method_and_body() {
        let resp = plain_router()
            .oneshot(
                Request::post("/healthz?verbose=1")
                    .body(Body::from("ignored"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"status": "OK"}"#);
    }

    #[tokio::test]
    async fn healthz_absent_when_disabled() {
        let app = create_router(
            Arc::new(AppState::default()),
            ServiceOptions {
                reverse: false,
                healthz: false,
            },
        );
        let (status, _) = fetch(app, "/healthz").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn reversing_variant_reverses_name() {
        let (status, body) = fetch(reversing_router(), "/hello?name=abc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hello cba!\n");
    }

    #[tokio::test]
    async fn reversing_variant_reverses_default() {
        let (_, body) = fetch(reversing_router(), "/hello").await;
        assert_eq!(body, "Hello !dlroW!\n");
    }

    #[tokio::test]
    async fn reverser_failure_is_500_with_error_text() {
        let reverser = Arc::new(FailingReverser::unavailable());
        let state = Arc::new(AppState::new(Some(reverser.clone())));
        let app = create_router(state, ServiceOptions::default());

        let (status, body) = fetch(app.clone(), "/hello?name=abc").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "reverser unavailable: stub failure");

        // The router keeps serving after a failed delegate call.
        let (status, body) = fetch(app.clone(), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"status": "OK"}"#);

        let (status, _) = fetch(app, "/hello").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reverser.calls(), 2);
    }
}
