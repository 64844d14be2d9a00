//! Shared helpers for controller and router tests.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
    response::Response,
    Router,
};
use pokedex::server::{model::app::AppState, router};
use pokedex_test_utils::TestContext;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower::ServiceExt;

/// Extension trait for TestContext to build server state from the test database
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;

    /// Full application router backed by the test database
    fn into_router(&self) -> Router;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }

    fn into_router(&self) -> Router {
        router::routes().with_state(self.into_app_state())
    }
}

/// Reads a response body as JSON.
pub async fn body_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

/// Sends one request through the router, with an optional JSON body.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}
