//! tests/global_errors/408.rs
//! Ensures that a route handler outliving the configured timeout yields 408.

#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode as HttpStatus;
use reqwest::StatusCode;
use serde_json::Value;
use tokio::time::timeout;

use users_service::routing::{HandlerTable, RouteHandler, RouteRequest};
use users_service::utils::response_handler::HandlerResponse;
use users_service::{AppState, EnvironmentVariables};

/// Sleeps well past the one second server timeout before answering
#[derive(Debug)]
struct SlowHandler;

#[async_trait]
impl RouteHandler for SlowHandler {
    fn name(&self) -> &'static str {
        "slow"
    }

    async fn handle(&self, _request: RouteRequest) -> HandlerResponse {
        tokio::time::sleep(Duration::from_secs(3)).await;
        HandlerResponse::new(HttpStatus::OK)
    }
}

#[tokio::test]
async fn returns_408_when_request_times_out() {
    let env: EnvironmentVariables = EnvironmentVariables {
        default_timeout_seconds: 1,
        ..common::test_environment()
    };

    let mut state: AppState = AppState::new(env).expect("Failed to build app state");
    let routes: HandlerTable = HandlerTable::new()
        .get("/slow", Arc::new(SlowHandler))
        .expect("Failed to register slow route");
    state.routes = Arc::new(routes);

    let base_url: String = common::spawn_state(state).await;

    let resp_result: Result<Result<reqwest::Response, reqwest::Error>, tokio::time::error::Elapsed> = timeout(
        Duration::from_secs(5), // client-side timeout duration
        async {
            reqwest::Client::new()
                .get(format!("{}/slow", base_url))
                .send()
                .await
        },
    )
    .await;

    assert!(resp_result.is_ok(), "Client timed out waiting for server.");

    let resp: reqwest::Response = resp_result.unwrap().expect("Request failed unexpectedly.");
    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);

    let body: String = resp.text().await.unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "REQUEST_TIMEOUT");
    assert_eq!(json["code"], 408);
}
