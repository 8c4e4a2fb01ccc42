//! tests/common/mod.rs
//! A shared test helper to spawn the Axum app on an ephemeral port.

#![allow(dead_code)]

use axum::{serve, Router};
use tokio::net::TcpListener;

use users_service::{create_app, AppState, EnvironmentVariables};

/// Configuration used by most tests: defaults with a small body limit.
pub fn test_environment() -> EnvironmentVariables {
    EnvironmentVariables {
        environment: "test".into(),
        max_request_body_size: 1024,
        ..EnvironmentVariables::default()
    }
}

/// Spawns the app for `env` on a random unused port and returns its base URL.
pub async fn spawn_app_with(env: EnvironmentVariables) -> String {
    let state: AppState = AppState::new(env).expect("Failed to build app state");
    spawn_state(state).await
}

/// Spawns the app over an already built state, e.g. one with a custom route table.
pub async fn spawn_state(state: AppState) -> String {
    let app: Router = create_app(state);

    let listener: TcpListener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr: std::net::SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        serve(listener, app).await.expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}

pub async fn spawn_app() -> String {
    spawn_app_with(test_environment()).await
}
