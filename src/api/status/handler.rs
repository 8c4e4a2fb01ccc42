// Service status handler

use serde_json::json;
use axum::{http::StatusCode, extract::State};

use crate::config::state::AppState;
use crate::utils::response_handler::HandlerResponse;
use tracing::{instrument, info};

/// Returns API status, version, the size of the route table and the user count
#[instrument(skip(state))]
pub async fn status_handler(State(state): State<AppState>) -> HandlerResponse {
    info!("Status endpoint called");
    let users: usize = state.users.count().await;

    HandlerResponse::new(StatusCode::OK)
        .data(json!({
            "version": env!("CARGO_PKG_VERSION"),
            "status": "healthy",
            "environment": state.environment.environment,
            "routes": state.routes.len(),
            "users": users,
        }))
        .message("API is running successfully")
}
