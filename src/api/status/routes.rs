// Status route definitions

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

/// Native axum routes served ahead of the route table
pub fn status_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(handler::status_handler))
}
