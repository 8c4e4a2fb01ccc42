// Request-dispatch entry point backed by the route table

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
};
use serde_json::json;
use tracing::{debug, instrument, warn};

use crate::config::state::AppState;
use crate::routing::handler::{RouteRequest, SharedHandler};
use crate::routing::pattern::ParamError;
use crate::routing::table::RouteMatch;
use crate::utils::response_handler::HandlerResponse;

/// Consults the route table for requests no native axum route serves.
/// Unmatched requests get the host's not-found response, and a matched
/// path whose placeholders fail to percent-decode gets 400.
#[instrument(name = "dispatch", skip_all, fields(method = %method, path = %uri.path()))]
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResponse {
    let path: String = uri.path().to_string();

    let found: Option<RouteMatch<'_, SharedHandler>> = match state.routes.find(&method, &path) {
        Ok(found) => found,
        Err(e) => return undecodable_param(e),
    };

    let Some(RouteMatch { entry, params }) = found else {
        let allowed: Vec<Method> = state.routes.allowed_methods(&path);
        debug!(?allowed, "No route entry matched");

        return HandlerResponse::new(StatusCode::NOT_FOUND)
            .data(json!({ "method": method.as_str(), "path": path }))
            .message(format!("Cannot {} {}", method, path));
    };

    let handler: &SharedHandler = &entry.handler;
    debug!(handler = handler.name(), pattern = %entry.pattern, "Route entry matched");

    handler
        .handle(RouteRequest {
            method,
            uri,
            headers,
            params,
            body,
        })
        .await
}

fn undecodable_param(e: ParamError) -> HandlerResponse {
    warn!("Rejected request path: {}", e);

    HandlerResponse::new(StatusCode::BAD_REQUEST)
        .data(json!({
            "error": "invalid_path_param",
            "param": e.name,
            "value": e.value,
        }))
        .message(format!("Failed to decode param '{}'", e.value))
}
