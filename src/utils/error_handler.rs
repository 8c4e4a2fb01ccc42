// Global error handling for HTTP middleware layers

use axum::{
    BoxError,
    http::StatusCode,
    response::IntoResponse,
};
use std::error::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
// Axum uses http_body_util for length-limiting
use http_body_util::LengthLimitError;
use tracing::warn;

/// Maps errors raised by the tower layers to HTTP status codes
pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    warn!("Layer error: {}", err);
    status_for_error(&*err)
}

/// 413 for oversized bodies, 408 for timeouts, 500 for anything else
pub fn status_for_error(err: &(dyn Error + 'static)) -> StatusCode {
    if err.is::<LengthLimitError>() || find_cause::<LengthLimitError>(err).is_some() {
        return StatusCode::PAYLOAD_TOO_LARGE;
    }

    if err.is::<Elapsed>() {
        return StatusCode::REQUEST_TIMEOUT;
    }

    StatusCode::INTERNAL_SERVER_ERROR
}

/// Helper function to find specific error type in error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&(dyn Error + 'static)> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_timeouts_to_408() {
        let err: BoxError = Box::new(Elapsed::new());
        assert_eq!(status_for_error(&*err), StatusCode::REQUEST_TIMEOUT);
    }

    #[test]
    fn maps_everything_else_to_500() {
        let err: BoxError = "boom".into();
        assert_eq!(status_for_error(&*err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
