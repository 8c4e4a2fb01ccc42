// Application server configuration and setup

use std::time::Duration;
use axum::{
    Router,
    middleware::from_fn,
    extract::DefaultBodyLimit,
    error_handling::HandleErrorLayer,
    serve,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::Result;
use tracing::{error, info};

use crate::config::{environment::EnvironmentVariables, state::AppState};
use crate::api::status::status_routes;
use crate::routing::dispatch;
use crate::utils::{
    error_handler::handle_global_error,
    response_handler::response_wrapper
};

/// Creates and configures the application router with all middleware layers.
/// Requests no native route serves go through the route table.
pub fn create_app(state: AppState) -> Router {
    let env: &EnvironmentVariables = &state.environment;
    let timeout: Duration = Duration::from_secs(env.default_timeout_seconds);
    let body_limit: usize = env.max_request_body_size;

    Router::new()
        .merge(status_routes())
        .fallback(dispatch)
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(response_wrapper))
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(timeout))
                .layer(DefaultBodyLimit::max(body_limit))
        )
        .with_state(state)
}

/// Sets up the TCP listener from environment or binds to new address
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = format!("{}:{}", env.host, env.port);
            TcpListener::bind(&addr).await?
        }
    };

    Ok(listener)
}

/// Serves the app until a shutdown signal arrives
pub async fn run(state: AppState) -> Result<()> {
    let listener: TcpListener = setup_listener(&state.environment).await?;
    info!(
        "Server listening on: {}://{}",
        state.environment.protocol,
        listener.local_addr()?
    );

    serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install TERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Shutting down via Ctrl+C"),
        _ = terminate => info!("Shutting down via TERM signal"),
    }
}
