// Start of file: src/main.rs

use users_service::{AppState, core::{logging, server}};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    // Route table is built here, once, and handed to the server
    let state: AppState = AppState::from_env()?;

    server::run(state).await
}

// End of file: src/main.rs
