// Application state built once during startup and shared through axum State

use std::sync::Arc;

use anyhow::Context;

use crate::api::users::{user_routes, UserStore, USERS_PREFIX};
use crate::config::environment::EnvironmentVariables;
use crate::routing::HandlerTable;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    /// Read-only after construction
    pub routes: Arc<HandlerTable>,
    pub users: UserStore,
}

impl AppState {
    /// Builds the state, including the route table, from a loaded configuration
    pub fn new(environment: EnvironmentVariables) -> anyhow::Result<Self> {
        let users: UserStore = UserStore::new();

        let routes: HandlerTable = HandlerTable::new()
            .with_options(environment.match_options())
            .nest(USERS_PREFIX, user_routes(users.clone())?)
            .context("Failed to build users route table")?;

        tracing::info!("Route table ready with {} entries", routes.len());

        Ok(Self {
            environment: Arc::new(environment),
            routes: Arc::new(routes),
            users,
        })
    }

    /// Loads the environment and builds the state
    pub fn from_env() -> anyhow::Result<Self> {
        let environment: EnvironmentVariables = EnvironmentVariables::load()?;
        Self::new(environment)
    }
}
