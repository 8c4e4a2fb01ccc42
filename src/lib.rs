// Library root for the users service: route table, handlers and server setup

pub mod api;
pub mod config;
pub mod core;
pub mod routing;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::create_app;
pub use crate::routing::{RouteHandler, RouteTable};
