// Handler interface invoked by the route table

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Bytes,
    http::{HeaderMap, Method, Uri},
};
use serde::de::DeserializeOwned;

use crate::routing::params::PathParams;
use crate::routing::table::RouteTable;
use crate::utils::response_handler::HandlerResponse;

/// Request data handed to a matched handler
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub params: PathParams,
    pub body: Bytes,
}

impl RouteRequest {
    /// Value bound to the `:name` placeholder of the matched pattern
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Deserializes the request body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }
}

/// One unit of work the route table can dispatch to
#[async_trait]
pub trait RouteHandler: Debug + Send + Sync {
    /// Stable name used in logs, e.g. `getUser`
    fn name(&self) -> &'static str;

    async fn handle(&self, request: RouteRequest) -> HandlerResponse;
}

pub type SharedHandler = Arc<dyn RouteHandler>;

/// The table type held by the application state
pub type HandlerTable = RouteTable<SharedHandler>;
