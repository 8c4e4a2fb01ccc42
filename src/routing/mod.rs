/*
* Ordered route table: patterns with `:name` placeholders, first match wins,
* and the dispatch entry point the server mounts as its fallback.
*/

pub mod dispatch;
pub mod handler;
pub mod params;
pub mod pattern;
pub mod table;

pub use dispatch::dispatch;
pub use handler::{HandlerTable, RouteHandler, RouteRequest, SharedHandler};
pub use params::PathParams;
pub use pattern::{MatchOptions, ParamError, PathPattern, RouteError};
pub use table::{RouteEntry, RouteMatch, RouteTable};
