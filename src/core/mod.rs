/*
* Process-level concerns: tracing setup and the HTTP server lifecycle.
*/

pub mod logging;
pub mod server;
