/*
* Users resource: the route table and the handlers it dispatches to.
*/

pub mod handler;
pub mod model;
pub mod routes;
pub mod store;

pub use routes::{user_routes, USERS_PREFIX};
pub use store::UserStore;
