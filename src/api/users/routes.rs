// Users route table

use std::sync::Arc;

use crate::routing::{HandlerTable, RouteError};
use super::handler::{CreateUser, DeleteUser, GetUser, GetUsers, UpdateUser};
use super::store::UserStore;

/// Mount point of the users table
pub const USERS_PREFIX: &str = "/users";

/// Registers the users endpoints relative to their mount point
pub fn user_routes(store: UserStore) -> Result<HandlerTable, RouteError> {
    HandlerTable::new()
        .get("/", Arc::new(GetUsers { store: store.clone() }))? // /users
        .get("/:userId", Arc::new(GetUser { store: store.clone() }))? // /users/:userId
        .post("/", Arc::new(CreateUser { store: store.clone() }))? // /users
        .put("/:userId", Arc::new(UpdateUser { store: store.clone() }))? // /users/:userId
        .delete("/:userId", Arc::new(DeleteUser { store })) // /users/:userId
}
