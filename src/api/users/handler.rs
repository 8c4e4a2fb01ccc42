// User resource handlers dispatched by the users route table

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::model::{NewUser, User, UserChanges};
use super::store::UserStore;
use crate::routing::{RouteHandler, RouteRequest};
use crate::utils::response_handler::HandlerResponse;

/// Placeholder bound by the `/:userId` routes
pub const USER_ID_PARAM: &str = "userId";

/// Lists all users
#[derive(Debug, Clone)]
pub struct GetUsers {
    pub store: UserStore,
}

#[async_trait]
impl RouteHandler for GetUsers {
    fn name(&self) -> &'static str {
        "getUsers"
    }

    #[instrument(name = "get_users", skip_all)]
    async fn handle(&self, _request: RouteRequest) -> HandlerResponse {
        let users: Vec<User> = self.store.list().await;
        info!("Retrieved {} users", users.len());

        HandlerResponse::new(StatusCode::OK)
            .data(json!({ "users": users, "count": users.len() }))
            .message("Users retrieved successfully")
    }
}

/// Fetches one user by id
#[derive(Debug, Clone)]
pub struct GetUser {
    pub store: UserStore,
}

#[async_trait]
impl RouteHandler for GetUser {
    fn name(&self) -> &'static str {
        "getUser"
    }

    #[instrument(name = "get_user", skip_all, fields(user_id = request.param(USER_ID_PARAM)))]
    async fn handle(&self, request: RouteRequest) -> HandlerResponse {
        let user: Option<User> = match user_id(&request) {
            Some(id) => self.store.get(&id).await,
            None => None,
        };

        match user {
            Some(user) => HandlerResponse::new(StatusCode::OK)
                .data(json!(user))
                .message("User retrieved successfully"),
            None => user_not_found(&request),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub store: UserStore,
}

#[async_trait]
impl RouteHandler for CreateUser {
    fn name(&self) -> &'static str {
        "createUser"
    }

    #[instrument(name = "create_user", skip_all)]
    async fn handle(&self, request: RouteRequest) -> HandlerResponse {
        let new_user: NewUser = match request.json::<NewUser>() {
            Ok(new_user) => new_user,
            Err(e) => return malformed_body(e),
        };

        let user: User = self.store.insert(new_user).await;
        info!("Created user {}", user.id);

        HandlerResponse::new(StatusCode::CREATED)
            .data(json!(user))
            .message("User created successfully")
    }
}

#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub store: UserStore,
}

#[async_trait]
impl RouteHandler for UpdateUser {
    fn name(&self) -> &'static str {
        "updateUser"
    }

    #[instrument(name = "update_user", skip_all, fields(user_id = request.param(USER_ID_PARAM)))]
    async fn handle(&self, request: RouteRequest) -> HandlerResponse {
        let Some(id) = user_id(&request) else {
            return user_not_found(&request);
        };

        let changes: UserChanges = match request.json::<UserChanges>() {
            Ok(changes) => changes,
            Err(e) => return malformed_body(e),
        };

        match self.store.update(&id, changes).await {
            Some(user) => {
                info!("Updated user {}", user.id);
                HandlerResponse::new(StatusCode::OK)
                    .data(json!(user))
                    .message("User updated successfully")
            }
            None => user_not_found(&request),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DeleteUser {
    pub store: UserStore,
}

#[async_trait]
impl RouteHandler for DeleteUser {
    fn name(&self) -> &'static str {
        "deleteUser"
    }

    #[instrument(name = "delete_user", skip_all, fields(user_id = request.param(USER_ID_PARAM)))]
    async fn handle(&self, request: RouteRequest) -> HandlerResponse {
        let removed: Option<User> = match user_id(&request) {
            Some(id) => self.store.remove(&id).await,
            None => None,
        };

        match removed {
            Some(user) => {
                info!("Deleted user {}", user.id);
                HandlerResponse::new(StatusCode::OK)
                    .data(json!(user))
                    .message("User deleted successfully")
            }
            None => user_not_found(&request),
        }
    }
}

/// Ids that are not UUIDs cannot name a stored user
fn user_id(request: &RouteRequest) -> Option<Uuid> {
    request
        .param(USER_ID_PARAM)
        .and_then(|raw: &str| Uuid::parse_str(raw).ok())
}

fn user_not_found(request: &RouteRequest) -> HandlerResponse {
    HandlerResponse::new(StatusCode::NOT_FOUND)
        .data(json!({
            "error": "user_not_found",
            "user_id": request.param(USER_ID_PARAM),
        }))
        .message("User not found")
}

fn malformed_body(e: serde_json::Error) -> HandlerResponse {
    warn!("Rejected request body: {}", e);

    HandlerResponse::new(StatusCode::BAD_REQUEST)
        .data(json!({
            "error": "invalid_body",
            "details": e.to_string(),
        }))
        .message("Request body is not valid for this resource")
}
