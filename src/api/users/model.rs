// User resource payloads

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Body of `POST /users`
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Body of `PUT /users/:userId`; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}
