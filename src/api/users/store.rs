// In-memory user collection shared by the users handlers

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::{NewUser, User, UserChanges};

#[derive(Debug, Default)]
struct Records {
    next_seq: u64,
    // seq keeps list output in creation order
    by_id: HashMap<Uuid, (u64, User)>,
}

/// Cloneable handle; clones share the same collection
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    records: Arc<RwLock<Records>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All users in creation order
    pub async fn list(&self) -> Vec<User> {
        let records: tokio::sync::RwLockReadGuard<'_, Records> = self.records.read().await;

        let mut users: Vec<&(u64, User)> = records.by_id.values().collect();
        users.sort_by_key(|(seq, _)| *seq);
        users.into_iter().map(|(_, user)| user.clone()).collect()
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.by_id.len()
    }

    pub async fn get(&self, id: &Uuid) -> Option<User> {
        let records: tokio::sync::RwLockReadGuard<'_, Records> = self.records.read().await;
        records.by_id.get(id).map(|(_, user)| user.clone())
    }

    pub async fn insert(&self, new_user: NewUser) -> User {
        let now: String = timestamp();
        let user: User = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            created_at: now.clone(),
            updated_at: now,
        };

        let mut records: tokio::sync::RwLockWriteGuard<'_, Records> = self.records.write().await;
        let seq: u64 = records.next_seq;
        records.next_seq += 1;
        records.by_id.insert(user.id, (seq, user.clone()));

        user
    }

    /// Applies `changes` and bumps `updated_at`; `None` if the id is unknown
    pub async fn update(&self, id: &Uuid, changes: UserChanges) -> Option<User> {
        let mut records: tokio::sync::RwLockWriteGuard<'_, Records> = self.records.write().await;
        let (_, user) = records.by_id.get_mut(id)?;

        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        user.updated_at = timestamp();

        Some(user.clone())
    }

    pub async fn remove(&self, id: &Uuid) -> Option<User> {
        let mut records: tokio::sync::RwLockWriteGuard<'_, Records> = self.records.write().await;
        records.by_id.remove(id).map(|(_, user)| user)
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
