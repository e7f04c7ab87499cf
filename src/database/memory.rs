use super::UserStore;
use crate::{
    models::{Task, User},
    utils::error::AppResult,
};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

/// Process-local store for running without MongoDB. Keeps insertion order.
#[derive(Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn find_users(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn find_user_tasks(&self, user_id: ObjectId) -> AppResult<Option<Vec<Task>>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.id == Some(user_id))
            .map(|u| u.tasks.clone().unwrap_or_default()))
    }

    async fn insert_user(&self, user: &User) -> AppResult<ObjectId> {
        let id = user.id.unwrap_or_else(ObjectId::new);
        let mut stored = user.clone();
        stored.id = Some(id);

        self.users.write().await.push(stored);
        Ok(id)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
