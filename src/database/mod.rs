mod memory;

pub use memory::InMemoryStore;

use crate::{
    models::{Task, User},
    utils::error::{AppError, AppResult},
};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::ClientOptions,
    Client, Collection, Database,
};
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::OnceCell;

pub const USERS_COLLECTION: &str = "users";

/// Persistence seam used by the user service
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every user document, in store order
    async fn find_users(&self) -> AppResult<Vec<User>>;

    /// `None` when no user matches, an empty list when the user has no tasks
    async fn find_user_tasks(&self, user_id: ObjectId) -> AppResult<Option<Vec<Task>>>;

    /// Inserts the document and returns the id the store assigned
    async fn insert_user(&self, user: &User) -> AppResult<ObjectId>;

    /// Round trip to the backend, used by the health check
    async fn ping(&self) -> AppResult<()>;
}

/// MongoDB backend. The connection is opened on first use and reused after.
pub struct MongoDB {
    uri: String,
    db_name: String,
    db: OnceCell<Database>,
}

impl MongoDB {
    pub fn new(uri: &str, db_name: &str) -> Self {
        Self {
            uri: uri.to_string(),
            db_name: db_name.to_string(),
            db: OnceCell::new(),
        }
    }

    /// Returns the shared database handle, connecting if needed.
    ///
    /// A failed attempt leaves the cell empty so the next call retries.
    pub async fn connection(&self) -> AppResult<&Database> {
        self.db.get_or_try_init(|| self.connect()).await
    }

    async fn connect(&self) -> AppResult<Database> {
        let mut client_options = ClientOptions::parse(&self.uri).await?;

        client_options.app_name.get_or_insert_with(|| "task-manager-api".to_string());
        client_options.max_pool_size = Some(20);
        client_options.max_idle_time = Some(Duration::from_secs(300));

        // URI values win over these defaults
        client_options.connect_timeout.get_or_insert(Duration::from_secs(5));
        client_options.server_selection_timeout.get_or_insert(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(&self.db_name);

        db.run_command(doc! { "ping": 1 }).await?;
        log::info!("✅ MongoDB connected: database '{}'", self.db_name);

        Ok(db)
    }

    pub async fn users(&self) -> AppResult<Collection<User>> {
        Ok(self.connection().await?.collection(USERS_COLLECTION))
    }
}

#[derive(Debug, Deserialize)]
struct TasksProjection {
    #[serde(default)]
    tasks: Option<Vec<Task>>,
}

#[async_trait]
impl UserStore for MongoDB {
    async fn find_users(&self) -> AppResult<Vec<User>> {
        let cursor = self.users().await?.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_user_tasks(&self, user_id: ObjectId) -> AppResult<Option<Vec<Task>>> {
        let projected = self
            .users()
            .await?
            .clone_with_type::<TasksProjection>()
            .find_one(doc! { "_id": user_id })
            .projection(doc! { "_id": 0, "tasks": 1 })
            .await?;

        Ok(projected.map(|p| p.tasks.unwrap_or_default()))
    }

    async fn insert_user(&self, user: &User) -> AppResult<ObjectId> {
        let result = self.users().await?.insert_one(user).await?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::DatabaseError("Inserted user has no ObjectId".to_string()))
    }

    async fn ping(&self) -> AppResult<()> {
        self.connection().await?.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
