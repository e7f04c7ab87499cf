use crate::{
    database::UserStore,
    models::{CreateUserInput, Task, User},
    utils::error::{AppError, AppResult},
    validators::{validate_user_id, validate_user_on_create},
};
use std::sync::Arc;

pub const USER_NOT_FOUND: &str = "The user with the given id does not exist";

/// Validation, hashing and persistence for users
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    hash_cost: u32,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, hash_cost: u32) -> Self {
        Self { store, hash_cost }
    }

    pub async fn create_user(&self, input: Option<CreateUserInput>) -> AppResult<User> {
        validate_user_on_create(input.as_ref())?;

        let CreateUserInput { name, email, password } = input.unwrap_or_default();
        let password = self.hash_password(password.unwrap_or_default()).await?;

        let mut user = User {
            id: None,
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            password,
            tasks: None,
        };

        let id = self.store.insert_user(&user).await?;
        user.id = Some(id);

        log::info!("📝 User created: {}", id.to_hex());
        Ok(user)
    }

    pub async fn get_list_of_users(&self) -> AppResult<Vec<User>> {
        let users = self.store.find_users().await?;
        log::debug!("Fetched {} users", users.len());
        Ok(users)
    }

    pub async fn get_tasks_of_user(&self, user_id: &str) -> AppResult<Vec<Task>> {
        let object_id = validate_user_id(user_id)?;

        self.store
            .find_user_tasks(object_id)
            .await?
            .ok_or_else(|| AppError::BadRequest(USER_NOT_FOUND.to_string()))
    }

    /// Whether the backing store answers
    pub async fn check_store(&self) -> AppResult<()> {
        self.store.ping().await
    }

    async fn hash_password(&self, password: String) -> AppResult<String> {
        let cost = self.hash_cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{testing::UnavailableStore, InMemoryStore};
    use crate::validators::{MISSING_EMAIL, MISSING_USER_INFO};
    use mongodb::bson::oid::ObjectId;

    const TEST_HASH_COST: u32 = 4;

    fn service_with(store: Arc<InMemoryStore>) -> UserService {
        UserService::new(store, TEST_HASH_COST)
    }

    fn full_input() -> CreateUserInput {
        CreateUserInput {
            name: Some("prueba".into()),
            email: Some("prueba@gmail.com".into()),
            password: Some("admin".into()),
        }
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let store = Arc::new(InMemoryStore::new());
        let service = service_with(store.clone());

        let created = service.create_user(Some(full_input())).await.unwrap();
        assert!(created.id.is_some());
        assert_eq!(created.name, "prueba");
        assert_eq!(created.email, "prueba@gmail.com");
        assert_ne!(created.password, "admin");

        let stored = store.find_users().await.unwrap();
        assert_eq!(stored, vec![created]);
        assert!(bcrypt::verify("admin", &stored[0].password).unwrap());
    }

    #[tokio::test]
    async fn test_whitespace_password_is_accepted() {
        let store = Arc::new(InMemoryStore::new());
        let service = service_with(store.clone());

        let mut input = full_input();
        input.password = Some(" ".into());
        let created = service.create_user(Some(input)).await.unwrap();

        assert!(bcrypt::verify(" ", &created.password).unwrap());
        assert_eq!(store.find_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_store() {
        let store = Arc::new(InMemoryStore::new());
        let service = service_with(store.clone());

        let err = service.create_user(None).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref msg) if msg == MISSING_USER_INFO));

        let mut no_email = full_input();
        no_email.email = None;
        let err = service.create_user(Some(no_email)).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref msg) if msg == MISSING_EMAIL));

        assert!(store.find_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_validation_runs_before_connection() {
        let service = UserService::new(Arc::new(UnavailableStore), TEST_HASH_COST);

        let err = service.create_user(None).await.unwrap_err();
        assert!(err.is_client_error());

        let err = service.create_user(Some(full_input())).await.unwrap_err();
        assert!(matches!(err, AppError::DatabaseError(_)));
    }

    #[tokio::test]
    async fn test_get_tasks_of_user() {
        let store = Arc::new(InMemoryStore::new());
        let service = service_with(store.clone());
        let created = service.create_user(Some(full_input())).await.unwrap();
        let id = created.id.unwrap().to_hex();

        assert!(service.get_tasks_of_user(&id).await.unwrap().is_empty());

        let err = service.get_tasks_of_user("not-an-id").await.unwrap_err();
        assert!(err.is_client_error());

        let err = service.get_tasks_of_user(&ObjectId::new().to_hex()).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref msg) if msg == USER_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_list_propagates_store_failure() {
        let service = UserService::new(Arc::new(UnavailableStore), TEST_HASH_COST);
        assert!(matches!(
            service.get_list_of_users().await,
            Err(AppError::DatabaseError(_))
        ));
        assert!(service.check_store().await.is_err());
    }
}
