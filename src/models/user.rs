use async_graphql::InputObject;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Task;

/// User document (stored in the `users` collection)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    // Hand-loaded or legacy documents may lack these; they read as empty
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    /// bcrypt hash, never the plaintext
    #[serde(default)]
    pub password: String,

    /// Absent on users that never had tasks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
}

/// GraphQL input for `createUser`.
///
/// Every field is nullable in the schema so that missing values reach the
/// validator and get its messages instead of a generic type error.
#[derive(Clone, Default, InputObject)]
pub struct CreateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for CreateUserInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, to_document};

    #[test]
    fn test_new_user_document_has_only_provided_fields() {
        let user = User {
            id: None,
            name: "prueba".into(),
            email: "prueba@gmail.com".into(),
            password: "$2b$04$hash".into(),
            tasks: None,
        };

        let document = to_document(&user).unwrap();
        let keys: Vec<&str> = document.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["name", "email", "password"]);
    }

    #[test]
    fn test_user_document_with_tasks_deserializes() {
        let task_id = ObjectId::new();
        let document = doc! {
            "_id": ObjectId::new(),
            "name": "Usuario 1",
            "email": "usuario1@gmail.com",
            "password": "hash",
            "tasks": [
                { "_id": task_id, "title": "Comprar pan", "description": "Integral", "priority": 2 },
                { "title": "Sin id" },
                { "description": "Sin titulo" },
            ],
        };

        let user: User = from_document(document).unwrap();
        let tasks = user.tasks.unwrap();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].id, Some(task_id));
        assert_eq!(tasks[0].priority, Some(2));
        assert_eq!(tasks[1].description, None);
        assert_eq!(tasks[2].title, None);
    }

    #[test]
    fn test_loosely_shaped_user_document_deserializes() {
        let document = doc! {
            "_id": ObjectId::new(),
            "name": "Cargado a mano",
            "tasks": [ { "priority": 1 } ],
        };

        let user: User = from_document(document).unwrap();
        assert_eq!(user.name, "Cargado a mano");
        assert_eq!(user.email, "");
        assert_eq!(user.password, "");
        assert_eq!(user.tasks.unwrap()[0].title, None);
    }

    #[test]
    fn test_input_debug_redacts_password() {
        let input = CreateUserInput {
            name: Some("prueba".into()),
            email: None,
            password: Some("admin".into()),
        };

        let printed = format!("{:?}", input);
        assert!(printed.contains("prueba"));
        assert!(!printed.contains("admin"));
    }
}
