use crate::models::{Task, User};
use async_graphql::{SimpleObject, ID};

/// GraphQL view of a user. The password hash is never exposed.
#[derive(Debug, SimpleObject)]
#[graphql(name = "User")]
pub struct UserResponse {
    #[graphql(name = "_id")]
    pub id: ID,
    pub name: String,
    pub email: String,
    pub tasks: Vec<TaskResponse>,
}

#[derive(Debug, SimpleObject)]
#[graphql(name = "Task")]
pub struct TaskResponse {
    #[graphql(name = "_id")]
    pub id: Option<ID>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i32>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: ID(user.id.map(|id| id.to_hex()).unwrap_or_default()),
            name: user.name,
            email: user.email,
            tasks: user
                .tasks
                .unwrap_or_default()
                .into_iter()
                .map(TaskResponse::from)
                .collect(),
        }
    }
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        TaskResponse {
            id: task.id.map(|id| ID(id.to_hex())),
            title: task.title,
            description: task.description,
            priority: task.priority,
        }
    }
}
