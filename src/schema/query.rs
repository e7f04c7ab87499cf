use super::{graphql_error, TaskResponse, UserResponse};
use crate::services::UserService;
use async_graphql::{Context, Object, Result, ID};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every user, in store order
    async fn get_list_of_users(&self, ctx: &Context<'_>) -> Result<Vec<UserResponse>> {
        let users = ctx
            .data::<UserService>()?
            .get_list_of_users()
            .await
            .map_err(graphql_error)?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn get_tasks_of_user(&self, ctx: &Context<'_>, user_id: ID) -> Result<Vec<TaskResponse>> {
        let tasks = ctx
            .data::<UserService>()?
            .get_tasks_of_user(user_id.as_str())
            .await
            .map_err(graphql_error)?;

        Ok(tasks.into_iter().map(TaskResponse::from).collect())
    }
}
