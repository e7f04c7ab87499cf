use super::{graphql_error, UserResponse};
use crate::{models::CreateUserInput, services::UserService};
use async_graphql::{Context, Object, Result};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        user_input: Option<CreateUserInput>,
    ) -> Result<UserResponse> {
        let user = ctx
            .data::<UserService>()?
            .create_user(user_input)
            .await
            .map_err(graphql_error)?;

        Ok(UserResponse::from(user))
    }
}
