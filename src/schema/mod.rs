//! GraphQL schema: `getListOfUsers`, `getTasksOfUser` and `createUser`.

pub mod mutation;
pub mod query;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::*;

use crate::{services::UserService, utils::error::AppError};
use async_graphql::{EmptySubscription, ErrorExtensions, Schema};

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(service: UserService) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .finish()
}

/// Logs server-side causes, then converts to a GraphQL error with `extensions.code`
pub(crate) fn graphql_error(err: AppError) -> async_graphql::Error {
    if err.is_client_error() {
        log::warn!("❌ {}", err);
    } else {
        log::error!("❌ {}", err);
    }
    err.extend()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::InMemoryStore;
    use std::sync::Arc;

    #[test]
    fn test_sdl_matches_public_contract() {
        let schema = build_schema(UserService::new(Arc::new(InMemoryStore::new()), 4));
        let sdl = schema.sdl();

        assert!(sdl.contains("createUser(userInput: CreateUserInput): User!"));
        assert!(sdl.contains("getListOfUsers: [User!]!"));
        assert!(sdl.contains("getTasksOfUser(userId: ID!): [Task!]!"));
        assert!(sdl.contains("_id: ID!"));
        assert!(!sdl.contains("password: String!"));
        assert!(!sdl.contains("title: String!"));
    }
}
