use async_graphql::ErrorExtensions;
use std::fmt;

/// Message returned to clients for any store failure. The cause is only logged.
pub const DATABASE_ERROR_MESSAGE: &str = "There was an error while accessing the database";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";
pub const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";

#[derive(Debug)]
pub enum AppError {
    /// Client-caused failure, the message is shown as is
    BadRequest(String),
    DatabaseError(String),
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// GraphQL `extensions.code` for this error
    pub fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => BAD_USER_INPUT,
            AppError::DatabaseError(_) | AppError::Internal(_) => INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::BadRequest(_))
    }

    pub fn public_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::DatabaseError(_) => DATABASE_ERROR_MESSAGE.to_string(),
            AppError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.public_message()).extend_with(|_, e| e.set("code", code))
    }
}
