use crate::{
    models::CreateUserInput,
    utils::error::{AppError, AppResult},
};
use mongodb::bson::oid::ObjectId;

pub const MISSING_USER_INFO: &str = "User information must be provided";
pub const MISSING_NAME: &str = "The user must have a name";
pub const MISSING_EMAIL: &str = "The user must have an email";
pub const MISSING_PASSWORD: &str = "The user must have a password";
pub const INVALID_USER_ID: &str = "The given user id is not valid";

fn is_missing(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// Checks the `createUser` input before anything touches the store.
///
/// An input object with no fields at all counts as absent.
pub fn validate_user_on_create(input: Option<&CreateUserInput>) -> AppResult<()> {
    let input = match input {
        Some(input) if input.name.is_some() || input.email.is_some() || input.password.is_some() => input,
        _ => return Err(AppError::BadRequest(MISSING_USER_INFO.to_string())),
    };

    if is_missing(&input.name) {
        return Err(AppError::BadRequest(MISSING_NAME.to_string()));
    }
    if is_missing(&input.email) {
        return Err(AppError::BadRequest(MISSING_EMAIL.to_string()));
    }
    if is_missing(&input.password) {
        return Err(AppError::BadRequest(MISSING_PASSWORD.to_string()));
    }

    Ok(())
}

pub fn validate_user_id(user_id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(user_id).map_err(|_| AppError::BadRequest(INVALID_USER_ID.to_string()))
}
