pub mod user_validator;

pub use user_validator::*;
