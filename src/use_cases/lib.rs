use std::fmt::Debug;

pub mod users;
mod validation;

pub use validation::FieldErrors;

#[derive(Debug)]
pub enum UseCaseError {
    Validation(FieldErrors),     // 400
    Expired(String),             // 400
    InvalidToken(String),        // 400
    NotFound(String),            // 404
    InternalServerError(String), // 500
}

pub(crate) fn error_500(e: impl Debug) -> UseCaseError {
    UseCaseError::InternalServerError(format!("{:?}", e))
}
