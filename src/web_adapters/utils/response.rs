use std::fmt::Debug;

use actix_web::{error::InternalError, web::JsonConfig, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{event, Level};
use use_cases::{FieldErrors, UseCaseError};

/// Envelope shared by every endpoint.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ApiResponse {
    fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: Some(message.to_string()),
            data: None,
            errors: None,
        }
    }
}

/// OK: data that fails to serialize is reported as a 500.
pub fn response_200<T: Serialize>(message: Option<&str>, data: Option<T>) -> HttpResponse {
    let data = match data.map(serde_json::to_value).transpose() {
        Ok(data) => data,
        Err(e) => return response_500(e),
    };
    HttpResponse::Ok().json(ApiResponse {
        success: true,
        message: message.map(|m| m.to_string()),
        data,
        errors: None,
    })
}

/// OK: message only
pub fn response_200_message(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse {
        success: true,
        message: Some(message.to_string()),
        data: None,
        errors: None,
    })
}

///Bad Request
pub fn response_400(error_message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::failure(error_message))
}

/// Bad Request with per-field messages
pub fn response_400_with_errors(errors: FieldErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse {
        errors: Some(errors),
        ..ApiResponse::failure("The given data was invalid.")
    })
}

/// Unauthorized
pub fn response_401() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::failure("You are not logged in."))
}

/// NotFound
pub fn response_404(error_message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::failure(error_message))
}

/// Too Many Requests
pub fn response_429(error_message: &str) -> HttpResponse {
    HttpResponse::TooManyRequests().json(ApiResponse::failure(error_message))
}

/// Internal Server Error: with logging
pub fn response_500<T: Debug>(e: T) -> HttpResponse {
    event!(target: "backend", Level::ERROR, "{:?}", e);
    HttpResponse::InternalServerError().json(ApiResponse::failure(
        "Some unexpected error happened. Please try again later.",
    ))
}

/// Bodies that cannot be deserialized are answered with the envelope too.
pub fn json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        event!(target: "backend", Level::INFO, "Rejected request body: {}", err);
        InternalError::from_response(err, response_400("The given data was invalid.")).into()
    })
}

pub fn response_use_case_error(e: UseCaseError) -> HttpResponse {
    match e {
        UseCaseError::Validation(errors) => response_400_with_errors(errors),
        UseCaseError::Expired(message) => response_400(&message),
        UseCaseError::InvalidToken(message) => response_400(&message),
        UseCaseError::NotFound(message) => response_404(&message),
        UseCaseError::InternalServerError(e) => response_500(e),
    }
}
