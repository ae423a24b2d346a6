use chrono::{DateTime, FixedOffset};
use entities::user;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{
    validate_accepted, validate_name, validate_new_email, validate_password_strength,
    validate_verification_token,
};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct UserVisible {
    pub id: uuid::Uuid,
    pub name: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<user::Model> for UserVisible {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(
        email(message = "Please provide a valid email address."),
        length(max = 255, message = "Email cannot exceed 255 characters.")
    )]
    pub email: String,
    #[validate(
        length(min = 8, message = "The password must be at least 8 characters."),
        custom(function = "validate_password_strength")
    )]
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
#[serde(default)]
pub struct UpdateNameRequest {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
#[serde(default)]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required."))]
    pub current_password: String,
    #[validate(
        length(min = 8, message = "The password must be at least 8 characters."),
        custom(function = "validate_password_strength")
    )]
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
#[serde(default)]
pub struct EmailChangeRequest {
    #[validate(custom(function = "validate_new_email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Current password is required for security."))]
    pub current_password: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
#[serde(default)]
pub struct VerifyEmailChangeRequest {
    #[validate(custom(function = "validate_verification_token"))]
    pub token: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
#[serde(default)]
pub struct AccountDeletionRequest {
    #[validate(length(min = 1, message = "Password is required to delete your account."))]
    pub password: String,
    #[validate(custom(function = "validate_accepted"))]
    pub confirmation: bool,
}

/// Issued verification. `token` is the plaintext and only ever leaves through email.
#[derive(Debug)]
pub struct EmailChangeTicket {
    pub old_email: String,
    pub new_email: String,
    pub token: String,
    pub expires_in_minutes: i64,
}

#[derive(Debug)]
pub struct EmailChangeOutcome {
    pub old_email: String,
    pub user: UserVisible,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct AccountDeletionVisible {
    pub scheduled_deletion_at: DateTime<FixedOffset>,
    pub days_remaining: i64,
    pub requested_at: DateTime<FixedOffset>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct DeletionStatusVisible {
    pub has_pending_deletion: bool,
    #[serde(skip_serializing_if = "Option::is_none", flatten)]
    pub deletion: Option<AccountDeletionVisible>,
}
