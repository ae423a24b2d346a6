use std::{borrow::Cow, collections::BTreeMap};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{ValidateEmail, ValidationError, ValidationErrors};

use common::auth::tokens::VERIFICATION_TOKEN_LENGTH;

use crate::UseCaseError;

/// Validation messages keyed by request field, serialized as `{field: [message]}`.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: &str) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn into_result(self) -> Result<(), UseCaseError> {
        match self.is_empty() {
            true => Ok(()),
            false => Err(UseCaseError::Validation(self)),
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors = Self::new();
        for (field, errors) in errors.field_errors() {
            for error in errors {
                let message = match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("The {} field is invalid.", field),
                };
                field_errors.add(&field, &message);
            }
        }
        field_errors
    }
}

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\s\-']+$").expect("name pattern is valid"));

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>?").expect("tag pattern is valid"));

/// Removes markup the way a plain-text display name expects, then trims.
pub(crate) fn strip_tags(value: &str) -> String {
    TAG_REGEX.replace_all(value.trim(), "").trim().to_string()
}

pub(crate) fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

pub(crate) fn validate_name(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();
    let message = if length < 2 {
        "Name must be at least 2 characters."
    } else if length > 50 {
        "Name cannot exceed 50 characters."
    } else if !NAME_REGEX.is_match(name) {
        "Name can only contain letters, spaces, hyphens, and apostrophes."
    } else {
        return Ok(());
    };
    Err(ValidationError::new("name").with_message(Cow::Borrowed(message)))
}

pub(crate) fn validate_new_email(email: &str) -> Result<(), ValidationError> {
    let message = if email.is_empty() {
        "New email address is required."
    } else if email.chars().count() > 255 {
        "Email cannot exceed 255 characters."
    } else if !email.validate_email() {
        "Please provide a valid email address."
    } else {
        return Ok(());
    };
    Err(ValidationError::new("email").with_message(Cow::Borrowed(message)))
}

pub(crate) fn validate_verification_token(token: &str) -> Result<(), ValidationError> {
    let message = if token.is_empty() {
        "Verification token is required."
    } else if token.chars().count() != VERIFICATION_TOKEN_LENGTH {
        "Invalid verification token format."
    } else {
        return Ok(());
    };
    Err(ValidationError::new("token").with_message(Cow::Borrowed(message)))
}

pub(crate) fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_letter = password.chars().any(|c| c.is_alphabetic());
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_numeric());
    let has_symbol = password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    let message = if !has_letter {
        "The password must contain at least one letter."
    } else if !(has_upper && has_lower) {
        "The password must contain at least one uppercase and one lowercase letter."
    } else if !has_digit {
        "The password must contain at least one number."
    } else if !has_symbol {
        "The password must contain at least one symbol."
    } else {
        return Ok(());
    };
    Err(ValidationError::new("password_strength").with_message(Cow::Borrowed(message)))
}

pub(crate) fn validate_accepted(confirmation: &bool) -> Result<(), ValidationError> {
    match confirmation {
        true => Ok(()),
        false => Err(ValidationError::new("accepted").with_message(Cow::Borrowed(
            "You must confirm that you want to delete your account.",
        ))),
    }
}
