use chrono::{DateTime, Utc};
use entities::{custom_methods::email_verification::email_verification_expires_at, email_verification};
use sea_orm::Set;
use uuid::Uuid;

use crate::auth::tokens::{generate_verification_token, hash_token};

/// Returns the row together with the plaintext token it was hashed from.
pub fn email_verification(user_id: Uuid, new_email: &str) -> (email_verification::ActiveModel, String) {
    let now = Utc::now();
    let token = generate_verification_token();
    let hashed_token = hash_token(&token).expect("Failed to hash token.");
    (
        email_verification::ActiveModel {
            id: Set(Uuid::now_v7()),
            user_id: Set(user_id),
            new_email: Set(new_email.to_string()),
            token: Set(hashed_token),
            expires_at: Set(email_verification_expires_at(now).into()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        },
        token,
    )
}

pub trait EmailVerificationFactory {
    fn expires_at(self, expires_at: DateTime<Utc>) -> email_verification::ActiveModel;
    fn created_at(self, created_at: DateTime<Utc>) -> email_verification::ActiveModel;
}

impl EmailVerificationFactory for email_verification::ActiveModel {
    fn expires_at(mut self, expires_at: DateTime<Utc>) -> email_verification::ActiveModel {
        self.expires_at = Set(expires_at.into());
        self
    }

    fn created_at(mut self, created_at: DateTime<Utc>) -> email_verification::ActiveModel {
        self.created_at = Set(created_at.into());
        self
    }
}
