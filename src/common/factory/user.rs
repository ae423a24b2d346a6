use chrono::Utc;
use entities::user;
use sea_orm::Set;

/// argon2 hash of "password".
pub const HASHED_PASSWORD: &str = "$argon2id$v=19$m=19456,t=2,p=1$r07vWFCaKrbNPrSgUrG/+Q$/2lBaeRWeox6ROMu6qAwOYmttdGXA3o4Uw2YHC/fvfY";
pub const PLAIN_PASSWORD: &str = "password";

pub fn user() -> user::ActiveModel {
    let now = Utc::now();
    user::ActiveModel {
        id: Set(uuid::Uuid::now_v7()),
        name: Set("Quiz Master".to_string()),
        email: Set(format!("{}@test.com", uuid::Uuid::now_v7().to_string())),
        password: Set(HASHED_PASSWORD.to_string()),
        is_active: Set(true),
        session_version: Set(0),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait UserFactory {
    fn name(self, name: &str) -> user::ActiveModel;
    fn email(self, email: &str) -> user::ActiveModel;
    fn is_active(self, is_active: bool) -> user::ActiveModel;
    fn password(self, hashed_password: &str) -> user::ActiveModel;
}

impl UserFactory for user::ActiveModel {
    fn name(mut self, name: &str) -> user::ActiveModel {
        self.name = Set(name.to_string());
        self
    }

    fn email(mut self, email: &str) -> user::ActiveModel {
        self.email = Set(email.to_string());
        self
    }

    fn is_active(mut self, is_active: bool) -> user::ActiveModel {
        self.is_active = Set(is_active);
        self
    }

    fn password(mut self, hashed_password: &str) -> user::ActiveModel {
        self.password = Set(hashed_password.to_string());
        self
    }
}
