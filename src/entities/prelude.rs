pub use super::account_deletion::Entity as AccountDeletion;
pub use super::email_verification::Entity as EmailVerification;
pub use super::user::Entity as User;
