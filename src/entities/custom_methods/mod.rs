pub mod account_deletion;
pub mod email_verification;
