pub mod account_deletion_adapter;
pub mod email_verification_adapter;
pub mod user_adapter;

pub use sea_orm::Order;
