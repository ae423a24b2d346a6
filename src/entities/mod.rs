pub mod prelude;

pub mod account_deletion;
pub mod custom_methods;
pub mod email_verification;
pub mod sea_orm_active_enums;
pub mod user;
