mod account_deletion;
mod email_verification;
mod user;

pub use account_deletion::*;
pub use email_verification::*;
pub use user::*;
