use common::auth::password::verify_password;
use entities::user;

pub mod account_deletion;
pub mod email_change;
pub mod login;
pub mod logout_all_devices;
pub mod register;
pub mod types;
pub mod update_name;
pub mod update_password;

fn password_matches(user: &user::Model, password: &str) -> bool {
    verify_password(&user.password, password.as_bytes()).is_ok()
}
