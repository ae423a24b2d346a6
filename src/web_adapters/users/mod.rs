use actix_web::web::{scope, ServiceConfig};

mod account_deletion;
mod email_change;
mod get_user;
mod login;
mod logout;
mod logout_all_devices;
mod register;
mod update_name;
mod update_password;

pub fn user_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/users")
            .service(register::register_user)
            .service(login::login_user)
            .service(logout::log_out)
            .service(logout_all_devices::logout_all_devices)
            .service(
                scope("/me")
                    .service(get_user::get_user)
                    .service(update_name::update_name)
                    .service(update_password::update_password)
                    .service(email_change::request_email_change)
                    .service(email_change::verify_email_change)
                    .service(account_deletion::request_account_deletion)
                    .service(account_deletion::cancel_account_deletion)
                    .service(account_deletion::get_deletion_status),
            ),
    );
}
