mod email_change;
mod get_me;
mod integration;
mod login;
mod register;
mod update_name;
mod update_password;
