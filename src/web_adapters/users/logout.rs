use actix_session::Session;
use actix_web::{post, HttpResponse};

use crate::utils::{auth::session::get_user_id, response_200_message, response_401};

#[tracing::instrument(name = "Log out user", skip(session))]
#[post("/logout")]
pub async fn log_out(session: Session) -> HttpResponse {
    match get_user_id(&session) {
        Ok(_) => {
            tracing::event!(target: "backend", tracing::Level::INFO, "User_id retrieved from the session.");
            session.purge();
            response_200_message("You have successfully logged out.")
        }
        Err(_) => response_401(),
    }
}
