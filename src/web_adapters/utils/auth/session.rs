use actix_session::{Session, SessionGetError, SessionInsertError};
use entities::user;

pub const USER_ID_KEY: &str = "user_id";
pub const SESSION_VERSION_KEY: &str = "session_version";

pub fn get_user_id(session: &Session) -> Result<uuid::Uuid, String> {
    match session.get(USER_ID_KEY) {
        Ok(user_id) => match user_id {
            None => Err("You are not authenticated".to_string()),
            Some(id) => Ok(id),
        },
        Err(e) => Err(e.to_string()),
    }
}

/// Sessions written before versions existed count as version 0.
pub fn get_session_version(session: &Session) -> Result<i32, SessionGetError> {
    session
        .get::<i32>(SESSION_VERSION_KEY)
        .map(|version| version.unwrap_or_default())
}

pub fn renew_session(session: &Session, user: &user::Model) -> Result<(), SessionInsertError> {
    session.renew();
    session.insert(USER_ID_KEY, user.id)?;
    stamp_session_version(session, user.session_version)
}

pub fn stamp_session_version(
    session: &Session,
    session_version: i32,
) -> Result<(), SessionInsertError> {
    session.insert(SESSION_VERSION_KEY, session_version)
}
