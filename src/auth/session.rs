use actix_session::Session;

use crate::errors::AppError;
use crate::models::account::Account;

const USER_ID: &str = "user_id";
const USER_NAME: &str = "user_name";
const USER_EMAIL: &str = "user_email";

pub fn get_user_id(session: &Session) -> Option<String> {
    session.get::<String>(USER_ID).unwrap_or(None)
}

pub fn is_signed_in(session: &Session) -> bool {
    get_user_id(session).is_some()
}

/// Display name for the page header; falls back to the email.
pub fn get_user_name(session: &Session) -> String {
    session
        .get::<String>(USER_NAME)
        .unwrap_or(None)
        .or_else(|| session.get::<String>(USER_EMAIL).unwrap_or(None))
        .unwrap_or_default()
}

/// Store the signed-in account, rotating the session id first.
pub fn sign_in(session: &Session, account: &Account) -> Result<(), AppError> {
    session.renew();
    session.insert(USER_ID, &account.id)?;
    session.insert(USER_NAME, &account.name)?;
    session.insert(USER_EMAIL, &account.email)?;
    Ok(())
}
