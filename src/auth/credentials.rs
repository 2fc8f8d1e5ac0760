//! Credential sign-in.
//!
//! `authenticate` is the form action; it only knows the `CredentialProvider`
//! seam and maps classified failures to the message shown on the login page.

use actix_session::Session;
use serde::Deserialize;
use sqlx::PgPool;

use crate::auth::{password, session};
use crate::errors::AppError;
use crate::models::account::{self, Account};

/// The only provider this application registers.
pub const CREDENTIALS: &str = "credentials";

pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong.";

const MIN_PASSWORD_LEN: usize = 6;

/// Discriminator for classified sign-in failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// Unknown user, wrong password, or a malformed submission.
    CredentialsSignin,
    /// The provider failed while checking otherwise well-formed credentials.
    CallbackRouteError,
    InvalidProvider,
}

impl AuthErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthErrorKind::CredentialsSignin => "CredentialsSignin",
            AuthErrorKind::CallbackRouteError => "CallbackRouteError",
            AuthErrorKind::InvalidProvider => "InvalidProvider",
        }
    }
}

#[derive(Debug)]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub detail: String,
}

impl AuthError {
    pub fn new(kind: AuthErrorKind, detail: impl Into<String>) -> Self {
        Self { kind, detail: detail.into() }
    }
}

#[derive(Debug)]
pub enum SignInError {
    /// A classified authentication failure.
    Auth(AuthError),
    /// Anything else; escalated to the framework.
    Other(AppError),
}

impl From<AuthError> for SignInError {
    fn from(e: AuthError) -> Self {
        SignInError::Auth(e)
    }
}

impl From<AppError> for SignInError {
    fn from(e: AppError) -> Self {
        SignInError::Other(e)
    }
}

impl From<sqlx::Error> for SignInError {
    fn from(e: sqlx::Error) -> Self {
        SignInError::Other(AppError::Db(e))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Identity verification service. On success the caller is signed in.
#[allow(async_fn_in_trait)]
pub trait CredentialProvider {
    async fn sign_in(&self, provider: &str, credentials: &Credentials) -> Result<(), SignInError>;
}

/// Sign in with the credentials provider.
///
/// `Ok(None)` means success. `Ok(Some(msg))` is a message for the login form.
/// Unclassified failures are returned as `Err`.
pub async fn authenticate<P: CredentialProvider>(
    provider: &P,
    prev_state: Option<&str>,
    credentials: &Credentials,
) -> Result<Option<&'static str>, AppError> {
    if let Some(prev) = prev_state.filter(|s| !s.is_empty()) {
        log::debug!("Retrying sign-in after: {prev}");
    }

    match provider.sign_in(CREDENTIALS, credentials).await {
        Ok(()) => Ok(None),
        Err(SignInError::Auth(e)) => {
            log::info!("Sign-in failed ({}): {}", e.kind.as_str(), e.detail);
            match e.kind {
                AuthErrorKind::CredentialsSignin => Ok(Some(INVALID_CREDENTIALS)),
                _ => Ok(Some(SOMETHING_WENT_WRONG)),
            }
        }
        Err(SignInError::Other(err)) => Err(err),
    }
}

/// Checks credentials against the `users` table and writes the account
/// into the actix session on success.
pub struct SessionCredentials<'a> {
    pub pool: &'a PgPool,
    pub session: &'a Session,
}

impl CredentialProvider for SessionCredentials<'_> {
    async fn sign_in(&self, provider: &str, credentials: &Credentials) -> Result<(), SignInError> {
        if provider != CREDENTIALS {
            return Err(AuthError::new(
                AuthErrorKind::InvalidProvider,
                format!("unknown provider '{provider}'"),
            )
            .into());
        }

        let account = verify(self.pool, credentials).await?;
        session::sign_in(self.session, &account)?;
        log::info!("User '{}' signed in", account.email);
        Ok(())
    }
}

async fn verify(pool: &PgPool, credentials: &Credentials) -> Result<Account, SignInError> {
    let email = credentials.email.trim();
    if !is_well_formed(email, &credentials.password) {
        return Err(AuthError::new(AuthErrorKind::CredentialsSignin, "malformed credentials").into());
    }

    let Some(found) = account::find_by_email(pool, email).await? else {
        return Err(AuthError::new(AuthErrorKind::CredentialsSignin, "no such user").into());
    };

    match password::verify_password(&credentials.password, &found.password) {
        Ok(true) => Ok(found),
        Ok(false) => {
            Err(AuthError::new(AuthErrorKind::CredentialsSignin, "password mismatch").into())
        }
        Err(e) => Err(AuthError::new(AuthErrorKind::CallbackRouteError, e.to_string()).into()),
    }
}

fn is_well_formed(email: &str, password: &str) -> bool {
    email.contains('@') && password.chars().count() >= MIN_PASSWORD_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_requires_email_and_six_char_password() {
        assert!(is_well_formed("a@b.co", "secret"));
        assert!(!is_well_formed("ab.co", "secret"));
        assert!(!is_well_formed("a@b.co", "short"));
    }

    #[test]
    fn discriminator_names() {
        assert_eq!(AuthErrorKind::CredentialsSignin.as_str(), "CredentialsSignin");
        assert_eq!(AuthErrorKind::InvalidProvider.as_str(), "InvalidProvider");
    }
}
