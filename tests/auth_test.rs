//! Authentication tests: failure classification in `authenticate` and
//! argon2 password hashing.

mod common;

use invoicer::auth::credentials::{
    self, AuthErrorKind, CREDENTIALS, Credentials, INVALID_CREDENTIALS, SOMETHING_WENT_WRONG,
};
use invoicer::auth::password;
use invoicer::errors::AppError;
use common::*;

fn creds() -> Credentials {
    Credentials { email: TEST_EMAIL.to_string(), password: TEST_PASSWORD.to_string() }
}

#[actix_rt::test]
async fn test_successful_sign_in_returns_no_message() {
    let provider = FakeProvider::new(SignInOutcome::Success);

    let result = credentials::authenticate(&provider, None, &creds()).await;

    assert!(matches!(result, Ok(None)));
    assert_eq!(provider.providers_seen(), vec![CREDENTIALS.to_string()]);
}

#[actix_rt::test]
async fn test_credentials_signin_maps_to_invalid_credentials() {
    let provider = FakeProvider::new(SignInOutcome::Classified(AuthErrorKind::CredentialsSignin));

    let result = credentials::authenticate(&provider, Some(""), &creds()).await;

    match result {
        Ok(Some(msg)) => assert_eq!(msg, "Invalid credentials."),
        other => panic!("expected a message, got {other:?}"),
    }
}

#[actix_rt::test]
async fn test_other_classified_failures_map_to_generic_message() {
    for kind in [AuthErrorKind::CallbackRouteError, AuthErrorKind::InvalidProvider] {
        let provider = FakeProvider::new(SignInOutcome::Classified(kind));

        let result = credentials::authenticate(&provider, Some(INVALID_CREDENTIALS), &creds()).await;

        assert!(
            matches!(result, Ok(Some(msg)) if msg == SOMETHING_WENT_WRONG),
            "{} should map to the generic message",
            kind.as_str()
        );
    }
}

#[actix_rt::test]
async fn test_unclassified_failure_is_escalated() {
    let provider = FakeProvider::new(SignInOutcome::Unclassified);

    let result = credentials::authenticate(&provider, None, &creds()).await;

    assert!(matches!(result, Err(AppError::Session(_))));
}

#[test]
fn test_hash_password_success() {
    let hash = password::hash_password(TEST_PASSWORD).expect("Failed to hash password");

    assert!(hash.starts_with("$argon2"));
}

#[test]
fn test_verify_password_correct_and_incorrect() {
    let hash = password::hash_password(TEST_PASSWORD).expect("Failed to hash password");

    assert!(password::verify_password(TEST_PASSWORD, &hash).expect("Verification failed"));
    assert!(!password::verify_password("wrongpassword", &hash).expect("Verification failed"));
}

#[test]
fn test_hash_password_randomness() {
    let hash1 = password::hash_password(TEST_PASSWORD).expect("Failed to hash first password");
    let hash2 = password::hash_password(TEST_PASSWORD).expect("Failed to hash second password");

    // Different salts
    assert_ne!(hash1, hash2);
}

#[test]
fn test_verify_password_unreadable_hash_is_error() {
    let result = password::verify_password(TEST_PASSWORD, "not-a-phc-string");

    assert!(matches!(result, Err(AppError::Hash(_))));
}
