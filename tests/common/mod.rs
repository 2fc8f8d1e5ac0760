//! Shared test infrastructure.
//!
//! In-memory stand-ins for the collaborators the form actions talk to:
//! - `FakeStore` records every invoice statement and can be told to fail
//! - `FakeProvider` answers sign-in with a canned outcome
//!
//! # Test Database Setup
//! - `setup_test_db()` - pool on `DATABASE_URL` with the schema applied, or
//!   `None` when no database is configured
//! - `insert_customer()` - a fresh customer so tests never share rows

#![allow(dead_code)]

use std::sync::Mutex;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use invoicer::auth::credentials::{
    AuthError, AuthErrorKind, CredentialProvider, Credentials, SignInError,
};
use invoicer::db::MIGRATIONS;
use invoicer::errors::AppError;
use invoicer::models::invoice::{InvoiceChanges, InvoiceFormInput, InvoiceStore, NewInvoice};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const CUSTOMER_ID: &str = "3958dc9e-712f-4377-85e9-fec4b6a6442a";
pub const INVOICE_ID: &str = "cc27c14a-0acf-4f4a-a6c9-d45682c144b9";
pub const TEST_EMAIL: &str = "user@nextmail.com";
pub const TEST_PASSWORD: &str = "123456";

pub fn form(customer: &str, amount: &str, status: &str) -> InvoiceFormInput {
    InvoiceFormInput {
        customer_id: Some(customer.to_string()),
        amount: Some(amount.to_string()),
        status: Some(status.to_string()),
    }
}

// ============================================================================
// INVOICE STORE
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Insert(NewInvoice),
    Update(String, InvoiceChanges),
    Delete(String),
}

#[derive(Default)]
pub struct FakeStore {
    calls: Mutex<Vec<StoreCall>>,
    fail: bool,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every statement errors as if the pool were exhausted.
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: StoreCall) -> Result<(), sqlx::Error> {
        self.calls.lock().unwrap().push(call);
        if self.fail { Err(sqlx::Error::PoolTimedOut) } else { Ok(()) }
    }
}

impl InvoiceStore for FakeStore {
    async fn insert_invoice(&self, new: &NewInvoice) -> Result<(), sqlx::Error> {
        self.record(StoreCall::Insert(new.clone()))
    }

    async fn update_invoice(&self, id: &str, changes: &InvoiceChanges) -> Result<(), sqlx::Error> {
        self.record(StoreCall::Update(id.to_string(), changes.clone()))
    }

    async fn delete_invoice(&self, id: &str) -> Result<(), sqlx::Error> {
        self.record(StoreCall::Delete(id.to_string()))
    }
}

// ============================================================================
// CREDENTIAL PROVIDER
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub enum SignInOutcome {
    Success,
    Classified(AuthErrorKind),
    Unclassified,
}

pub struct FakeProvider {
    outcome: SignInOutcome,
    providers_seen: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn new(outcome: SignInOutcome) -> Self {
        Self { outcome, providers_seen: Mutex::new(vec![]) }
    }

    pub fn providers_seen(&self) -> Vec<String> {
        self.providers_seen.lock().unwrap().clone()
    }
}

impl CredentialProvider for FakeProvider {
    async fn sign_in(&self, provider: &str, _credentials: &Credentials) -> Result<(), SignInError> {
        self.providers_seen.lock().unwrap().push(provider.to_string());
        match self.outcome {
            SignInOutcome::Success => Ok(()),
            SignInOutcome::Classified(kind) => Err(SignInError::Auth(AuthError::new(kind, "fake"))),
            SignInOutcome::Unclassified => {
                Err(SignInError::Other(AppError::Session("fake session failure".to_string())))
            }
        }
    }
}

// ============================================================================
// DATABASE SETUP
// ============================================================================

/// Serializes the schema script across tests in one binary; concurrent
/// `CREATE TABLE IF NOT EXISTS` can collide in Postgres.
static SCHEMA_APPLIED: tokio::sync::Mutex<bool> = tokio::sync::Mutex::const_new(false);

/// Connect to `DATABASE_URL` and apply the schema.
///
/// Returns `None` (and the caller skips) when `DATABASE_URL` is not set, so
/// the suite still runs on machines without Postgres.
pub async fn setup_test_db() -> Option<PgPool> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping database test");
        return None;
    };

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to DATABASE_URL");

    let mut applied = SCHEMA_APPLIED.lock().await;
    if !*applied {
        sqlx::raw_sql(MIGRATIONS)
            .execute(&pool)
            .await
            .expect("Failed to run migrations");
        *applied = true;
    }

    Some(pool)
}

/// Insert a customer with a unique email and return its id.
pub async fn insert_customer(pool: &PgPool, name: &str) -> String {
    sqlx::query_scalar(
        "INSERT INTO customers (name, email) \
         VALUES ($1, gen_random_uuid()::text || '@example.com') \
         RETURNING id::text",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .expect("Failed to insert customer")
}
