use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use sqlx::PgPool;

use crate::auth::credentials::{self, Credentials, SessionCredentials};
use crate::auth::{csrf, session as user_session};
use crate::cache::INVOICES_PATH;
use crate::errors::{AppError, render, see_other};
use crate::handlers::invoice_handlers::forms::CsrfOnly;
use crate::templates_structs::LoginTemplate;

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub csrf_token: String,
    /// Message the login page was showing when this form was submitted.
    pub prev_state: Option<String>,
}

pub async fn login_page(session: Session) -> Result<HttpResponse, AppError> {
    if user_session::is_signed_in(&session) {
        return Ok(see_other(INVOICES_PATH));
    }

    let csrf_token = csrf::get_or_create_token(&session);
    render(LoginTemplate { error: None, email: String::new(), csrf_token })
}

pub async fn login_submit(
    pool: web::Data<PgPool>,
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let LoginForm { email, password, prev_state, .. } = form.into_inner();
    let creds = Credentials { email, password };
    let provider = SessionCredentials { pool: pool.get_ref(), session: &session };

    match credentials::authenticate(&provider, prev_state.as_deref(), &creds).await? {
        None => Ok(see_other(INVOICES_PATH)),
        Some(message) => {
            let csrf_token = csrf::get_or_create_token(&session);
            render(LoginTemplate {
                error: Some(message.to_string()),
                email: creds.email,
                csrf_token,
            })
        }
    }
}

pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(see_other("/login"))
}
