use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::auth::csrf;
use crate::cache::ViewCache;
use crate::errors::{AppError, render, see_other};
use crate::models::customer;
use crate::models::invoice::{self, FormState, InvoiceFormInput};
use crate::templates_structs::{InvoiceFormTemplate, PageContext};
use super::actions::{self, ActionOutcome};
use super::forms::{CsrfOnly, InvoiceForm};

pub async fn new_form(
    pool: web::Data<PgPool>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let customers = customer::find_options(&pool).await?;
    let tmpl = InvoiceFormTemplate::create(
        PageContext::build(&session),
        customers,
        InvoiceFormInput::default(),
        FormState::default(),
    );
    render(tmpl)
}

pub async fn create(
    pool: web::Data<PgPool>,
    cache: web::Data<ViewCache>,
    session: Session,
    form: web::Form<InvoiceForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let InvoiceForm { input, .. } = form.into_inner();

    match actions::create_invoice(pool.get_ref(), &cache, &input).await {
        ActionOutcome::Redirect(to) => Ok(see_other(to)),
        ActionOutcome::Rejected(state) => {
            let customers = customer::find_options(&pool).await?;
            let tmpl = InvoiceFormTemplate::create(
                PageContext::build(&session),
                customers,
                input,
                state,
            );
            render(tmpl)
        }
    }
}

pub async fn edit_form(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let record = invoice::find_by_id(&pool, &id).await?.ok_or(AppError::NotFound)?;
    let customers = customer::find_options(&pool).await?;

    let tmpl = InvoiceFormTemplate::edit(
        PageContext::build(&session),
        &record.id,
        customers,
        record.to_form_input(),
        FormState::default(),
    );
    render(tmpl)
}

pub async fn update(
    pool: web::Data<PgPool>,
    cache: web::Data<ViewCache>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<InvoiceForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();
    let InvoiceForm { input, .. } = form.into_inner();

    match actions::update_invoice(pool.get_ref(), &cache, &id, &input).await {
        ActionOutcome::Redirect(to) => Ok(see_other(to)),
        ActionOutcome::Rejected(state) => {
            let customers = customer::find_options(&pool).await?;
            let tmpl = InvoiceFormTemplate::edit(
                PageContext::build(&session),
                &id,
                customers,
                input,
                state,
            );
            render(tmpl)
        }
    }
}

pub async fn delete(
    pool: web::Data<PgPool>,
    cache: web::Data<ViewCache>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();

    match actions::delete_invoice(pool.get_ref(), &cache, &id).await? {
        ActionOutcome::Redirect(to) => Ok(see_other(to)),
        ActionOutcome::Rejected(state) => Err(AppError::Failed(
            state.message.unwrap_or_else(|| actions::DELETE_FAILED.to_string()),
        )),
    }
}
