use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::cache::{INVOICES_PATH, Lookup, ViewCache};
use crate::errors::{AppError, render};
use crate::models::invoice;
use crate::templates_structs::{InvoiceListTemplate, PageContext};

/// Invoice list, served from the view cache until an action revalidates it.
pub async fn list(
    pool: web::Data<PgPool>,
    cache: web::Data<ViewCache>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let invoices = match cache.get(INVOICES_PATH) {
        Lookup::Hit(rows) => rows,
        Lookup::Miss(generation) => {
            let rows = invoice::find_summaries(&pool).await?;
            log::debug!("Rebuilt invoice list ({} rows)", rows.len());
            cache.store(INVOICES_PATH, generation, rows)
        }
    };

    let ctx = PageContext::build(&session);
    render(InvoiceListTemplate { ctx, invoices })
}
