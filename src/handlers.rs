pub mod auth_handlers;
pub mod invoice_handlers;

use actix_web::{HttpResponse, web};

use crate::auth;
use crate::cache::INVOICES_PATH;
use crate::errors::see_other;

/// Register every route. The caller supplies session middleware and app data
/// (`PgPool`, `ViewCache`).
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Static files
        .service(actix_files::Files::new("/static", "./static"))
        // Public routes
        .route("/login", web::get().to(auth_handlers::login_page))
        .route("/login", web::post().to(auth_handlers::login_submit))
        .route("/", web::get().to(|| async { see_other(INVOICES_PATH) }))
        // Protected routes
        .service(
            web::resource("/logout")
                .wrap(actix_web::middleware::from_fn(auth::middleware::require_auth))
                .route(web::post().to(auth_handlers::logout)),
        )
        .service(
            web::scope("/dashboard")
                .wrap(actix_web::middleware::from_fn(auth::middleware::require_auth))
                .route("", web::get().to(|| async { see_other(INVOICES_PATH) }))
                // /create BEFORE /{id} routes
                .route("/invoices", web::get().to(invoice_handlers::list))
                .route("/invoices/create", web::get().to(invoice_handlers::new_form))
                .route("/invoices", web::post().to(invoice_handlers::create))
                .route("/invoices/{id}/edit", web::get().to(invoice_handlers::edit_form))
                .route("/invoices/{id}", web::post().to(invoice_handlers::update))
                .route("/invoices/{id}/delete", web::post().to(invoice_handlers::delete)),
        )
        // Anything outside /dashboard that no route claims
        .default_service(web::to(not_found));
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../templates/errors/404.html"))
}
