//! HTTP handlers and the small helpers they share.

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use tera::{Context, Tera};

pub mod search;

/// Registers every page route of the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(search::index)
        .service(search::show_search)
        .service(search::search_fragment);
}

/// Context every page template expects.
pub fn base_context(current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
