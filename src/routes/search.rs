use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::client::TurfSearchClient;
use crate::dto::search::{SearchPageData, sort_options, turf_type_options};
use crate::forms::search::SearchForm;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, ServiceResult, search as search_service};

/// Path of the search page; pager links point back at it.
pub const SEARCH_PAGE: &str = "/search";

#[get("/")]
pub async fn index() -> impl Responder {
    redirect(SEARCH_PAGE)
}

async fn load(
    req: &HttpRequest,
    client: &web::Data<dyn TurfSearchClient>,
    tera: &web::Data<Tera>,
    server_config: &ServerConfig,
) -> ServiceResult<SearchPageData> {
    let form = SearchForm::from_query(req.query_string())
        .map_err(|err| ServiceError::Form(format!("invalid search parameters: {err}")))?;

    search_service::load_search_page(
        client.get_ref(),
        tera.clone().into_inner(),
        SEARCH_PAGE,
        server_config.page_size,
        form,
    )
    .await
}

fn insert_regions(context: &mut Context, data: &SearchPageData) {
    context.insert("results_html", &data.results_html);
    context.insert("pager_html", &data.pager_html);
}

fn failure_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Form(message) => {
            log::warn!("Rejected search request: {message}");
            HttpResponse::BadRequest().body(message)
        }
        err => {
            log::error!("Failed to load search page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/search")]
pub async fn show_search(
    req: HttpRequest,
    client: web::Data<dyn TurfSearchClient>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match load(&req, &client, &tera, &server_config).await {
        Ok(data) => {
            let mut context = base_context("search");
            insert_regions(&mut context, &data);
            context.insert("form", &data.form);
            context.insert("turf_types", &turf_type_options());
            context.insert("sort_options", &sort_options());

            render_template(&tera, "search/index.html", &context)
        }
        Err(err) => failure_response(err),
    }
}

/// Result and pager regions only, for partial refreshes.
#[get("/search/fragment")]
pub async fn search_fragment(
    req: HttpRequest,
    client: web::Data<dyn TurfSearchClient>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match load(&req, &client, &tera, &server_config).await {
        Ok(data) => {
            let mut context = Context::new();
            insert_regions(&mut context, &data);

            render_template(&tera, "search/fragment.html", &context)
        }
        Err(err) => failure_response(err),
    }
}
