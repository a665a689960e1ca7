//! Server-rendered turf search pages backed by the turf booking REST API.

pub mod domain;
pub mod dto;
pub mod forms;
pub mod query;

#[cfg(feature = "server")]
pub mod client;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod render;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: models::config::ServerConfig) -> std::io::Result<()> {
    use std::sync::Arc;

    use actix_files::Files;
    use actix_web::{App, HttpServer, middleware, web};
    use tera::Tera;

    use crate::client::{HttpTurfSearchClient, TurfSearchClient};

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    // One reqwest client, shared by every worker.
    let client: Arc<dyn TurfSearchClient> =
        Arc::new(HttpTurfSearchClient::new(&server_config.backend_url));
    let client = web::Data::from(client);

    log::info!(
        "Serving turf search on {}:{} against {}",
        server_config.address,
        server_config.port,
        server_config.backend_url
    );

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", &server_config.assets_dir))
            .configure(routes::configure)
            .app_data(client.clone())
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
