//! Carer management for the animal shelter telegram bot backend.
//!
//! The `data` feature exposes the domain, Diesel models and repository; the
//! default `server` feature adds the services and the `/carer` HTTP API.

#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
use mockable::Clock;

#[cfg(feature = "server")]
use crate::db::establish_connection_pool;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;
#[cfg(feature = "server")]
use crate::routes::carer::carer_scope;

pub mod db;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod models;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

/// Clock shared between request handlers.
pub type SharedClock = dyn Clock + Send + Sync;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    let clock: Arc<SharedClock> = Arc::new(mockable::DefaultClock);
    let clock = web::Data::from(clock);

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting carer service on {}:{}",
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(carer_scope())
            .app_data(web::Data::new(repo.clone()))
            .app_data(clock.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
