mod catalog;
mod config;
mod errors;
mod mix_controller;
mod selector;
mod services;

use crate::catalog::{load_seed_file, SqliteCatalog};
use crate::config::ServerConfig;
use crate::errors::MixError;
use crate::mix_controller::state::MixState;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::sync::Arc;

fn startup_error(e: MixError) -> std::io::Error {
    std::io::Error::other(e.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::load().map_err(startup_error)?;
    let catalog = SqliteCatalog::open(&config.database_path).map_err(startup_error)?;
    info!("Catalog database: {}", catalog.path().display());

    if let Some(seed_file) = &config.seed_file {
        let sources = load_seed_file(seed_file).map_err(startup_error)?;
        let added = catalog.seed(&sources).map_err(startup_error)?;
        info!(
            "Seeded {} new sources from {} ({} in file)",
            added,
            seed_file.display(),
            sources.len()
        );
    }

    let mix_state = MixState::new(Arc::new(catalog), config.rng_seed);

    info!("Server running at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(services::cors())
            .wrap(Logger::default())
            .app_data(web::Data::new(mix_state.clone()))
            .service(services::mix::configure_routes())
            .service(services::health::configure_routes())
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
