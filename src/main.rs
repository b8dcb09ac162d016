mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod routes;
mod services;
mod validators;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use std::path::PathBuf;

use crate::config::Config;
use crate::errors::dispatch::error_dispatcher;
use crate::services::{FileService, UploadPolicyRegistry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();

    // A bad upload policy is a deployment error; refuse to start.
    let registry = UploadPolicyRegistry::new(config.upload_max_bytes)
        .expect("invalid upload policy configuration");
    let file_service = web::Data::new(FileService::new(
        PathBuf::from(&config.upload_root_dir),
        registry,
    ));

    let server_addr = format!("{}:{}", config.server_host, config.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(error_dispatcher())
            .app_data(file_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(server_addr)?
    .run()
    .await
}
