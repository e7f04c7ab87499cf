mod api;
mod config;
mod database;
mod models;
mod schema;
mod services;
mod utils;
mod validators;

use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use config::{Settings, StoreBackend};
use database::{InMemoryStore, MongoDB, UserStore};
use dotenv::dotenv;
use services::UserService;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = Settings::from_env().map_err(std::io::Error::other)?;

    log::info!("🚀 Starting Task Manager API...");

    let store: Arc<dyn UserStore> = match settings.store_backend {
        StoreBackend::MongoDB => {
            log::info!("📊 Database: {} (MongoDB)", settings.database_name);
            let mongo = MongoDB::new(&settings.database_url, &settings.database_name);

            // Warm the connection; requests retry if MongoDB is not up yet
            if let Err(e) = mongo.connection().await {
                log::warn!("⚠️  MongoDB not reachable yet, will retry on first request: {}", e);
            }
            Arc::new(mongo)
        }
        StoreBackend::Memory => {
            log::warn!("⚠️  Using in-memory store, data is lost on restart");
            Arc::new(InMemoryStore::new())
        }
    };

    let service = UserService::new(store, settings.password_hash_cost);
    let schema = web::Data::new(schema::build_schema(service.clone()));
    let service = web::Data::new(service);

    let allowed_origins = settings.allowed_origins.clone();
    let bind_addr = (settings.host.clone(), settings.port);

    log::info!("🌐 Server starting on {}:{}", settings.host, settings.port);
    log::info!("🔎 GraphQL endpoint: http://{}:{}/graphql", settings.host, settings.port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", settings.host, settings.port);

    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
            .max_age(3600);

        App::new()
            .app_data(schema.clone())
            .app_data(service.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .configure(api::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
