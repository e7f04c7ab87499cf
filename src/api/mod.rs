pub mod graphql;
pub mod health;
pub mod metrics;
pub mod swagger;

use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Registers every route of the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    let openapi = swagger::ApiDoc::openapi();

    cfg.service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
        .route("/health", web::get().to(health::health_check))
        .route("/metrics", web::get().to(metrics::get_metrics))
        .service(
            web::resource("/graphql")
                .route(web::post().to(graphql::graphql_handler))
                .route(web::get().to(graphql::graphiql)),
        );
}
