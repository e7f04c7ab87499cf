use utoipa::OpenApi;

/// OpenAPI docs for the REST side of the service. The GraphQL schema documents
/// itself through GraphiQL at `GET /graphql`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Task Manager API",
        version = "1.0.0",
        description = "Operational endpoints of the Task Manager API.\n\n**GraphQL:** `POST /graphql` serves users and their tasks; open `GET /graphql` for the GraphiQL explorer."
    ),
    paths(
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check and counters for monitoring service status."),
    )
)]
pub struct ApiDoc;
