use crate::{api::metrics, schema::AppSchema, utils::error::BAD_USER_INPUT};
use actix_web::{http::StatusCode, web, HttpResponse};
use async_graphql::{http::GraphiQLSource, Response, Value};
use async_graphql_actix_web::GraphQLRequest;

/// Code attached to parse and validation failures of the query document itself
pub const GRAPHQL_VALIDATION_FAILED: &str = "GRAPHQL_VALIDATION_FAILED";

/// POST /graphql
pub async fn graphql_handler(schema: web::Data<AppSchema>, request: GraphQLRequest) -> HttpResponse {
    metrics::increment_request_count();

    let mut response = schema.execute(request.into_inner()).await;
    let status = response_status(&mut response);

    if response.is_err() {
        metrics::increment_error_count();
        log::debug!("GraphQL request finished with {} error(s), status {}", response.errors.len(), status);
    }

    HttpResponse::build(status).json(&response)
}

/// GET /graphql - GraphiQL explorer
pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Client errors answer 400, server errors stay 200 with the code in the payload.
fn response_status(response: &mut Response) -> StatusCode {
    // Errors without a path and without data never reached a resolver
    if response.data == Value::Null {
        for error in response
            .errors
            .iter_mut()
            .filter(|e| e.path.is_empty() && e.extensions.is_none())
        {
            error
                .extensions
                .get_or_insert_with(Default::default)
                .set("code", GRAPHQL_VALIDATION_FAILED);
        }
    }

    let client_error = response.errors.iter().any(|error| {
        matches!(
            error.extensions.as_ref().and_then(|ext| ext.get("code")),
            Some(Value::String(code)) if code == BAD_USER_INPUT || code == GRAPHQL_VALIDATION_FAILED
        )
    });

    if client_error {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    }
}
