use actix_web::HttpResponse;
use std::sync::atomic::{AtomicU64, Ordering};

static GRAPHQL_REQUEST_COUNT: AtomicU64 = AtomicU64::new(0);
static GRAPHQL_ERROR_COUNT: AtomicU64 = AtomicU64::new(0);

pub fn increment_request_count() {
    GRAPHQL_REQUEST_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn increment_error_count() {
    GRAPHQL_ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
}

fn render(requests: u64, errors: u64) -> String {
    format!(
        "# HELP graphql_requests_total Total number of GraphQL requests\n\
         # TYPE graphql_requests_total counter\n\
         graphql_requests_total {}\n\
         \n\
         # HELP graphql_errors_total Total number of GraphQL responses carrying errors\n\
         # TYPE graphql_errors_total counter\n\
         graphql_errors_total {}\n",
        requests, errors
    )
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "Prometheus text counters", body = String, content_type = "text/plain")
    )
)]
pub async fn get_metrics() -> HttpResponse {
    let requests = GRAPHQL_REQUEST_COUNT.load(Ordering::Relaxed);
    let errors = GRAPHQL_ERROR_COUNT.load(Ordering::Relaxed);

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(render(requests, errors))
}
