use std::str::FromStr as _;

use axum::{
    http::{HeaderName, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::{
    api::{health_checks, jobs, pages},
    app::App,
    config::CorsConfig,
};

pub fn router(app: App) -> Router {
    let cors = cors_layer(&app.config.cors);

    Router::new()
        .route("/", get(pages::home))
        .route("/getjobs", get(jobs::get_jobs))
        .route(
            "/schedule",
            get(pages::schedule_form).post(jobs::schedule_job),
        )
        .route("/liveness", get(health_checks::ok))
        .route("/readiness", get(health_checks::readiness))
        .with_state(app)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|value| value == "*")
}

/// Builds the CORS layer; entries that are not valid header values are skipped.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if is_wildcard(&config.allowed_origins) {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(config.allowed_origins.iter().filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|_| warn!("Ignoring invalid CORS origin: {origin}"))
                .ok()
        }))
    };

    let methods = if is_wildcard(&config.allowed_methods) {
        AllowMethods::any()
    } else {
        AllowMethods::list(config.allowed_methods.iter().filter_map(|method| {
            Method::from_str(method)
                .inspect_err(|_| warn!("Ignoring invalid CORS method: {method}"))
                .ok()
        }))
    };

    let headers = if is_wildcard(&config.allowed_headers) {
        AllowHeaders::any()
    } else {
        AllowHeaders::list(config.allowed_headers.iter().filter_map(|header| {
            HeaderName::from_str(header)
                .inspect_err(|_| warn!("Ignoring invalid CORS header: {header}"))
                .ok()
        }))
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
}
