use std::any::Any;
use std::sync::Arc;

use axum::{
    http::{header, Method},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;

use super::{
    categories, channels, countries, error::internal_error_body, handlers,
    middleware::metrics_middleware, search,
};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Any origin may read the catalog; preflight requests are answered here
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/", get(handlers::index))
        // Health, config and metrics
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::metrics))
        // Search
        .route("/search", get(search::search))
        .route("/search/advanced", get(search::advanced_search))
        // Channels
        .route("/channels", get(channels::list_channels))
        .route("/channels/{id}", get(channels::get_channel))
        .route("/channel/{id}", get(channels::get_channel))
        .route("/country/{code}", get(channels::channels_by_country))
        // Aggregates
        .route("/countries", get(countries::list_countries))
        .route("/categories", get(categories::list_categories))
        .route_layer(middleware::from_fn(metrics_middleware))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Turn a handler panic into the standard 500 envelope.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Handler panicked: {}", detail);

    let (status, body) = internal_error_body("Internal server error");
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
