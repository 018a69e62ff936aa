pub mod dtos;
pub mod handlers;

use crate::app_state::AppState;
use crate::entities::{
    AnalysisRecord, BiasAssessment, Classification, FakeNewsVerdict, SourceCredibility,
};
use axum::{
    Json, Router,
    http::HeaderValue,
    routing::{delete, get, post},
};
use dtos::{AnalyzeRequest, ErrorResponse, HistoryQuery, MessageResponse};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::root,
        handlers::analyze,
        handlers::history,
        handlers::delete_analysis,
        crate::health::health_check,
    ),
    components(schemas(
        AnalyzeRequest,
        HistoryQuery,
        ErrorResponse,
        MessageResponse,
        AnalysisRecord,
        FakeNewsVerdict,
        BiasAssessment,
        SourceCredibility,
        Classification,
    ))
)]
struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: `/api/*` endpoints, health probe,
/// request tracing and CORS from the configured origin list.
pub fn router(state: AppState, cors_origins: &str) -> Router {
    let api = Router::new()
        .route("/", get(handlers::root))
        .route("/analyze", post(handlers::analyze))
        .route("/history", get(handlers::history))
        .route("/history/{id}", delete(handlers::delete_analysis))
        .route("/openapi.json", get(openapi_json));

    Router::new()
        .nest("/api", api)
        .route("/healthz", get(crate::health::health_check))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(cors_origins: &str) -> CorsLayer {
    if cors_origins.trim() == "*" {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = cors_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
