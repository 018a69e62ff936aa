use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};
use uuid::Uuid;

use crate::{
    analyzer,
    api::dtos::{AnalyzeRequest, ErrorResponse, HistoryQuery, MessageResponse},
    app_state::AppState,
    entities::AnalysisRecord,
    error::AppError,
    extractor, fetcher,
};

/// Effective text under this many characters is rejected before the
/// collaborator is ever invoked.
const MIN_EFFECTIVE_LENGTH: usize = 50;

#[utoipa::path(
    get,
    path = "/api/",
    tag = "meta",
    responses((status = 200, description = "Liveness message", body = MessageResponse))
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Fake News Detection API is running".to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/api/analyze",
    tag = "analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis completed", body = AnalysisRecord),
        (status = 400, description = "Missing or unusable input", body = ErrorResponse),
        (status = 500, description = "Analysis stage failed", body = ErrorResponse)
    )
)]
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisRecord>, AppError> {
    payload.validate().map_err(AppError::InvalidInput)?;

    // Effective text: raw content, or title+body derived from the URL.
    let effective_text = match payload.url.as_deref().filter(|u| !u.trim().is_empty()) {
        Some(url) => {
            let page = fetcher::fetch(url).await?;
            let extracted = extractor::extract(&page.body_utf8)?;
            format!("{}\n\n{}", extracted.title, extracted.text)
        }
        None => payload.content.clone().unwrap_or_default(),
    };

    if effective_text.trim().chars().count() < MIN_EFFECTIVE_LENGTH {
        return Err(AppError::InvalidInput(
            "Content is too short for meaningful analysis".to_string(),
        ));
    }

    let record = analyzer::analyze(
        state.analyst.as_ref(),
        &effective_text,
        payload.url.as_deref().filter(|u| !u.trim().is_empty()),
    )
    .await?;

    // Storage is a convenience, not a correctness requirement: a write
    // failure is logged and the computed record still goes to the caller.
    if let Err(err) = state.store.insert(&record).await {
        warn!(error = %err, id = %record.id, "failed to store analysis");
    }

    Ok(Json(record))
}

#[utoipa::path(
    get,
    path = "/api/history",
    tag = "analysis",
    params(("limit" = i64, Query, description = "Maximum number of records, default 20")),
    responses((status = 200, description = "Most recent analyses, newest first", body = [AnalysisRecord]))
)]
pub async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Json<Vec<AnalysisRecord>> {
    let limit = query.limit.max(0);
    match state.store.recent(limit).await {
        Ok(records) => Json(records),
        Err(err) => {
            // An unreachable store degrades to an empty history, not an error.
            error!(error = %err, "failed to fetch history");
            Json(Vec::new())
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/history/{id}",
    tag = "analysis",
    params(("id" = Uuid, Path, description = "Analysis record id")),
    responses(
        (status = 200, description = "Record deleted", body = MessageResponse),
        (status = 404, description = "No record with that id", body = ErrorResponse)
    )
)]
pub async fn delete_analysis(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.store.delete(id).await {
        Ok(true) => Json(MessageResponse {
            message: "Analysis deleted successfully".to_string(),
        })
        .into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Analysis not found".to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, %id, "failed to delete analysis");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to delete analysis".to_string(),
                }),
            )
                .into_response()
        }
    }
}
