//! Web 路由处理器
//!
//! 每个处理器调用共享的 `Client`，并把错误映射为 HTTP 状态码

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};

use crate::core::ProcessError;
use crate::models::{AutocompletionItem, Example, ExternalSource, Lemma, SearchResult};
use crate::web::types::{AppState, AutocompletionParams, ErrorResponse, SearchParams};

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(error: ProcessError) -> ApiError {
    let status = match error {
        ProcessError::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::warn!("Request failed: {}", error);
    }

    (
        status,
        Json(ErrorResponse {
            message: error.message(),
        }),
    )
}

async fn search(state: &AppState, params: SearchParams) -> Result<SearchResult, ApiError> {
    state
        .client
        .process_search(
            &params.query,
            params.src,
            params.dst,
            params.guess_direction,
            params.follow_corrections,
        )
        .await
        .map_err(error_response)
}

/// 查询词条及其翻译
pub async fn translations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Lemma>>, ApiError> {
    Ok(Json(search(&state, params).await?.lemmas))
}

/// 查询短语例句
pub async fn examples(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Example>>, ApiError> {
    Ok(Json(search(&state, params).await?.examples))
}

/// 查询外部来源（未经核实）的例句
pub async fn external_sources(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<ExternalSource>>, ApiError> {
    Ok(Json(search(&state, params).await?.external_sources))
}

/// 自动补全
pub async fn autocompletions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AutocompletionParams>,
) -> Result<Json<Vec<AutocompletionItem>>, ApiError> {
    state
        .client
        .process_autocompletions(&params.query, params.src, params.dst)
        .await
        .map(|result| Json(result.autocompletions))
        .map_err(error_response)
}
