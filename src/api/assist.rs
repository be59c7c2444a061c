//! 代码助手端点

use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;
use tracing::info;

use super::extract::AppJson;
use crate::error::AppResult;
use crate::models::{
    ErrorAnalysisRequest, ErrorAnalysisResponse, ExplainCodeRequest, ExplainCodeResponse,
    SuggestionsRequest, SuggestionsResponse,
};
use crate::state::AppState;

/// 解释代码
async fn explain_code(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<ExplainCodeRequest>,
) -> AppResult<Json<ExplainCodeResponse>> {
    info!(
        "Explain request: language={}, code_len={}",
        req.language,
        req.code.len()
    );
    Ok(Json(state.assist.explain(req).await?))
}

/// 分析错误
async fn analyze_error(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<ErrorAnalysisRequest>,
) -> AppResult<Json<ErrorAnalysisResponse>> {
    info!(
        "Error analysis request: language={}, code_len={}, error_len={}",
        req.language,
        req.code.len(),
        req.error_message.len()
    );
    Ok(Json(state.assist.analyze_error(req).await?))
}

/// 获取改进建议
async fn get_suggestions(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<SuggestionsRequest>,
) -> AppResult<Json<SuggestionsResponse>> {
    info!(
        "Suggestions request: language={}, code_len={}, has_goal={}",
        req.language,
        req.code.len(),
        !req.problem_description.trim().is_empty()
    );
    Ok(Json(state.assist.suggest(req).await?))
}

/// 创建代码助手路由
pub fn assist_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/explain-code", post(explain_code))
        .route("/api/analyze-error", post(analyze_error))
        .route("/api/get-suggestions", post(get_suggestions))
}
