//! 欢迎与连通性测试端点

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::models::{ApiMessageResponse, MessageResponse};
use crate::state::AppState;

/// 欢迎信息
async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to CodeBuddy AI Backend!".to_string(),
    })
}

/// 问候，附带配置的测试密钥
async fn say_hello(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: format!(
            "Hello, {}! From the backend. Secret: {}",
            name, state.secret_display
        ),
    })
}

/// 前端连通性测试
async fn api_message() -> Json<ApiMessageResponse> {
    Json(ApiMessageResponse {
        api_message: "Hello from FastAPI backend! Your connection works!".to_string(),
    })
}

/// 创建通用路由
pub fn general_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(read_root))
        .route("/hello/:name", get(say_hello))
        .route("/api/message", get(api_message))
}
