//! 统一错误处理模块
//!
//! 定义应用级错误类型，并实现 axum 的 IntoResponse trait，错误到 HTTP 状态码的映射只在这里进行。

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::services::RelayError;

/// 应用错误枚举
#[derive(Error, Debug)]
pub enum AppError {
    /// 文本生成后端调用失败
    #[error(transparent)]
    Relay(#[from] RelayError),

    /// 请求体无法解析
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
}

impl AppError {
    /// 对应的 HTTP 状态码
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Relay(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidBody(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();

        if let AppError::InvalidBody(_) = &self {
            warn!("Rejected request body: status={}, detail={}", status, detail);
        }

        let body = Json(json!({
            "detail": detail
        }));

        (status, body).into_response()
    }
}

/// 便捷类型别名
pub type AppResult<T> = Result<T, AppError>;
