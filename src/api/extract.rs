//! 自定义提取器

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON 请求体提取器，解析失败时返回 `{"detail": ...}` 格式的错误
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
