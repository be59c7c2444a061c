//! LLM 类型定义

/// LLM 错误类型
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// HTTP 请求错误
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API 返回错误
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// 超时错误
    #[error("request timed out")]
    Timeout,

    /// 配置错误
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// JSON 解析错误
    #[error("failed to parse response: {0}")]
    JsonError(#[from] serde_json::Error),

    /// 提示词被安全策略拦截
    #[error("prompt was blocked by the model: {0}")]
    Blocked(String),

    /// 响应中没有文本内容
    #[error("model returned no text{}", .0.as_deref().map(|r| format!(" (finish reason: {r})")).unwrap_or_default())]
    EmptyResponse(Option<String>),
}

impl LlmError {
    /// 把 reqwest 错误中的超时单独归类
    pub fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::HttpError(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LlmError::ApiError {
            status: 429,
            message: "Resource has been exhausted".to_string(),
        };
        assert_eq!(err.to_string(), "API error (429): Resource has been exhausted");

        assert_eq!(
            LlmError::EmptyResponse(Some("SAFETY".to_string())).to_string(),
            "model returned no text (finish reason: SAFETY)"
        );
        assert_eq!(LlmError::EmptyResponse(None).to_string(), "model returned no text");
    }
}
