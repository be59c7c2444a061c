//! URL 构建与错误体解析工具

use serde::Deserialize;

/// 修复 base_url
///
/// - 移除末尾斜杠
/// - 修复双斜杠（保留协议部分）
pub fn fix_base_url(base_url: &str) -> String {
    let mut url = base_url.trim().trim_end_matches('/').to_string();

    if let Some(pos) = url.find("://") {
        let (protocol, rest) = url.split_at(pos + 3);
        let fixed_rest = rest.replace("//", "/");
        url = format!("{}{}", protocol, fixed_rest);
    }

    url
}

/// 规范化模型名称，`models/gemini-pro` 与 `gemini-pro` 等价
pub fn normalize_model_name(model: &str) -> &str {
    let model = model.trim();
    model.strip_prefix("models/").unwrap_or(model)
}

/// 构建 Gemini generateContent 端点
pub fn build_gemini_endpoint(base_url: &str, model: &str) -> String {
    let url = fix_base_url(base_url);
    let model = normalize_model_name(model);

    if url.ends_with("/v1beta") || url.ends_with("/v1") {
        format!("{}/models/{}:generateContent", url, model)
    } else {
        format!("{}/v1beta/models/{}:generateContent", url, model)
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// 从错误响应体中提取可读信息
///
/// Gemini 返回 `{"error": {"message": ..., "status": ...}}`，无法解析时原样返回（截断）。
pub fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(status) => format!("{} ({})", envelope.error.message, status),
            None => envelope.error.message,
        },
        Err(_) => {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "empty error body".to_string()
            } else {
                trimmed.chars().take(500).collect()
            }
        }
    }
}
