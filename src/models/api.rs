//! REST API 请求/响应模型
//!
//! 字段名与前端约定一致，不做大小写转换。

use serde::{Deserialize, Serialize};

/// 代码解释请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainCodeRequest {
    pub code: String,
    pub language: String,
}

/// 错误分析请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorAnalysisRequest {
    pub code: String,
    pub language: String,
    pub error_message: String,
}

/// 改进建议请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsRequest {
    pub code: String,
    pub language: String,
    /// 用户想要实现的目标，可省略
    #[serde(default)]
    pub problem_description: String,
}

/// 代码解释响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainCodeResponse {
    pub explanation: String,
    pub received_code: String,
    pub received_language: String,
}

impl ExplainCodeResponse {
    pub fn new(explanation: String, req: ExplainCodeRequest) -> Self {
        Self {
            explanation,
            received_code: req.code,
            received_language: req.language,
        }
    }
}

/// 错误分析响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorAnalysisResponse {
    pub explanation: String,
    pub received_code: String,
    pub received_language: String,
    pub received_error_message: String,
}

impl ErrorAnalysisResponse {
    pub fn new(explanation: String, req: ErrorAnalysisRequest) -> Self {
        Self {
            explanation,
            received_code: req.code,
            received_language: req.language,
            received_error_message: req.error_message,
        }
    }
}

/// 改进建议响应（沿用 explanation 字段名）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub explanation: String,
    pub received_code: String,
    pub received_language: String,
    pub received_problem_description: String,
}

impl SuggestionsResponse {
    pub fn new(explanation: String, req: SuggestionsRequest) -> Self {
        Self {
            explanation,
            received_code: req.code,
            received_language: req.language,
            received_problem_description: req.problem_description,
        }
    }
}

/// 单条消息响应
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// 连通性测试响应
#[derive(Debug, Serialize)]
pub struct ApiMessageResponse {
    pub api_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_problem_description_defaults_to_empty() {
        let req: SuggestionsRequest =
            serde_json::from_value(json!({"code": "x", "language": "go"})).unwrap();
        assert_eq!(req.problem_description, "");
    }

    #[test]
    fn test_error_message_is_required() {
        let result = serde_json::from_value::<ErrorAnalysisRequest>(json!({
            "code": "x",
            "language": "go"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_response_field_names() {
        let resp = SuggestionsResponse::new(
            "text".to_string(),
            SuggestionsRequest {
                code: "c".to_string(),
                language: "l".to_string(),
                problem_description: "p".to_string(),
            },
        );
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({
                "explanation": "text",
                "received_code": "c",
                "received_language": "l",
                "received_problem_description": "p"
            })
        );
    }
}
