//! Gemini generateContent API 实现

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::format::extract_error_message;
use super::types::LlmError;

/// Gemini 请求载荷
#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// Gemini 响应
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// 拼接第一个候选结果中的所有文本片段
    fn into_text(self) -> Result<String, LlmError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(match self.prompt_feedback.and_then(|f| f.block_reason) {
                Some(reason) => LlmError::Blocked(reason),
                None => LlmError::EmptyResponse(None),
            });
        };

        let texts: Vec<String> = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if texts.is_empty() {
            return Err(LlmError::EmptyResponse(candidate.finish_reason));
        }

        Ok(texts.concat())
    }
}

/// 调用 Gemini API，返回完整的生成文本
pub async fn generate_content(
    client: &Client,
    api_key: &str,
    endpoint: &str,
    prompt: &str,
) -> Result<String, LlmError> {
    let payload = GenerateContentRequest {
        contents: vec![Content {
            role: "user",
            parts: vec![RequestPart { text: prompt }],
        }],
    };

    debug!("Gemini API request: endpoint={}, prompt_len={}", endpoint, prompt.len());

    let response = client
        .post(endpoint)
        .header("x-goog-api-key", api_key)
        .json(&payload)
        .send()
        .await
        .map_err(LlmError::from_transport)?;

    let status = response.status();
    let body = response.text().await.map_err(LlmError::from_transport)?;

    if !status.is_success() {
        let status_code = status.as_u16();
        error!(
            "Gemini API error: status={}, body={}",
            status_code,
            body.chars().take(500).collect::<String>()
        );
        return Err(LlmError::ApiError {
            status: status_code,
            message: extract_error_message(&body),
        });
    }

    let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
    parsed.into_text()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<String, LlmError> {
        serde_json::from_str::<GenerateContentResponse>(body)
            .unwrap()
            .into_text()
    }

    #[test]
    fn test_request_payload_shape() {
        let payload = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: "hi" }],
            }],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"contents": [{"role": "user", "parts": [{"text": "hi"}]}]})
        );
    }

    #[test]
    fn test_concatenates_text_parts() {
        let body = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Hello, "}, {"text": "world"}]}, "finishReason": "STOP"},
                {"content": {"role": "model", "parts": [{"text": "ignored"}]}}
            ]
        }"#;
        assert_eq!(parse(body).unwrap(), "Hello, world");
    }

    #[test]
    fn test_blocked_prompt() {
        let body = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        assert!(matches!(parse(body), Err(LlmError::Blocked(reason)) if reason == "SAFETY"));
    }

    #[test]
    fn test_candidate_without_text() {
        let body = r#"{"candidates": [{"finishReason": "RECITATION"}]}"#;
        assert!(matches!(
            parse(body),
            Err(LlmError::EmptyResponse(Some(reason))) if reason == "RECITATION"
        ));

        assert!(matches!(parse("{}"), Err(LlmError::EmptyResponse(None))));
    }
}
