//! Gemini LLM 客户端

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

use super::format::{build_gemini_endpoint, normalize_model_name};
use super::gemini::generate_content;
use super::types::LlmError;
use super::CompletionBackend;

/// Gemini 文本生成客户端
///
/// 启动时创建一次，之后在所有请求之间只读共享。
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl LlmClient {
    /// 创建新的 LLM 客户端
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        model: &str,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::ConfigError("API Key is required".to_string()));
        }

        let model = normalize_model_name(model);
        if model.is_empty() {
            return Err(LlmError::ConfigError("Model name is required".to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(LlmError::HttpError)?;

        let endpoint = build_gemini_endpoint(base_url, model);
        info!("LLM client ready: model={}, endpoint={}", model, endpoint);

        Ok(Self {
            client,
            api_key,
            endpoint,
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl CompletionBackend for LlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        generate_content(&self.client, &self.api_key, &self.endpoint, prompt).await
    }

    fn model(&self) -> &str {
        &self.model
    }
}
