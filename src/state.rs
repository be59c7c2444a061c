//! 应用状态管理
//!
//! 定义在请求处理器之间共享的只读状态。

use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::llm::{CompletionBackend, LlmClient, LlmError};
use crate::services::AssistService;

/// 应用共享状态
///
/// 启动时创建一次，之后不再修改，因此无需加锁
pub struct AppState {
    /// 代码助手服务
    pub assist: AssistService,
    /// `/hello/{name}` 展示的密钥
    pub secret_display: String,
}

impl AppState {
    /// 使用任意文本生成后端创建状态
    pub fn new(backend: Arc<dyn CompletionBackend>, secret_display: impl Into<String>) -> Self {
        Self {
            assist: AssistService::new(backend),
            secret_display: secret_display.into(),
        }
    }

    /// 根据配置创建 Gemini 后端与状态
    pub fn from_config(config: &AppConfig) -> Result<Self, LlmError> {
        let client = LlmClient::new(
            config.api_key.as_str(),
            &config.base_url,
            &config.model,
            Duration::from_secs(config.timeout_secs),
        )?;
        Ok(Self::new(Arc::new(client), config.secret_display()))
    }
}

/// 创建可共享的应用状态
pub fn create_shared_state(config: &AppConfig) -> Result<Arc<AppState>, LlmError> {
    AppState::from_config(config).map(Arc::new)
}
