//! LLM 模块
//!
//! 提供文本生成后端的抽象以及 Gemini API 的实现。

mod client;
mod format;
mod gemini;
mod types;

pub use client::LlmClient;
pub use types::*;

use async_trait::async_trait;

/// 文本生成后端
///
/// 输入一段提示词，返回一段完整的生成文本。
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// 发送提示词并等待完整响应
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// 当前使用的模型名称
    fn model(&self) -> &str;
}
