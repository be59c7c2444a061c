//! 代码助手服务
//!
//! 把请求编译成 Prompt，调用一次文本生成后端，并把结果连同请求字段一起返回。

use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};
use uuid::Uuid;

use crate::llm::{CompletionBackend, LlmError};
use crate::models::{
    ErrorAnalysisRequest, ErrorAnalysisResponse, ExplainCodeRequest, ExplainCodeResponse,
    SuggestionsRequest, SuggestionsResponse,
};

use super::prompts::{analyze_error_prompt, explain_code_prompt, suggestions_prompt};

/// 助手操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistKind {
    Explain,
    AnalyzeError,
    Suggest,
}

impl AssistKind {
    /// 失败提示中使用的名称
    pub fn label(self) -> &'static str {
        match self {
            AssistKind::Explain => "explanation",
            AssistKind::AnalyzeError => "error analysis",
            AssistKind::Suggest => "suggestions",
        }
    }
}

impl fmt::Display for AssistKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 转发失败
#[derive(Debug, thiserror::Error)]
#[error("Failed to get {kind} from AI: {source}")]
pub struct RelayError {
    pub kind: AssistKind,
    #[source]
    pub source: LlmError,
}

/// 代码助手服务
#[derive(Clone)]
pub struct AssistService {
    backend: Arc<dyn CompletionBackend>,
}

impl AssistService {
    /// 创建新的助手服务
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// 当前后端使用的模型
    pub fn model(&self) -> &str {
        self.backend.model()
    }

    /// 解释代码
    pub async fn explain(&self, req: ExplainCodeRequest) -> Result<ExplainCodeResponse, RelayError> {
        let prompt = explain_code_prompt(&req.code, &req.language);
        let explanation = self.relay(AssistKind::Explain, &prompt).await?;
        Ok(ExplainCodeResponse::new(explanation, req))
    }

    /// 分析错误信息
    pub async fn analyze_error(
        &self,
        req: ErrorAnalysisRequest,
    ) -> Result<ErrorAnalysisResponse, RelayError> {
        let prompt = analyze_error_prompt(&req.code, &req.language, &req.error_message);
        let explanation = self.relay(AssistKind::AnalyzeError, &prompt).await?;
        Ok(ErrorAnalysisResponse::new(explanation, req))
    }

    /// 给出改进建议
    pub async fn suggest(&self, req: SuggestionsRequest) -> Result<SuggestionsResponse, RelayError> {
        let prompt = suggestions_prompt(&req.code, &req.language, Some(&req.problem_description));
        let explanation = self.relay(AssistKind::Suggest, &prompt).await?;
        Ok(SuggestionsResponse::new(explanation, req))
    }

    /// 调用一次后端并原样返回生成文本
    ///
    /// 不重试，不回退到其他模型。
    pub async fn relay(&self, kind: AssistKind, prompt: &str) -> Result<String, RelayError> {
        let request_id = Uuid::new_v4().to_string()[..8].to_string();
        let start = Instant::now();
        info!(
            "LLM relay started: id={}, kind={:?}, model={}, prompt_len={}",
            request_id,
            kind,
            self.backend.model(),
            prompt.len()
        );

        match self.backend.complete(prompt).await {
            Ok(text) => {
                info!(
                    "LLM relay completed: id={}, duration_ms={}, response_len={}",
                    request_id,
                    start.elapsed().as_millis(),
                    text.len()
                );
                Ok(text)
            }
            Err(source) => {
                error!(
                    "LLM relay failed: id={}, duration_ms={}, error={}",
                    request_id,
                    start.elapsed().as_millis(),
                    source
                );
                Err(RelayError { kind, source })
            }
        }
    }
}
