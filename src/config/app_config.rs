//! 应用配置管理
//!
//! 启动时从环境变量（以及可选的 `.env` 文件）加载一次配置，之后只读。

use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

/// API 密钥环境变量名
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// 未配置测试密钥时的占位文本
pub const NO_SECRET_PLACEHOLDER: &str = "No secret set";

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 缺少 API 密钥
    #[error("{0} not found in environment variables. Please set it in your .env file.")]
    MissingApiKey(&'static str),

    /// 监听地址无效
    #[error("invalid server host: {0}")]
    InvalidHost(String),

    /// 端口无效
    #[error("invalid server port: {0}")]
    InvalidPort(String),

    /// 超时时间无效
    #[error("invalid LLM timeout: {0}")]
    InvalidTimeout(String),

    /// CORS 来源无效
    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),
}

/// 应用配置结构体
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini API 密钥
    pub api_key: String,

    /// Gemini API 基础 URL
    pub base_url: String,

    /// 模型名称
    pub model: String,

    /// LLM 请求超时（秒）
    pub timeout_secs: u64,

    /// `/hello/{name}` 回显的测试密钥
    pub test_secret: Option<String>,

    /// 允许跨域访问的来源
    pub allowed_origins: Vec<String>,

    /// 监听地址
    pub host: IpAddr,

    /// 监听端口
    pub port: u16,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash-latest".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost".to_string(),
        "http://localhost:5173".to_string(),
    ]
}

fn default_host() -> IpAddr {
    IpAddr::from([127, 0, 0, 1])
}

fn default_port() -> u16 {
    8000
}

/// 读取非空的变量值
fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl AppConfig {
    /// 从进程环境加载配置
    ///
    /// 会先尝试加载当前目录下的 `.env` 文件，已存在的环境变量不会被覆盖。
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过任意键值查找函数加载配置
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key =
            non_empty(&lookup, API_KEY_VAR).ok_or(ConfigError::MissingApiKey(API_KEY_VAR))?;

        let base_url = non_empty(&lookup, "GEMINI_BASE_URL").unwrap_or_else(default_base_url);
        let model = non_empty(&lookup, "GEMINI_MODEL").unwrap_or_else(default_model);

        let timeout_secs = match non_empty(&lookup, "LLM_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => default_timeout_secs(),
        };

        // 与 API 密钥不同，测试密钥允许为空字符串
        let test_secret = lookup("MY_TEST_SECRET");

        let allowed_origins = match non_empty(&lookup, "CORS_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => default_allowed_origins(),
        };

        let host = match non_empty(&lookup, "SERVER_HOST") {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => default_host(),
        };

        let port = match non_empty(&lookup, "SERVER_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => default_port(),
        };

        Ok(Self {
            api_key,
            base_url,
            model,
            timeout_secs,
            test_secret,
            allowed_origins,
            host,
            port,
        })
    }

    /// 监听地址
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// 问候接口展示的密钥（未设置时为占位文本）
    pub fn secret_display(&self) -> &str {
        self.test_secret.as_deref().unwrap_or(NO_SECRET_PLACEHOLDER)
    }
}
