//! 服务层模块

mod assist_service;
pub mod prompts;

pub use assist_service::{AssistKind, AssistService, RelayError};
