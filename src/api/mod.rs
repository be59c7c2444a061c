//! API 路由模块

mod assist;
mod extract;
mod general;
mod health;


pub use assist::assist_routes;
pub use general::general_routes;
pub use health::health_routes;

use axum::{http::HeaderValue, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;
use crate::state::AppState;
use std::sync::Arc;

/// 创建所有 API 路由
pub fn create_api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(general_routes())
        .merge(health_routes())
        .merge(assist_routes())
        .with_state(state)
}

/// 配置 CORS
///
/// 只允许白名单来源，允许携带凭证；方法和请求头按预检请求原样放行。
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, ConfigError> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// 组装完整应用
pub fn create_app(state: Arc<AppState>, cors: CorsLayer) -> Router {
    create_api_routes(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
