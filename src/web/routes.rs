//! Web 路由定义

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::web::{handlers::*, types::AppState};

/// 创建路由结构
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/v2/translations", get(translations))
        .route("/api/v2/examples", get(examples))
        .route("/api/v2/external_sources", get(external_sources))
        .route("/api/v2/autocompletions", get(autocompletions))
}
