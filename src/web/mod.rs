//! Web 服务器模块
//!
//! 以 HTTP 接口提供词典查询与自动补全

pub mod config;
pub mod handlers;
pub mod routes;
pub mod types;

pub use config::*;
pub use handlers::*;
pub use routes::*;
pub use types::*;

use std::io;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::client::Client;

/// Web 服务器
pub struct WebServer {
    config: WebConfig,
    client: Client,
}

impl WebServer {
    /// 创建新的 Web 服务器
    pub fn new(config: WebConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// 启动 Web 服务器
    pub async fn start(self) -> io::Result<()> {
        let address = self.config.address();
        let app = create_router(Arc::new(AppState {
            client: self.client,
        }));

        let listener = tokio::net::TcpListener::bind(&address).await?;
        tracing::info!("Web server starting at http://{}", address);

        axum::serve(listener, app).await
    }
}

/// 创建路由器
pub fn create_router(app_state: Arc<AppState>) -> Router {
    create_routes()
        .with_state(app_state)
        .layer(CorsLayer::permissive())
}
