// Copyright 2025 nostalgiatan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! API 外部接口模块
//!
//! 提供高层次的 HTTP API 接口供外部调用

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::search::SearchInterface;
use super::handlers::{handle_health, handle_search};
use super::middleware::create_cors_layer;

/// API 服务状态
#[derive(Clone)]
pub struct ApiState {
    /// 搜索接口
    pub search: Arc<SearchInterface>,
    /// 版本信息
    pub version: String,
}

/// API 接口
pub struct ApiInterface {
    /// 内部状态
    state: ApiState,
}

impl ApiInterface {
    /// 创建新的 API 接口
    pub fn new(search: Arc<SearchInterface>, version: String) -> Self {
        Self {
            state: ApiState { search, version },
        }
    }

    /// 构建路由器
    ///
    /// CORS 层负责应答 OPTIONS 预检，业务路由只注册 GET
    pub fn build_router(&self) -> Router {
        Router::new()
            // 搜索相关路由
            .route("/api/search", get(handle_search))
            .route("/search", get(handle_search))
            // 健康检查路由
            .route("/api/health", get(handle_health))
            .route("/health", get(handle_health))
            .with_state(self.state.clone())
            .layer(create_cors_layer())
            .layer(TraceLayer::new_for_http())
    }

    /// 启动服务器
    pub async fn serve(
        &self,
        config: &ServerConfig,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let app = self.build_router();
        let addr = format!("{}:{}", config.host, config.port);

        tracing::info!("服务器启动在: {}", addr);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
