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

//! HTTP 客户端模块
//!
//! 对 reqwest 的薄封装，携带固定的浏览器伪装请求头。
//! [`ContentFetcher`] trait 是编排器与网络层之间的接缝，
//! 测试时可以用桩实现替换真实客户端。

use async_trait::async_trait;
use std::time::Duration;

use crate::error::{Result, network_error};
use crate::net::types::NetworkConfig;

/// 原始内容抓取接口
///
/// 对一个上游 URL 执行一次 GET 请求并返回正文文本。
/// 失败以 `Err` 返回，不重试。
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// 抓取 URL 对应的正文文本
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// HTTP 客户端
///
/// 所有引擎共享同一个实例以复用连接池
pub struct HttpClient {
    client: reqwest::Client,
    config: NetworkConfig,
}

impl HttpClient {
    /// 创建新的 HTTP 客户端
    pub fn new(config: NetworkConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| network_error(format!("创建 HTTP 客户端失败: {}", e)))?;

        Ok(Self { client, config })
    }

    /// 获取网络配置
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }
}

#[async_trait]
impl ContentFetcher for HttpClient {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.config.user_agent)
            .header("Accept-Language", &self.config.accept_language)
            .header("Referer", &self.config.referer)
            .send()
            .await
            .map_err(|e| network_error(format!("请求失败: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(network_error(format!("HTTP 错误: {}", status)));
        }

        response
            .text()
            .await
            .map_err(|e| network_error(format!("读取响应失败: {}", e)))
    }
}
