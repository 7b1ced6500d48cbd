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

//! 网络类型定义模块

use serde::{Deserialize, Serialize};

/// 网络配置
///
/// 上游引擎对请求头有反爬虫校验，默认值模拟桌面浏览器，
/// Referer 固定为百度首页（两个引擎都接受该来源）。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// User-Agent 请求头
    pub user_agent: String,
    /// Accept-Language 请求头
    pub accept_language: String,
    /// Referer 请求头
    pub referer: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: "Mozilla/5.0 (Windows NT 6.3; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/45.0.8263.533 Safari/537.36"
                .to_string(),
            accept_language: "zh,zh-CN;q=0.9".to_string(),
            referer: "https://www.baidu.com/".to_string(),
        }
    }
}

/// 单个引擎的抓取结果
///
/// 用显式的标签变体替代可空值，装配阶段必须分别处理两种情况
#[derive(Debug, Clone)]
pub enum EngineOutcome {
    /// 抓取成功，包含响应正文
    Fetched(String),
    /// 抓取失败（网络错误、超时或非 2xx 状态码），包含失败原因
    Unavailable(String),
}

impl EngineOutcome {
    /// 是否抓取成功
    pub fn is_fetched(&self) -> bool {
        matches!(self, EngineOutcome::Fetched(_))
    }
}
