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

//! 配置模块
//!
//! 提供服务器、网络和搜索配置，支持从 TOML 文件加载

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, config_error};
use crate::net::types::NetworkConfig;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 主机地址
    pub host: String,
    /// 端口
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// 搜索配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// 默认最大图片数量（同时也是允许的上限）
    pub default_max_images: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_max_images: 60,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// 网络配置
    pub network: NetworkConfig,
    /// 搜索配置
    pub search: SearchConfig,
}

impl AppConfig {
    /// 从 TOML 文件加载配置
    ///
    /// 文件中未出现的字段使用默认值
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| config_error(format!("读取配置文件失败: {}", e)))?;
        toml::from_str(&content).map_err(|e| config_error(format!("配置文件格式错误: {}", e)))
    }

    /// 加载配置文件，文件不存在时回退到默认配置
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.exists() {
            match Self::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("配置加载失败，使用默认配置: {}", e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }
}
