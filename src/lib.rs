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

//! SeePic - 多引擎图片元搜索服务
//!
//! 对一次查询并发抓取 Baidu 和 Bing 的图片搜索结果页，
//! 用引擎各自的启发式提取器恢复结构化的图片记录，
//! 以统一的 JSON 信封返回每个引擎的记录列表。
//!
//! ## 模块结构
//!
//! - [`net`] - HTTP 客户端和抓取接口
//! - [`search`] - 引擎实现和提取编排器
//! - [`api`] - HTTP API 接口
//! - [`config`] - 配置
//! - [`error`] - 错误处理

pub mod api;
pub mod config;
pub mod error;
pub mod net;
pub mod search;

pub use api::ApiInterface;
pub use config::AppConfig;
pub use search::{ImageQuery, ImageRecord, ParseMethod, SearchInterface};
