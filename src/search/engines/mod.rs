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

//! 搜索引擎模块
//!
//! 包含所有图片搜索引擎实现

pub mod baidu;
pub mod bing;

// 统一导出引擎类型
pub use baidu::BaiduImagesEngine;
pub use bing::BingImagesEngine;

use crate::search::types::{ImageQuery, ImageRecord};

/// 图片搜索引擎接口
///
/// 每个引擎负责两件事：构造自己的上游 URL，
/// 以及把上游响应正文解析为图片记录序列。
/// 解析失败在引擎内部消化，统一降级为空序列。
pub trait ImageSearchEngine: Send + Sync {
    /// 引擎名称（作为响应数据的键）
    fn name(&self) -> &'static str;

    /// 构造上游搜索 URL，关键词需要 URL 编码
    fn build_url(&self, keyword: &str) -> String;

    /// 从响应正文提取图片记录
    fn extract(&self, body: &str, query: &ImageQuery) -> Vec<ImageRecord>;
}
