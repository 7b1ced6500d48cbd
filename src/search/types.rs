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

//! 搜索类型定义模块
//!
//! 定义图片记录、查询和解析策略等核心数据结构

use serde::{Deserialize, Serialize};

/// 每个引擎返回的图片数量上限
pub const MAX_IMAGES_LIMIT: usize = 60;

/// 图片数量默认值
pub const MAX_IMAGES_DEFAULT: usize = 60;

/// 单条图片记录
///
/// `index` 按输出顺序从 1 开始连续编号，每个引擎独立计数。
/// Baidu JSON 路径缺失字段时填空字符串，HTML 路径填 null，
/// Bing 路径只在 `url` 和 `thumb_url` 同时存在时产出记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// 在所属引擎结果中的位置（从 1 开始）
    pub index: usize,
    /// 图片标题
    pub title: Option<String>,
    /// 原图 URL
    pub url: Option<String>,
    /// 缩略图 URL
    #[serde(rename = "thumbURL")]
    pub thumb_url: Option<String>,
}

/// Baidu 引擎的解析策略
///
/// Bing 引擎只有一种策略，不受该参数影响
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMethod {
    /// 解析页面内嵌的 imgData JSON（默认）
    #[default]
    Json,
    /// 按属性正则扫描 HTML 的回退策略
    Html,
}

impl ParseMethod {
    /// 从查询参数解析策略，大小写不敏感
    ///
    /// 只有 `html` 选择 HTML 策略，其余一律按 JSON 处理
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("html") => ParseMethod::Html,
            _ => ParseMethod::Json,
        }
    }
}

/// 图片搜索查询
#[derive(Debug, Clone)]
pub struct ImageQuery {
    /// 搜索关键词（非空）
    pub keyword: String,
    /// 每个引擎返回的最大图片数量，取值范围 [1, 60]
    pub max_images: usize,
    /// Baidu 引擎的解析策略
    pub parse_method: ParseMethod,
}

impl ImageQuery {
    /// 创建新的查询，`max_images` 会被钳制到合法范围
    pub fn new(keyword: impl Into<String>, max_images: usize, parse_method: ParseMethod) -> Self {
        Self {
            keyword: keyword.into(),
            max_images: max_images.clamp(1, MAX_IMAGES_LIMIT),
            parse_method,
        }
    }

    /// 从原始查询参数解析图片数量
    ///
    /// 非数字输入使用默认值，数字输入钳制到 [1, 60]
    pub fn clamp_max(raw: Option<&str>) -> usize {
        raw.and_then(|v| v.trim().parse::<i64>().ok())
            .map(|n| n.clamp(1, MAX_IMAGES_LIMIT as i64) as usize)
            .unwrap_or(MAX_IMAGES_DEFAULT)
    }
}
