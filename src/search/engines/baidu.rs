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

//! Baidu 图片搜索引擎实现
//!
//! 抓取百度图片翻页版（flip）页面并从中恢复图片记录。
//! 该页面没有公开 API，支持两种互为备份的提取策略：
//!
//! - **JSON 策略（默认）**：页面的 `<script>` 块中内嵌一段
//!   `flip.setData('imgData', {...});` 调用，捕获其中的 JSON
//!   对象并读取 `data` 数组。
//! - **HTML 策略（回退）**：当内嵌 JSON 缺失或损坏时，直接按
//!   属性正则扫描整个文档，按序号位置配对三条属性流。
//!
//! ## 序号配对假设
//!
//! HTML 策略分别匹配 `fromPageTitle`、`objURL`、`thumbURL` 三条
//! 独立的属性流，第 i 个 objURL 与第 i 个标题、第 i 个缩略图配对，
//! 而不是按文档中的邻近程度配对。只有三类属性在文档中以相同的
//! 相对顺序和数量出现时结果才正确。该假设被隔离在本模块内，
//! 替换为逐块扫描不需要改动编排器。

use once_cell::sync::Lazy;
use regex::Regex;

use super::ImageSearchEngine;
use crate::search::types::{ImageQuery, ImageRecord, ParseMethod};

/// 匹配内嵌的 imgData JSON 对象，取第一个非贪婪匹配
static IMG_DATA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"flip\.setData\('imgData',\s*(\{.*?\})\s*\);").expect("valid regex")
});

/// 匹配来源页标题属性
static FROM_PAGE_TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""fromPageTitle":"([^"]+)""#).expect("valid regex"));

/// 匹配原图 URL 属性
static OBJ_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""objURL":"(https?://[^"]+)""#).expect("valid regex"));

/// 匹配缩略图 URL 属性
static THUMB_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""thumbURL":"(https?://[^"]+)""#).expect("valid regex"));

/// Baidu 图片搜索引擎
#[derive(Debug, Default)]
pub struct BaiduImagesEngine;

impl BaiduImagesEngine {
    /// 创建新的 Baidu 图片引擎实例
    pub fn new() -> Self {
        Self
    }

    /// JSON 策略：提取内嵌的 imgData 对象
    ///
    /// 正则无匹配或 JSON 解析失败都降级为空序列，不向上传播。
    /// 缺失字段填空字符串，与上游页面自身的占位行为一致。
    fn extract_from_json(html: &str, max_images: usize) -> Vec<ImageRecord> {
        let Some(caps) = IMG_DATA_RE.captures(html) else {
            return Vec::new();
        };
        let Some(raw) = caps.get(1) else {
            return Vec::new();
        };

        let img_data: serde_json::Value = match serde_json::from_str(raw.as_str()) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!("Baidu imgData JSON 解析失败: {}", e);
                return Vec::new();
            }
        };

        let Some(items) = img_data.get("data").and_then(|d| d.as_array()) else {
            return Vec::new();
        };

        items
            .iter()
            .take(max_images)
            .enumerate()
            .map(|(i, item)| ImageRecord {
                index: i + 1,
                title: Some(Self::str_field(item, "fromPageTitle")),
                url: Some(Self::str_field(item, "objURL")),
                thumb_url: Some(Self::str_field(item, "thumbURL")),
            })
            .collect()
    }

    /// HTML 策略：按序号位置配对三条属性流
    ///
    /// 以 objURL 流为主序列截断到上限；某个位置缺少标题或
    /// 缩略图时该字段为 null，记录本身不会被丢弃。
    fn extract_from_html(html: &str, max_images: usize) -> Vec<ImageRecord> {
        let titles: Vec<String> = Self::capture_all(&FROM_PAGE_TITLE_RE, html);
        let obj_urls: Vec<String> = Self::capture_all(&OBJ_URL_RE, html);
        let thumb_urls: Vec<String> = Self::capture_all(&THUMB_URL_RE, html);

        obj_urls
            .into_iter()
            .take(max_images)
            .enumerate()
            .map(|(i, url)| ImageRecord {
                index: i + 1,
                title: titles.get(i).cloned(),
                url: Some(url),
                thumb_url: thumb_urls.get(i).cloned(),
            })
            .collect()
    }

    /// 收集正则第一个捕获组的全部匹配
    fn capture_all(re: &Regex, html: &str) -> Vec<String> {
        re.captures_iter(html)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    /// 读取字符串字段，缺失时返回空字符串
    fn str_field(item: &serde_json::Value, key: &str) -> String {
        item.get(key)
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string()
    }
}

impl ImageSearchEngine for BaiduImagesEngine {
    fn name(&self) -> &'static str {
        "baidu"
    }

    fn build_url(&self, keyword: &str) -> String {
        format!(
            "https://image.baidu.com/search/flip?tn=baiduimage&word={}",
            urlencoding::encode(keyword)
        )
    }

    fn extract(&self, body: &str, query: &ImageQuery) -> Vec<ImageRecord> {
        match query.parse_method {
            ParseMethod::Json => Self::extract_from_json(body, query.max_images),
            ParseMethod::Html => Self::extract_from_html(body, query.max_images),
        }
    }
}
