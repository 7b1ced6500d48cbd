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

//! Bing 图片搜索引擎实现
//!
//! Bing 图片结果页中每张图片对应一个带 `class="iusc"` 标记的元素，
//! 其 `m="…"` 属性值是经过 HTML 实体和反斜杠转义的 JSON 对象，
//! 携带原图（murl）、缩略图（turl）和标题（t/desc）元数据。
//!
//! 反转义顺序是敏感的，见 [`BingImagesEngine::decode_metadata`]。

use once_cell::sync::Lazy;
use regex::Regex;

use super::ImageSearchEngine;
use crate::search::types::{ImageQuery, ImageRecord};

/// 标题缺失时的占位文本
const TITLE_PLACEHOLDER: &str = "Bing Image";

/// 匹配 iusc 元素的 m 属性，属性值内的引号以 &quot; 转义，
/// 因此 `[^"]+` 不会提前终止
static IUSC_META_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"class="iusc"[^>]*?m="([^"]+)""#).expect("valid regex"));

/// Bing 图片搜索引擎
#[derive(Debug, Default)]
pub struct BingImagesEngine;

impl BingImagesEngine {
    /// 创建新的 Bing 图片引擎实例
    pub fn new() -> Self {
        Self
    }

    /// 反转义 m 属性中的 JSON 字符串
    ///
    /// 三步替换的顺序不可调换：
    /// 1. `&quot;` → `"`，必须先于斜杠替换，否则 JSON 提前终止；
    /// 2. `\u002f` → `/`；
    /// 3. `\\` → `\`，必须最后执行，否则会在 unicode 转义标记
    ///    被消费之前破坏它，含字面反斜杠的载荷会静默损坏。
    fn decode_metadata(raw: &str) -> String {
        raw.replace("&quot;", "\"")
            .replace("\\u002f", "/")
            .replace("\\\\", "\\")
    }

    /// 按文档顺序扫描 iusc 元数据块并产出记录
    ///
    /// 单个块解析失败只跳过该块；序号按产出顺序编号，
    /// 跳过的块不会造成缺口。凑满上限后停止扫描，
    /// 大文档的提取成本由此封顶。
    fn extract_records(html: &str, max_images: usize) -> Vec<ImageRecord> {
        let mut records = Vec::new();

        for caps in IUSC_META_RE.captures_iter(html) {
            if records.len() >= max_images {
                break;
            }

            let Some(raw) = caps.get(1) else {
                continue;
            };
            let decoded = Self::decode_metadata(raw.as_str());

            let meta: serde_json::Value = match serde_json::from_str(&decoded) {
                Ok(value) => value,
                Err(_) => continue,
            };

            // 原图和缩略图同时存在才产出记录
            let murl = Self::non_empty_str(&meta, "murl");
            let turl = Self::non_empty_str(&meta, "turl");
            let (Some(murl), Some(turl)) = (murl, turl) else {
                continue;
            };

            let title = Self::non_empty_str(&meta, "t")
                .or_else(|| Self::non_empty_str(&meta, "desc"))
                .unwrap_or_else(|| TITLE_PLACEHOLDER.to_string());

            records.push(ImageRecord {
                index: records.len() + 1,
                title: Some(title),
                url: Some(murl),
                thumb_url: Some(turl),
            });
        }

        records
    }

    /// 读取非空字符串字段
    fn non_empty_str(meta: &serde_json::Value, key: &str) -> Option<String> {
        meta.get(key)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
    }
}

impl ImageSearchEngine for BingImagesEngine {
    fn name(&self) -> &'static str {
        "bing"
    }

    fn build_url(&self, keyword: &str) -> String {
        format!(
            "https://www.bing.com/images/search?q={}&form=HDRSC3&first=1",
            urlencoding::encode(keyword)
        )
    }

    fn extract(&self, body: &str, query: &ImageQuery) -> Vec<ImageRecord> {
        Self::extract_records(body, query.max_images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 构造一个 iusc 块，m 属性值按上游格式转义
    fn iusc_block(escaped_meta: &str) -> String {
        format!(r#"<a class="iusc" style="height:180px" m="{}"></a>"#, escaped_meta)
    }

    #[test]
    fn test_decode_metadata_order() {
        // 引号先还原，斜杠其次，反斜杠折叠最后
        let raw = r"{&quot;murl&quot;:&quot;https://a.com/1.jpg&quot;}";
        let decoded = BingImagesEngine::decode_metadata(raw);
        assert_eq!(decoded, r#"{"murl":"https://a.com/1.jpg"}"#);
    }

    #[test]
    fn test_decode_metadata_unicode_slash() {
        let raw = r"{&quot;turl&quot;:&quot;https:\u002f\u002ft.com\u002f1.jpg&quot;}";
        let decoded = BingImagesEngine::decode_metadata(raw);
        assert_eq!(decoded, r#"{"turl":"https://t.com/1.jpg"}"#);
    }

    #[test]
    fn test_decode_metadata_collapses_backslashes_last() {
        // 字面反斜杠以 \\ 转义，必须在斜杠替换之后折叠
        let raw = r"{&quot;t&quot;:&quot;a\\b&quot;}";
        let decoded = BingImagesEngine::decode_metadata(raw);
        assert_eq!(decoded, r#"{"t":"a\b"}"#);
    }

    #[test]
    fn test_extract_basic_record() {
        let html = iusc_block(
            r"{&quot;murl&quot;:&quot;https://a.com/1.jpg&quot;,&quot;turl&quot;:&quot;https://t.com/1.jpg&quot;,&quot;t&quot;:&quot;风景&quot;}",
        );
        let records = BingImagesEngine::extract_records(&html, 60);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].index, 1);
        assert_eq!(records[0].title.as_deref(), Some("风景"));
        assert_eq!(records[0].url.as_deref(), Some("https://a.com/1.jpg"));
        assert_eq!(records[0].thumb_url.as_deref(), Some("https://t.com/1.jpg"));
    }

    #[test]
    fn test_extract_skips_malformed_and_renumbers() {
        // 中间一块是损坏的 JSON，前后两块有效
        let html = format!(
            "{}{}{}",
            iusc_block(r"{&quot;murl&quot;:&quot;https://a.com/1.jpg&quot;,&quot;turl&quot;:&quot;https://t.com/1.jpg&quot;}"),
            iusc_block(r"{&quot;murl&quot;:&quot;https://a.com/bad.jpg&quot;,"),
            iusc_block(r"{&quot;murl&quot;:&quot;https://a.com/3.jpg&quot;,&quot;turl&quot;:&quot;https://t.com/3.jpg&quot;}"),
        );
        let records = BingImagesEngine::extract_records(&html, 60);

        assert_eq!(records.len(), 2);
        // 序号按产出顺序编号，跳过的块不留缺口
        assert_eq!(records[0].index, 1);
        assert_eq!(records[1].index, 2);
        assert_eq!(records[1].url.as_deref(), Some("https://a.com/3.jpg"));
    }

    #[test]
    fn test_extract_requires_both_urls() {
        let html = format!(
            "{}{}",
            iusc_block(r"{&quot;murl&quot;:&quot;https://a.com/1.jpg&quot;}"),
            iusc_block(r"{&quot;turl&quot;:&quot;https://t.com/2.jpg&quot;}"),
        );
        let records = BingImagesEngine::extract_records(&html, 60);
        assert!(records.is_empty());
    }

    #[test]
    fn test_extract_title_fallback_chain() {
        // t 为空串时回退到 desc，两者都缺失时使用占位文本
        let html = format!(
            "{}{}",
            iusc_block(r"{&quot;murl&quot;:&quot;https://a.com/1.jpg&quot;,&quot;turl&quot;:&quot;https://t.com/1.jpg&quot;,&quot;t&quot;:&quot;&quot;,&quot;desc&quot;:&quot;描述&quot;}"),
            iusc_block(r"{&quot;murl&quot;:&quot;https://a.com/2.jpg&quot;,&quot;turl&quot;:&quot;https://t.com/2.jpg&quot;}"),
        );
        let records = BingImagesEngine::extract_records(&html, 60);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title.as_deref(), Some("描述"));
        assert_eq!(records[1].title.as_deref(), Some("Bing Image"));
    }

    #[test]
    fn test_extract_stops_at_cap() {
        let block = iusc_block(
            r"{&quot;murl&quot;:&quot;https://a.com/x.jpg&quot;,&quot;turl&quot;:&quot;https://t.com/x.jpg&quot;}",
        );
        let html = block.repeat(5);
        let records = BingImagesEngine::extract_records(&html, 3);

        assert_eq!(records.len(), 3);
        let indices: Vec<usize> = records.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_extract_no_marker_returns_empty() {
        let records = BingImagesEngine::extract_records("<html><body>nothing</body></html>", 60);
        assert!(records.is_empty());
    }

    #[test]
    fn test_build_url_encodes_keyword() {
        let engine = BingImagesEngine::new();
        let url = engine.build_url("cute cats");

        assert_eq!(
            url,
            "https://www.bing.com/images/search?q=cute%20cats&form=HDRSC3&first=1"
        );
    }
}
