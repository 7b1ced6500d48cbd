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

//! API 类型定义模块
//!
//! 定义搜索请求参数和统一响应信封

use serde::{Deserialize, Serialize};

use crate::search::types::{ImageQuery, ParseMethod};

/// API 图片搜索请求
///
/// `max` 以字符串接收：非数字输入按默认值 60 处理，
/// 数字输入钳制到 [1, 60]，与上游 worker 的 parseInt 行为一致
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiImageSearchRequest {
    /// 搜索关键词（必需）
    pub q: Option<String>,

    /// 每个引擎的最大图片数量（可选，默认 60）
    pub max: Option<String>,

    /// Baidu 引擎的解析策略（可选，`html` 或 `json`，默认 `json`）
    pub method: Option<String>,
}

impl ApiImageSearchRequest {
    /// 获取非空关键词
    pub fn keyword(&self) -> Option<&str> {
        self.q.as_deref().filter(|s| !s.is_empty())
    }

    /// 转换为内部查询，关键词缺失时返回 None
    pub fn to_image_query(&self) -> Option<ImageQuery> {
        let keyword = self.keyword()?;
        Some(ImageQuery::new(
            keyword,
            ImageQuery::clamp_max(self.max.as_deref()),
            ParseMethod::from_param(self.method.as_deref()),
        ))
    }
}

/// 统一响应信封
///
/// `code` 与 HTTP 状态码一致，`time` 为服务器毫秒时间戳
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// 状态码
    pub code: u16,
    /// 状态描述
    pub message: String,
    /// 服务器时间戳（毫秒）
    pub time: i64,
    /// 载荷，失败时为 null
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            code: 200,
            message: "success".to_string(),
            time: chrono::Utc::now().timestamp_millis(),
            data: Some(data),
        }
    }

    /// 失败响应
    pub fn failure(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            time: chrono::Utc::now().timestamp_millis(),
            data: None,
        }
    }
}

/// API 健康检查响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiHealthResponse {
    /// 服务状态
    pub status: String,
    /// 版本号
    pub version: String,
    /// 已注册的引擎列表
    pub engines: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request: ApiImageSearchRequest =
            serde_json::from_str(r#"{"q": "cat"}"#).expect("deserialize");
        assert_eq!(request.keyword(), Some("cat"));

        let query = request.to_image_query().expect("query present");
        assert_eq!(query.max_images, 60);
        assert_eq!(query.parse_method, ParseMethod::Json);
    }

    #[test]
    fn test_request_missing_keyword() {
        let request = ApiImageSearchRequest::default();
        assert!(request.to_image_query().is_none());

        let request: ApiImageSearchRequest =
            serde_json::from_str(r#"{"q": ""}"#).expect("deserialize");
        assert!(request.to_image_query().is_none());
    }

    #[test]
    fn test_request_max_and_method() {
        let request: ApiImageSearchRequest =
            serde_json::from_str(r#"{"q": "cat", "max": "120", "method": "HTML"}"#)
                .expect("deserialize");

        let query = request.to_image_query().expect("query present");
        assert_eq!(query.max_images, 60);
        assert_eq!(query.parse_method, ParseMethod::Html);
    }

    #[test]
    fn test_request_non_numeric_max() {
        let request: ApiImageSearchRequest =
            serde_json::from_str(r#"{"q": "cat", "max": "abc"}"#).expect("deserialize");
        let query = request.to_image_query().expect("query present");
        assert_eq!(query.max_images, 60);
    }

    #[test]
    fn test_envelope_success() {
        let envelope = ApiEnvelope::success(vec![1, 2, 3]);
        assert_eq!(envelope.code, 200);
        assert_eq!(envelope.message, "success");
        assert!(envelope.time > 0);
        assert_eq!(envelope.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_envelope_failure_serializes_null_data() {
        let envelope: ApiEnvelope<Vec<u8>> = ApiEnvelope::failure(422, "缺少必填参数");
        let json = serde_json::to_value(&envelope).expect("serialize");

        assert_eq!(json["code"], 422);
        assert_eq!(json["message"], "缺少必填参数");
        assert!(json["data"].is_null());
    }
}
