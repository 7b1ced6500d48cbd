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

//! 搜索处理器
//!
//! 处理图片搜索 API 请求。校验失败在这里直接应答，
//! 不会触发任何上游调用。

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::api::on::ApiState;
use crate::api::types::{ApiEnvelope, ApiImageSearchRequest};
use crate::search::types::ImageRecord;

/// 搜索成功时的载荷：引擎名称到记录序列的映射
type SearchData = HashMap<String, Vec<ImageRecord>>;

/// 处理 GET 搜索请求
pub async fn handle_search(
    State(state): State<ApiState>,
    Query(params): Query<ApiImageSearchRequest>,
) -> Response {
    // 关键词缺失：422，不发起上游调用
    let Some(query) = params.to_image_query() else {
        let envelope = ApiEnvelope::<SearchData>::failure(422, "缺少必填参数");
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(envelope)).into_response();
    };

    match execute_search(&state, query).await {
        Ok(data) => (StatusCode::OK, Json(ApiEnvelope::success(data))).into_response(),
        Err(e) => {
            tracing::error!("搜索请求处理失败: {}", e);
            let envelope = ApiEnvelope::<SearchData>::failure(500, "服务器内部错误");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope)).into_response()
        }
    }
}

/// 执行搜索
///
/// 单引擎的失败已在编排器内部降级为空序列；
/// 这里的 Err 只覆盖装配阶段的意外错误
async fn execute_search(
    state: &ApiState,
    query: crate::search::types::ImageQuery,
) -> Result<SearchData, Box<dyn std::error::Error + Send + Sync>> {
    Ok(state.search.search(&query).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::on::ApiInterface;
    use crate::error::Result;
    use crate::net::client::ContentFetcher;
    use crate::search::SearchInterface;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    /// 记录调用次数并返回固定正文的桩抓取器
    struct CountingFetcher {
        calls: Arc<AtomicUsize>,
        body: String,
    }

    #[async_trait]
    impl ContentFetcher for CountingFetcher {
        async fn fetch_text(&self, _url: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.body.clone())
        }
    }

    fn test_router(body: &str) -> (axum::Router, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let fetcher = Arc::new(CountingFetcher {
            calls: Arc::clone(&calls),
            body: body.to_string(),
        });
        let search = Arc::new(SearchInterface::new(fetcher));
        let api = ApiInterface::new(search, "test".to_string());
        (api.build_router(), calls)
    }

    async fn response_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("valid JSON body")
    }

    #[tokio::test]
    async fn test_missing_keyword_returns_422_without_upstream_calls() {
        let (router, calls) = test_router("");

        let response = router
            .oneshot(Request::get("/api/search").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = response_json(response).await;
        assert_eq!(json["code"], 422);
        assert!(json["data"].is_null());
        // 校验失败不应触发任何抓取
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_keyword_is_rejected() {
        let (router, calls) = test_router("");

        let response = router
            .oneshot(Request::get("/api/search?q=").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_search_returns_envelope_with_both_engines() {
        // 正文对两个引擎都不可解析，结果应是两个空列表
        let (router, calls) = test_router("<html>no data</html>");

        let response = router
            .oneshot(
                Request::get("/api/search?q=cat&max=5")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["code"], 200);
        assert_eq!(json["message"], "success");
        assert!(json["data"]["baidu"].as_array().expect("baidu list").is_empty());
        assert!(json["data"]["bing"].as_array().expect("bing list").is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_search_extracts_bing_records() {
        let body = r#"<a class="iusc" m="{&quot;murl&quot;:&quot;https://b.com/1.jpg&quot;,&quot;turl&quot;:&quot;https://bt.com/1.jpg&quot;,&quot;t&quot;:&quot;图&quot;}"></a>"#;
        let (router, _calls) = test_router(body);

        let response = router
            .oneshot(
                Request::get("/api/search?q=cat").body(Body::empty()).expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        let bing = json["data"]["bing"].as_array().expect("bing list");
        assert_eq!(bing.len(), 1);
        assert_eq!(bing[0]["index"], 1);
        assert_eq!(bing[0]["url"], "https://b.com/1.jpg");
        assert_eq!(bing[0]["thumbURL"], "https://bt.com/1.jpg");
    }
}
