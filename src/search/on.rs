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

//! 搜索外部接口模块
//!
//! 提取编排器：对一次查询并发抓取所有引擎的上游页面，
//! 每个引擎的抓取一旦完成立即在各自任务内提取，互不等待。
//!
//! 失败隔离是强制的：单个引擎的抓取或提取失败只会让该引擎
//! 降级为空记录序列，绝不影响其他引擎的结果，也不会作为
//! 整体请求失败向上传播。

use std::collections::HashMap;
use std::sync::Arc;

use crate::net::client::ContentFetcher;
use crate::net::types::EngineOutcome;
use crate::search::engines::{BaiduImagesEngine, BingImagesEngine, ImageSearchEngine};
use crate::search::types::{ImageQuery, ImageRecord};

/// 搜索接口
///
/// 持有引擎列表和共享抓取器，自身无请求间可变状态，
/// 可以在并发请求间安全共享。
pub struct SearchInterface {
    /// 抓取器（生产环境为共享的 HttpClient，测试中为桩实现）
    fetcher: Arc<dyn ContentFetcher>,
    /// 已注册的引擎
    engines: Vec<Arc<dyn ImageSearchEngine>>,
}

impl SearchInterface {
    /// 使用默认引擎集合（Baidu + Bing）创建搜索接口
    pub fn new(fetcher: Arc<dyn ContentFetcher>) -> Self {
        Self::with_engines(
            fetcher,
            vec![
                Arc::new(BaiduImagesEngine::new()) as Arc<dyn ImageSearchEngine>,
                Arc::new(BingImagesEngine::new()) as Arc<dyn ImageSearchEngine>,
            ],
        )
    }

    /// 使用自定义引擎集合创建搜索接口
    pub fn with_engines(
        fetcher: Arc<dyn ContentFetcher>,
        engines: Vec<Arc<dyn ImageSearchEngine>>,
    ) -> Self {
        Self { fetcher, engines }
    }

    /// 并发执行图片搜索
    ///
    /// 为每个引擎派生一个任务：构造上游 URL、抓取、提取。
    /// 返回引擎名称到记录序列的映射，所有已注册引擎的键
    /// 都一定出现，失败的引擎对应空序列。
    pub async fn search(&self, query: &ImageQuery) -> HashMap<String, Vec<ImageRecord>> {
        let mut tasks = Vec::with_capacity(self.engines.len());

        for engine in &self.engines {
            let engine = Arc::clone(engine);
            let engine_name = engine.name();
            let fetcher = Arc::clone(&self.fetcher);
            let query = query.clone();

            let task = tokio::spawn(async move {
                let name = engine.name();
                let url = engine.build_url(&query.keyword);

                let outcome = match fetcher.fetch_text(&url).await {
                    Ok(body) => EngineOutcome::Fetched(body),
                    Err(e) => EngineOutcome::Unavailable(e.to_string()),
                };

                let records = match outcome {
                    EngineOutcome::Fetched(body) => engine.extract(&body, &query),
                    EngineOutcome::Unavailable(reason) => {
                        tracing::warn!("引擎 '{}' 不可用，降级为空结果: {}", name, reason);
                        Vec::new()
                    }
                };

                (name.to_string(), records)
            });

            tasks.push((engine_name, task));
        }

        let mut results = HashMap::new();
        for (name, task) in tasks {
            match task.await {
                Ok((name, records)) => {
                    results.insert(name, records);
                }
                Err(e) => {
                    // 任务本身失败与抓取失败同等对待
                    tracing::warn!("引擎 '{}' 任务失败: {}", name, e);
                    results.insert(name.to_string(), Vec::new());
                }
            }
        }

        results
    }

    /// 已注册的引擎名称列表
    pub fn engine_names(&self) -> Vec<&'static str> {
        self.engines.iter().map(|e| e.name()).collect()
    }
}
