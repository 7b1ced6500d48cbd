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

//! SeePic 服务入口

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use seepic_core::api::ApiInterface;
use seepic_core::config::AppConfig;
use seepic_core::net::client::HttpClient;
use seepic_core::search::SearchInterface;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 配置文件路径可通过第一个参数覆盖
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "seepic.toml".to_string());
    let config = AppConfig::load_or_default(&config_path);

    let client = Arc::new(HttpClient::new(config.network.clone())?);
    let search = Arc::new(SearchInterface::new(client));

    let api = ApiInterface::new(search, env!("CARGO_PKG_VERSION").to_string());
    api.serve(&config.server).await
}
