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

//! 错误处理模块
//!
//! 提供便利的错误类型和辅助函数

/// 统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 网络层错误（连接失败、超时、非 2xx 状态码）
    #[error("网络错误: {0}")]
    Network(String),

    /// 内容解析错误（正则无匹配、JSON 解析失败）
    #[error("解析错误: {0}")]
    Parse(String),

    /// 配置错误（配置文件缺失或格式错误）
    #[error("配置错误: {0}")]
    Config(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, Error>;

/// 创建网络错误
pub fn network_error(message: impl Into<String>) -> Error {
    Error::Network(message.into())
}

/// 创建解析错误
pub fn parse_error(message: impl Into<String>) -> Error {
    Error::Parse(message.into())
}

/// 创建配置错误
pub fn config_error(message: impl Into<String>) -> Error {
    Error::Config(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = network_error("connection reset");
        assert_eq!(err.to_string(), "网络错误: connection reset");

        let err = parse_error("invalid JSON");
        assert_eq!(err.to_string(), "解析错误: invalid JSON");
    }
}
