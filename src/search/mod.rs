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

//! 搜索模块
//!
//! 包含图片搜索引擎实现和提取编排器

pub mod engines;
pub mod on;
pub mod types;

pub use engines::ImageSearchEngine;
pub use on::SearchInterface;
pub use types::{ImageQuery, ImageRecord, ParseMethod};
