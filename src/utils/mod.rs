//! # 工具模块
//!
//! 这个模块包含各种工具函数和实用程序：
//!
//! - 支持的语言代码及其 Linguee 名称
//! - 搜索和自动补全 URL 的构建
//!
//! # 模块组织
//!
//! - `languages` - 语言代码解析与校验
//! - `url` - 请求 URL 构建

pub mod languages;
pub mod url;

// Re-export commonly used items for convenience
pub use languages::{LanguageCode, UnknownLanguage};
pub use self::url::{audio_url, autocompletions_url, search_url, LINGUEE_BASE_URL};
