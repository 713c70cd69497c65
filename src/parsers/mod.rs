//! # 解析器模块
//!
//! 将抓取到的 Linguee 页面解析为类型化记录：
//!
//! - HTML 解析、文本提取与 CSS 选择器
//! - 与站点无关的声明式提取模式解释器
//! - Linguee 搜索页与自动补全页的模式及转换函数
//!
//! # 模块组织
//!
//! - `html` - 文档加载、选择器编译、文本提取
//! - `schema` - 声明式提取模式（选择器、数量约束、回调、子节点）
//! - `linguee` - 更正/未找到检测以及页面模式

pub mod html;
pub mod linguee;
pub mod schema;

// Re-export commonly used items for convenience
pub use html::{html_to_dom, normalize_whitespace, parse_selector, SelectorError};
pub use linguee::{LingueeParser, PageParser};
pub use schema::{ExtractionError, Node, Quantity, Source};
