//! HTML解析和查询模块
//!
//! - `utils`: 文本规范化
//! - `dom`: 文档加载、选择器编译与文本提取

pub mod dom;
pub mod utils;

// 重新导出主要的公共 API
pub use dom::{
    decode_markup, get_node_all_text, get_node_attr, get_node_text, html_to_dom, parse_selector,
    SelectorError,
};
pub use utils::normalize_whitespace;
