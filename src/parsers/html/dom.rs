use encoding_rs::{Encoding, UTF_8};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// 无法编译的 CSS 选择器
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid selector \"{selector}\": {reason}")]
pub struct SelectorError {
    pub selector: String,
    pub reason: String,
}

/// 按字符集将字节解码为文本，未知字符集按 UTF-8 处理
pub fn decode_markup(data: &[u8], document_encoding: Option<&str>) -> String {
    let encoding = document_encoding
        .and_then(|label| Encoding::for_label(label.trim().as_bytes()))
        .unwrap_or(UTF_8);
    let (string, _, _) = encoding.decode(data);
    string.into_owned()
}

/// 将 HTML 文本转换为 DOM
pub fn html_to_dom(markup: &str) -> Html {
    Html::parse_document(markup)
}

/// 编译 CSS 选择器
pub fn parse_selector(selector: &str) -> Result<Selector, SelectorError> {
    Selector::parse(selector).map_err(|error| SelectorError {
        selector: selector.to_string(),
        reason: error.to_string(),
    })
}

/// 获取元素属性值
pub fn get_node_attr(element: &ElementRef, attr_name: &str) -> Option<String> {
    element.value().attr(attr_name).map(str::to_string)
}

/// 元素自身的文本（仅直接子文本节点）
pub fn get_node_text(element: &ElementRef) -> String {
    element
        .children()
        .filter_map(|node| node.value().as_text().map(|text| &**text))
        .collect()
}

/// 元素及其所有后代的文本，跳过 script 和 style
pub fn get_node_all_text(element: &ElementRef) -> String {
    element
        .descendants()
        .filter(|node| {
            !node
                .parent()
                .and_then(ElementRef::wrap)
                .is_some_and(|parent| matches!(parent.value().name(), "script" | "style"))
        })
        .filter_map(|node| node.value().as_text().map(|text| &**text))
        .collect()
}
