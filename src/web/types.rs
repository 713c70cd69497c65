//! Web 模块的数据类型定义

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::core::FollowCorrections;
use crate::utils::LanguageCode;

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub client: Client,
}

/// 查询参数
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
    pub src: LanguageCode,
    pub dst: LanguageCode,
    #[serde(default)]
    pub guess_direction: bool,
    #[serde(default)]
    pub follow_corrections: FollowCorrections,
}

/// 自动补全参数
#[derive(Debug, Deserialize)]
pub struct AutocompletionParams {
    pub query: String,
    pub src: LanguageCode,
    pub dst: LanguageCode,
}

/// 错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
