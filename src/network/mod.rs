//! # 网络模块
//!
//! 这个模块包含所有与页面下载和缓存相关的功能：
//!
//! - 通过 HTTP 下载 Linguee 页面
//! - 内存、文件和 redb 数据库三种缓存层
//! - 缓存层可以相互嵌套，组成缓存链
//!
//! # 模块组织
//!
//! - `fetcher` - `Fetcher` 接口、HTTP 下载器以及测试用下载器
//! - `cache` - `CacheStore` 接口和通用的缓存算法
//! - `memory` - 进程内 LRU 缓存
//! - `file` - 每个 URL 一个文件的磁盘缓存
//! - `database` - 基于 redb 的持久化缓存

pub mod cache;
pub mod database;
pub mod fetcher;
pub mod file;
pub mod memory;

// Re-export commonly used items for convenience
pub use cache::{CacheError, CacheLayer, CacheStore};
pub use database::{DatabaseCache, DatabaseStore};
pub use fetcher::{ErrorFetcher, FetchError, Fetcher, HttpFetcher, MockFetcher, USER_AGENT};
pub use file::{FileCache, FileStore};
pub use memory::{MemoryCache, MemoryCacheConfig, MemoryStore};
