// 集成测试公共模块
//
// 测试页面保存在 tests/_data_/pages，文件名为百分号编码后的 URL

use std::path::PathBuf;
use std::sync::Arc;

use linguee_api::network::file::url_to_file_name;
use linguee_api::{Client, ErrorFetcher, Fetcher, FileCache, LingueeParser};

/// Directory holding the saved Linguee pages
pub fn pages_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("_data_")
        .join("pages")
}

/// Serves the saved pages and fails for everything else
pub fn fixture_fetcher() -> Arc<dyn Fetcher> {
    Arc::new(FileCache::in_directory(pages_dir(), Arc::new(ErrorFetcher)))
}

pub fn fixture_client() -> Client {
    Client::new(fixture_fetcher(), Arc::new(LingueeParser::new().unwrap()))
}

pub fn parser() -> LingueeParser {
    LingueeParser::new().unwrap()
}

/// Markup of a saved page
pub fn read_page(url: &str) -> String {
    let path = pages_dir().join(url_to_file_name(url));
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("missing fixture {}: {}", path.display(), e))
}
