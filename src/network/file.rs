use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::network::cache::{CacheError, CacheLayer, CacheStore};
use crate::network::fetcher::Fetcher;

/// Cache keeping one file per URL in a directory
pub type FileCache = CacheLayer<FileStore>;

/// Everything but `A-Z a-z 0-9 - . _ ~` gets percent-encoded
const FILE_NAME_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

static TEMP_FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Pages stored as plain files named after their percent-encoded URL
///
/// The directory is created on the first write. Entries never expire.
#[derive(Clone, Debug)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn page_file(&self, url: &str) -> PathBuf {
        self.directory.join(url_to_file_name(url))
    }
}

/// Reversible, collision-free file name for a URL
pub fn url_to_file_name(url: &str) -> String {
    utf8_percent_encode(url, FILE_NAME_ENCODE_SET).to_string()
}

/// Inverse of [`url_to_file_name`]
pub fn file_name_to_url(file_name: &str) -> String {
    percent_decode_str(file_name).decode_utf8_lossy().into_owned()
}

#[async_trait]
impl CacheStore for FileStore {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn lookup(&self, url: &str) -> Result<Option<String>, CacheError> {
        match tokio::fs::read_to_string(self.page_file(url)).await {
            Ok(markup) => Ok(Some(markup)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn store(&self, url: &str, markup: &str) -> Result<(), CacheError> {
        tokio::fs::create_dir_all(&self.directory).await?;

        // Write aside, then rename, so readers never see half a page
        let page_file = self.page_file(url);
        let temp_file = self.directory.join(format!(
            ".{}.{}.tmp",
            std::process::id(),
            TEMP_FILE_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        tokio::fs::write(&temp_file, markup).await?;
        if let Err(e) = tokio::fs::rename(&temp_file, &page_file).await {
            let _ = tokio::fs::remove_file(&temp_file).await;
            return Err(e.into());
        }

        Ok(())
    }
}

impl FileCache {
    pub fn in_directory(directory: impl Into<PathBuf>, upstream: Arc<dyn Fetcher>) -> Self {
        CacheLayer::new(FileStore::new(directory), upstream)
    }
}
