use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::Mutex;

use crate::network::cache::{CacheError, CacheLayer, CacheStore};
use crate::network::fetcher::Fetcher;

/// In-process cache in front of an upstream fetcher
pub type MemoryCache = CacheLayer<MemoryStore>;

/// 内存缓存配置
#[derive(Debug, Clone)]
pub struct MemoryCacheConfig {
    /// Maximum number of pages kept; `0` keeps everything
    pub max_entries: usize,
    /// Pages older than this are fetched again; `None` never expires
    pub ttl: Option<Duration>,
}

impl Default for MemoryCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            ttl: None,
        }
    }
}

#[derive(Debug, Clone)]
struct MemoryEntry {
    markup: String,
    created_at: Instant,
}

/// Process-lifetime mapping from URL to markup
///
/// Least recently used pages are evicted first once `max_entries` is
/// reached. Clones share the same map.
#[derive(Clone)]
pub struct MemoryStore {
    entries: Arc<Mutex<LruCache<String, MemoryEntry>>>,
    ttl: Option<Duration>,
}

impl MemoryStore {
    pub fn new(config: MemoryCacheConfig) -> Self {
        let entries = match NonZeroUsize::new(config.max_entries) {
            Some(capacity) => LruCache::new(capacity),
            None => LruCache::unbounded(),
        };

        Self {
            entries: Arc::new(Mutex::new(entries)),
            ttl: config.ttl,
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    fn is_expired(&self, entry: &MemoryEntry) -> bool {
        self.ttl
            .map(|ttl| entry.created_at.elapsed() > ttl)
            .unwrap_or(false)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(MemoryCacheConfig::default())
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn lookup(&self, url: &str) -> Result<Option<String>, CacheError> {
        let mut entries = self.entries.lock().await;

        match entries.get(url) {
            None => return Ok(None),
            Some(entry) if !self.is_expired(entry) => return Ok(Some(entry.markup.clone())),
            Some(_) => {}
        }

        entries.pop(url);
        Ok(None)
    }

    async fn store(&self, url: &str, markup: &str) -> Result<(), CacheError> {
        let entry = MemoryEntry {
            markup: markup.to_string(),
            created_at: Instant::now(),
        };
        self.entries.lock().await.put(url.to_string(), entry);
        Ok(())
    }
}

impl MemoryCache {
    pub fn memory(config: MemoryCacheConfig, upstream: Arc<dyn Fetcher>) -> Self {
        CacheLayer::new(MemoryStore::new(config), upstream)
    }
}
