//! Check-then-fetch-then-store, written once for every backing store
//!
//! A cache variant only says where pages live by implementing [`CacheStore`].
//! Wrapping the store in a [`CacheLayer`] together with an upstream
//! [`Fetcher`] yields a fetcher again, so layers nest:
//!
//! ```text
//! MemoryCache ─▶ DatabaseCache ─▶ HttpFetcher
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::network::fetcher::{FetchError, Fetcher};

/// Represents failures of a cache's own backing store
///
/// These never reach the caller of [`Fetcher::fetch`]: a broken store
/// degrades to a miss on read and to a no-op on write.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache database error: {0}")]
    Database(#[from] redb::Error),

    #[error("cache worker failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Where a cache variant keeps its pages
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Short name used in log lines
    fn name(&self) -> &'static str;

    async fn lookup(&self, url: &str) -> Result<Option<String>, CacheError>;

    async fn store(&self, url: &str, markup: &str) -> Result<(), CacheError>;
}

/// A cache in front of an upstream fetcher
pub struct CacheLayer<S> {
    store: S,
    upstream: Arc<dyn Fetcher>,
}

impl<S: CacheStore> CacheLayer<S> {
    pub fn new(store: S, upstream: Arc<dyn Fetcher>) -> Self {
        Self { store, upstream }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Same backing store, different upstream
    pub fn with_upstream(self, upstream: Arc<dyn Fetcher>) -> Self {
        Self {
            store: self.store,
            upstream,
        }
    }
}

#[async_trait]
impl<S: CacheStore> Fetcher for CacheLayer<S> {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        match self.store.lookup(url).await {
            Ok(Some(markup)) => {
                tracing::debug!("{} cache hit: {}", self.store.name(), url);
                return Ok(markup);
            }
            Ok(None) => tracing::debug!("{} cache miss: {}", self.store.name(), url),
            Err(e) => tracing::warn!("{} cache lookup failed for {}: {}", self.store.name(), url, e),
        }

        let markup = self.upstream.fetch(url).await?;

        if let Err(e) = self.store.store(url, &markup).await {
            tracing::warn!("{} cache store failed for {}: {}", self.store.name(), url, e);
        }

        Ok(markup)
    }
}
