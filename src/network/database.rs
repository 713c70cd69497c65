use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use redb::{Database, TableDefinition, TableError};

use crate::network::cache::{CacheError, CacheLayer, CacheStore};
use crate::network::fetcher::Fetcher;

/// Cache backed by a single redb database file
pub type DatabaseCache = CacheLayer<DatabaseStore>;

/// url -> (markup, created at as a unix timestamp)
const PAGES: TableDefinition<&str, (&str, i64)> = TableDefinition::new("cache");

/// Pages persisted in a redb table keyed by URL
///
/// The table is created by the first write; reads before that are misses.
/// redb locks its file, so clone the store rather than opening the same
/// path twice.
#[derive(Clone)]
pub struct DatabaseStore {
    database: Arc<Database>,
}

impl DatabaseStore {
    /// Opens the database, creating the file and its parent directory if needed
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CacheError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let database = Database::create(path).map_err(redb::Error::from)?;
        Ok(Self {
            database: Arc::new(database),
        })
    }

    /// Creation time of a cached page, as a unix timestamp
    pub async fn created_at(&self, url: &str) -> Result<Option<i64>, CacheError> {
        Ok(self.read(url).await?.map(|(_, created_at)| created_at))
    }

    async fn read(&self, url: &str) -> Result<Option<(String, i64)>, CacheError> {
        let database = self.database.clone();
        let url = url.to_string();

        let row = tokio::task::spawn_blocking(move || read_row(&database, &url)).await??;
        Ok(row)
    }
}

fn read_row(database: &Database, url: &str) -> Result<Option<(String, i64)>, redb::Error> {
    let transaction = database.begin_read()?;
    let table = match transaction.open_table(PAGES) {
        Ok(table) => table,
        Err(TableError::TableDoesNotExist(_)) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let row = table.get(url)?.map(|guard| {
        let (markup, created_at) = guard.value();
        (markup.to_string(), created_at)
    });
    Ok(row)
}

fn write_row(database: &Database, url: &str, markup: &str) -> Result<(), redb::Error> {
    let transaction = database.begin_write()?;
    {
        let mut table = transaction.open_table(PAGES)?;
        table.insert(url, (markup, Utc::now().timestamp()))?;
    }
    transaction.commit()?;
    Ok(())
}

#[async_trait]
impl CacheStore for DatabaseStore {
    fn name(&self) -> &'static str {
        "database"
    }

    async fn lookup(&self, url: &str) -> Result<Option<String>, CacheError> {
        Ok(self.read(url).await?.map(|(markup, _)| markup))
    }

    async fn store(&self, url: &str, markup: &str) -> Result<(), CacheError> {
        let database = self.database.clone();
        let url = url.to_string();
        let markup = markup.to_string();

        tokio::task::spawn_blocking(move || write_row(&database, &url, &markup)).await??;
        Ok(())
    }
}

impl DatabaseCache {
    pub fn open(path: impl AsRef<Path>, upstream: Arc<dyn Fetcher>) -> Result<Self, CacheError> {
        Ok(CacheLayer::new(DatabaseStore::open(path)?, upstream))
    }
}
