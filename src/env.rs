//! 统一的环境变量管理系统
//!
//! 提供类型安全、可验证的环境变量访问，并据此组装抓取与缓存链

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::network::{
    CacheError, DatabaseCache, FetchError, Fetcher, FileCache, HttpFetcher, MemoryCache,
    MemoryCacheConfig, USER_AGENT,
};

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 组装抓取链时的错误
#[derive(Error, Debug)]
pub enum SetupError {
    #[error(transparent)]
    Env(#[from] EnvError),

    #[error("Cannot create the HTTP client: {0}")]
    Fetch(#[from] FetchError),

    #[error("Cannot open the cache: {0}")]
    Cache(#[from] CacheError),
}

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => Self::DEFAULT.ok_or_else(|| EnvError {
                variable: Self::NAME.to_string(),
                message: "Required environment variable not set".to_string(),
            }),
        }
    }
}

/// 缓存后端，按配置顺序由外向内嵌套
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackend {
    Memory,
    File,
    Database,
}

impl FromStr for CacheBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "memory" => Ok(CacheBackend::Memory),
            "file" => Ok(CacheBackend::File),
            "database" | "db" => Ok(CacheBackend::Database),
            other => Err(format!(
                "Invalid cache backend '{}'. Use: none, memory, file, database",
                other
            )),
        }
    }
}

/// 日志相关环境变量
pub mod logging {
    use super::*;

    /// 日志级别
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "LINGUEE_API_LOG_LEVEL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("info".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            match value.to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(value.to_lowercase()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                }),
            }
        }
    }
}

/// 缓存相关环境变量
pub mod cache {
    use super::*;

    /// 缓存目录
    pub struct Directory;
    impl EnvVar<PathBuf> for Directory {
        const NAME: &'static str = "LINGUEE_API_CACHE_DIR";
        const DEFAULT: Option<PathBuf> = None;
        const DESCRIPTION: &'static str =
            "Directory holding the file cache and the cache database (default: .cache)";

        fn get() -> EnvResult<PathBuf> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok(PathBuf::from(".cache")),
            }
        }

        fn parse(value: &str) -> EnvResult<PathBuf> {
            let path = value.trim();
            if path.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Cache directory cannot be empty".to_string(),
                });
            }
            Ok(PathBuf::from(path))
        }
    }

    /// 缓存链
    pub struct Backends;
    impl EnvVar<Vec<CacheBackend>> for Backends {
        const NAME: &'static str = "LINGUEE_API_CACHE_BACKEND";
        const DEFAULT: Option<Vec<CacheBackend>> = None;
        const DESCRIPTION: &'static str =
            "Cache chain, outermost first (comma-separated: memory, file, database; or none) (default: memory,database)";

        fn get() -> EnvResult<Vec<CacheBackend>> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok(vec![CacheBackend::Memory, CacheBackend::Database]),
            }
        }

        fn parse(value: &str) -> EnvResult<Vec<CacheBackend>> {
            if value.trim().eq_ignore_ascii_case("none") {
                return Ok(Vec::new());
            }

            let mut backends = Vec::new();
            for item in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                let backend: CacheBackend = item.parse().map_err(|message| EnvError {
                    variable: Self::NAME.to_string(),
                    message,
                })?;
                if backends.contains(&backend) {
                    return Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: format!("Cache backend '{}' is listed twice", item),
                    });
                }
                backends.push(backend);
            }
            Ok(backends)
        }
    }

    /// 内存缓存条目上限
    pub struct MemorySize;
    impl EnvVar<usize> for MemorySize {
        const NAME: &'static str = "LINGUEE_API_MEMORY_CACHE_SIZE";
        const DEFAULT: Option<usize> = Some(1000);
        const DESCRIPTION: &'static str = "Maximum number of pages kept in memory, 0 for no limit";

        fn parse(value: &str) -> EnvResult<usize> {
            parse_usize(value, Self::NAME, 0, 1_000_000)
        }
    }

    /// 内存缓存过期时间
    pub struct MemoryTtl;
    impl EnvVar<Option<Duration>> for MemoryTtl {
        const NAME: &'static str = "LINGUEE_API_MEMORY_CACHE_TTL";
        const DEFAULT: Option<Option<Duration>> = Some(None);
        const DESCRIPTION: &'static str =
            "Seconds a page stays in the memory cache, 0 to keep it until evicted";

        fn parse(value: &str) -> EnvResult<Option<Duration>> {
            let seconds = parse_usize(value, Self::NAME, 0, 31_536_000)?;
            Ok((seconds > 0).then(|| Duration::from_secs(seconds as u64)))
        }
    }
}

/// 抓取相关环境变量
pub mod client {
    use super::*;

    /// 最大重定向次数
    pub struct MaxRedirects;
    impl EnvVar<usize> for MaxRedirects {
        const NAME: &'static str = "LINGUEE_API_MAX_REDIRECTS";
        const DEFAULT: Option<usize> = Some(crate::client::MAX_REDIRECTS);
        const DESCRIPTION: &'static str = "Pages one search may load while following corrections";

        fn parse(value: &str) -> EnvResult<usize> {
            parse_usize(value, Self::NAME, 1, 20)
        }
    }

    /// 请求超时
    pub struct Timeout;
    impl EnvVar<Duration> for Timeout {
        const NAME: &'static str = "LINGUEE_API_TIMEOUT";
        const DEFAULT: Option<Duration> = Some(Duration::from_secs(30));
        const DESCRIPTION: &'static str = "Network timeout in seconds";

        fn parse(value: &str) -> EnvResult<Duration> {
            let seconds = parse_usize(value, Self::NAME, 1, 300)?;
            Ok(Duration::from_secs(seconds as u64))
        }
    }

    /// User-Agent
    pub struct UserAgent;
    impl EnvVar<String> for UserAgent {
        const NAME: &'static str = "LINGUEE_API_USER_AGENT";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "User-Agent header sent to Linguee";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok(USER_AGENT.to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            let agent = value.trim();
            if agent.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "User agent cannot be empty".to_string(),
                });
            }
            Ok(agent.to_string())
        }
    }
}

/// Web服务器相关环境变量
pub mod web {
    use super::*;

    /// 绑定地址
    pub struct BindAddress;
    impl EnvVar<String> for BindAddress {
        const NAME: &'static str = "LINGUEE_API_BIND_ADDRESS";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Web server bind address";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("127.0.0.1".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            let address = value.trim();
            if address.parse::<std::net::IpAddr>().is_err() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!("Invalid IP address '{}'", address),
                });
            }
            Ok(address.to_string())
        }
    }

    /// 端口
    pub struct Port;
    impl EnvVar<u16> for Port {
        const NAME: &'static str = "LINGUEE_API_PORT";
        const DEFAULT: Option<u16> = Some(8000);
        const DESCRIPTION: &'static str = "Web server port";

        fn parse(value: &str) -> EnvResult<u16> {
            let port = parse_usize(value, Self::NAME, 1, 65535)?;
            Ok(port as u16)
        }
    }
}

/// 辅助函数
fn parse_usize(value: &str, var_name: &str, min: usize, max: usize) -> EnvResult<usize> {
    let num: usize = value.trim().parse().map_err(|_| EnvError {
        variable: var_name.to_string(),
        message: "Must be a valid non-negative number".to_string(),
    })?;

    if num < min {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Value {} is below minimum {}", num, min),
        });
    }

    if num > max {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Value {} exceeds maximum {}", num, max),
        });
    }

    Ok(num)
}

/// 环境变量配置汇总
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub log_level: String,

    // 缓存配置
    pub cache_dir: PathBuf,
    pub cache_backends: Vec<CacheBackend>,
    pub memory_cache_size: usize,
    pub memory_cache_ttl: Option<Duration>,

    // 抓取配置
    pub max_redirects: usize,
    pub timeout: Duration,
    pub user_agent: String,

    // Web配置
    pub web_bind_address: String,
    pub web_port: u16,
}

impl EnvConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> EnvResult<Self> {
        Ok(Self {
            log_level: logging::LogLevel::get()?,

            cache_dir: cache::Directory::get()?,
            cache_backends: cache::Backends::get()?,
            memory_cache_size: cache::MemorySize::get()?,
            memory_cache_ttl: cache::MemoryTtl::get()?,

            max_redirects: client::MaxRedirects::get()?,
            timeout: client::Timeout::get()?,
            user_agent: client::UserAgent::get()?,

            web_bind_address: web::BindAddress::get()?,
            web_port: web::Port::get()?,
        })
    }

    /// 文件缓存目录
    pub fn pages_dir(&self) -> PathBuf {
        self.cache_dir.join("pages")
    }

    /// 缓存数据库路径
    pub fn database_path(&self) -> PathBuf {
        self.cache_dir.join("cache.redb")
    }

    /// 按配置顺序组装缓存链，最内层为网络抓取器
    pub fn build_fetcher(&self) -> Result<Arc<dyn Fetcher>, SetupError> {
        let mut fetcher: Arc<dyn Fetcher> =
            Arc::new(HttpFetcher::with_options(&self.user_agent, self.timeout)?);

        for backend in self.cache_backends.iter().rev() {
            let layer: Arc<dyn Fetcher> = match backend {
                CacheBackend::Memory => Arc::new(MemoryCache::memory(
                    MemoryCacheConfig {
                        max_entries: self.memory_cache_size,
                        ttl: self.memory_cache_ttl,
                    },
                    fetcher,
                )),
                CacheBackend::File => {
                    Arc::new(FileCache::in_directory(self.pages_dir(), fetcher))
                }
                CacheBackend::Database => {
                    Arc::new(DatabaseCache::open(self.database_path(), fetcher)?)
                }
            };
            fetcher = layer;
        }

        Ok(fetcher)
    }

    /// 打印配置摘要
    pub fn print_summary(&self) {
        let chain: Vec<&str> = self
            .cache_backends
            .iter()
            .map(|backend| match backend {
                CacheBackend::Memory => "memory",
                CacheBackend::File => "file",
                CacheBackend::Database => "database",
            })
            .collect();

        println!("Environment Configuration Summary:");
        println!("  Log Level: {}", self.log_level);
        println!("  Cache: [{}] in {}", chain.join(" -> "), self.cache_dir.display());
        println!("  Max Redirects: {}", self.max_redirects);
        println!("  Web Server: {}:{}", self.web_bind_address, self.web_port);
    }
}

/// 环境变量文档生成器
pub fn generate_env_docs() -> String {
    let mut docs = String::new();
    docs.push_str("# Environment Variables Documentation\n\n");

    docs.push_str("## Core Configuration\n\n");
    docs.push_str(&format!(
        "- `{}`: {}\n",
        logging::LogLevel::NAME,
        logging::LogLevel::DESCRIPTION
    ));

    docs.push_str("\n## Cache Configuration\n\n");
    docs.push_str(&format!("- `{}`: {}\n", cache::Directory::NAME, cache::Directory::DESCRIPTION));
    docs.push_str(&format!("- `{}`: {}\n", cache::Backends::NAME, cache::Backends::DESCRIPTION));
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        cache::MemorySize::NAME,
        cache::MemorySize::DESCRIPTION,
        cache::MemorySize::DEFAULT
    ));
    docs.push_str(&format!(
        "- `{}`: {} (default: 0)\n",
        cache::MemoryTtl::NAME,
        cache::MemoryTtl::DESCRIPTION
    ));

    docs.push_str("\n## Client Configuration\n\n");
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        client::MaxRedirects::NAME,
        client::MaxRedirects::DESCRIPTION,
        client::MaxRedirects::DEFAULT
    ));
    docs.push_str(&format!(
        "- `{}`: {} (default: 30)\n",
        client::Timeout::NAME,
        client::Timeout::DESCRIPTION
    ));
    docs.push_str(&format!("- `{}`: {}\n", client::UserAgent::NAME, client::UserAgent::DESCRIPTION));

    docs.push_str("\n## Web Server Configuration\n\n");
    docs.push_str(&format!("- `{}`: {}\n", web::BindAddress::NAME, web::BindAddress::DESCRIPTION));
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        web::Port::NAME,
        web::Port::DESCRIPTION,
        web::Port::DEFAULT
    ));

    docs
}
