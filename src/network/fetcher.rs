use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use thiserror::Error;

use crate::parsers::html::decode_markup;

pub const USER_AGENT: &str = "Linguee API proxy (https://github.com/imankulov/linguee-api)";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Represents failures to download a page
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The host could not be reached or refused the connection
    #[error("Cannot connect to the Linguee server: {0}")]
    Connect(String),

    /// Linguee answered 503, which it reserves for throttling
    #[error(
        "The Linguee server returned 503. The API proxy was temporarily blocked by Linguee"
    )]
    Blocked,

    /// Any other non-success status
    #[error("The Linguee server returned {0}")]
    Status(u16),

    /// The request failed midway (timeout, broken body, ...)
    #[error("Request failed: {0}")]
    Request(String),
}

impl FetchError {
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::SERVICE_UNAVAILABLE {
            FetchError::Blocked
        } else {
            FetchError::Status(status.as_u16())
        }
    }

    /// Whether the upstream asked us to slow down
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, FetchError::Blocked)
    }
}

/// Anything that can turn a URL into page markup
///
/// Implemented by the network fetcher and by every cache layer, so layers
/// nest freely in front of each other.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Downloads pages from the network
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_options(USER_AGENT, DEFAULT_TIMEOUT)
    }

    pub fn with_options(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!("Send request: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_connect() {
                FetchError::Connect(e.to_string())
            } else {
                FetchError::Request(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} answered {}", url, status);
            return Err(FetchError::from_status(status));
        }

        let charset = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(charset_from_content_type);

        let data = response
            .bytes()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(decode_markup(&data, charset.as_deref()))
    }
}

/// Extracts the `charset` parameter of a Content-Type header value
fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"').to_string())
    })
}

/// Always answers with the same body; counts how often it was asked
///
/// Helpful to tell whether a cache layer consulted its upstream.
#[derive(Debug, Default)]
pub struct MockFetcher {
    message: String,
    calls: AtomicUsize,
}

impl MockFetcher {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.message.clone())
    }
}

/// Always fails
///
/// Used as the upstream of a pre-filled cache to make sure nothing reaches
/// the network.
#[derive(Clone, Copy, Debug, Default)]
pub struct ErrorFetcher;

#[async_trait]
impl Fetcher for ErrorFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        Err(FetchError::Request(format!("I cannot download {}", url)))
    }
}
