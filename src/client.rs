//! Retrieval orchestrator
//!
//! Builds the page URL, pulls the markup through the fetcher chain and
//! hands it to the page parser. Correction pages restart the cycle with
//! the suggested query until a result, an error or the redirect ceiling
//! is reached.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::core::{FollowCorrections, ProcessError};
use crate::models::{Autocompletions, ExtractionOutcome, SearchResult};
use crate::network::Fetcher;
use crate::parsers::PageParser;
use crate::utils::{autocompletions_url, search_url, LanguageCode};

pub const MAX_REDIRECTS: usize = 5;

/// Answers search and autocompletion requests
///
/// One instance is meant to be shared by every request of a process.
/// It holds no per-request state, so concurrent calls are fine.
#[derive(Clone)]
pub struct Client {
    fetcher: Arc<dyn Fetcher>,
    parser: Arc<dyn PageParser>,
    max_redirects: usize,
}

impl Client {
    pub fn new(fetcher: Arc<dyn Fetcher>, parser: Arc<dyn PageParser>) -> Self {
        Client {
            fetcher,
            parser,
            max_redirects: MAX_REDIRECTS,
        }
    }

    /// Caps how many pages one search may load while following corrections
    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    pub async fn process_search(
        &self,
        query: &str,
        src: LanguageCode,
        dst: LanguageCode,
        guess_direction: bool,
        follow_corrections: FollowCorrections,
    ) -> Result<SearchResult, ProcessError> {
        let mut current_query = query.to_string();

        for _ in 0..self.max_redirects {
            let url = search_url(&current_query, src, dst, guess_direction);
            let markup = self.fetcher.fetch(&url).await?;

            let suggested_query = match self.parser.parse_search_result(&markup) {
                ExtractionOutcome::Result(result) => {
                    return Ok(with_original_query(*result, query));
                }
                ExtractionOutcome::NotFound => return Err(ProcessError::NotFound),
                ExtractionOutcome::Error(error) => return Err(error.into()),
                ExtractionOutcome::Correction { suggested_query } => suggested_query,
            };

            match follow_corrections {
                FollowCorrections::Always => {}
                FollowCorrections::Never => return Err(ProcessError::NotFound),
                FollowCorrections::OnEmptyTranslations => {
                    match self.parser.parse_search_result_page(&markup) {
                        Ok(result) if !result.lemmas.is_empty() => {
                            debug!(
                                "Ignoring correction \"{}\" for \"{}\"",
                                suggested_query, current_query
                            );
                            return Ok(with_original_query(result, query));
                        }
                        _ => {}
                    }
                }
            }

            info!("Redirecting \"{}\" to \"{}\"", current_query, suggested_query);
            current_query = suggested_query;
        }

        warn!(
            "Still redirecting \"{}\" after {} redirects",
            query, self.max_redirects
        );
        Err(ProcessError::TooManyRedirects(self.max_redirects))
    }

    pub async fn process_autocompletions(
        &self,
        query: &str,
        src: LanguageCode,
        dst: LanguageCode,
    ) -> Result<Autocompletions, ProcessError> {
        let url = autocompletions_url(query, src, dst);
        let markup = self.fetcher.fetch(&url).await?;
        Ok(self.parser.parse_autocompletions(&markup)?)
    }
}

fn with_original_query(mut result: SearchResult, query: &str) -> SearchResult {
    result.original_query = query.to_string();
    result
}
