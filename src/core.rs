use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::network::FetchError;
use crate::parsers::ExtractionError;

/// Represents errors that can end a search or autocompletion request
///
/// Every variant is terminal for the request that produced it. Only
/// fetch failures are worth retrying, and retrying is left to the caller.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The page could not be downloaded
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The page did not match the expected shape
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// The query matched nothing and no correction was followed
    #[error("Translation not found")]
    NotFound,

    /// Corrections kept pointing at other queries
    #[error("Still redirecting after {0} redirects")]
    TooManyRedirects(usize),
}

impl ProcessError {
    /// Message exposed to the transport layer
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Whether repeating the whole request later may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, ProcessError::Fetch(_))
    }
}

/// What the orchestrator does when a page suggests a corrected spelling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowCorrections {
    /// Always load the page for the corrected query
    #[default]
    Always,
    /// Never follow; a correction page counts as "not found"
    Never,
    /// Follow only when the page itself carries no lemmas
    OnEmptyTranslations,
}

impl FollowCorrections {
    pub fn as_str(&self) -> &'static str {
        match self {
            FollowCorrections::Always => "always",
            FollowCorrections::Never => "never",
            FollowCorrections::OnEmptyTranslations => "on_empty_translations",
        }
    }
}

impl fmt::Display for FollowCorrections {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FollowCorrections {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "always" => Ok(FollowCorrections::Always),
            "never" => Ok(FollowCorrections::Never),
            "on_empty_translations" | "on-empty-translations" => {
                Ok(FollowCorrections::OnEmptyTranslations)
            }
            _ => Err(format!(
                "Invalid correction policy '{}'. Use: always, never, on_empty_translations",
                value
            )),
        }
    }
}

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// Prints an error message to stderr, highlighted when stderr is a terminal
pub fn print_error_message(msg: &str) {
    if atty::is(atty::Stream::Stderr) {
        eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
    } else {
        eprintln!("{msg}");
    }
}

/// Prints an info message to stdout
pub fn print_info_message(msg: &str) {
    println!("{msg}");
}
