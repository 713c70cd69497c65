//! Typed records produced by the page parsers
//!
//! Field names double as the keys of the schema value tree, so the parsers
//! can hand their output straight to serde.

use serde::{Deserialize, Deserializer, Serialize};

use crate::parsers::ExtractionError;

/// A link to a pronunciation recording along with the language variant
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioLink {
    /// e.g. "https://www.linguee.com/mp3/PT_BR/f5/f5491d72610965dd0a287c1ab1025c0f-300.mp3"
    pub url: String,
    /// e.g. "Brazilian Portuguese"
    pub lang: String,
}

/// How often a translation is used for its lemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageFrequency {
    Often,
    AlmostAlways,
}

/// A pair of phrases illustrating one translation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationExample {
    pub src: String,
    pub dst: String,
}

/// One of the possible translations of a lemma
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub featured: bool,
    pub text: String,
    pub pos: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub audio_links: Vec<AudioLink>,
    pub usage_frequency: Option<UsageFrequency>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub examples: Vec<TranslationExample>,
}

/// A dictionary headword with its translations
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lemma {
    pub featured: bool,
    pub text: String,
    pub pos: Option<String>,
    /// e.g. "Akk" for German verbs taking the accusative
    pub grammar_info: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub audio_links: Vec<AudioLink>,
    pub translations: Vec<Translation>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleTranslation {
    pub text: String,
    pub pos: Option<String>,
}

/// A short phrase containing the query, with its translations
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub text: String,
    pub pos: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub audio_links: Vec<AudioLink>,
    pub translations: Vec<ExampleTranslation>,
}

/// An unverified usage example harvested from another website
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalSource {
    pub src: String,
    pub dst: String,
    pub src_url: Option<String>,
    pub dst_url: Option<String>,
}

/// Everything extracted from one search page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub src_lang: String,
    pub dst_lang: String,
    /// Query the caller asked for, before any correction was followed
    #[serde(default)]
    pub original_query: String,
    /// Query of the page the result was extracted from
    pub resolved_query: String,
    /// Spelling Linguee itself considers correct for `resolved_query`
    pub correct_query: String,
    pub lemmas: Vec<Lemma>,
    pub examples: Vec<Example>,
    pub external_sources: Vec<ExternalSource>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompletionTranslation {
    pub text: String,
    pub pos: Option<String>,
}

/// One suggested word for a query prefix
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompletionItem {
    pub text: String,
    pub pos: Option<String>,
    pub translations: Vec<AutocompletionTranslation>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Autocompletions {
    pub autocompletions: Vec<AutocompletionItem>,
}

/// What a search page turned out to be
///
/// The variants are checked in declaration order: a page offering a
/// correction is a correction even if it also carries results.
#[derive(Debug)]
pub enum ExtractionOutcome {
    Correction { suggested_query: String },
    NotFound,
    Result(Box<SearchResult>),
    Error(ExtractionError),
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
