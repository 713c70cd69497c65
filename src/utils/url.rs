use url::form_urlencoded;

use crate::utils::languages::LanguageCode;

pub const LINGUEE_BASE_URL: &str = "https://www.linguee.com";

/// Builds the search page URL for a query and language pair
///
/// With `guess_direction` unset the source language is pinned through the
/// `source` parameter; otherwise Linguee decides which side the query is on.
/// The result is a pure function of its arguments, which keeps the file
/// cache's naming stable.
pub fn search_url(
    query: &str,
    src: LanguageCode,
    dst: LanguageCode,
    guess_direction: bool,
) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    params.append_pair("query", query).append_pair("ajax", "1");

    if !guess_direction {
        params.append_pair("source", src.code());
    }

    format!("{}?{}", language_pair_path(src, dst), params.finish())
}

/// Builds the autocompletion URL for a query prefix and language pair
pub fn autocompletions_url(query: &str, src: LanguageCode, dst: LanguageCode) -> String {
    let params = form_urlencoded::Serializer::new(String::new())
        .append_pair("qe", query)
        .append_pair("source", "auto")
        .finish();

    format!("{}?{}", language_pair_path(src, dst), params)
}

/// Expands an audio fragment such as `PT_BR/f5/f5491d72610965dd0a287c1ab1025c0f-300`
pub fn audio_url(url_part: &str) -> String {
    format!("{LINGUEE_BASE_URL}/mp3/{url_part}.mp3")
}

fn language_pair_path(src: LanguageCode, dst: LanguageCode) -> String {
    format!("{}/{}-{}/search", LINGUEE_BASE_URL, src.name(), dst.name())
}
