/// Collapses every run of whitespace to a single space and trims both ends
///
/// `"  foo   bar "` becomes `"foo bar"`.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
