//! Schemas and transforms for Linguee search and autocompletion pages

use scraper::Selector;
use serde_json::{json, Map, Value};
use tracing::debug;

use super::html::{
    get_node_all_text, html_to_dom, normalize_whitespace, parse_selector, SelectorError,
};
use super::schema::{ExtractionError, Node, Quantity};
use crate::models::{Autocompletions, ExtractionOutcome, SearchResult};
use crate::utils::audio_url;

const CORRECTION_SELECTOR: &str = "span.corrected";
const NOT_FOUND_SELECTOR: &str = "h1.noresults";

/// Turns fetched markup into typed records
pub trait PageParser: Send + Sync {
    /// Classifies a search page: correction first, then not-found, then a full result
    fn parse_search_result(&self, markup: &str) -> ExtractionOutcome;

    /// Runs the full search schema without looking for corrections
    fn parse_search_result_page(&self, markup: &str) -> Result<SearchResult, ExtractionError>;

    fn parse_autocompletions(&self, markup: &str) -> Result<Autocompletions, ExtractionError>;
}

#[derive(Debug, Clone)]
pub struct LingueeParser {
    correction: Selector,
    not_found: Selector,
    search_result: Node,
    autocompletions: Node,
}

impl LingueeParser {
    pub fn new() -> Result<Self, SelectorError> {
        Ok(LingueeParser {
            correction: parse_selector(CORRECTION_SELECTOR)?,
            not_found: parse_selector(NOT_FOUND_SELECTOR)?,
            search_result: search_result_schema()?,
            autocompletions: autocompletions_schema()?,
        })
    }

    /// Text of the first correction marker, if the page offers one
    pub fn find_correction(&self, markup: &str) -> Option<String> {
        let dom = html_to_dom(markup);
        dom.select(&self.correction)
            .next()
            .map(|element| normalize_whitespace(&get_node_all_text(&element)))
    }

    pub fn is_not_found(&self, markup: &str) -> bool {
        let dom = html_to_dom(markup);
        dom.select(&self.not_found).next().is_some()
    }
}

impl PageParser for LingueeParser {
    fn parse_search_result(&self, markup: &str) -> ExtractionOutcome {
        if let Some(suggested_query) = self.find_correction(markup) {
            debug!("Page suggests correction \"{}\"", suggested_query);
            return ExtractionOutcome::Correction { suggested_query };
        }

        if self.is_not_found(markup) {
            return ExtractionOutcome::NotFound;
        }

        match self.parse_search_result_page(markup) {
            Ok(result) => ExtractionOutcome::Result(Box::new(result)),
            Err(error) => ExtractionOutcome::Error(error),
        }
    }

    fn parse_search_result_page(&self, markup: &str) -> Result<SearchResult, ExtractionError> {
        let dom = html_to_dom(markup);
        let value = self.search_result.parse(&dom.root_element())?;
        let mut result: SearchResult = serde_json::from_value(value)?;
        result.original_query = result.resolved_query.clone();
        Ok(result)
    }

    fn parse_autocompletions(&self, markup: &str) -> Result<Autocompletions, ExtractionError> {
        let dom = html_to_dom(markup);
        let value = self.autocompletions.parse(&dom.root_element())?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Wraps the leaf nodes into a group whose values are joined into one
/// string. Missing or empty values become null.
fn concat_values(name: &'static str, children: Vec<Node>) -> Node {
    Node::group(name, children)
        .quantity(Quantity::Optional)
        .callback(concat_children)
}

fn lemma_schema() -> Result<Vec<Node>, SelectorError> {
    Ok(vec![
        Node::string("featured").attr("class").callback(is_featured),
        // A lemma may consist of several linked words
        Node::group(
            "text",
            vec![Node::string("item")
                .css("a.dictLink")?
                .quantity(Quantity::AtLeastOne)
                .callback(normalize)],
        )
        .css("span.tag_lemma")?
        .callback(join_items),
        concat_values(
            "pos",
            vec![Node::string("pos")
                .css("span.tag_lemma > span.tag_wordtype, span.tag_lemma > span.tag_type")?
                .quantity(Quantity::Any)],
        ),
        Node::group(
            "grammar_info",
            vec![Node::string("item")
                .css(
                    "span.tag_lemma > span.tag_lemma_context > span.placeholder > span.grammar_info",
                )?
                .quantity(Quantity::Any)
                .callback(normalize)],
        )
        .callback(take_first_item),
        Node::string("audio_links")
            .css("span.tag_lemma > a.audio")?
            .attr("onclick")
            .quantity(Quantity::Optional)
            .callback(parse_audio_links),
        Node::group("translations", translation_schema()?)
            .css("div.translation_lines div.translation")?
            .quantity(Quantity::AtLeastOne),
    ])
}

fn translation_schema() -> Result<Vec<Node>, SelectorError> {
    Ok(vec![
        Node::string("featured").attr("class").callback(is_featured),
        Node::string("text").css("a.dictLink")?.callback(normalize),
        concat_values(
            "pos",
            vec![Node::string("pos")
                .css("span.tag_type")?
                .attr("title")
                .quantity(Quantity::Any)],
        ),
        Node::string("audio_links")
            .css("a.audio")?
            .attr("onclick")
            .quantity(Quantity::Optional)
            .callback(parse_audio_links),
        Node::string("usage_frequency")
            .css("span.tag_c")?
            .attr("class")
            .quantity(Quantity::Optional)
            .callback(parse_usage_frequency),
        Node::group(
            "examples",
            vec![
                Node::string("src").css(".tag_s")?.callback(normalize),
                Node::string("dst").css(".tag_t")?.callback(normalize),
            ],
        )
        .css(".example_lines > .example")?
        .quantity(Quantity::Any),
    ])
}

fn source_url_schema() -> Result<Vec<Node>, SelectorError> {
    Ok(vec![
        Node::string("src_url")
            .css("div.source_url > a")?
            .attr("href")
            .quantity(Quantity::Optional),
        Node::string("src_url_text")
            .css("div.source_url")?
            .quantity(Quantity::Optional),
    ])
}

fn search_result_schema() -> Result<Node, SelectorError> {
    Ok(Node::group(
        "search_result",
        vec![
            Node::string("src_lang")
                .css("div#data")?
                .attr("data-lang1")
                .callback(lowercase),
            Node::string("dst_lang")
                .css("div#data")?
                .attr("data-lang2")
                .callback(lowercase),
            Node::string("resolved_query")
                .css("div#data")?
                .attr("data-query"),
            Node::string("correct_query")
                .css("div#data")?
                .attr("data-correctspellingofquery"),
            Node::group("lemmas", lemma_schema()?)
                .css("div.exact > div.lemma")?
                .quantity(Quantity::Any),
            Node::group("examples", lemma_schema()?)
                .css("div.example_lines div.lemma")?
                .quantity(Quantity::Any),
            Node::group(
                "external_sources",
                vec![
                    Node::string("src")
                        .css("td.left > div.wrap")?
                        .all_text()
                        .callback(normalize_example),
                    Node::string("dst")
                        .css("td.right2 > div.wrap")?
                        .all_text()
                        .callback(normalize_example),
                    Node::group("src_url", source_url_schema()?)
                        .css("td.left")?
                        .callback(normalize_source_url),
                    Node::group("dst_url", source_url_schema()?)
                        .css("td.right2")?
                        .callback(normalize_source_url),
                ],
            )
            .css("table.result_table > tbody > tr")?
            .quantity(Quantity::Any),
        ],
    ))
}

fn autocompletions_schema() -> Result<Node, SelectorError> {
    Ok(Node::group(
        "autocompletions",
        vec![Node::group(
            "autocompletions",
            vec![
                Node::string("text")
                    .css("div.main_row > div.main_item")?
                    .callback(normalize),
                concat_values(
                    "pos",
                    vec![Node::string("pos")
                        .css("div.main_row > div.main_wordtype")?
                        .quantity(Quantity::Any)],
                ),
                Node::group(
                    "translations",
                    vec![
                        Node::string("text").callback(normalize),
                        concat_values(
                            "pos",
                            vec![Node::string("pos")
                                .css("div.translation_item > div.wordtype")?
                                .quantity(Quantity::Any)],
                        ),
                    ],
                )
                .css("div.translation_row > div > div.translation_item")?
                .quantity(Quantity::AtLeastOne),
            ],
        )
        .css("div.autocompletion_item")?
        .quantity(Quantity::Any)],
    ))
}

fn as_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|text| !text.is_empty())
}

fn normalize(value: Value) -> Value {
    match value {
        Value::String(text) => Value::String(normalize_whitespace(&text)),
        other => other,
    }
}

fn lowercase(value: Value) -> Value {
    match value {
        Value::String(text) => Value::String(text.to_lowercase()),
        other => other,
    }
}

fn is_featured(value: Value) -> Value {
    let featured = value
        .as_str()
        .map(|class| class.split_whitespace().any(|token| token == "featured"))
        .unwrap_or(false);
    Value::Bool(featured)
}

fn join_items(value: Value) -> Value {
    let items: Vec<&str> = value["item"]
        .as_array()
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    Value::String(items.join(" "))
}

fn take_first_item(value: Value) -> Value {
    value["item"]
        .as_array()
        .and_then(|items| items.first())
        .cloned()
        .unwrap_or(Value::Null)
}

fn concat_children(value: Value) -> Value {
    let mut parts = Vec::new();
    if let Value::Object(children) = &value {
        for child in children.values() {
            match child {
                Value::Array(items) => parts.extend(items.iter().filter_map(Value::as_str)),
                Value::String(text) => parts.push(text.as_str()),
                _ => {}
            }
        }
    }

    let text = normalize_whitespace(&parts.join(" "));
    if text.is_empty() {
        Value::Null
    } else {
        Value::String(text)
    }
}

/// Decodes an `onclick` handler such as
/// `playSound(this,"PT_BR/f5/f549...-300","Brazilian Portuguese");`
/// into `[{"url": ..., "lang": ...}]`
pub fn parse_audio_links(value: Value) -> Value {
    let Some(text) = as_str(&value) else {
        return json!([]);
    };

    let chunks: Vec<&str> = text
        .split(',')
        .map(|chunk| chunk.trim().trim_matches(|c| c == '"' || c == ')' || c == ';'))
        .collect();

    let links: Vec<Value> = chunks
        .get(1..)
        .unwrap_or_default()
        .chunks_exact(2)
        .map(|pair| json!({"url": audio_url(pair[0]), "lang": pair[1]}))
        .collect();

    Value::Array(links)
}

/// Maps the class tokens of a `span.tag_c` to a usage frequency
pub fn parse_usage_frequency(value: Value) -> Value {
    let Some(text) = as_str(&value) else {
        return Value::Null;
    };

    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.contains(&"usedveryoften") {
        json!("often")
    } else if tokens.contains(&"usedalmostalways") {
        json!("almost_always")
    } else {
        Value::Null
    }
}

/// Normalizes an external source sentence and drops the two trailing
/// tokens, which are source links rather than content
pub fn normalize_example(value: Value) -> Value {
    let Some(text) = value.as_str() else {
        return value;
    };

    let normalized = normalize_whitespace(text);
    let tokens: Vec<&str> = normalized.split(' ').collect();
    let keep = tokens.len().saturating_sub(2);
    Value::String(tokens[..keep].join(" "))
}

/// Prefers the link target, then the bare domain shown in the cell
pub fn normalize_source_url(value: Value) -> Value {
    let empty = Map::new();
    let content = value.as_object().unwrap_or(&empty);

    if let Some(href) = content.get("src_url").and_then(as_str) {
        return json!(href);
    }

    let domain = content
        .get("src_url_text")
        .and_then(Value::as_str)
        .map(normalize_whitespace)
        .unwrap_or_default();
    if domain.is_empty() {
        Value::Null
    } else {
        json!(format!("http://{}", domain))
    }
}
