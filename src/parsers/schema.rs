//! Declarative extraction schema
//!
//! A schema is a tree of [`Node`]s. Each node selects elements relative to
//! the element its parent matched, checks how many it found against a
//! [`Quantity`] and turns them into a JSON value: strings for leaf nodes,
//! objects keyed by child name for groups. An optional callback then
//! reshapes every extracted value.
//!
//! The interpreter knows nothing about any particular website. Page
//! specific rules live in the callbacks.

use std::fmt;

use scraper::{ElementRef, Selector};
use serde_json::{Map, Value};
use thiserror::Error;

use super::html::{get_node_all_text, get_node_attr, get_node_text, parse_selector, SelectorError};

/// Markup did not have the shape a schema expects
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ExtractionError {
    pub message: String,
}

impl ExtractionError {
    pub fn new(message: impl Into<String>) -> Self {
        ExtractionError {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ExtractionError {
    fn from(error: serde_json::Error) -> Self {
        ExtractionError::new(format!("Unexpected page structure: {}", error))
    }
}

/// How many elements a node may match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Exactly one, extracted as a single value
    One,
    /// Zero or one, extracted as a value or null
    Optional,
    /// Zero or more, extracted as an array
    Any,
    /// One or more, extracted as an array
    AtLeastOne,
}

impl Quantity {
    fn accepts(self, count: usize) -> bool {
        match self {
            Quantity::One => count == 1,
            Quantity::Optional => count <= 1,
            Quantity::Any => true,
            Quantity::AtLeastOne => count >= 1,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Quantity::One => "1",
            Quantity::Optional => "?",
            Quantity::Any => "*",
            Quantity::AtLeastOne => "+",
        })
    }
}

/// Where a leaf node reads its string from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Text nodes directly under the element
    Text,
    /// All text under the element, descendants included
    AllText,
    /// An attribute; elements lacking it are skipped
    Attr(&'static str),
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    String(Source),
    Group(Vec<Node>),
}

pub type Callback = fn(Value) -> Value;

#[derive(Debug, Clone)]
pub struct Node {
    name: &'static str,
    selector: Option<Selector>,
    quantity: Quantity,
    kind: NodeKind,
    callback: Option<Callback>,
}

impl Node {
    /// A leaf reading element text
    pub fn string(name: &'static str) -> Self {
        Node {
            name,
            selector: None,
            quantity: Quantity::One,
            kind: NodeKind::String(Source::Text),
            callback: None,
        }
    }

    /// A container whose children run against each matched element
    pub fn group(name: &'static str, children: Vec<Node>) -> Self {
        Node {
            name,
            selector: None,
            quantity: Quantity::One,
            kind: NodeKind::Group(children),
            callback: None,
        }
    }

    /// Selects elements with a CSS selector. Without one, a node matches
    /// the element it is evaluated against.
    pub fn css(mut self, selector: &str) -> Result<Self, SelectorError> {
        self.selector = Some(parse_selector(selector)?);
        Ok(self)
    }

    pub fn quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn attr(mut self, attr: &'static str) -> Self {
        self.kind = NodeKind::String(Source::Attr(attr));
        self
    }

    pub fn all_text(mut self) -> Self {
        self.kind = NodeKind::String(Source::AllText);
        self
    }

    pub fn callback(mut self, callback: Callback) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Evaluates the node against `context`. The context element itself
    /// is a candidate, followed by its descendants in document order.
    pub fn parse(&self, context: &ElementRef) -> Result<Value, ExtractionError> {
        let elements: Vec<ElementRef> = match &self.selector {
            Some(selector) => selector
                .matches(context)
                .then_some(*context)
                .into_iter()
                .chain(context.select(selector))
                .collect(),
            None => vec![*context],
        };

        let mut values = Vec::with_capacity(elements.len());
        for element in &elements {
            let value = match &self.kind {
                NodeKind::String(Source::Text) => Value::String(get_node_text(element)),
                NodeKind::String(Source::AllText) => Value::String(get_node_all_text(element)),
                NodeKind::String(Source::Attr(attr)) => match get_node_attr(element, attr) {
                    Some(value) => Value::String(value),
                    None => continue,
                },
                NodeKind::Group(children) => {
                    let mut object = Map::with_capacity(children.len());
                    for child in children {
                        object.insert(child.name.to_string(), child.parse(element)?);
                    }
                    Value::Object(object)
                }
            };
            values.push(value);
        }

        if !self.quantity.accepts(values.len()) {
            return Err(ExtractionError::new(format!(
                "Number of \"{}\" elements, {}, does not match the expected quantity \"{}\"",
                self.name,
                values.len(),
                self.quantity
            )));
        }

        if let Some(callback) = self.callback {
            values = values.into_iter().map(callback).collect();
        }

        Ok(match self.quantity {
            Quantity::One | Quantity::Optional => values.pop().unwrap_or(Value::Null),
            Quantity::Any | Quantity::AtLeastOne => Value::Array(values),
        })
    }
}
