//! Parsing support for query strings, the inverse of [`crate::stringify`].
//!
//! Parsing is intentionally lenient: any input produces a map. Values are
//! always strings; a key without `=` parses to `Null` and `key=` to the
//! empty string. How repeated and bracketed keys are folded into sequences
//! follows the configured [`ArrayFormat`], so anything written by
//! `stringify` with the `Unindexed`, `EmptyIndexed` or `Indexed` formats
//! reads back with the same config.

mod decode;

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::config::{ArrayFormat, Config};
use crate::error::Result;
use crate::value::{Element, Map, Scalar, Value};

/// Parses a query string into a [`Map`].
///
/// A leading `?`, `#` or `&` is ignored.
///
/// ```
/// use query_string::{ArrayFormat, Config, Value};
///
/// let config = Config::new().array_format(ArrayFormat::EmptyIndexed);
/// let map = query_string::parse("foo[]=a&foo[]=b&bar", &config).unwrap();
///
/// assert_eq!(map["bar"], Value::Null);
/// assert_eq!(map["foo"], Value::from(vec!["a", "b"]));
/// ```
pub fn parse(input: &str, config: &Config) -> Result<Map> {
    config.parse(input)
}

/// A key being assembled while scanning the input.
enum Slot {
    Value(Value),
    Indexed(BTreeMap<usize, Element>),
}

impl Slot {
    fn push(&mut self, element: Element) {
        match self {
            Slot::Value(Value::Sequence(elements)) => elements.push(element),
            Slot::Value(single) => {
                let first = match std::mem::replace(single, Value::Null) {
                    Value::Scalar(scalar) => Element::Scalar(scalar),
                    _ => Element::Null,
                };
                *single = Value::Sequence(vec![first, element]);
            }
            Slot::Indexed(elements) => {
                let next = elements.keys().next_back().map_or(0, |last| last + 1);
                elements.insert(next, element);
            }
        }
    }

    fn finish(self) -> Value {
        match self {
            Slot::Value(value) => value,
            Slot::Indexed(elements) => Value::Sequence(elements.into_values().collect()),
        }
    }
}

/// Splits `name[digits]` into the name and index.
fn split_index(key: &str) -> Option<(&str, usize)> {
    let (name, rest) = key.strip_suffix(']')?.rsplit_once('[')?;
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((name, rest.parse().ok()?))
}

fn to_element(value: Option<&str>) -> Element {
    match value {
        None => Element::Null,
        Some(value) => Element::Scalar(Scalar::String(decode::decode(value).into_owned())),
    }
}

/// Parses an input whose configuration has already been validated.
pub(crate) fn parse_map(input: &str, config: &Config) -> Map {
    let input = input.trim_start_matches(['?', '#', '&']);
    let mut slots: IndexMap<String, Slot> = IndexMap::new();

    for segment in input.split('&').filter(|segment| !segment.is_empty()) {
        let (raw_key, raw_value) = match segment.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (segment, None),
        };
        let key = decode::decode(raw_key);

        match config.array_format {
            ArrayFormat::EmptyIndexed => {
                if let Some(name) = key.strip_suffix("[]") {
                    slots
                        .entry(name.to_owned())
                        .or_insert_with(|| Slot::Value(Value::Sequence(Vec::new())))
                        .push(to_element(raw_value));
                    continue;
                }
            }
            ArrayFormat::Indexed => {
                if let Some((name, index)) = split_index(&key) {
                    let slot = slots
                        .entry(name.to_owned())
                        .or_insert_with(|| Slot::Indexed(BTreeMap::new()));
                    match slot {
                        Slot::Indexed(elements) => {
                            elements.insert(index, to_element(raw_value));
                        }
                        Slot::Value(_) => slot.push(to_element(raw_value)),
                    }
                    continue;
                }
            }
            ArrayFormat::Comma | ArrayFormat::Separator => {
                if let Some(value) = raw_value.filter(|value| value.contains(config.separator())) {
                    let elements = value
                        .split(config.separator())
                        .map(|item| to_element(Some(item)));
                    match slots.get_mut(&*key) {
                        Some(slot) => elements.for_each(|element| slot.push(element)),
                        None => {
                            let sequence = Value::Sequence(elements.collect());
                            slots.insert(key.into_owned(), Slot::Value(sequence));
                        }
                    }
                    continue;
                }
            }
            ArrayFormat::Unindexed => {}
        }

        let element = to_element(raw_value);
        match slots.get_mut(&*key) {
            Some(slot) => slot.push(element),
            None => {
                let value = match element {
                    Element::Scalar(scalar) => Value::Scalar(scalar),
                    Element::Null => Value::Null,
                };
                slots.insert(key.into_owned(), Slot::Value(value));
            }
        }
    }

    let mut entries: Vec<(String, Value)> = slots
        .into_iter()
        .map(|(key, slot)| (key, slot.finish()))
        .collect();
    config.sort.apply(&mut entries, |(key, _)| key.as_str());

    tracing::trace!(keys = entries.len(), array_format = %config.array_format, "parsed query");
    entries.into_iter().collect()
}
