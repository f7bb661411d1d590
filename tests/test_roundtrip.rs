use query_string::{ArrayFormat, Config, Element, Map, Value};

/// macro for testing roundtrip stringification and parsing
/// once per listed array format
macro_rules! roundtrip_test {
    (
        $data:expr, $($format:expr),+
    ) => {
        let data: Map = $data;

        for array_format in [$($format),+] {
            let config = Config::new().array_format(array_format);

            let stringified = config.stringify(&data).expect("stringify");
            let parsed = config.parse(&stringified).expect("parse");

            // check we get the same data back, keys in sorted order
            let mut expected = data.clone();
            expected.sort_keys();
            pretty_assertions::assert_eq!(
                expected.into_iter().collect::<Vec<_>>(),
                parsed.into_iter().collect::<Vec<_>>(),
                "{array_format}: {stringified}"
            );
        }
    };
}

fn map<const N: usize>(entries: [(&str, Value); N]) -> Map {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}

#[test]
fn flat_strings() {
    roundtrip_test!(
        map([("a", "1".into()), ("b", "two words".into())]),
        ArrayFormat::Unindexed,
        ArrayFormat::Indexed,
        ArrayFormat::EmptyIndexed,
        ArrayFormat::Comma
    );
}

#[test]
fn special_characters() {
    roundtrip_test!(
        map([
            ("a&b", "c=d".into()),
            ("brackets[]", "[x]".into()),
            ("quote's", "(!*)".into()),
            ("plus", "1+1".into()),
            ("unicode", "comté ✓".into()),
        ]),
        ArrayFormat::Unindexed
    );
}

#[test]
fn nulls_and_empty_strings() {
    roundtrip_test!(
        map([("bare", Value::Null), ("empty", "".into())]),
        ArrayFormat::Unindexed,
        ArrayFormat::Indexed,
        ArrayFormat::EmptyIndexed,
        ArrayFormat::Comma
    );
}

#[test]
fn sequences() {
    roundtrip_test!(
        map([
            ("list", vec!["x", "y z", "x"].into()),
            ("other", "value".into()),
        ]),
        ArrayFormat::Unindexed,
        ArrayFormat::Indexed,
        ArrayFormat::EmptyIndexed,
        ArrayFormat::Comma
    );
}

#[test]
fn sequences_with_nulls_and_empty_strings() {
    roundtrip_test!(
        map([(
            "list",
            Value::Sequence(vec![
                Element::from("a"),
                Element::Null,
                Element::from(""),
            ]),
        )]),
        ArrayFormat::Unindexed,
        ArrayFormat::EmptyIndexed
    );
}

#[test]
fn single_element_bracket_sequence() {
    roundtrip_test!(
        map([("list", vec!["only"].into())]),
        ArrayFormat::EmptyIndexed,
        ArrayFormat::Indexed
    );
}

#[test]
fn custom_separator() {
    let data = map([("list", vec!["a,b", "c"].into())]);
    let config = Config::new()
        .array_format(ArrayFormat::Separator)
        .array_format_separator(";");
    let stringified = config.stringify(&data).unwrap();
    assert_eq!(stringified, "list=a%2Cb;c");
    assert_eq!(config.parse(&stringified).unwrap(), data);
}
