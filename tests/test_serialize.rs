use std::collections::{BTreeMap, HashMap};

use pretty_assertions::assert_eq;
use query_string::{ArrayFormat, Config, Element, Error, Map, Undefined, Value};
use serde::Serialize;

#[derive(Serialize)]
struct QueryParams {
    id: u8,
    name: String,
    phone: u32,
    user_ids: Vec<u8>,
    active: bool,
}

fn params() -> QueryParams {
    QueryParams {
        id: 42,
        name: "Acme Corp".to_string(),
        phone: 12345,
        user_ids: vec![1, 2, 3, 4],
        active: true,
    }
}

#[test]
fn serialize_struct() {
    insta::assert_snapshot!(
        query_string::to_string(&params()).unwrap(),
        @"active=true&id=42&name=Acme%20Corp&phone=12345&user_ids=1&user_ids=2&user_ids=3&user_ids=4"
    );
}

#[test]
fn serialize_struct_indexed_unsorted() {
    let config = Config::new()
        .array_format(ArrayFormat::Indexed)
        .sort(false);
    insta::assert_snapshot!(
        config.serialize_string(&params()).unwrap(),
        @"id=42&name=Acme%20Corp&phone=12345&user_ids[0]=1&user_ids[1]=2&user_ids[2]=3&user_ids[3]=4&active=true"
    );
}

#[test]
fn serialize_option() {
    #[derive(Serialize)]
    struct Query {
        vec: Option<Vec<u8>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        skipped: Option<u8>,
    }

    let query = Query {
        vec: None,
        skipped: None,
    };
    assert_eq!(query_string::to_string(&query).unwrap(), "vec");

    let config = Config::new().skip_null(true);
    assert_eq!(config.serialize_string(&query).unwrap(), "");

    let query = Query {
        vec: Some(vec![1, 2]),
        skipped: Some(3),
    };
    assert_eq!(query_string::to_string(&query).unwrap(), "skipped=3&vec=1&vec=2");
}

#[test]
fn serialize_option_elements() {
    #[derive(Serialize)]
    struct Query {
        items: Vec<Option<&'static str>>,
    }

    let query = Query {
        items: vec![Some("a"), None, Some("")],
    };
    let config = Config::new().array_format(ArrayFormat::EmptyIndexed);
    assert_eq!(
        config.serialize_string(&query).unwrap(),
        "items[]=a&items[]&items[]="
    );
}

#[test]
fn serialize_unit_struct_is_undefined() {
    #[derive(Serialize)]
    struct Marker;

    #[derive(Serialize)]
    struct Query {
        a: Marker,
        b: Undefined,
        c: Vec<Marker>,
        d: u8,
    }

    let query = Query {
        a: Marker,
        b: Undefined,
        c: vec![Marker, Marker],
        d: 1,
    };
    assert_eq!(query_string::to_string(&query).unwrap(), "d=1");
}

#[test]
fn serialize_unit_is_null() {
    #[derive(Serialize)]
    struct Query {
        a: (),
        c: Vec<()>,
        d: u8,
    }

    let query = Query {
        a: (),
        c: vec![(), ()],
        d: 1,
    };
    assert_eq!(query_string::to_string(&query).unwrap(), "a&c&c&d=1");
    assert_eq!(
        Config::new().skip_null(true).serialize_string(&query).unwrap(),
        "d=1"
    );
}

#[test]
fn serialize_unit_enum() {
    #[derive(Serialize)]
    #[serde(rename_all = "lowercase")]
    enum Color {
        Red,
        Green,
    }

    #[derive(Serialize)]
    struct Query {
        color: Color,
        palette: Vec<Color>,
    }

    let query = Query {
        color: Color::Red,
        palette: vec![Color::Green, Color::Red],
    };
    let config = Config::new().array_format(ArrayFormat::Comma);
    assert_eq!(
        config.serialize_string(&query).unwrap(),
        "color=red&palette=green,red"
    );
}

#[test]
fn serialize_flatten() {
    #[derive(Serialize)]
    struct Query {
        a: u8,
        #[serde(flatten)]
        common: CommonParams,
    }

    #[derive(Serialize)]
    struct CommonParams {
        limit: u64,
        offset: u64,
    }

    let query = Query {
        a: 1,
        common: CommonParams {
            limit: 100,
            offset: 50,
        },
    };
    assert_eq!(
        query_string::to_string(&query).unwrap(),
        "a=1&limit=100&offset=50"
    );
}

#[test]
fn serialize_newtype_and_tuple() {
    #[derive(Serialize)]
    struct UserId(u32);

    #[derive(Serialize)]
    struct Query {
        user: UserId,
        point: (i32, i32),
    }

    let query = Query {
        user: UserId(7),
        point: (-1, 2),
    };
    let config = Config::new().array_format(ArrayFormat::Indexed);
    assert_eq!(
        config.serialize_string(&query).unwrap(),
        "point[0]=-1&point[1]=2&user=7"
    );
}

#[test]
fn serialize_scalars() {
    #[derive(Serialize)]
    struct Query {
        float: f64,
        whole: f64,
        single: f32,
        character: char,
        negative: i64,
        big: u64,
        flag: bool,
    }

    let query = Query {
        float: 0.25,
        whole: 3.0,
        single: 0.1,
        character: '&',
        negative: -12,
        big: u64::MAX,
        flag: false,
    };
    let config = Config::new().sort(false);
    assert_eq!(
        config.serialize_string(&query).unwrap(),
        "float=0.25&whole=3&single=0.1&character=%26&negative=-12&big=18446744073709551615&flag=false"
    );
}

#[test]
fn serialize_hashmap_keys() {
    let mut map = HashMap::new();
    map.insert(2, "two");
    map.insert(10, "ten");
    map.insert(1, "one");
    // string order, not numeric order
    assert_eq!(query_string::to_string(&map).unwrap(), "1=one&10=ten&2=two");
}

#[test]
fn serialize_dynamic_map() {
    let mut map = Map::new();
    map.insert("q".to_owned(), "a b".into());
    map.insert("page".to_owned(), 2.into());
    map.insert("tags".to_owned(), vec![Some("x"), None].into());

    assert_eq!(query_string::to_string(&map).unwrap(), "page=2&q=a%20b&tags=x&tags");
    assert_eq!(
        query_string::to_string(&map).unwrap(),
        query_string::stringify(&map, &Config::default()).unwrap()
    );
}

#[test]
fn serialize_json_value() {
    let value = serde_json::json!({
        "b": [1, null, "x"],
        "a": null,
        "c": true,
    });
    let config = Config::new().sort(false);
    assert_eq!(config.serialize_string(&value).unwrap(), "b=1&b&b=x&a&c=true");
}

#[test]
fn serialize_to_writer() {
    let mut buffer = Vec::new();
    query_string::to_writer(&params(), &mut buffer).unwrap();
    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        query_string::to_string(&params()).unwrap()
    );
}

#[test]
fn nested_maps_are_unsupported() {
    #[derive(Serialize)]
    struct Address {
        city: String,
    }

    #[derive(Serialize)]
    struct Query {
        address: Address,
    }

    let query = Query {
        address: Address {
            city: "Carrot City".to_owned(),
        },
    };
    assert!(matches!(
        query_string::to_string(&query),
        Err(Error::Unsupported(_))
    ));

    let mut nested = BTreeMap::new();
    nested.insert("a", BTreeMap::from([("b", 1)]));
    assert!(matches!(
        query_string::to_string(&nested),
        Err(Error::Unsupported(_))
    ));
}

#[test]
fn nested_sequences_are_unsupported() {
    let mut map = BTreeMap::new();
    map.insert("a", vec![vec![1, 2], vec![3]]);
    assert!(matches!(
        query_string::to_string(&map),
        Err(Error::Unsupported(_))
    ));
}

#[test]
fn undefined_never_reaches_the_value_model() {
    let mut map = BTreeMap::new();
    map.insert("a", vec![None, Some(Undefined), None]);
    let collected = Config::new().serialize_string(&map).unwrap();
    assert_eq!(collected, "a&a");

    let value = Value::Sequence(vec![Element::Null, Element::Null]);
    let mut expected = Map::new();
    expected.insert("a".to_owned(), value);
    assert_eq!(query_string::stringify(&expected, &Config::new()).unwrap(), collected);
}

#[test]
fn serialize_json_null_is_a_bare_key() {
    let value = serde_json::json!({"a": null});
    assert_eq!(query_string::to_string(&value).unwrap(), "a");
    assert_eq!(
        Config::new().skip_null(true).serialize_string(&value).unwrap(),
        ""
    );

    assert_eq!(query_string::to_string(&serde_json::Value::Null).unwrap(), "");
}

#[test]
fn serialize_json_null_in_joined_sequences() {
    let value = serde_json::json!({"a": [null, "x"]});

    let config = Config::new().array_format(ArrayFormat::Comma);
    assert_eq!(config.serialize_string(&value).unwrap(), "a=x");

    let config = config.skip_null(false);
    assert_eq!(config.serialize_string(&value).unwrap(), "a=,x");

    let config = Config::new()
        .array_format(ArrayFormat::Separator)
        .array_format_separator("|")
        .skip_null(false);
    assert_eq!(config.serialize_string(&value).unwrap(), "a=|x");

    let config = Config::new().array_format(ArrayFormat::EmptyIndexed);
    assert_eq!(config.serialize_string(&value).unwrap(), "a[]&a[]=x");
}
