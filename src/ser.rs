//! Serialization support for query strings.
//!
//! ### An overview of the design of the encoder
//!
//! Stringifying happens in two steps. First any `Serialize` input is
//! collected into a flat [`Map`] (this is where `undefined` values, i.e.
//! unit structs and skipped fields, are dropped). Then `encode_map` turns every
//! entry into a group of fragments:
//!
//! - the entry filter decides if a key is omitted, written bare (`key`) or
//!   written as `key=value`,
//! - sequences are expanded according to the configured [`ArrayFormat`],
//! - every key and value token goes through `encode::encode`.
//!
//! Finally the groups are ordered by key and all fragments are joined with
//! `&`. Fragments of one key always stay together, in sequence order.

mod encode;

use std::borrow::Cow;
use std::fmt::Display;
use std::io::Write;

use serde::ser;

use crate::config::{ArrayFormat, Config};
use crate::error::*;
use crate::value::{Element, Map, Scalar, Value, format_float};

/// Stringifies a [`Map`] into a query string.
///
/// ```
/// use query_string::{Config, Map};
///
/// let mut map = Map::new();
/// map.insert("foo".to_owned(), "bar".into());
/// map.insert("bar".to_owned(), "baz".into());
///
/// assert_eq!(
///     query_string::stringify(&map, &Config::default()).unwrap(),
///     "bar=baz&foo=bar");
/// ```
pub fn stringify(input: &Map, config: &Config) -> Result<String> {
    config.stringify(input)
}

/// Serializes a value into a query string, using the default [`Config`].
///
/// ```
/// # use serde::Serialize;
/// #[derive(Serialize)]
/// struct Query {
///     name: String,
///     tags: Vec<&'static str>,
///     page: Option<u32>,
/// }
///
/// let q = Query {
///     name: "Alice Smith".to_owned(),
///     tags: vec!["a", "b"],
///     page: None,
/// };
///
/// assert_eq!(
///     query_string::to_string(&q).unwrap(),
///     "name=Alice%20Smith&page&tags=a&tags=b");
/// ```
pub fn to_string<T: ser::Serialize + ?Sized>(input: &T) -> Result<String> {
    Config::default().serialize_string(input)
}

/// Serializes a value into a generic writer object, using the default
/// [`Config`].
pub fn to_writer<T: ser::Serialize + ?Sized, W: Write>(input: &T, writer: &mut W) -> Result<()> {
    Config::default().serialize_to_writer(input, writer)
}

/// The fragments written for one top-level key.
struct Group<'a> {
    key: &'a str,
    fragments: Vec<String>,
}

/// Encodes a map whose configuration has already been validated.
pub(crate) fn encode_map(input: &Map, config: &Config) -> String {
    let mut groups: Vec<Group<'_>> = input
        .iter()
        .filter_map(|(key, value)| {
            let fragments = expand_entry(key, value, config);
            (!fragments.is_empty()).then_some(Group { key, fragments })
        })
        .collect();

    config.sort.apply(&mut groups, |group| group.key);

    let mut output = String::with_capacity(128);
    let mut fragment_count = 0;
    for fragment in groups.iter().flat_map(|group| &group.fragments) {
        // an empty key written bare leaves nothing to join
        if fragment.is_empty() {
            continue;
        }
        if fragment_count > 0 {
            output.push('&');
        }
        output.push_str(fragment);
        fragment_count += 1;
    }

    tracing::trace!(
        keys = input.len(),
        fragments = fragment_count,
        array_format = %config.array_format,
        "stringified query"
    );
    output
}

/// Builds the fragments of a single key, encoding the key once.
struct Fragments<'c> {
    key: Cow<'c, str>,
    config: &'c Config,
    fragments: Vec<String>,
}

impl<'c> Fragments<'c> {
    fn new(key: &'c str, config: &'c Config) -> Self {
        Self {
            key: encode::encode(key, config.encode, config.strict),
            config,
            fragments: Vec::new(),
        }
    }

    /// Writes `key<suffix>` with no value.
    fn bare(&mut self, suffix: &str) {
        let mut fragment = String::with_capacity(self.key.len() + suffix.len());
        fragment.push_str(&self.key);
        fragment.push_str(suffix);
        self.fragments.push(fragment);
    }

    /// Writes `key<suffix>=<value>`, percent-encoding the value.
    fn pair(&mut self, suffix: &str, value: &str) {
        let value = encode::encode(value, self.config.encode, self.config.strict);
        self.pair_encoded(suffix, &value);
    }

    /// Writes `key<suffix>=<value>` with an already encoded value.
    fn pair_encoded(&mut self, suffix: &str, value: &str) {
        let mut fragment = String::with_capacity(self.key.len() + suffix.len() + 1 + value.len());
        fragment.push_str(&self.key);
        fragment.push_str(suffix);
        fragment.push('=');
        fragment.push_str(value);
        self.fragments.push(fragment);
    }

    fn scalar(&mut self, suffix: &str, scalar: &Scalar) {
        self.pair(suffix, &scalar.to_text());
    }

    fn finish(self) -> Vec<String> {
        self.fragments
    }
}

/// Decides whether an entry is omitted, written bare, or written with a
/// value. Sequences are handed to [`expand_sequence`].
fn expand_entry(key: &str, value: &Value, config: &Config) -> Vec<String> {
    let mut fragments = Fragments::new(key, config);
    match value {
        Value::Null if config.skips_null() => {}
        Value::Null => fragments.bare(""),
        Value::Scalar(scalar) if scalar.is_empty() && config.skips_empty_string() => {}
        Value::Scalar(scalar) => fragments.scalar("", scalar),
        Value::Sequence(elements) => expand_sequence(&mut fragments, elements, config),
    }
    fragments.finish()
}

/// Expands a sequence into zero or more fragments.
///
/// `null` and empty elements are filtered per element, exactly like
/// top-level values. An empty sequence writes nothing at all.
fn expand_sequence(fragments: &mut Fragments<'_>, elements: &[Element], config: &Config) {
    let surviving = elements.iter().filter(|element| match element {
        Element::Null => !config.skips_null(),
        Element::Scalar(scalar) => !(scalar.is_empty() && config.skips_empty_string()),
    });

    match config.array_format {
        ArrayFormat::Unindexed => {
            for element in surviving {
                match element {
                    Element::Null => fragments.bare(""),
                    Element::Scalar(scalar) => fragments.scalar("", scalar),
                }
            }
        }
        ArrayFormat::EmptyIndexed => {
            for element in surviving {
                match element {
                    Element::Null => fragments.bare("[]"),
                    Element::Scalar(scalar) => fragments.scalar("[]", scalar),
                }
            }
        }
        ArrayFormat::Indexed => {
            // `null` elements take no index and write nothing
            let scalars = surviving.filter_map(|element| match element {
                Element::Scalar(scalar) => Some(scalar),
                Element::Null => None,
            });
            let mut buffer = itoa::Buffer::new();
            for (index, scalar) in scalars.enumerate() {
                let suffix = format!("[{}]", buffer.format(index));
                fragments.scalar(&suffix, scalar);
            }
        }
        ArrayFormat::Comma | ArrayFormat::Separator => {
            if let Some(joined) = join_elements(surviving, config) {
                fragments.pair_encoded("", &joined);
            }
        }
    }
}

/// Joins elements into a single encoded value for the `Comma` and
/// `Separator` formats. The separator itself is never encoded.
///
/// `null` and empty strings only take a slot when the matching skip flag
/// was explicitly set to `false`. Returns `None` when nothing is left.
fn join_elements<'e>(
    elements: impl Iterator<Item = &'e Element>,
    config: &Config,
) -> Option<String> {
    let mut joined: Option<String> = None;
    for element in elements {
        let text = match element {
            Element::Null if config.joins_null() => Cow::Borrowed(""),
            Element::Null => continue,
            Element::Scalar(scalar) if scalar.is_empty() && !config.joins_empty_string() => {
                continue;
            }
            Element::Scalar(scalar) => scalar.to_text(),
        };
        let encoded = encode::encode(&text, config.encode, config.strict);
        match joined.as_mut() {
            None => joined = Some(encoded.into_owned()),
            Some(joined) => {
                joined.push_str(config.separator());
                joined.push_str(&encoded);
            }
        }
    }
    joined
}

/// Collects any serializable input into a [`Map`].
///
/// Returns `Ok(None)` when the top-level input is not a map or struct.
pub(crate) fn collect<T: ser::Serialize + ?Sized>(input: &T) -> Result<Option<Map>> {
    input.serialize(MapCollector)
}

impl ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: Display,
    {
        Error::Custom(msg.to_string())
    }
}

/// The top-level serializer: only maps and structs produce entries.
struct MapCollector;

macro_rules! not_a_map {
    ($($meth:ident($($arg:ident: $ty:ty),*),)*) => {
        $(
            fn $meth(self, $(_: $ty),*) -> Result<Self::Ok> {
                Ok(None)
            }
        )*
    };
}

impl ser::Serializer for MapCollector {
    type Ok = Option<Map>;
    type Error = Error;
    type SerializeSeq = NotAMap;
    type SerializeTuple = NotAMap;
    type SerializeTupleStruct = NotAMap;
    type SerializeTupleVariant = NotAMap;
    type SerializeMap = CollectMap;
    type SerializeStruct = CollectMap;
    type SerializeStructVariant = ser::Impossible<Self::Ok, Error>;

    not_a_map! {
        serialize_bool(v: bool),
        serialize_i8(v: i8),
        serialize_i16(v: i16),
        serialize_i32(v: i32),
        serialize_i64(v: i64),
        serialize_u8(v: u8),
        serialize_u16(v: u16),
        serialize_u32(v: u32),
        serialize_u64(v: u64),
        serialize_f32(v: f32),
        serialize_f64(v: f64),
        serialize_char(v: char),
        serialize_str(v: &str),
        serialize_bytes(v: &[u8]),
        serialize_none(),
        serialize_unit(),
        serialize_unit_struct(name: &'static str),
        serialize_unit_variant(name: &'static str, index: u32, variant: &'static str),
    }

    fn serialize_some<T: ?Sized + ser::Serialize>(self, value: &T) -> Result<Self::Ok> {
        value.serialize(self)
    }

    fn serialize_newtype_struct<T: ?Sized + ser::Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok> {
        value.serialize(self)
    }

    /// Returns an error.
    fn serialize_newtype_variant<T: ?Sized + ser::Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok> {
        Err(Error::Unsupported("enum variants with data at the top level"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(NotAMap)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Ok(NotAMap)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(NotAMap)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(NotAMap)
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(CollectMap::new(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        Ok(CollectMap::new(len))
    }

    /// Returns an error.
    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::Unsupported("enum variants with data at the top level"))
    }
}

/// Swallows the elements of a top-level sequence, which stringifies to
/// nothing.
#[doc(hidden)]
pub struct NotAMap;

macro_rules! impl_not_a_map {
    ($($trait:ident::$meth:ident,)*) => {
        $(
            impl ser::$trait for NotAMap {
                type Ok = Option<Map>;
                type Error = Error;

                fn $meth<T>(&mut self, _value: &T) -> Result<()>
                where
                    T: ser::Serialize + ?Sized,
                {
                    Ok(())
                }

                fn end(self) -> Result<Self::Ok> {
                    Ok(None)
                }
            }
        )*
    };
}

impl_not_a_map! {
    SerializeSeq::serialize_element,
    SerializeTuple::serialize_element,
    SerializeTupleStruct::serialize_field,
    SerializeTupleVariant::serialize_field,
}

#[doc(hidden)]
pub struct CollectMap {
    map: Map,
    key: Option<String>,
}

impl CollectMap {
    fn new(len: usize) -> Self {
        Self {
            map: Map::with_capacity(len),
            key: None,
        }
    }

    /// `undefined` values leave no entry behind.
    fn insert<T: ser::Serialize + ?Sized>(&mut self, key: String, value: &T) -> Result<()> {
        if let Some(value) = value.serialize(ValueSerializer::new())? {
            self.map.insert(key, value);
        }
        Ok(())
    }
}

impl ser::SerializeMap for CollectMap {
    type Ok = Option<Map>;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ser::Serialize + ?Sized,
    {
        self.key = Some(key.serialize(KeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ser::Serialize + ?Sized,
    {
        let Some(key) = self.key.take() else {
            return Err(Error::Custom("internal error: no key found".to_string()));
        };
        self.insert(key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Some(self.map))
    }
}

impl ser::SerializeStruct for CollectMap {
    type Ok = Option<Map>;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ser::Serialize + ?Sized,
    {
        self.insert(key.to_owned(), value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Some(self.map))
    }
}

macro_rules! serialize_scalar {
    (
        $($ty:ty => $meth:ident,)*) => {
        $(
            fn $meth(self, v: $ty) -> Result<Self::Ok> {
                Ok(Some(Value::from(v)))
            }
        )*
    };
}

/// Serializes a value bound to a key.
///
/// `Ok(None)` stands for `undefined`: a unit struct such as
/// [`Undefined`](crate::Undefined), which produces no entry. A plain `()`
/// is `null`, since that is how `serde_json::Value::Null` serializes.
struct ValueSerializer {
    in_sequence: bool,
}

impl ValueSerializer {
    fn new() -> Self {
        Self { in_sequence: false }
    }

    fn nested() -> Self {
        Self { in_sequence: true }
    }
}

impl ser::Serializer for ValueSerializer {
    type Ok = Option<Value>;
    type Error = Error;
    type SerializeSeq = CollectSeq;
    type SerializeTuple = CollectSeq;
    type SerializeTupleStruct = CollectSeq;
    type SerializeTupleVariant = ser::Impossible<Self::Ok, Error>;
    type SerializeMap = ser::Impossible<Self::Ok, Error>;
    type SerializeStruct = ser::Impossible<Self::Ok, Error>;
    type SerializeStructVariant = ser::Impossible<Self::Ok, Error>;

    serialize_scalar! {
        bool => serialize_bool,
        i8  => serialize_i8,
        i16 => serialize_i16,
        i32 => serialize_i32,
        i64 => serialize_i64,
        u8  => serialize_u8,
        u16 => serialize_u16,
        u32 => serialize_u32,
        u64 => serialize_u64,
        f64 => serialize_f64,
        &str => serialize_str,
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        Ok(Some(Value::from(format_float(v))))
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        let mut b = [0; 4];
        Ok(Some(Value::from(&*v.encode_utf8(&mut b))))
    }

    fn serialize_bytes(self, value: &[u8]) -> Result<Self::Ok> {
        Ok(Some(Value::from(std::str::from_utf8(value)?)))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(Some(Value::Null))
    }

    fn serialize_some<T: ?Sized + ser::Serialize>(self, value: &T) -> Result<Self::Ok> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(Some(Value::Null))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Ok(None)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        Ok(Some(Value::from(variant)))
    }

    fn serialize_newtype_struct<T: ?Sized + ser::Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok> {
        value.serialize(self)
    }

    /// Returns an error.
    fn serialize_newtype_variant<T: ?Sized + ser::Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok> {
        Err(Error::Unsupported("enum variants with data as values"))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        if self.in_sequence {
            return Err(Error::Unsupported("sequences nested in sequences"));
        }
        Ok(CollectSeq::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        ser::Serializer::serialize_seq(self, Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        ser::Serializer::serialize_seq(self, Some(len))
    }

    /// Returns an error.
    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::Unsupported("enum variants with data as values"))
    }

    /// Returns an error.
    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::Unsupported("nested maps"))
    }

    /// Returns an error.
    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::Unsupported("nested maps"))
    }

    /// Returns an error.
    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::Unsupported("enum variants with data as values"))
    }
}

#[doc(hidden)]
pub struct CollectSeq {
    elements: Vec<Element>,
}

impl CollectSeq {
    fn new(len: usize) -> Self {
        Self {
            elements: Vec::with_capacity(len),
        }
    }

    /// `undefined` elements are dropped here, before the encoder sees them.
    fn push<T: ser::Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        match value.serialize(ValueSerializer::nested())? {
            None => {}
            Some(Value::Null) => self.elements.push(Element::Null),
            Some(Value::Scalar(scalar)) => self.elements.push(Element::Scalar(scalar)),
            Some(Value::Sequence(_)) => {
                return Err(Error::Unsupported("sequences nested in sequences"));
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Option<Value>> {
        Ok(Some(Value::Sequence(self.elements)))
    }
}

impl ser::SerializeSeq for CollectSeq {
    type Ok = Option<Value>;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ser::Serialize + ?Sized,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl ser::SerializeTuple for CollectSeq {
    type Ok = Option<Value>;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ser::Serialize + ?Sized,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl ser::SerializeTupleStruct for CollectSeq {
    type Ok = Option<Value>;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ser::Serialize + ?Sized,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

macro_rules! serialize_key_itoa {
    (
        $($ty:ty => $meth:ident,)*) => {
        $(
            fn $meth(self, v: $ty) -> Result<Self::Ok> {
                let mut buffer = itoa::Buffer::new();
                Ok(buffer.format(v).to_owned())
            }
        )*
    };
}

/// Serializes map keys, which must be strings or other scalars.
struct KeySerializer;

impl ser::Serializer for KeySerializer {
    type Ok = String;
    type Error = Error;
    type SerializeSeq = ser::Impossible<Self::Ok, Error>;
    type SerializeTuple = ser::Impossible<Self::Ok, Error>;
    type SerializeTupleStruct = ser::Impossible<Self::Ok, Error>;
    type SerializeTupleVariant = ser::Impossible<Self::Ok, Error>;
    type SerializeMap = ser::Impossible<Self::Ok, Error>;
    type SerializeStruct = ser::Impossible<Self::Ok, Error>;
    type SerializeStructVariant = ser::Impossible<Self::Ok, Error>;

    serialize_key_itoa! {
        u8  => serialize_u8,
        u16 => serialize_u16,
        u32 => serialize_u32,
        u64 => serialize_u64,
        i8  => serialize_i8,
        i16 => serialize_i16,
        i32 => serialize_i32,
        i64 => serialize_i64,
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        Ok(format_float(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        Ok(format_float(v))
    }

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        Ok(if v { "true" } else { "false" }.to_owned())
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        Ok(v.to_owned())
    }

    fn serialize_bytes(self, value: &[u8]) -> Result<Self::Ok> {
        Ok(std::str::from_utf8(value)?.to_owned())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        Ok(variant.to_owned())
    }

    fn serialize_newtype_struct<T: ?Sized + ser::Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok> {
        value.serialize(self)
    }

    /// Returns an error.
    fn serialize_unit(self) -> Result<Self::Ok> {
        Err(Error::Unsupported("unit map keys"))
    }

    /// Returns an error.
    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Err(Error::Unsupported("unit map keys"))
    }

    /// Returns an error.
    fn serialize_newtype_variant<T: ?Sized + ser::Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok> {
        Err(Error::Unsupported("compound map keys"))
    }

    /// Returns an error.
    fn serialize_none(self) -> Result<Self::Ok> {
        Err(Error::Unsupported("optional map keys"))
    }

    /// Returns an error.
    fn serialize_some<T: ?Sized + ser::Serialize>(self, _value: &T) -> Result<Self::Ok> {
        Err(Error::Unsupported("optional map keys"))
    }

    /// Returns an error.
    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::Unsupported("compound map keys"))
    }

    /// Returns an error.
    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::Unsupported("compound map keys"))
    }

    /// Returns an error.
    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::Unsupported("compound map keys"))
    }

    /// Returns an error.
    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::Unsupported("compound map keys"))
    }

    /// Returns an error.
    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::Unsupported("compound map keys"))
    }

    /// Returns an error.
    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::Unsupported("compound map keys"))
    }

    /// Returns an error.
    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::Unsupported("compound map keys"))
    }
}
