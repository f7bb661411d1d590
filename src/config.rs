use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::value::Map;

/// Configuration for stringifying (and parsing) query strings.
///
/// A `Config` is built once and can be reused for any number of calls; it
/// holds no per-call state.
///
/// ## Defaults
///
/// - values are percent-encoded, strictly (`!'()*` are escaped too)
/// - arrays use the repeated-key format, `a=1&a=2`
/// - `null` values are written as bare keys, empty strings as `key=`
/// - keys are sorted in ascending order
///
/// ```
/// use query_string::{ArrayFormat, Config, Map, Value};
///
/// let mut map = Map::new();
/// map.insert("foo".to_owned(), Value::Null);
/// map.insert("bar".to_owned(), vec!["one", "two"].into());
///
/// let config = Config::new().array_format(ArrayFormat::Indexed);
/// assert_eq!(config.stringify(&map).unwrap(), "bar[0]=one&bar[1]=two&foo");
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) encode: bool,
    pub(crate) strict: bool,
    pub(crate) array_format: ArrayFormat,
    array_format_separator: Cow<'static, str>,
    skip_null: Option<bool>,
    skip_empty_string: Option<bool>,
    pub(crate) sort: Sort,
}

/// How a key bound to a sequence is expanded into fragments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArrayFormat {
    /// Use the `a=1&a=2` format.
    #[default]
    Unindexed,
    /// Use the `a[0]=1&a[1]=2` format.
    Indexed,
    /// Use the `a[]=1&a[]=2` format.
    EmptyIndexed,
    /// Use the `a=1,2` format.
    Comma,
    /// Use the `a=1|2` format, joined with the configured separator.
    Separator,
}

impl ArrayFormat {
    /// Looks up a format by the name used in query string libraries:
    /// `none`, `index`, `bracket`, `comma` or `separator`.
    ///
    /// Unknown names are not an error, they select the default
    /// [`ArrayFormat::Unindexed`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "none" => ArrayFormat::Unindexed,
            "index" => ArrayFormat::Indexed,
            "bracket" => ArrayFormat::EmptyIndexed,
            "comma" => ArrayFormat::Comma,
            "separator" => ArrayFormat::Separator,
            unknown => {
                tracing::trace!(name = unknown, "unknown array format, using `none`");
                ArrayFormat::Unindexed
            }
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ArrayFormat::Unindexed => "none",
            ArrayFormat::Indexed => "index",
            ArrayFormat::EmptyIndexed => "bracket",
            ArrayFormat::Comma => "comma",
            ArrayFormat::Separator => "separator",
        }
    }
}

impl From<&str> for ArrayFormat {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for ArrayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A key comparator, following the usual [`Ordering`] contract.
pub type Comparator = Arc<dyn Fn(&str, &str) -> Ordering + Send + Sync>;

/// Determines the order in which top-level keys are written.
///
/// Sorting is stable: keys that compare equal keep their insertion order.
#[derive(Clone, Default)]
pub enum Sort {
    /// Ascending code point order.
    #[default]
    Ascending,
    /// Keep the insertion order of the input.
    Disabled,
    /// Order keys with a custom comparator.
    Custom(Comparator),
}

impl Sort {
    /// Creates a [`Sort::Custom`] from a closure.
    ///
    /// ```
    /// use query_string::{Config, Map, Sort};
    ///
    /// let order = ["c", "a", "b"];
    /// let position = move |key: &str| order.iter().position(|k| *k == key);
    /// let config = Config::new().sort(Sort::by(move |a, b| position(a).cmp(&position(b))));
    ///
    /// let mut map = Map::new();
    /// map.insert("a".to_owned(), "foo".into());
    /// map.insert("b".to_owned(), "bar".into());
    /// map.insert("c".to_owned(), "baz".into());
    /// assert_eq!(config.stringify(&map).unwrap(), "c=baz&a=foo&b=bar");
    /// ```
    pub fn by<F>(comparator: F) -> Self
    where
        F: Fn(&str, &str) -> Ordering + Send + Sync + 'static,
    {
        Sort::Custom(Arc::new(comparator))
    }

    /// Stable-sorts `items` by the key that `key_of` extracts.
    pub(crate) fn apply<T>(&self, items: &mut [T], key_of: impl Fn(&T) -> &str) {
        match self {
            Sort::Ascending => items.sort_by(|a, b| key_of(a).cmp(key_of(b))),
            Sort::Custom(comparator) => items.sort_by(|a, b| comparator(key_of(a), key_of(b))),
            Sort::Disabled => {}
        }
    }
}

impl From<bool> for Sort {
    fn from(sort: bool) -> Self {
        if sort { Sort::Ascending } else { Sort::Disabled }
    }
}

impl fmt::Debug for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sort::Ascending => f.write_str("Ascending"),
            Sort::Disabled => f.write_str("Disabled"),
            Sort::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self {
            encode: true,
            strict: true,
            array_format: ArrayFormat::Unindexed,
            array_format_separator: Cow::Borrowed(","),
            skip_null: None,
            skip_empty_string: None,
            sort: Sort::Ascending,
        }
    }

    /// Whether keys and values are percent-encoded at all. Default is `true`.
    ///
    /// Brackets and separators added for array formats are written as-is
    /// either way.
    pub const fn encode(mut self, encode: bool) -> Self {
        self.encode = encode;
        self
    }

    /// By default encoding is strict: on top of what `encodeURIComponent`
    /// escapes, the characters `!`, `'`, `(`, `)` and `*` are
    /// percent-encoded as well, leaving only the RFC 3986 unreserved set.
    ///
    /// Set this to `false` to leave those five characters literal.
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Specifies how sequence values are expanded.
    ///
    /// The default is `Unindexed`, which results in keys like `a=1&a=2`.
    pub const fn array_format(mut self, array_format: ArrayFormat) -> Self {
        self.array_format = array_format;
        self
    }

    /// The separator used by the `Comma` and `Separator` array formats.
    /// Default is `,`.
    ///
    /// Must be exactly one character; anything else makes every stringify
    /// call with this config fail with [`Error::InvalidArgument`].
    pub fn array_format_separator(mut self, separator: impl Into<String>) -> Self {
        self.array_format_separator = Cow::Owned(separator.into());
        self
    }

    /// Leave out keys (and sequence elements) whose value is `null`.
    ///
    /// Left unset, `null` is written as a bare key, except in the `Comma`
    /// and `Separator` formats where `null` elements are left out of the
    /// joined value. Setting this explicitly to `false` makes those formats
    /// keep an empty slot for each `null` element instead.
    pub const fn skip_null(mut self, skip_null: bool) -> Self {
        self.skip_null = Some(skip_null);
        self
    }

    /// Leave out keys (and sequence elements) whose value is the empty
    /// string.
    ///
    /// Left unset, an empty string is written as `key=`, except in the
    /// `Comma` and `Separator` formats where empty elements are left out of
    /// the joined value. Setting this explicitly to `false` makes those
    /// formats keep an empty slot instead.
    pub const fn skip_empty_string(mut self, skip_empty_string: bool) -> Self {
        self.skip_empty_string = Some(skip_empty_string);
        self
    }

    /// Specifies the order of top-level keys. Accepts a [`Sort`] or a
    /// `bool` (`false` keeps the insertion order).
    pub fn sort(mut self, sort: impl Into<Sort>) -> Self {
        self.sort = sort.into();
        self
    }

    pub(crate) fn separator(&self) -> &str {
        &self.array_format_separator
    }

    pub(crate) const fn skips_null(&self) -> bool {
        matches!(self.skip_null, Some(true))
    }

    pub(crate) const fn skips_empty_string(&self) -> bool {
        matches!(self.skip_empty_string, Some(true))
    }

    /// Joined formats keep an empty slot for `null` only on explicit request.
    pub(crate) const fn joins_null(&self) -> bool {
        matches!(self.skip_null, Some(false))
    }

    pub(crate) const fn joins_empty_string(&self) -> bool {
        matches!(self.skip_empty_string, Some(false))
    }

    /// Checks the configuration, failing if the array format separator is
    /// not exactly one character.
    ///
    /// Every stringify entry point calls this before producing any output,
    /// whether or not the input contains sequences.
    pub fn validate(&self) -> Result<()> {
        let mut chars = self.array_format_separator.chars();
        match (chars.next(), chars.next()) {
            (Some(_), None) => Ok(()),
            _ => {
                tracing::debug!(
                    separator = %self.array_format_separator,
                    "rejecting array format separator"
                );
                Err(Error::invalid_separator(&self.array_format_separator))
            }
        }
    }

    /// Stringifies a [`Map`] using this `Config`.
    pub fn stringify(&self, input: &Map) -> Result<String> {
        self.validate()?;
        Ok(crate::ser::encode_map(input, self))
    }

    /// Serializes an object to a query string using this `Config`.
    ///
    /// Inputs that are not maps or structs produce an empty string.
    pub fn serialize_string<T: serde::Serialize + ?Sized>(&self, input: &T) -> Result<String> {
        self.validate()?;
        let Some(map) = crate::ser::collect(input)? else {
            return Ok(String::new());
        };
        Ok(crate::ser::encode_map(&map, self))
    }

    /// Serializes an object to a query string using this `Config`, writing
    /// the result to `writer`.
    pub fn serialize_to_writer<T: serde::Serialize + ?Sized, W: Write>(
        &self,
        input: &T,
        writer: &mut W,
    ) -> Result<()> {
        let output = self.serialize_string(input)?;
        writer.write_all(output.as_bytes())?;
        Ok(())
    }

    /// Parses a query string into a [`Map`] using this `Config`.
    pub fn parse(&self, input: &str) -> Result<Map> {
        self.validate()?;
        Ok(crate::de::parse_map(input, self))
    }
}
