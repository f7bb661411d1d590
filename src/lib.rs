//! Canonical `application/x-www-form-urlencoded` query strings.
//!
//! This library turns a flat key/value mapping into the query string that
//! goes after the `?` of a URL. The output is deterministic: the same input
//! and [`Config`] always produce the same string, which makes it suitable
//! for cache keys, signatures and snapshot tests.
//!
//! The value model is shallow, as the format is: each key is bound to a
//! scalar, a `null`, or a sequence of scalars and `null`s. Several
//! independent policies shape the output:
//!
//! - how sequences are written ([`ArrayFormat`]),
//! - whether `null` and empty values are skipped,
//! - whether and how strictly tokens are percent-encoded,
//! - the order of the keys ([`Sort`]).
//!
//! The syntax follows the JavaScript
//! [query-string](https://github.com/sindresorhus/query-string) package.
//!
//! ## Usage
//!
//! Any `Serialize` map or struct can be stringified. `Option::None` and
//! `()` are written as a bare key, while skipped fields and unit structs
//! such as [`Undefined`] leave no trace.
//!
//! ```
//! use query_string::{ArrayFormat, Config};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Search {
//!     q: String,
//!     tags: Vec<&'static str>,
//!     page: Option<u32>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     cursor: Option<String>,
//! }
//!
//! let search = Search {
//!     q: "rust (lang)".to_owned(),
//!     tags: vec!["web", "cli"],
//!     page: None,
//!     cursor: None,
//! };
//!
//! assert_eq!(
//!     query_string::to_string(&search).unwrap(),
//!     "page&q=rust%20%28lang%29&tags=web&tags=cli");
//!
//! let config = Config::new()
//!     .array_format(ArrayFormat::Comma)
//!     .strict(false)
//!     .skip_null(true)
//!     .sort(false);
//! assert_eq!(
//!     config.serialize_string(&search).unwrap(),
//!     "q=rust%20(lang)&tags=web,cli");
//! ```
//!
//! For dynamic data, build a [`Map`] of [`Value`]s and call [`stringify`].
//! The only failure a well-formed map can hit is a separator that is not
//! exactly one character, reported as [`Error::InvalidArgument`] before any
//! output is produced.

mod config;
mod de;
mod error;
mod ser;
mod value;

#[doc(inline)]
pub use config::{ArrayFormat, Comparator, Config, Sort};
#[doc(inline)]
pub use de::parse;
pub use error::{Error, Result};
#[doc(inline)]
pub use ser::{stringify, to_string, to_writer};
#[doc(inline)]
pub use value::{Element, Map, Scalar, Undefined, Value};
