//! The dynamic value model that query strings are built from.
//!
//! A query string is a flat list of `key=value` pairs, so the model is
//! deliberately shallow: a key maps to a [`Value`], which is either a
//! single [`Scalar`], a `Null` (rendered as a bare key) or a sequence of
//! [`Element`]s. Anything deeper cannot be expressed in this format.
//!
//! JavaScript-style `undefined` has no variant here. Absent values are
//! dropped at the serde boundary (see [`crate::to_string`]) and never reach
//! the encoder: skipped fields and unit structs like [`Undefined`] leave no
//! entry, while `None` and `()` are `null`.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// An insertion-ordered mapping from keys to values.
pub type Map = IndexMap<String, Value>;

/// A primitive with a canonical text form.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

/// A single member of a sequence value.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Scalar(Scalar),
    Null,
}

/// The value bound to a top-level key.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Null,
    Sequence(Vec<Element>),
}

/// A value that is never written.
///
/// Useful in serializable inputs that need to mark an entry or sequence
/// element as absent without skipping the field:
///
/// ```
/// use query_string::Undefined;
///
/// let input = std::collections::BTreeMap::from([
///     ("a", vec![Some(Undefined), None]),
///     ("b", vec![Some(Undefined)]),
/// ]);
/// assert_eq!(query_string::to_string(&input).unwrap(), "a");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Undefined;

impl Serialize for Undefined {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_unit_struct("Undefined")
    }
}

impl Scalar {
    /// Returns the text form of the scalar, before any percent-encoding.
    ///
    /// Numbers use their natural decimal form (`10` rather than `10.0`),
    /// booleans are `true` / `false`.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Scalar::String(s) => Cow::Borrowed(s),
            Scalar::Int(i) => Cow::Owned(itoa::Buffer::new().format(*i).to_owned()),
            Scalar::UInt(u) => Cow::Owned(itoa::Buffer::new().format(*u).to_owned()),
            Scalar::Float(f) => Cow::Owned(format_float(*f)),
            Scalar::Bool(true) => Cow::Borrowed("true"),
            Scalar::Bool(false) => Cow::Borrowed("false"),
        }
    }

    /// Only the empty string counts as empty; `0` and `false` do not.
    pub fn is_empty(&self) -> bool {
        matches!(self, Scalar::String(s) if s.is_empty())
    }
}

/// Formats a float the way JavaScript's `Number.prototype.toString` does.
///
/// The digits are the shortest representation that round-trips, laid out
/// in plain decimal notation for magnitudes in `[1e-6, 1e21)` and in
/// exponent notation (`1e+21`, `1.5e-7`) otherwise. Non-finite values are
/// `NaN` / `Infinity` / `-Infinity`, and `-0` prints as `0`.
pub(crate) fn format_float<F>(v: F) -> String
where
    F: ryu::Float + Into<f64> + Copy,
{
    let wide: f64 = v.into();
    if wide.is_nan() {
        return "NaN".to_owned();
    }
    if wide.is_infinite() {
        return if wide > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if wide == 0.0 {
        return "0".to_owned();
    }

    let mut buffer = ryu::Buffer::new();
    let shortest = buffer.format_finite(v);
    let (negative, shortest) = match shortest.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, shortest),
    };
    let (mantissa, exponent) = match shortest.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (shortest, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    // significant digits, with the decimal point `point` digits from the left
    let digits = format!("{int_part}{frac_part}");
    let leading = digits.len() - digits.trim_start_matches('0').len();
    let digits = digits[leading..].trim_end_matches('0');
    let point = int_part.len() as i32 + exponent - leading as i32;
    let len = digits.len() as i32;

    let mut output = String::with_capacity(digits.len() + 8);
    if negative {
        output.push('-');
    }
    if len <= point && point <= 21 {
        output.push_str(digits);
        output.extend(std::iter::repeat_n('0', (point - len) as usize));
    } else if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(point as usize);
        output.push_str(whole);
        output.push('.');
        output.push_str(fraction);
    } else if -6 < point && point <= 0 {
        output.push_str("0.");
        output.extend(std::iter::repeat_n('0', (-point) as usize));
        output.push_str(digits);
    } else {
        let (first, rest) = digits.split_at(1);
        output.push_str(first);
        if !rest.is_empty() {
            output.push('.');
            output.push_str(rest);
        }
        let exponent = point - 1;
        output.push_str(if exponent < 0 { "e-" } else { "e+" });
        output.push_str(itoa::Buffer::new().format(exponent.unsigned_abs()));
    }
    output
}

macro_rules! impl_from_scalar {
    ($($ty:ty => |$v:ident| $conv:expr,)*) => {
        $(
            impl From<$ty> for Scalar {
                fn from($v: $ty) -> Self {
                    $conv
                }
            }

            impl From<$ty> for Element {
                fn from(v: $ty) -> Self {
                    Element::Scalar(v.into())
                }
            }

            impl From<Option<$ty>> for Element {
                fn from(v: Option<$ty>) -> Self {
                    v.map_or(Element::Null, Element::from)
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Scalar(v.into())
                }
            }

            impl From<Option<$ty>> for Value {
                fn from(v: Option<$ty>) -> Self {
                    v.map_or(Value::Null, Value::from)
                }
            }
        )*
    };
}

impl_from_scalar! {
    &str => |v| Scalar::String(v.to_owned()),
    String => |v| Scalar::String(v),
    bool => |v| Scalar::Bool(v),
    i8 => |v| Scalar::Int(v.into()),
    i16 => |v| Scalar::Int(v.into()),
    i32 => |v| Scalar::Int(v.into()),
    i64 => |v| Scalar::Int(v),
    u8 => |v| Scalar::UInt(v.into()),
    u16 => |v| Scalar::UInt(v.into()),
    u32 => |v| Scalar::UInt(v.into()),
    u64 => |v| Scalar::UInt(v),
    f64 => |v| Scalar::Float(v),
}

impl From<Scalar> for Element {
    fn from(v: Scalar) -> Self {
        Element::Scalar(v)
    }
}

impl From<Scalar> for Value {
    fn from(v: Scalar) -> Self {
        Value::Scalar(v)
    }
}

impl<T: Into<Element>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::String(s) => serializer.serialize_str(s),
            Scalar::Int(i) => serializer.serialize_i64(*i),
            Scalar::UInt(u) => serializer.serialize_u64(*u),
            Scalar::Float(f) => serializer.serialize_f64(*f),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Element::Scalar(s) => s.serialize(serializer),
            Element::Null => serializer.serialize_none(),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Scalar(s) => s.serialize(serializer),
            Value::Null => serializer.serialize_none(),
            Value::Sequence(elements) => {
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_text_forms() {
        assert_eq!(Scalar::from(10).to_text(), "10");
        assert_eq!(Scalar::from(-3i64).to_text(), "-3");
        assert_eq!(Scalar::from(true).to_text(), "true");
        assert_eq!(Scalar::from(10.0).to_text(), "10");
        assert_eq!(Scalar::from(1.5).to_text(), "1.5");
        assert_eq!(Scalar::from(-0.0).to_text(), "0");
        assert_eq!(Scalar::from(f64::NAN).to_text(), "NaN");
        assert_eq!(Scalar::from(f64::NEG_INFINITY).to_text(), "-Infinity");
    }

    #[test]
    fn float_layout_follows_number_to_string() {
        assert_eq!(format_float(1e20), "100000000000000000000");
        assert_eq!(format_float(1e21), "1e+21");
        assert_eq!(format_float(-1.5e300), "-1.5e+300");
        assert_eq!(format_float(123456.789), "123456.789");
        assert_eq!(format_float(0.001), "0.001");
        assert_eq!(format_float(0.000001), "0.000001");
        assert_eq!(format_float(1e-7), "1e-7");
        assert_eq!(format_float(1.5e-7), "1.5e-7");
        assert_eq!(format_float(9_007_199_254_740_993.0), "9007199254740992");
        assert_eq!(format_float(f64::MIN_POSITIVE), "2.2250738585072014e-308");
    }

    #[test]
    fn f32_uses_its_own_shortest_form() {
        assert_eq!(format_float(0.1f32), "0.1");
        assert_eq!(format_float(2.0f32), "2");
    }

    #[test]
    fn only_empty_strings_are_empty() {
        assert!(Scalar::from("").is_empty());
        assert!(!Scalar::from(0).is_empty());
        assert!(!Scalar::from(false).is_empty());
    }

    #[test]
    fn option_conversions_produce_null() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(
            Value::from(vec![Some("a"), None]),
            Value::Sequence(vec![Element::from("a"), Element::Null])
        );
    }
}
