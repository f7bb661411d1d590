use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// The set left literal by `encodeURIComponent`: ASCII alphanumerics and
/// `-`, `_`, `.`, `!`, `~`, `*`, `'`, `(`, `)`.
///
/// Spaces are percent-encoded as `%20`, never `+`.
const URI_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// As defined in https://www.rfc-editor.org/rfc/rfc3986#section-2.3
///
/// Everything except the unreserved characters: ASCII alphanumerics and
/// `-`, `.`, `_`, `~`. Compared to [`URI_COMPONENT_SET`] this additionally
/// encodes `!`, `'`, `(`, `)` and `*`.
const STRICT_SET: &AsciiSet = &URI_COMPONENT_SET
    .add(b'!')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*');

/// Percent-encodes a single key or value token.
///
/// With `encode` off the token is returned untouched. Otherwise the token
/// is encoded like a URI component, with `strict` also escaping `!'()*`.
///
/// Borrows when nothing needs escaping.
pub fn encode(token: &str, encode: bool, strict: bool) -> Cow<'_, str> {
    if !encode {
        return Cow::Borrowed(token);
    }
    let set = if strict { STRICT_SET } else { URI_COMPONENT_SET };
    percent_encoding::utf8_percent_encode(token, set).into()
}

#[cfg(test)]
mod tests {
    use super::encode;

    #[test]
    fn spaces_are_percent_encoded() {
        assert_eq!(encode("foo bar", true, true), "foo%20bar");
        assert_eq!(encode("foo bar", true, false), "foo%20bar");
    }

    #[test]
    fn strict_escapes_sub_delims() {
        assert_eq!(encode("'bar'", true, true), "%27bar%27");
        assert_eq!(encode("!baz", true, true), "%21baz");
        assert_eq!(encode("(a)*", true, true), "%28a%29%2A");
    }

    #[test]
    fn loose_leaves_sub_delims_literal() {
        assert_eq!(encode("'bar'", true, false), "'bar'");
        assert_eq!(encode("!(a)*", true, false), "!(a)*");
    }

    #[test]
    fn unreserved_characters_are_never_escaped() {
        for strict in [true, false] {
            assert_eq!(encode("AZaz09-_.~", true, strict), "AZaz09-_.~");
            assert!(matches!(encode("-1.5", true, strict), std::borrow::Cow::Borrowed(_)));
        }
    }

    #[test]
    fn reserved_and_non_ascii_characters() {
        assert_eq!(encode("a&b=c[]", true, true), "a%26b%3Dc%5B%5D");
        assert_eq!(encode("comté", true, true), "comt%C3%A9");
        assert_eq!(encode("a+b/c?", true, false), "a%2Bb%2Fc%3F");
    }

    #[test]
    fn disabled_encoding_is_identity() {
        assert_eq!(encode("foo:bar baz'", false, true), "foo:bar baz'");
    }
}
