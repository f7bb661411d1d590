use std::borrow::Cow;

#[inline(always)]
fn char_to_digit(c: u8) -> Option<u32> {
    char::from(c).to_digit(16)
}

/// Decodes a key or value token, applying the following:
/// - Replaces `+` with a space
/// - Decodes percent-encoded characters
/// - Converts the result to a UTF-8 string, replacing invalid sequences
///
/// Malformed escapes such as `%zz` are kept as-is.
pub fn decode(input: &str) -> Cow<'_, str> {
    match decode_bytes(input.as_bytes()) {
        Cow::Borrowed(_) => Cow::Borrowed(input),
        Cow::Owned(bytes) => match String::from_utf8(bytes) {
            Ok(decoded) => Cow::Owned(decoded),
            Err(err) => Cow::Owned(String::from_utf8_lossy(err.as_bytes()).into_owned()),
        },
    }
}

fn decode_bytes(input: &[u8]) -> Cow<'_, [u8]> {
    if !input.iter().any(|&b| b == b'+' || b == b'%') {
        return Cow::Borrowed(input);
    }

    let mut decoded = Vec::with_capacity(input.len());
    let mut last_segment = 0;
    let mut idx = 0;

    while idx < input.len() {
        match input[idx] {
            b'+' => {
                decoded.extend_from_slice(&input[last_segment..idx]);
                decoded.push(b' ');
                idx += 1;
                last_segment = idx;
            }
            b'%' => {
                // an invalid escape is left in place and copied with the next segment,
                // without consuming the bytes that follow the `%`
                let escaped = input.get(idx + 1..idx + 3).and_then(|hex| {
                    Some(char_to_digit(hex[0])? * 0x10 + char_to_digit(hex[1])?)
                });
                let Some(escaped) = escaped else {
                    idx += 1;
                    continue;
                };

                decoded.extend_from_slice(&input[last_segment..idx]);
                decoded.push(escaped as u8);
                idx += 3;
                last_segment = idx;
            }
            _ => idx += 1,
        }
    }

    decoded.extend_from_slice(&input[last_segment..]);
    Cow::Owned(decoded)
}
