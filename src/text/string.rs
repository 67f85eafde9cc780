use std::borrow::Cow;

use memchr::memchr;

/// Resolves `\"` to `"` inside a string literal body. Every other
/// backslash pair is kept as written.
pub fn unescape_quotes(inner: &str) -> Cow<'_, str> {
    if memchr(b'\\', inner.as_bytes()).is_none() {
        return Cow::Borrowed(inner);
    }
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some(next) => {
                out.push('\\');
                out.push(next);
            }
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}

/// Writes `value` as a quoted literal that [`unescape_quotes`] reads back.
pub fn write_quoted_into(value: &str, out: &mut Vec<u8>) {
    out.push(b'"');
    let bytes = value.as_bytes();
    let mut start = 0;
    while let Some(offset) = memchr(b'"', &bytes[start..]) {
        let idx = start + offset;
        out.extend_from_slice(&bytes[start..idx]);
        out.extend_from_slice(b"\\\"");
        start = idx + 1;
    }
    out.extend_from_slice(&bytes[start..]);
    out.push(b'"');
}
