use reqwest::header::HeaderValue;

/// Builds a header value that is always accepted on the wire.
///
/// Header values are Latin-1. Characters outside U+0000..=U+00FF are dropped,
/// as are control characters other than horizontal tab, so the result may be
/// shorter than the input. A credential pasted with a stray non-Latin-1
/// character therefore still produces a request, which the remote side can
/// reject on its own terms.
pub fn sanitize_header_value(value: &str) -> HeaderValue {
    let bytes: Vec<u8> = value
        .chars()
        .filter_map(|c| u8::try_from(u32::from(c)).ok())
        .filter(|b| *b == b'\t' || (*b >= 0x20 && *b != 0x7f))
        .collect();

    HeaderValue::from_bytes(&bytes).unwrap_or_else(|_| HeaderValue::from_static(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_untouched() {
        assert_eq!(sanitize_header_value("Bearer sk-abc123"), "Bearer sk-abc123");
    }

    #[test]
    fn non_latin1_characters_are_dropped() {
        assert_eq!(sanitize_header_value("Bearer sk-냉장고abc"), "Bearer sk-abc");
        assert_eq!(sanitize_header_value("🍳"), "");
    }

    #[test]
    fn latin1_characters_are_kept_as_single_bytes() {
        let value = sanitize_header_value("café");
        assert_eq!(value.as_bytes(), b"caf\xe9");
    }

    #[test]
    fn control_characters_are_dropped() {
        assert_eq!(sanitize_header_value("a\r\nb\tc\u{7f}"), "ab\tc");
    }
}
