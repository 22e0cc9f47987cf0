/// Strip ASCII whitespace from both ends, returning the number of leading
/// bytes removed together with the trimmed slice.
pub(crate) fn trim_ascii_whitespace(bytes: &[u8]) -> (usize, &[u8]) {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    (start, &bytes[start..end])
}

/// A line that separates cue blocks.
pub(crate) fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| b.is_ascii_whitespace())
}

/// Decode a raw token for text or error reporting without ever failing.
pub(crate) fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Parse a token made only of ASCII decimal digits.
pub(crate) fn parse_decimal<T: std::str::FromStr>(digits: &[u8]) -> Option<T> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(digits).ok()?.parse().ok()
}

/// Byte offsets of every `needle` occurrence in `haystack`.
pub(crate) fn find_all(haystack: &[u8], needle: &[u8]) -> Vec<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return Vec::new();
    }
    haystack
        .windows(needle.len())
        .enumerate()
        .filter(|(_, w)| *w == needle)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_reports_leading_offset() {
        assert_eq!(trim_ascii_whitespace(b"  12 \t"), (2, &b"12"[..]));
        assert_eq!(trim_ascii_whitespace(b"   "), (3, &b""[..]));
        assert_eq!(trim_ascii_whitespace(b""), (0, &b""[..]));
    }

    #[test]
    fn test_parse_decimal_is_strict() {
        assert_eq!(parse_decimal::<u32>(b"0042"), Some(42));
        assert_eq!(parse_decimal::<u32>(b"+1"), None);
        assert_eq!(parse_decimal::<u32>(b"-1"), None);
        assert_eq!(parse_decimal::<u32>(b"1 2"), None);
        assert_eq!(parse_decimal::<u32>(b""), None);
        assert_eq!(parse_decimal::<u32>(b"99999999999"), None);
    }

    #[test]
    fn test_find_all() {
        assert_eq!(find_all(b"a --> b", b"-->"), vec![2]);
        assert_eq!(find_all(b"-->-->", b"-->"), vec![0, 3]);
        assert!(find_all(b"->", b"-->").is_empty());
    }
}
