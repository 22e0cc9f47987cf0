use super::types::{Phase, Timestamp, TimestampSide};
use super::utils::{find_all, lossy, parse_decimal, trim_ascii_whitespace};
use crate::errors::{ParseError, ParseErrorKind};
use std::str::FromStr;

/// Exact length of a `hh:mm:ss,mmm` token
pub const TIMESTAMP_LEN: usize = 12;

/// Arrow between the start and end token of a timing line
pub const SEPARATOR: &[u8] = b"-->";

/// A trimmed slice of the buffer and where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub bytes: &'a [u8],
    pub offset: usize,
}

impl Token<'_> {
    pub fn text(&self) -> String {
        lossy(self.bytes)
    }
}

/// Split a timing line into its start and end tokens.
///
/// `offset` is the buffer offset of `line`. Returns `None` unless the
/// separator appears exactly once and both sides are non-empty.
pub(crate) fn split_timing_line(line: &[u8], offset: usize) -> Option<(Token<'_>, Token<'_>)> {
    let positions = find_all(line, SEPARATOR);
    let &[pos] = positions.as_slice() else {
        return None;
    };

    let (lead, start) = trim_ascii_whitespace(&line[..pos]);
    let rest = pos + SEPARATOR.len();
    let (end_lead, end) = trim_ascii_whitespace(&line[rest..]);
    if start.is_empty() || end.is_empty() {
        return None;
    }

    Some((
        Token {
            bytes: start,
            offset: offset + lead,
        },
        Token {
            bytes: end,
            offset: offset + rest + end_lead,
        },
    ))
}

/// Parse a `hh:mm:ss,mmm` token with fixed field widths 2/2/2/3.
pub fn parse_timestamp(token: &[u8]) -> Option<Timestamp> {
    if token.len() != TIMESTAMP_LEN {
        return None;
    }
    if token[2] != b':' || token[5] != b':' || token[8] != b',' {
        return None;
    }

    Some(Timestamp {
        hours: parse_decimal(&token[0..2])?,
        minutes: parse_decimal(&token[3..5])?,
        seconds: parse_decimal(&token[6..8])?,
        milliseconds: parse_decimal(&token[9..12])?,
    })
}

impl FromStr for Timestamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lead, token) = trim_ascii_whitespace(s.as_bytes());
        parse_timestamp(token).ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::MalformedTimestamp {
                    side: TimestampSide::Start,
                },
                Phase::ExpectStart,
                lead,
                1,
                lossy(token),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_fields() {
        let ts = parse_timestamp(b"01:02:03,456").unwrap();
        assert_eq!(ts, Timestamp::new(1, 2, 3, 456));
        assert_eq!(ts.to_string(), "01:02:03,456");
    }

    #[test]
    fn test_out_of_range_fields_pass_through() {
        let ts = parse_timestamp(b"99:61:75,999").unwrap();
        assert_eq!(ts, Timestamp::new(99, 61, 75, 999));
        assert_eq!(ts.to_string(), "99:61:75,999");
    }

    #[test]
    fn test_parse_timestamp_rejects_deviations() {
        for bad in [
            &b"00:00:01;000"[..],
            b"00:00:01.000",
            b"0:00:01,000",
            b"00:00:01,0000",
            b"00:00:0a,000",
            b"00:00: 1,000",
            b"+0:00:01,000",
            b"",
        ] {
            assert!(parse_timestamp(bad).is_none(), "{:?}", lossy(bad));
        }
    }

    #[test]
    fn test_split_timing_line_offsets() {
        let line = b"00:00:01,000 --> 00:00:02,500";
        let (start, end) = split_timing_line(line, 10).unwrap();
        assert_eq!(start.bytes, b"00:00:01,000");
        assert_eq!(start.offset, 10);
        assert_eq!(end.bytes, b"00:00:02,500");
        assert_eq!(end.offset, 27);
    }

    #[test]
    fn test_split_timing_line_requires_single_separator() {
        assert!(split_timing_line(b"00:00:01,000 00:00:02,000", 0).is_none());
        assert!(split_timing_line(b"00:00:01,000 --> 00:00:02,000 --> x", 0).is_none());
        assert!(split_timing_line(b"00:00:01,000 -->   ", 0).is_none());
        assert!(split_timing_line(b" --> 00:00:02,000", 0).is_none());
    }

    #[test]
    fn test_from_str() {
        let ts: Timestamp = " 00:01:00,250 ".parse().unwrap();
        assert_eq!(ts.total_millis(), 60_250);

        let err = "00:01:00".parse::<Timestamp>().unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::MalformedTimestamp {
                side: TimestampSide::Start
            }
        );
        assert_eq!(err.token, "00:01:00");
    }
}
