use super::cursor::{Cursor, Line};
use super::timestamp::{parse_timestamp, split_timing_line, Token, SEPARATOR, TIMESTAMP_LEN};
use super::types::{PartialParse, Phase, SubtitleEntry, Timestamp, TimestampSide};
use super::utils::{find_all, is_blank, lossy, parse_decimal, trim_ascii_whitespace};
use crate::errors::{ParseError, ParseErrorKind};

/// Where the machine stands, with whatever the current block has gathered so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum State<'a> {
    ExpectIndex,
    ExpectStart {
        index: u32,
    },
    ExpectEnd {
        index: u32,
        start: Timestamp,
        token: Token<'a>,
        line: usize,
        truncated: bool,
    },
    ExpectText {
        index: u32,
        start: Timestamp,
        end: Timestamp,
    },
    End,
}

impl State<'_> {
    pub fn phase(&self) -> Option<Phase> {
        match self {
            State::ExpectIndex => Some(Phase::ExpectIndex),
            State::ExpectStart { .. } => Some(Phase::ExpectStart),
            State::ExpectEnd { .. } => Some(Phase::ExpectEnd),
            State::ExpectText { .. } => Some(Phase::ExpectText),
            State::End => None,
        }
    }
}

/// Outcome of one transition: the next state and an entry if a block closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Transition<'a> {
    pub next: State<'a>,
    pub emitted: Option<SubtitleEntry>,
}

impl<'a> Transition<'a> {
    fn to(next: State<'a>) -> Self {
        Self {
            next,
            emitted: None,
        }
    }
}

fn line_error(kind: ParseErrorKind, phase: Phase, line: &Line<'_>) -> ParseError {
    ParseError::new(kind, phase, line.offset, line.number, lossy(line.bytes))
}

fn end_of_input(phase: Phase, cursor: &Cursor<'_>, line: usize, token: &[u8]) -> ParseError {
    ParseError::new(
        ParseErrorKind::UnexpectedEndOfInput,
        phase,
        cursor.position(),
        line,
        lossy(token),
    )
}

fn token_error(kind: ParseErrorKind, phase: Phase, token: &Token<'_>, line: usize) -> ParseError {
    ParseError::new(kind, phase, token.offset, line, token.text())
}

/// Read the index line. Blank lines before it are skipped and running out of
/// input here ends the parse normally.
pub(crate) fn expect_index<'a>(cursor: &mut Cursor<'a>) -> Result<Transition<'a>, ParseError> {
    loop {
        let Some(line) = cursor.read_line() else {
            return Ok(Transition::to(State::End));
        };
        if is_blank(line.bytes) {
            continue;
        }

        let (_, digits) = trim_ascii_whitespace(line.bytes);
        return match parse_decimal::<u32>(digits) {
            Some(index) => Ok(Transition::to(State::ExpectStart { index })),
            None => Err(line_error(
                ParseErrorKind::MalformedIndex,
                Phase::ExpectIndex,
                &line,
            )),
        };
    }
}

/// Read the timing line, validate the start token and hand the end token on.
pub(crate) fn expect_start<'a>(
    cursor: &mut Cursor<'a>,
    index: u32,
) -> Result<Transition<'a>, ParseError> {
    let Some(line) = cursor.read_line() else {
        return Err(end_of_input(Phase::ExpectStart, cursor, cursor.line(), b""));
    };

    let Some((start_token, end_token)) = split_timing_line(line.bytes, line.offset) else {
        // a final line holding at most one separator was cut short, not mistyped
        if !line.terminated && find_all(line.bytes, SEPARATOR).len() <= 1 {
            return Err(end_of_input(Phase::ExpectStart, cursor, line.number, line.bytes));
        }
        return Err(line_error(
            ParseErrorKind::MalformedTimingLine,
            Phase::ExpectStart,
            &line,
        ));
    };

    let start = parse_timestamp(start_token.bytes).ok_or_else(|| {
        token_error(
            ParseErrorKind::MalformedTimestamp {
                side: TimestampSide::Start,
            },
            Phase::ExpectStart,
            &start_token,
            line.number,
        )
    })?;

    Ok(Transition::to(State::ExpectEnd {
        index,
        start,
        token: end_token,
        line: line.number,
        truncated: !line.terminated,
    }))
}

/// Validate the end token carried over from the timing line.
///
/// `truncated` marks a timing line that ran into the end of input; a short
/// end token there means the buffer stopped mid-timestamp.
pub(crate) fn expect_end<'a>(
    cursor: &Cursor<'a>,
    index: u32,
    start: Timestamp,
    token: Token<'a>,
    line: usize,
    truncated: bool,
) -> Result<Transition<'a>, ParseError> {
    if truncated && token.bytes.len() < TIMESTAMP_LEN {
        return Err(end_of_input(Phase::ExpectEnd, cursor, line, token.bytes));
    }
    let end = parse_timestamp(token.bytes).ok_or_else(|| {
        token_error(
            ParseErrorKind::MalformedTimestamp {
                side: TimestampSide::End,
            },
            Phase::ExpectEnd,
            &token,
            line,
        )
    })?;

    Ok(Transition::to(State::ExpectText { index, start, end }))
}

/// Gather text lines up to an empty line or the end of input and emit the entry.
///
/// Only a line with nothing before its terminator closes the cue; a line of
/// spaces is text.
pub(crate) fn expect_text<'a>(
    cursor: &mut Cursor<'a>,
    index: u32,
    start: Timestamp,
    end: Timestamp,
) -> Transition<'a> {
    let mut lines = Vec::new();
    let next = loop {
        match cursor.read_line() {
            None => break State::End,
            Some(line) if line.bytes.is_empty() => break State::ExpectIndex,
            Some(line) => lines.push(lossy(line.bytes)),
        }
    };

    Transition {
        next,
        emitted: Some(SubtitleEntry {
            index,
            start,
            end,
            lines,
        }),
    }
}

/// Dispatch to the transition function of `state`.
pub(crate) fn step<'a>(
    cursor: &mut Cursor<'a>,
    state: State<'a>,
) -> Result<Transition<'a>, ParseError> {
    match state {
        State::ExpectIndex => expect_index(cursor),
        State::ExpectStart { index } => expect_start(cursor, index),
        State::ExpectEnd {
            index,
            start,
            token,
            line,
            truncated,
        } => expect_end(cursor, index, start, token, line, truncated),
        State::ExpectText { index, start, end } => Ok(expect_text(cursor, index, start, end)),
        State::End => Ok(Transition::to(State::End)),
    }
}

/// Block Parser over one complete buffer.
///
/// Iterating yields entries in source order. The first error is yielded once
/// and the iterator is exhausted afterwards.
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    state: State<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(buffer),
            state: State::ExpectIndex,
        }
    }

    /// Current phase, `None` once the parse has ended or failed.
    pub fn phase(&self) -> Option<Phase> {
        self.state.phase()
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl Iterator for Parser<'_> {
    type Item = Result<SubtitleEntry, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let state = std::mem::replace(&mut self.state, State::End);
            if matches!(state, State::End) {
                return None;
            }
            match step(&mut self.cursor, state) {
                Ok(Transition { next, emitted }) => {
                    self.state = next;
                    if let Some(entry) = emitted {
                        return Some(Ok(entry));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

impl std::iter::FusedIterator for Parser<'_> {}

/// Parse a complete SubRip buffer; any malformed block fails the whole call.
pub fn parse(buffer: &[u8]) -> Result<Vec<SubtitleEntry>, ParseError> {
    Parser::new(buffer).collect()
}

/// Parse text already held as a string.
pub fn parse_str(input: &str) -> Result<Vec<SubtitleEntry>, ParseError> {
    parse(input.as_bytes())
}

/// Best-effort parse keeping every entry that precedes the first failure.
pub fn parse_lenient(buffer: &[u8]) -> PartialParse {
    let mut entries = Vec::new();
    for item in Parser::new(buffer) {
        match item {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                return PartialParse {
                    entries,
                    error: Some(e),
                }
            }
        }
    }
    PartialParse {
        entries,
        error: None,
    }
}
