use std::error::Error;
use std::fmt;
use std::io;

use crate::srt::{Phase, TimestampSide};

/// Enumeration of all possible errors surfaced by the crate
#[derive(Debug)]
pub enum SrtError {
    Parse(ParseError),
    Source(SourceError),
}

/// Which grammar rule a block violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Index token is not a plain unsigned decimal integer.
    MalformedIndex,
    /// Timing line lacks the `-->` separator, repeats it, or has an empty side.
    MalformedTimingLine,
    /// A timestamp token is present but is not `hh:mm:ss,mmm`.
    MalformedTimestamp { side: TimestampSide },
    /// Input ended after an index but before both timestamps were read.
    UnexpectedEndOfInput,
}

/// A structural failure of the Block Parser.
///
/// `offset` is the byte offset of `token` within the buffer handed to the
/// parser and `line` is its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub phase: Phase,
    pub offset: usize,
    pub line: usize,
    pub token: String,
}

impl ParseError {
    /// Create a new error for the given phase and raw token.
    pub fn new(
        kind: ParseErrorKind,
        phase: Phase,
        offset: usize,
        line: usize,
        token: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            phase,
            offset,
            line,
            token: token.into(),
        }
    }
}

/// Failures acquiring the input buffer
#[derive(Debug)]
pub enum SourceError {
    UnsupportedExtension(String),
    Io(io::Error),
}

impl fmt::Display for SrtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SrtError::Parse(err) => write!(f, "Parse error: {}", err),
            SrtError::Source(err) => write!(f, "Source error: {}", err),
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MalformedIndex => write!(f, "malformed index"),
            ParseErrorKind::MalformedTimingLine => write!(f, "malformed timing line"),
            ParseErrorKind::MalformedTimestamp { side } => {
                write!(f, "malformed {} timestamp", side)
            }
            ParseErrorKind::UnexpectedEndOfInput => write!(f, "unexpected end of input"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} while in {} at byte {} (line {}): {:?}",
            self.kind, self.phase, self.offset, self.line, self.token
        )
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::UnsupportedExtension(path) => {
                write!(f, "not a .srt file: {}", path)
            }
            SourceError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl Error for SrtError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SrtError::Parse(err) => Some(err),
            SrtError::Source(err) => Some(err),
        }
    }
}
impl Error for ParseError {}
impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SourceError::Io(err) => Some(err),
            SourceError::UnsupportedExtension(_) => None,
        }
    }
}

// Conversion implementations
impl From<io::Error> for SourceError {
    fn from(err: io::Error) -> Self {
        SourceError::Io(err)
    }
}

impl From<io::Error> for SrtError {
    fn from(err: io::Error) -> Self {
        SrtError::Source(SourceError::Io(err))
    }
}

impl From<ParseError> for SrtError {
    fn from(err: ParseError) -> Self {
        SrtError::Parse(err)
    }
}

impl From<SourceError> for SrtError {
    fn from(err: SourceError) -> Self {
        SrtError::Source(err)
    }
}

// Conversion to io::Error for callers working in io::Result
impl From<SrtError> for io::Error {
    fn from(err: SrtError) -> Self {
        match err {
            SrtError::Source(SourceError::Io(err)) => err,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

// Type alias for Result with SrtError
pub type SrtResult<T> = Result<T, SrtError>;
