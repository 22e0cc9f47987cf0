use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Point in a subtitle track as spelled by a `hh:mm:ss,mmm` token.
///
/// Fields hold exactly the digits found in the source; nothing is clamped or
/// carried, so `00:61:00,000` keeps `minutes == 61`.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub milliseconds: u16,
}

impl Timestamp {
    pub fn new(hours: u8, minutes: u8, seconds: u8, milliseconds: u16) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            milliseconds,
        }
    }

    /// Total offset in milliseconds, carrying out-of-range fields arithmetically.
    pub fn total_millis(&self) -> u64 {
        u64::from(self.hours) * 3_600_000
            + u64::from(self.minutes) * 60_000
            + u64::from(self.seconds) * 1_000
            + u64::from(self.milliseconds)
    }

    pub fn to_duration(&self) -> Duration {
        Duration::from_millis(self.total_millis())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02},{:03}",
            self.hours, self.minutes, self.seconds, self.milliseconds
        )
    }
}

/// One cue: index, timing pair and its text lines in source order
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    pub index: u32,
    pub start: Timestamp,
    pub end: Timestamp,
    pub lines: Vec<String>,
}

impl SubtitleEntry {
    /// Text lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Time on screen; zero when `end` precedes `start`.
    pub fn duration(&self) -> Duration {
        self.end.to_duration().saturating_sub(self.start.to_duration())
    }
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(f, "{} --> {}", self.start, self.end)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Which side of the timing line a timestamp token came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampSide {
    Start,
    End,
}

impl fmt::Display for TimestampSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampSide::Start => write!(f, "start"),
            TimestampSide::End => write!(f, "end"),
        }
    }
}

/// Phase of the Block Parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    ExpectIndex,
    ExpectStart,
    ExpectEnd,
    ExpectText,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::ExpectIndex => "index",
            Phase::ExpectStart => "start timestamp",
            Phase::ExpectEnd => "end timestamp",
            Phase::ExpectText => "text",
        };
        f.write_str(name)
    }
}

/// Result of a lenient parse: everything before the first failure plus that failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialParse {
    pub entries: Vec<SubtitleEntry>,
    pub error: Option<crate::errors::ParseError>,
}

impl PartialParse {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}
