/*
# Byte Cursor

 Forward-only reader over the complete input buffer. Tracks the next unread
 byte offset and the 1-based number of the next line so every token handed to
 the parser can be located precisely.

 Key components:
 - Byte readers: `peek()`, `read()`
 - Line reader: `read_line()` splitting on LF and dropping a trailing CR
*/

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// One physical line of input without its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub bytes: &'a [u8],
    pub offset: usize,
    pub number: usize,
    /// False for a final line cut off by the end of input.
    pub terminated: bool,
}

/// `Cursor` walks an immutable buffer one byte or one line at a time.
#[derive(Debug)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `data`, skipping a UTF-8 byte order mark.
    pub fn new(data: &'a [u8]) -> Self {
        let pos = if data.starts_with(UTF8_BOM) {
            UTF8_BOM.len()
        } else {
            0
        };
        Self { data, pos, line: 1 }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of the line the next unread byte belongs to.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Return the next byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Consume and return the next byte.
    pub fn read(&mut self) -> Option<u8> {
        let next = self.peek()?;
        self.pos += 1;
        if next == b'\n' {
            self.line += 1;
        }
        Some(next)
    }

    /// Consume bytes up to and including the next LF.
    ///
    /// Returns `None` only when no byte is left to read. A final line without
    /// a terminator is returned as is.
    pub fn read_line(&mut self) -> Option<Line<'a>> {
        if self.is_eof() {
            return None;
        }
        let offset = self.pos;
        let number = self.line;
        while let Some(b) = self.read() {
            if b == b'\n' {
                break;
            }
        }

        let mut end = self.pos;
        let terminated = self.data[end - 1] == b'\n';
        if terminated {
            end -= 1;
            if end > offset && self.data[end - 1] == b'\r' {
                end -= 1;
            }
        }
        Some(Line {
            bytes: &self.data[offset..end],
            offset,
            number,
            terminated,
        })
    }
}
