//! Lookahead over a buffered byte stream.
//!
//! The cursor never consumes a byte it has only peeked at, so a handler can
//! decide whether a nested block continues before reading its next token.

use std::io::{self, BufRead};

/// Returns `true` for bytes that separate tokens, newlines included.
pub(crate) fn is_blank(b: u8) -> bool {
    b.is_ascii_whitespace()
}

/// Returns `true` for blanks that do not end a line.
pub(crate) fn is_horizontal_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\x0b' | b'\x0c')
}

/// A peeking cursor over a [`BufRead`] stream that tracks the current line.
pub struct Cursor<R> {
    inner: R,
    line: usize,
}

impl<R: BufRead> Cursor<R> {
    /// Wraps a buffered reader, starting at line 1.
    pub fn new(inner: R) -> Self {
        Self { inner, line: 1 }
    }

    /// Returns the 1-based line of the next unread byte.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Unwraps the cursor, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Returns the next byte without consuming it, or `None` at end of input.
    pub(crate) fn peek(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Consumes a byte previously returned by [`peek`](Self::peek).
    pub(crate) fn bump(&mut self, byte: u8) {
        if byte == b'\n' {
            self.line += 1;
        }
        self.inner.consume(1);
    }

    /// Consumes bytes while `pred` holds.
    pub(crate) fn skip_while(&mut self, pred: impl Fn(u8) -> bool) -> io::Result<()> {
        while let Some(b) = self.peek()? {
            if !pred(b) {
                break;
            }
            self.bump(b);
        }
        Ok(())
    }

    /// Skips blanks and returns the next significant byte without consuming it.
    pub fn peek_non_blank(&mut self) -> io::Result<Option<u8>> {
        self.skip_while(is_blank)?;
        self.peek()
    }

    /// Skips a `#` comment up to (not including) the end of the line.
    ///
    /// Returns `false` without consuming anything if no comment starts here.
    pub fn skip_comment(&mut self) -> io::Result<bool> {
        if self.peek()? != Some(b'#') {
            return Ok(false);
        }
        self.skip_while(|b| b != b'\n')?;
        Ok(true)
    }

    /// Moves to the start of the next entry, skipping blanks and comments.
    ///
    /// Returns `false` once the input is exhausted.
    pub fn next_entry(&mut self) -> io::Result<bool> {
        loop {
            match self.peek_non_blank()? {
                None => return Ok(false),
                Some(_) => {
                    if !self.skip_comment()? {
                        return Ok(true);
                    }
                }
            }
        }
    }

    /// Returns `true` if the next significant byte closes the current block:
    /// the `.` of a following entry, or end of input.
    pub fn at_block_end(&mut self) -> io::Result<bool> {
        Ok(matches!(self.peek_non_blank()?, None | Some(b'.')))
    }
}
