//! Token reading on top of [`Cursor`].
//!
//! Tokens never span lines: a reader that hits the end of the line before
//! finding a token reports `None` and leaves the newline unread.

use std::io::BufRead;

use crate::cursor::{is_blank, is_horizontal_blank, Cursor};
use crate::error::ConfError;

impl<R: BufRead> Cursor<R> {
    /// Reads one blank-delimited word from the current line.
    ///
    /// Leading spaces and tabs are skipped. Returns `None` if the line (or
    /// the input) ends first.
    pub fn read_word(&mut self) -> Result<Option<String>, ConfError> {
        self.skip_while(is_horizontal_blank)?;
        let bytes = self.take_while(|b| !is_blank(b))?;
        self.decode(bytes)
    }

    /// Reads the remainder of the current line as free text.
    ///
    /// Leading blanks and a trailing carriage return are dropped. Returns
    /// `None` if nothing but blanks remains on the line.
    pub fn read_rest_of_line(&mut self) -> Result<Option<String>, ConfError> {
        self.skip_while(is_horizontal_blank)?;
        let mut bytes = self.take_while(|b| b != b'\n')?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        self.decode(bytes)
    }

    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> Result<Vec<u8>, ConfError> {
        let mut bytes = Vec::new();
        while let Some(b) = self.peek()? {
            if !pred(b) {
                break;
            }
            bytes.push(b);
            self.bump(b);
        }
        Ok(bytes)
    }

    fn decode(&self, bytes: Vec<u8>) -> Result<Option<String>, ConfError> {
        if bytes.is_empty() {
            return Ok(None);
        }
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| ConfError::syntax(self.line(), "invalid UTF-8 in token"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(text: &[u8]) -> Cursor<&[u8]> {
        Cursor::new(text)
    }

    #[test]
    fn reads_words_on_one_line() {
        let mut c = cursor(b" \tR1C1_PLC  B\n");
        assert_eq!(c.read_word().unwrap().as_deref(), Some("R1C1_PLC"));
        assert_eq!(c.read_word().unwrap().as_deref(), Some("B"));
        assert_eq!(c.read_word().unwrap(), None);
    }

    #[test]
    fn word_does_not_cross_newline() {
        let mut c = cursor(b"   \nnext");
        assert_eq!(c.read_word().unwrap(), None);
        assert_eq!(c.line(), 1);
        assert_eq!(c.peek().unwrap(), Some(b'\n'));
    }

    #[test]
    fn word_at_end_of_input() {
        let mut c = cursor(b"");
        assert_eq!(c.read_word().unwrap(), None);
    }

    #[test]
    fn rest_of_line_keeps_inner_spaces() {
        let mut c = cursor(b"  Part: LFE5U-25F  rev 2\r\n.device x");
        assert_eq!(
            c.read_rest_of_line().unwrap().as_deref(),
            Some("Part: LFE5U-25F  rev 2")
        );
        assert_eq!(c.peek().unwrap(), Some(b'\n'));
    }

    #[test]
    fn empty_rest_of_line() {
        let mut c = cursor(b" \t \n");
        assert_eq!(c.read_rest_of_line().unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_syntax_error() {
        let mut c = cursor(b"\xff\xfe\n");
        let err = c.read_word().unwrap_err();
        assert!(err.is_syntax());
        assert_eq!(err.to_string(), "line 1: invalid UTF-8 in token");
    }
}
