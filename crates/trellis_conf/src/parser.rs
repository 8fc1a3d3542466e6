//! Entry dispatcher and parse context.
//!
//! The grammar has three nesting levels: top-level entries, the record block
//! that follows `.tile`/`.tile_group`, and the data rows of `.bram_init`.
//! Each level returns `Result<(), ConfError>`, and `?` unwinds every
//! enclosing loop on the first failure.

use std::io::BufRead;

use log::debug;

use crate::action::ConfAction;
use crate::cursor::Cursor;
use crate::error::{truncate_message, ActionResult, ConfError, MAX_ERROR_LEN};
use crate::keyword::{clip_keyword, Verb};

/// Parses one configuration stream, delivering every record to `action`.
///
/// Returns `Ok(())` only if the whole stream was consumed and every callback
/// accepted its record. The stream is not closed; the caller keeps ownership.
pub fn read_conf<A, R>(action: &mut A, input: R) -> Result<(), ConfError>
where
    A: ConfAction + ?Sized,
    R: BufRead,
{
    ParseContext::new(action).parse(input)
}

/// Parses configuration text held in memory.
pub fn read_conf_str<A>(action: &mut A, text: &str) -> Result<(), ConfError>
where
    A: ConfAction + ?Sized,
{
    read_conf(action, text.as_bytes())
}

/// Binds an action sink to the most recent parse diagnostic.
///
/// The context can be reused for several streams. Each call to
/// [`parse`](Self::parse) clears the retained message first, so
/// [`error`](Self::error) always describes the latest parse only.
pub struct ParseContext<'a, A: ConfAction + ?Sized> {
    action: &'a mut A,
    error: Option<String>,
}

impl<'a, A: ConfAction + ?Sized> ParseContext<'a, A> {
    /// Creates a context that feeds `action`.
    pub fn new(action: &'a mut A) -> Self {
        Self {
            action,
            error: None,
        }
    }

    /// Parses `input` to the end, or up to the first failure.
    pub fn parse<R: BufRead>(&mut self, input: R) -> Result<(), ConfError> {
        self.error = None;
        let mut reader = Reader {
            cursor: Cursor::new(input),
            action: &mut *self.action,
        };
        let result = reader.read_entries();
        if let Err(e) = &result {
            debug!("configuration parse failed: {e}");
            let message = e.to_string();
            self.error = Some(truncate_message(&message, MAX_ERROR_LEN).to_string());
        }
        result
    }

    /// Returns the diagnostic of the last failed parse, truncated to
    /// [`MAX_ERROR_LEN`] bytes.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the bound action sink.
    pub fn action(&mut self) -> &mut A {
        &mut *self.action
    }
}

/// Parser state for a single stream.
pub(crate) struct Reader<'c, R, A: ?Sized> {
    pub(crate) cursor: Cursor<R>,
    pub(crate) action: &'c mut A,
}

impl<R: BufRead, A: ConfAction + ?Sized> Reader<'_, R, A> {
    /// Reads entries until end of input.
    pub(crate) fn read_entries(&mut self) -> Result<(), ConfError> {
        while self.cursor.next_entry()? {
            let word = self.require_word("verb required")?;
            let verb = Verb::from_keyword(&word).ok_or_else(|| {
                self.syntax(format!("unknown verb '{}'", clip_keyword(&word)))
            })?;
            debug!("line {}: {verb}", self.cursor.line());
            self.read_verb(verb)?;
        }
        Ok(())
    }

    pub(crate) fn syntax(&self, message: impl Into<String>) -> ConfError {
        ConfError::syntax(self.cursor.line(), message)
    }

    /// Converts a callback result, attributing a rejection to `line`.
    pub(crate) fn accept(
        &self,
        line: usize,
        what: &'static str,
        result: ActionResult,
    ) -> Result<(), ConfError> {
        result.map_err(|source| ConfError::Rejected { line, what, source })
    }

    /// Reads a word from the current line or fails with `message`.
    pub(crate) fn require_word(&mut self, message: &str) -> Result<String, ConfError> {
        match self.cursor.read_word()? {
            Some(word) => Ok(word),
            None => Err(self.syntax(message)),
        }
    }

    /// Reads two words from the current line or fails with `message`.
    ///
    /// Each word is owned independently, so a missing second word simply
    /// drops the first.
    pub(crate) fn require_pair(&mut self, message: &str) -> Result<(String, String), ConfError> {
        let first = self.require_word(message)?;
        let second = self.require_word(message)?;
        Ok((first, second))
    }
}
