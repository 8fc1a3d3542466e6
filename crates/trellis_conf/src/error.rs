//! Error types for configuration parsing and action callbacks.

/// Maximum length, in bytes, of the diagnostic retained by a
/// [`ParseContext`](crate::ParseContext). Longer messages are truncated.
pub const MAX_ERROR_LEN: usize = 256;

/// The result type returned by every [`ConfAction`](crate::ConfAction) callback.
pub type ActionResult = Result<(), ActionError>;

/// A rejection raised by an action callback.
///
/// The parser never inspects the reason; it wraps it in
/// [`ConfError::Rejected`] together with the line that produced the record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ActionError {
    /// Why the sink refused the record.
    pub message: String,
}

impl ActionError {
    /// Creates a new rejection with the given reason.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for ActionError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for ActionError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Errors that abort a configuration parse.
///
/// Every variant is fatal: the first failure stops the parse and no further
/// records are delivered to the action sink.
#[derive(Debug, thiserror::Error)]
pub enum ConfError {
    /// The input does not follow the configuration grammar.
    #[error("line {line}: {message}")]
    Syntax {
        /// 1-based line on which the problem was detected.
        line: usize,
        /// Description of the malformed input.
        message: String,
    },

    /// An action callback refused a record.
    #[error("line {line}: {what} rejected: {source}")]
    Rejected {
        /// 1-based line of the rejected record.
        line: usize,
        /// The callback that failed (e.g. `"arc"` or `"commit"`).
        what: &'static str,
        /// The reason given by the sink.
        source: ActionError,
    },

    /// The underlying stream reported a read fault.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl ConfError {
    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }

    /// Returns the input line associated with this error, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Syntax { line, .. } | Self::Rejected { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }

    /// Returns `true` for grammar violations.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }

    /// Returns `true` if an action callback refused a record.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Cuts `message` down to at most `max` bytes without splitting a character.
pub fn truncate_message(message: &str, max: usize) -> &str {
    if message.len() <= max {
        return message;
    }
    let mut end = max;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    &message[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_syntax() {
        let err = ConfError::syntax(3, "unknown verb '.frobnicate'");
        assert_eq!(format!("{err}"), "line 3: unknown verb '.frobnicate'");
        assert_eq!(err.line(), Some(3));
        assert!(err.is_syntax());
    }

    #[test]
    fn display_rejected() {
        let err = ConfError::Rejected {
            line: 7,
            what: "arc",
            source: ActionError::new("no such wire"),
        };
        assert_eq!(format!("{err}"), "line 7: arc rejected: no such wire");
        assert!(err.is_rejection());
        assert!(!err.is_syntax());
    }

    #[test]
    fn display_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = ConfError::from(io_err);
        assert_eq!(format!("{err}"), "disk on fire");
        assert_eq!(err.line(), None);
    }

    #[test]
    fn action_error_from_str() {
        let err: ActionError = "bad".into();
        assert_eq!(err.message, "bad");
        let err: ActionError = String::from("worse").into();
        assert_eq!(format!("{err}"), "worse");
    }

    #[test]
    fn truncate_short_message_untouched() {
        assert_eq!(truncate_message("short", 16), "short");
    }

    #[test]
    fn truncate_long_message() {
        assert_eq!(truncate_message("abcdefgh", 4), "abcd");
    }

    #[test]
    fn truncate_respects_char_boundary() {
        // 'é' is two bytes; cutting at 2 would split it.
        assert_eq!(truncate_message("aé", 2), "a");
    }
}
