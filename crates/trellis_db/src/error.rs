//! Error types for building and writing chip configurations.

use trellis_conf::{ActionError, ConfError};

/// Errors raised while loading or saving a [`ChipConfig`](crate::ChipConfig).
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The configuration text could not be parsed, or a record was refused.
    #[error(transparent)]
    Parse(#[from] ConfError),

    /// The builder was finished while a block was still open.
    #[error("incomplete configuration: {0}")]
    Incomplete(ActionError),

    /// The configuration source could not be opened or read.
    #[error("failed to read configuration: {0}")]
    Read(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_incomplete() {
        let err = DbError::Incomplete(ActionError::new("tile block not committed"));
        assert_eq!(
            format!("{err}"),
            "incomplete configuration: tile block not committed"
        );
    }

    #[test]
    fn display_read_failure() {
        let err = DbError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        assert_eq!(
            format!("{err}"),
            "failed to read configuration: no such file"
        );
    }

    #[test]
    fn parse_error_is_transparent() {
        let mut sink = trellis_conf::EventRecorder::new();
        let conf = trellis_conf::read_conf_str(&mut sink, ".bogus\n").unwrap_err();
        let err = DbError::from(conf);
        assert_eq!(format!("{err}"), "line 1: unknown verb '.bogus'");
    }
}
