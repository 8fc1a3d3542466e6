//! The tile-config block and its record handlers.

use std::io::BufRead;

use log::trace;

use crate::action::ConfAction;
use crate::error::ConfError;
use crate::keyword::{clip_keyword, RecordKind};
use crate::parser::Reader;

impl<R: BufRead, A: ConfAction + ?Sized> Reader<'_, R, A> {
    /// Reads records until the block closes, then commits.
    ///
    /// An empty block still commits. Nothing is committed if any record fails.
    pub(crate) fn read_tile_conf(&mut self) -> Result<(), ConfError> {
        let line = self.cursor.line();
        while !self.cursor.at_block_end()? {
            let word = self.require_word("tile record type required")?;
            let kind = RecordKind::from_keyword(&word).ok_or_else(|| {
                self.syntax(format!(
                    "unknown tile record type '{}'",
                    clip_keyword(&word)
                ))
            })?;
            self.read_record(kind)?;
        }
        let result = self.action.on_commit();
        self.accept(line, "commit", result)
    }

    fn read_record(&mut self, kind: RecordKind) -> Result<(), ConfError> {
        let line = self.cursor.line();
        let result = match kind {
            RecordKind::Arc => {
                let (sink, source) = self.require_pair("arc requires sink and source")?;
                trace!("arc {sink} <- {source}");
                self.action.on_arc(&sink, &source)
            }
            RecordKind::Word => {
                let (name, value) = self.require_pair("word requires name and value")?;
                trace!("word {name} = {value}");
                self.action.on_word(&name, &value)
            }
            RecordKind::Enum => {
                let (name, value) = self.require_pair("enum requires name and value")?;
                trace!("enum {name} = {value}");
                self.action.on_enum(&name, &value)
            }
            RecordKind::Unknown => {
                let value = self.require_word("unknown requires value")?;
                trace!("unknown {value}");
                self.action.on_unknown(&value)
            }
        };
        self.accept(line, kind.name(), result)
    }
}
