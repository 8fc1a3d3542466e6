//! Handlers for top-level entries.

use std::io::BufRead;

use log::trace;

use crate::action::ConfAction;
use crate::error::ConfError;
use crate::keyword::Verb;
use crate::parser::Reader;

/// Parses a hexadecimal data row, with or without a `0x` prefix.
fn parse_hex(token: &str) -> Option<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

impl<R: BufRead, A: ConfAction + ?Sized> Reader<'_, R, A> {
    pub(crate) fn read_verb(&mut self, verb: Verb) -> Result<(), ConfError> {
        match verb {
            Verb::Device => self.read_device(),
            Verb::Comment => self.read_comment(),
            Verb::Sysconfig => self.read_sysconfig(),
            Verb::Tile => self.read_tile(),
            Verb::TileGroup => self.read_tile_group(),
            Verb::BramInit => self.read_bram(),
        }
    }

    fn read_device(&mut self) -> Result<(), ConfError> {
        let line = self.cursor.line();
        let name = self.require_word("device name required")?;
        let result = self.action.on_device(&name);
        self.accept(line, "device", result)
    }

    fn read_comment(&mut self) -> Result<(), ConfError> {
        let line = self.cursor.line();
        let text = match self.cursor.read_rest_of_line()? {
            Some(text) => text,
            None => return Err(self.syntax("empty comment")),
        };
        let result = self.action.on_comment(&text);
        self.accept(line, "comment", result)
    }

    fn read_sysconfig(&mut self) -> Result<(), ConfError> {
        let line = self.cursor.line();
        let (name, value) = self.require_pair("sysconfig requires name and value")?;
        let result = self.action.on_sysconfig(&name, &value);
        self.accept(line, "sysconfig", result)
    }

    fn read_tile(&mut self) -> Result<(), ConfError> {
        let line = self.cursor.line();
        let name = self.require_word("tile name required")?;
        let result = self.action.on_tile(&name);
        self.accept(line, "tile", result)?;
        self.read_tile_conf()
    }

    /// Reads every tile name on the line, then one block shared by all of them.
    fn read_tile_group(&mut self) -> Result<(), ConfError> {
        let line = self.cursor.line();
        let mut name = self.require_word("tile name required")?;
        loop {
            let result = self.action.on_tile(&name);
            self.accept(line, "tile", result)?;
            match self.cursor.read_word()? {
                Some(next) => name = next,
                None => break,
            }
        }
        self.read_tile_conf()
    }

    fn read_bram(&mut self) -> Result<(), ConfError> {
        let line = self.cursor.line();
        let index = match self.cursor.read_word()?.and_then(|w| w.parse::<u32>().ok()) {
            Some(index) => index,
            None => return Err(self.syntax("bram index required")),
        };
        let result = self.action.on_bram(index);
        self.accept(line, "bram", result)?;

        let mut row = 0usize;
        while !self.cursor.at_block_end()? {
            let row_line = self.cursor.line();
            let value = match self.cursor.read_word()?.as_deref().and_then(parse_hex) {
                Some(value) => value,
                None => return Err(self.syntax("hex bram value required")),
            };
            trace!("bram {index}[{row}] = {value:#x}");
            let result = self.action.on_data(index, row, value);
            self.accept(row_line, "data", result)?;
            row += 1;
        }

        let result = self.action.on_commit();
        self.accept(line, "commit", result)
    }
}
