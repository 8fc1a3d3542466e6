//! The callback interface driven by the parser.

use crate::error::ActionResult;

/// A sink for parsed configuration records.
///
/// The parser calls exactly one method per record, in input order. Returning
/// an error from any method aborts the parse immediately. Token arguments are
/// borrowed from the parser and only live for the duration of the call; copy
/// them if they must be retained.
///
/// `on_commit` closes a block: it follows the records of every `.tile` or
/// `.tile_group` entry, and the data rows of every `.bram_init` entry.
pub trait ConfAction {
    /// A `.device` entry naming the target part.
    fn on_device(&mut self, name: &str) -> ActionResult;

    /// A `.comment` entry; `text` is the rest of the line.
    fn on_comment(&mut self, text: &str) -> ActionResult;

    /// A `.sysconfig` entry.
    fn on_sysconfig(&mut self, name: &str, value: &str) -> ActionResult;

    /// A tile named by `.tile` or by one of the names of a `.tile_group`.
    fn on_tile(&mut self, name: &str) -> ActionResult;

    /// An `arc:` record connecting `source` to `sink`.
    fn on_arc(&mut self, sink: &str, source: &str) -> ActionResult;

    /// A `word:` record.
    fn on_word(&mut self, name: &str, value: &str) -> ActionResult;

    /// An `enum:` record.
    fn on_enum(&mut self, name: &str, value: &str) -> ActionResult;

    /// An `unknown:` record.
    fn on_unknown(&mut self, value: &str) -> ActionResult;

    /// A `.bram_init` entry opening the data block of block RAM `index`.
    fn on_bram(&mut self, index: u32) -> ActionResult;

    /// One data row of the currently open block RAM. `row` counts from zero.
    fn on_data(&mut self, index: u32, row: usize, value: u32) -> ActionResult;

    /// End of a tile-config or block-RAM block.
    fn on_commit(&mut self) -> ActionResult;
}
