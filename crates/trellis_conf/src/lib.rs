//! Streaming parser for trellis-style textual FPGA configuration dumps.
//!
//! The input is a line-oriented description of device state: declarations,
//! tile configuration blocks, and block-RAM initialization data. The parser
//! builds no tree; it drives a caller-supplied [`ConfAction`] sink with one
//! callback per record, in input order, and stops at the first failure.
//!
//! # Format
//!
//! ```text
//! # comments are allowed between entries
//! .device LFE5U-25F
//! .comment Part: LFE5U-25F-6CABGA256
//! .sysconfig MASTER_SPI_PORT DISABLE
//! .tile R10C10:PLC2
//! arc: A1_SLICE B1
//! word: SLICEA.K0.INIT 1010101010101010
//! enum: SLICEA.MODE LOGIC
//! unknown: F2B34
//! .tile_group MIB_R13C40:EBR MIB_R13C41:EBR
//! enum: EBR.MODE DP16KD
//! .bram_init 0
//! 000 1ff 020 003
//! ```
//!
//! A block following `.tile`, `.tile_group` or `.bram_init` ends at the next
//! `.` entry or at end of input, and is closed by
//! [`on_commit`](ConfAction::on_commit).
//!
//! # Usage
//!
//! ```
//! use trellis_conf::{read_conf_str, ConfEvent, EventRecorder};
//!
//! let mut recorder = EventRecorder::new();
//! read_conf_str(&mut recorder, ".tile T\narc: A B\n").unwrap();
//! assert_eq!(recorder.events().last(), Some(&ConfEvent::Commit));
//! ```

#![warn(missing_docs)]

pub mod action;
pub mod cursor;
pub mod error;
pub mod event;
pub mod keyword;
pub mod parser;
mod tile;
mod token;
mod verb;

pub use action::ConfAction;
pub use cursor::Cursor;
pub use error::{ActionError, ActionResult, ConfError, MAX_ERROR_LEN};
pub use event::{ConfEvent, EventHandler, EventRecorder};
pub use keyword::{RecordKind, Verb, MAX_KEYWORD_LEN};
pub use parser::{read_conf, read_conf_str, ParseContext};
