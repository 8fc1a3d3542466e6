//! Keyword tables for entry verbs and tile record kinds.

use std::fmt;

/// Keywords longer than this never match and are clipped in diagnostics.
pub const MAX_KEYWORD_LEN: usize = 15;

/// A top-level entry verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// `.device NAME`
    Device,
    /// `.comment TEXT...`
    Comment,
    /// `.sysconfig NAME VALUE`
    Sysconfig,
    /// `.tile NAME` followed by a tile-config block.
    Tile,
    /// `.tile_group NAME...` followed by one shared tile-config block.
    TileGroup,
    /// `.bram_init INDEX` followed by hex data rows.
    BramInit,
}

impl Verb {
    /// Every verb, in declaration order.
    pub const ALL: [Verb; 6] = [
        Verb::Device,
        Verb::Comment,
        Verb::Sysconfig,
        Verb::Tile,
        Verb::TileGroup,
        Verb::BramInit,
    ];

    /// Resolves an exact, case-sensitive verb keyword.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            ".device" => Some(Verb::Device),
            ".comment" => Some(Verb::Comment),
            ".sysconfig" => Some(Verb::Sysconfig),
            ".tile" => Some(Verb::Tile),
            ".tile_group" => Some(Verb::TileGroup),
            ".bram_init" => Some(Verb::BramInit),
            _ => None,
        }
    }

    /// Returns the keyword as it appears in the input.
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Device => ".device",
            Verb::Comment => ".comment",
            Verb::Sysconfig => ".sysconfig",
            Verb::Tile => ".tile",
            Verb::TileGroup => ".tile_group",
            Verb::BramInit => ".bram_init",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of a record inside a tile-config block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// `arc: SINK SOURCE`
    Arc,
    /// `word: NAME VALUE`
    Word,
    /// `enum: NAME VALUE`
    Enum,
    /// `unknown: VALUE`
    Unknown,
}

impl RecordKind {
    /// Every record kind, in declaration order.
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Arc,
        RecordKind::Word,
        RecordKind::Enum,
        RecordKind::Unknown,
    ];

    /// Resolves an exact, case-sensitive record keyword.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "arc:" => Some(RecordKind::Arc),
            "word:" => Some(RecordKind::Word),
            "enum:" => Some(RecordKind::Enum),
            "unknown:" => Some(RecordKind::Unknown),
            _ => None,
        }
    }

    /// Returns the keyword as it appears in the input, colon included.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Arc => "arc:",
            RecordKind::Word => "word:",
            RecordKind::Enum => "enum:",
            RecordKind::Unknown => "unknown:",
        }
    }

    /// Returns the bare record name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            RecordKind::Arc => "arc",
            RecordKind::Word => "word",
            RecordKind::Enum => "enum",
            RecordKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clips a keyword to [`MAX_KEYWORD_LEN`] bytes for display.
pub(crate) fn clip_keyword(word: &str) -> &str {
    crate::error::truncate_message(word, MAX_KEYWORD_LEN)
}
