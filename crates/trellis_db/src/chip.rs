//! Data structures for a complete chip configuration.
//!
//! A [`ChipConfig`] holds everything a configuration text describes: the
//! device name, free-form comments, global sysconfig options, per-tile
//! settings, and block-RAM contents. Maps are ordered so that iteration and
//! rendering are deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A routing connection inside a tile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigArc {
    /// The driven wire.
    pub sink: String,
    /// The driving wire.
    pub source: String,
}

/// A multi-bit setting such as a LUT initialization vector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigWord {
    /// The setting name (e.g. `SLICEA.K0.INIT`).
    pub name: String,
    /// The bits in textual order (first character first).
    pub value: Vec<bool>,
}

impl ConfigWord {
    /// Parses a word value written as a string of `0` and `1` characters.
    pub fn parse_bits(text: &str) -> Option<Vec<bool>> {
        if text.is_empty() {
            return None;
        }
        text.chars()
            .map(|c| match c {
                '0' => Some(false),
                '1' => Some(true),
                _ => None,
            })
            .collect()
    }

    /// Formats the value back into its `0`/`1` text form.
    pub fn value_string(&self) -> String {
        self.value.iter().map(|&b| if b { '1' } else { '0' }).collect()
    }
}

/// A setting that selects one named option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigEnum {
    /// The setting name (e.g. `SLICEA.MODE`).
    pub name: String,
    /// The selected option.
    pub value: String,
}

/// A set configuration bit with no known meaning, given as a frame/bit pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigUnknown {
    /// Frame offset within the tile.
    pub frame: u32,
    /// Bit offset within the frame.
    pub bit: u32,
}

impl ConfigUnknown {
    /// Parses the `F<frame>B<bit>` notation, e.g. `F12B3`.
    pub fn parse(text: &str) -> Option<Self> {
        let (frame, bit) = text.strip_prefix('F')?.split_once('B')?;
        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(frame) || !all_digits(bit) {
            return None;
        }
        Some(Self {
            frame: frame.parse().ok()?,
            bit: bit.parse().ok()?,
        })
    }
}

impl fmt::Display for ConfigUnknown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}B{}", self.frame, self.bit)
    }
}

/// All settings of one tile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileConfig {
    /// Enabled routing connections.
    pub arcs: Vec<ConfigArc>,
    /// Multi-bit settings.
    pub words: Vec<ConfigWord>,
    /// Enumerated settings.
    pub enums: Vec<ConfigEnum>,
    /// Unclassified set bits.
    pub unknowns: Vec<ConfigUnknown>,
}

impl TileConfig {
    /// Returns `true` if the tile carries no settings.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
            && self.words.is_empty()
            && self.enums.is_empty()
            && self.unknowns.is_empty()
    }

    /// Appends every setting of `other` to this tile.
    pub fn merge(&mut self, other: &TileConfig) {
        self.arcs.extend(other.arcs.iter().cloned());
        self.words.extend(other.words.iter().cloned());
        self.enums.extend(other.enums.iter().cloned());
        self.unknowns.extend(other.unknowns.iter().copied());
    }
}

/// A complete chip configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipConfig {
    /// The target device, if declared.
    pub device: Option<String>,
    /// Comment lines, in input order.
    pub comments: Vec<String>,
    /// Global options by name.
    pub sysconfig: BTreeMap<String, String>,
    /// Per-tile settings by tile name.
    pub tiles: BTreeMap<String, TileConfig>,
    /// Block-RAM contents by block index, one value per row.
    pub bram_data: BTreeMap<u32, Vec<u32>>,
}

/// Record counts for a [`ChipConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipStats {
    /// Number of configured tiles.
    pub tiles: usize,
    /// Total routing connections.
    pub arcs: usize,
    /// Total word settings.
    pub words: usize,
    /// Total enum settings.
    pub enums: usize,
    /// Total unknown bits.
    pub unknowns: usize,
    /// Number of initialized block RAMs.
    pub brams: usize,
    /// Total block-RAM rows.
    pub bram_rows: usize,
}

impl ChipConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the settings of the named tile, if present.
    pub fn tile(&self, name: &str) -> Option<&TileConfig> {
        self.tiles.get(name)
    }

    /// Counts the records held by this configuration.
    pub fn stats(&self) -> ChipStats {
        let mut stats = ChipStats {
            tiles: self.tiles.len(),
            brams: self.bram_data.len(),
            bram_rows: self.bram_data.values().map(Vec::len).sum(),
            ..ChipStats::default()
        };
        for tile in self.tiles.values() {
            stats.arcs += tile.arcs.len();
            stats.words += tile.words.len();
            stats.enums += tile.enums.len();
            stats.unknowns += tile.unknowns.len();
        }
        stats
    }
}
