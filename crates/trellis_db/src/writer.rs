//! Renders a [`ChipConfig`] back into configuration text.
//!
//! # Format
//!
//! ```text
//! .device LFE5U-25F
//!
//! .comment Part: LFE5U-25F-6CABGA256
//! .sysconfig MASTER_SPI_PORT DISABLE
//!
//! .tile R10C10:PLC2
//! arc: A1_SLICE B1
//! word: SLICEA.K0.INIT 1010
//!
//! .bram_init 2
//! 000 1ff 020
//! ```
//!
//! Tiles and block RAMs are written in name and index order. Tile groups are
//! expanded into one `.tile` block per tile, so the output parses back to an
//! equal configuration.

use std::fmt;
use std::io;

use crate::chip::{ChipConfig, TileConfig};

/// Layout options for [`ChipConfig::write_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Block-RAM values written per line. Zero is treated as one.
    pub values_per_line: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { values_per_line: 8 }
    }
}

impl ChipConfig {
    /// Renders the configuration into any formatter sink.
    pub fn render(&self, out: &mut impl fmt::Write, options: &WriteOptions) -> fmt::Result {
        if let Some(device) = &self.device {
            writeln!(out, ".device {device}")?;
            writeln!(out)?;
        }

        for comment in &self.comments {
            writeln!(out, ".comment {comment}")?;
        }
        for (name, value) in &self.sysconfig {
            writeln!(out, ".sysconfig {name} {value}")?;
        }
        if !self.comments.is_empty() || !self.sysconfig.is_empty() {
            writeln!(out)?;
        }

        for (name, tile) in &self.tiles {
            writeln!(out, ".tile {name}")?;
            render_tile(out, tile)?;
            writeln!(out)?;
        }

        let per_line = options.values_per_line.max(1);
        for (index, data) in &self.bram_data {
            writeln!(out, ".bram_init {index}")?;
            for chunk in data.chunks(per_line) {
                let row: Vec<String> = chunk.iter().map(|v| format!("{v:03x}")).collect();
                writeln!(out, "{}", row.join(" "))?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Renders the configuration into a string.
    pub fn to_text(&self, options: &WriteOptions) -> String {
        let mut text = String::new();
        // Writing into a String cannot fail.
        let _ = self.render(&mut text, options);
        text
    }

    /// Writes the rendered configuration to an I/O sink.
    pub fn write_text<W: io::Write>(&self, out: &mut W, options: &WriteOptions) -> io::Result<()> {
        out.write_all(self.to_text(options).as_bytes())?;
        out.flush()
    }
}

fn render_tile(out: &mut impl fmt::Write, tile: &TileConfig) -> fmt::Result {
    for arc in &tile.arcs {
        writeln!(out, "arc: {} {}", arc.sink, arc.source)?;
    }
    for word in &tile.words {
        writeln!(out, "word: {} {}", word.name, word.value_string())?;
    }
    for e in &tile.enums {
        writeln!(out, "enum: {} {}", e.name, e.value)?;
    }
    for unknown in &tile.unknowns {
        writeln!(out, "unknown: {unknown}")?;
    }
    Ok(())
}

impl fmt::Display for ChipConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, &WriteOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
.device LFE5U-25F
.comment Part: LFE5U-25F-6CABGA256
.sysconfig MASTER_SPI_PORT DISABLE
.sysconfig CONFIG_IOVOLTAGE 3.3
.tile_group B_TILE A_TILE
enum: EBR.MODE DP16KD
unknown: F0B1
.tile R10C10:PLC2
arc: A1_SLICE B1
word: SLICEA.K0.INIT 0110
.bram_init 2
000 1ff 020 003 004 005 006 007 008 009
";

    #[test]
    fn render_empty() {
        assert_eq!(ChipConfig::new().to_text(&WriteOptions::default()), "");
    }

    #[test]
    fn render_sorted_layout() {
        let chip = ChipConfig::from_text(SAMPLE).unwrap();
        let text = chip.to_string();
        let expected = "\
.device LFE5U-25F

.comment Part: LFE5U-25F-6CABGA256
.sysconfig CONFIG_IOVOLTAGE 3.3
.sysconfig MASTER_SPI_PORT DISABLE

.tile A_TILE
enum: EBR.MODE DP16KD
unknown: F0B1

.tile B_TILE
enum: EBR.MODE DP16KD
unknown: F0B1

.tile R10C10:PLC2
arc: A1_SLICE B1
word: SLICEA.K0.INIT 0110

.bram_init 2
000 1ff 020 003 004 005 006 007
008 009

";
        assert_eq!(text, expected);
    }

    #[test]
    fn rendered_text_parses_back() {
        let chip = ChipConfig::from_text(SAMPLE).unwrap();
        let again = ChipConfig::from_text(&chip.to_string()).unwrap();
        assert_eq!(again, chip);
    }

    #[test]
    fn values_per_line_option() {
        let mut chip = ChipConfig::new();
        chip.bram_data.insert(0, vec![1, 2, 3]);
        let text = chip.to_text(&WriteOptions { values_per_line: 2 });
        assert_eq!(text, ".bram_init 0\n001 002\n003\n\n");
        let text = chip.to_text(&WriteOptions { values_per_line: 0 });
        assert_eq!(text, ".bram_init 0\n001\n002\n003\n\n");
    }

    #[test]
    fn write_text_to_vec() {
        let mut chip = ChipConfig::new();
        chip.device = Some("X".into());
        let mut out = Vec::new();
        chip.write_text(&mut out, &WriteOptions::default()).unwrap();
        assert_eq!(out, b".device X\n\n");
    }
}
