//! An action sink that assembles a [`ChipConfig`].

use std::io::BufRead;

use log::debug;
use trellis_conf::{read_conf, ActionError, ActionResult, ConfAction};

use crate::chip::{ChipConfig, ConfigArc, ConfigEnum, ConfigUnknown, ConfigWord, TileConfig};
use crate::error::DbError;

/// The block currently being filled, between its opening entry and commit.
#[derive(Debug, Default)]
enum OpenBlock {
    #[default]
    None,
    Tiles {
        names: Vec<String>,
        config: TileConfig,
    },
    Bram {
        index: u32,
        data: Vec<u32>,
    },
}

/// Builds a [`ChipConfig`] from parser callbacks.
///
/// Tile records are collected into a pending [`TileConfig`] and applied to
/// every tile named since the last commit, so a `.tile_group` shares one
/// block across all its tiles. Repeated `.tile` entries for the same name
/// accumulate.
#[derive(Debug, Default)]
pub struct ChipConfigBuilder {
    chip: ChipConfig,
    block: OpenBlock,
}

impl ChipConfigBuilder {
    /// Creates a builder for an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the configuration built so far, excluding any open block.
    pub fn chip(&self) -> &ChipConfig {
        &self.chip
    }

    /// Returns the finished configuration.
    ///
    /// Fails if a block was opened but never committed.
    pub fn finish(self) -> Result<ChipConfig, ActionError> {
        match self.block {
            OpenBlock::None => Ok(self.chip),
            OpenBlock::Tiles { .. } => Err(ActionError::new("tile block not committed")),
            OpenBlock::Bram { index, .. } => Err(ActionError::new(format!(
                "bram {index} block not committed"
            ))),
        }
    }

    fn tile_config(&mut self, record: &str) -> Result<&mut TileConfig, ActionError> {
        match &mut self.block {
            OpenBlock::Tiles { config, .. } => Ok(config),
            _ => Err(ActionError::new(format!("{record} outside a tile block"))),
        }
    }
}

impl ConfAction for ChipConfigBuilder {
    fn on_device(&mut self, name: &str) -> ActionResult {
        if let Some(device) = &self.chip.device {
            return Err(ActionError::new(format!(
                "device already set to '{device}'"
            )));
        }
        self.chip.device = Some(name.to_string());
        Ok(())
    }

    fn on_comment(&mut self, text: &str) -> ActionResult {
        self.chip.comments.push(text.to_string());
        Ok(())
    }

    fn on_sysconfig(&mut self, name: &str, value: &str) -> ActionResult {
        self.chip
            .sysconfig
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn on_tile(&mut self, name: &str) -> ActionResult {
        match self.block {
            OpenBlock::None => {
                self.block = OpenBlock::Tiles {
                    names: vec![name.to_string()],
                    config: TileConfig::default(),
                };
                Ok(())
            }
            OpenBlock::Tiles {
                ref mut names,
                ref config,
            } if config.is_empty() => {
                names.push(name.to_string());
                Ok(())
            }
            OpenBlock::Tiles { .. } => Err(ActionError::new(format!(
                "tile '{name}' declared after tile records"
            ))),
            OpenBlock::Bram { index, .. } => Err(ActionError::new(format!(
                "tile '{name}' declared inside bram {index} block"
            ))),
        }
    }

    fn on_arc(&mut self, sink: &str, source: &str) -> ActionResult {
        self.tile_config("arc")?.arcs.push(ConfigArc {
            sink: sink.to_string(),
            source: source.to_string(),
        });
        Ok(())
    }

    fn on_word(&mut self, name: &str, value: &str) -> ActionResult {
        let bits = ConfigWord::parse_bits(value).ok_or_else(|| {
            ActionError::new(format!("word '{name}' value '{value}' is not a bit string"))
        })?;
        self.tile_config("word")?.words.push(ConfigWord {
            name: name.to_string(),
            value: bits,
        });
        Ok(())
    }

    fn on_enum(&mut self, name: &str, value: &str) -> ActionResult {
        self.tile_config("enum")?.enums.push(ConfigEnum {
            name: name.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    fn on_unknown(&mut self, value: &str) -> ActionResult {
        let bit = ConfigUnknown::parse(value).ok_or_else(|| {
            ActionError::new(format!("unknown bit '{value}' is not of the form F<frame>B<bit>"))
        })?;
        self.tile_config("unknown")?.unknowns.push(bit);
        Ok(())
    }

    fn on_bram(&mut self, index: u32) -> ActionResult {
        if !matches!(self.block, OpenBlock::None) {
            return Err(ActionError::new(format!(
                "bram {index} opened inside another block"
            )));
        }
        if self.chip.bram_data.contains_key(&index) {
            return Err(ActionError::new(format!("bram {index} already initialized")));
        }
        self.block = OpenBlock::Bram {
            index,
            data: Vec::new(),
        };
        Ok(())
    }

    fn on_data(&mut self, index: u32, row: usize, value: u32) -> ActionResult {
        match &mut self.block {
            OpenBlock::Bram { index: open, data } if *open == index => {
                if row != data.len() {
                    return Err(ActionError::new(format!(
                        "bram {index} row {row} out of sequence, expected {}",
                        data.len()
                    )));
                }
                data.push(value);
                Ok(())
            }
            _ => Err(ActionError::new(format!("bram {index} is not open"))),
        }
    }

    fn on_commit(&mut self) -> ActionResult {
        match std::mem::take(&mut self.block) {
            OpenBlock::None => Err(ActionError::new("commit without an open block")),
            OpenBlock::Tiles { names, config } => {
                debug!("committing {} tile(s)", names.len());
                for name in names {
                    self.chip.tiles.entry(name).or_default().merge(&config);
                }
                Ok(())
            }
            OpenBlock::Bram { index, data } => {
                debug!("committing bram {index} ({} rows)", data.len());
                self.chip.bram_data.insert(index, data);
                Ok(())
            }
        }
    }
}

impl ChipConfig {
    /// Parses configuration text from a buffered reader.
    pub fn from_reader<R: BufRead>(input: R) -> Result<Self, DbError> {
        let mut builder = ChipConfigBuilder::new();
        read_conf(&mut builder, input)?;
        builder.finish().map_err(DbError::Incomplete)
    }

    /// Parses configuration text held in memory.
    pub fn from_text(text: &str) -> Result<Self, DbError> {
        Self::from_reader(text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
.device LFE5U-25F
.comment Part: LFE5U-25F-6CABGA256
.sysconfig MASTER_SPI_PORT DISABLE
.tile R10C10:PLC2
arc: A1_SLICE B1
word: SLICEA.K0.INIT 1010
enum: SLICEA.MODE LOGIC
unknown: F2B34
.tile_group MIB_R13C40:EBR MIB_R13C41:EBR
enum: EBR.MODE DP16KD
.bram_init 2
000 1ff
020
";

    #[test]
    fn builds_sample() {
        let chip = ChipConfig::from_text(SAMPLE).unwrap();
        assert_eq!(chip.device.as_deref(), Some("LFE5U-25F"));
        assert_eq!(chip.comments, vec!["Part: LFE5U-25F-6CABGA256"]);
        assert_eq!(chip.sysconfig["MASTER_SPI_PORT"], "DISABLE");

        let plc = chip.tile("R10C10:PLC2").unwrap();
        assert_eq!(plc.arcs.len(), 1);
        assert_eq!(plc.words[0].value, vec![true, false, true, false]);
        assert_eq!(plc.enums[0].value, "LOGIC");
        assert_eq!(plc.unknowns[0], ConfigUnknown { frame: 2, bit: 34 });

        assert_eq!(chip.bram_data[&2], vec![0x000, 0x1ff, 0x020]);
    }

    #[test]
    fn tile_group_applies_to_every_tile() {
        let chip = ChipConfig::from_text(SAMPLE).unwrap();
        let a = chip.tile("MIB_R13C40:EBR").unwrap();
        let b = chip.tile("MIB_R13C41:EBR").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.enums[0].name, "EBR.MODE");
    }

    #[test]
    fn repeated_tile_accumulates() {
        let chip = ChipConfig::from_text(".tile T\narc: A B\n.tile T\narc: C D\n").unwrap();
        assert_eq!(chip.tile("T").unwrap().arcs.len(), 2);
    }

    #[test]
    fn empty_tile_is_kept() {
        let chip = ChipConfig::from_text(".tile T\n").unwrap();
        assert!(chip.tile("T").unwrap().is_empty());
    }

    #[test]
    fn second_device_rejected() {
        let err = ChipConfig::from_text(".device A\n.device B\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 2: device rejected: device already set to 'A'"
        );
    }

    #[test]
    fn bad_word_rejected() {
        let err = ChipConfig::from_text(".tile T\nword: W 10z1\n").unwrap_err();
        assert!(err.to_string().contains("word rejected"));
    }

    #[test]
    fn bad_unknown_rejected() {
        let err = ChipConfig::from_text(".tile T\nunknown: 34\n").unwrap_err();
        assert!(err.to_string().contains("unknown rejected"));
    }

    #[test]
    fn duplicate_bram_rejected() {
        let err = ChipConfig::from_text(".bram_init 1\n00\n.bram_init 1\n01\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 3: bram rejected: bram 1 already initialized"
        );
    }

    #[test]
    fn record_outside_block_rejected() {
        let mut builder = ChipConfigBuilder::new();
        let err = builder.on_arc("A", "B").unwrap_err();
        assert_eq!(err.message, "arc outside a tile block");
    }

    #[test]
    fn commit_without_block_rejected() {
        let mut builder = ChipConfigBuilder::new();
        assert!(builder.on_commit().is_err());
    }

    #[test]
    fn tile_after_records_rejected() {
        let mut builder = ChipConfigBuilder::new();
        builder.on_tile("A").unwrap();
        builder.on_enum("M", "V").unwrap();
        let err = builder.on_tile("B").unwrap_err();
        assert_eq!(err.message, "tile 'B' declared after tile records");
    }

    #[test]
    fn tile_opens_then_extends_group() {
        let mut builder = ChipConfigBuilder::new();
        builder.on_tile("A").unwrap();
        builder.on_tile("B").unwrap();
        builder.on_arc("X", "Y").unwrap();
        builder.on_commit().unwrap();
        let chip = builder.finish().unwrap();
        assert_eq!(chip.tiles.len(), 2);
        assert_eq!(chip.tiles["B"].arcs.len(), 1);
    }

    #[test]
    fn tile_inside_bram_rejected() {
        let mut builder = ChipConfigBuilder::new();
        builder.on_bram(3).unwrap();
        let err = builder.on_tile("A").unwrap_err();
        assert_eq!(err.message, "tile 'A' declared inside bram 3 block");
    }

    #[test]
    fn data_out_of_sequence_rejected() {
        let mut builder = ChipConfigBuilder::new();
        builder.on_bram(0).unwrap();
        builder.on_data(0, 0, 1).unwrap();
        assert!(builder.on_data(0, 2, 1).is_err());
        assert!(builder.on_data(1, 1, 1).is_err());
    }

    #[test]
    fn finish_with_open_block_fails() {
        let mut builder = ChipConfigBuilder::new();
        builder.on_bram(5).unwrap();
        let err = builder.finish().unwrap_err();
        assert_eq!(err.message, "bram 5 block not committed");
    }

    #[test]
    fn chip_view_excludes_open_block() {
        let mut builder = ChipConfigBuilder::new();
        builder.on_tile("T").unwrap();
        assert!(builder.chip().tiles.is_empty());
        builder.on_commit().unwrap();
        assert!(builder.chip().tiles.contains_key("T"));
    }
}
