//! Building a `ChipConfig` from the fixture and writing it back.

use trellis_conformance::ECP5_BLINKY;
use trellis_db::{ChipConfig, ConfigUnknown, WriteOptions};

#[test]
fn fixture_builds() {
    let chip = ChipConfig::from_text(ECP5_BLINKY).unwrap();
    assert_eq!(chip.device.as_deref(), Some("LFE5U-25F"));
    assert_eq!(chip.sysconfig.len(), 3);

    let stats = chip.stats();
    assert_eq!(stats.tiles, 5);
    assert_eq!(stats.arcs, 3);
    assert_eq!(stats.words, 2);
    // Two enums in the group, applied to both EBR tiles.
    assert_eq!(stats.enums, 1 + 2 + 2 * 2);
    assert_eq!(stats.unknowns, 1);
    assert_eq!(stats.brams, 2);
    assert_eq!(stats.bram_rows, 13);

    let plc = chip.tile("R10C10:PLC2").unwrap();
    assert_eq!(plc.unknowns, vec![ConfigUnknown { frame: 2, bit: 34 }]);
    assert_eq!(plc.words[1].value_string(), "0110011001100110");
    assert_eq!(chip.bram_data[&12], vec![0x3ff]);
}

#[test]
fn text_roundtrip_is_stable() {
    let chip = ChipConfig::from_text(ECP5_BLINKY).unwrap();
    let text = chip.to_text(&WriteOptions::default());
    let again = ChipConfig::from_text(&text).unwrap();
    assert_eq!(again, chip);
    assert_eq!(again.to_text(&WriteOptions::default()), text);
}

#[test]
fn json_roundtrip() {
    let chip = ChipConfig::from_text(ECP5_BLINKY).unwrap();
    let json = serde_json::to_string_pretty(&chip).unwrap();
    let back: ChipConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, chip);
}

#[test]
fn file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("normalized.config");
    let chip = ChipConfig::from_text(ECP5_BLINKY).unwrap();
    let mut file = std::fs::File::create(&path).unwrap();
    chip.write_text(&mut file, &WriteOptions { values_per_line: 4 })
        .unwrap();
    drop(file);

    let reader = std::io::BufReader::new(std::fs::File::open(&path).unwrap());
    let back = ChipConfig::from_reader(reader).unwrap();
    assert_eq!(back, chip);
}
